// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_prose(paragraphs: usize) -> String {
    let base = "The effective length of a string is a directive to the argument less \
                its terminator. Whose remaining characters are copied verbatim, and the \
                effective length is reported back to the caller.\n\n";
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn generate_vocabulary_text(words: usize, distinct: usize) -> String {
    let mut content = String::with_capacity(words * 8);
    for i in 0..words {
        content.push_str(&format!("word{} ", i % distinct.max(1)));
    }
    content
}
