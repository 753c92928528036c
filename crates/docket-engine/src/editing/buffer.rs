use std::fmt;
use std::io::{self, Write};
use std::ops::Range;

use xi_rope::Rope;
use xi_rope::delta::Builder;

/// Ordered sequence of elements a [`Document`](crate::Document) edits.
///
/// Positions are element indices: bytes for [`TextBuffer`], tokens for
/// [`WordBuffer`]. Phrases are parsed with the same granularity as the
/// content they are searched in, so a phrase is just another buffer.
pub trait Buffer: Clone + Default + PartialEq + fmt::Debug {
    /// Build a buffer from source text at this buffer's granularity.
    fn parse(source: &str) -> Self;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First occurrence of `needle` starting at or after `from`.
    ///
    /// An empty needle never matches.
    fn find(&self, needle: &Self, from: usize) -> Option<usize>;

    /// Copy of the elements in `range`.
    fn slice(&self, range: Range<usize>) -> Self;

    /// Insert every element of `other` before position `at`.
    fn insert(&mut self, at: usize, other: &Self);

    /// Replace each of `ranges` with the elements of `with`.
    ///
    /// `ranges` must be sorted and disjoint, in current coordinates.
    fn replace_all(&mut self, ranges: &[Range<usize>], with: &Self);

    /// Write the content in its plain output form.
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Content as a single string.
    fn text(&self) -> String;

    /// Leftmost non-overlapping occurrences of `needle`, scanning left to
    /// right and resuming after each match.
    fn find_all(&self, needle: &Self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut from = 0;
        while let Some(start) = self.find(needle, from) {
            let end = start + needle.len();
            ranges.push(start..end);
            from = end;
        }
        ranges
    }
}

/// Character-granularity buffer backed by an xi-rope.
///
/// Positions are UTF-8 byte offsets. Every match boundary lands on a char
/// boundary because phrases are themselves valid UTF-8.
#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            rope: Rope::from(""),
        }
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        // Rope nodes carry no equality; compare the text they hold
        self.rope.len() == other.rope.len() && self.rope.to_string() == other.rope.to_string()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer")
            .field(&self.rope.to_string())
            .finish()
    }
}

impl Buffer for TextBuffer {
    fn parse(source: &str) -> Self {
        Self {
            rope: Rope::from(source),
        }
    }

    fn len(&self) -> usize {
        self.rope.len()
    }

    fn find(&self, needle: &Self, from: usize) -> Option<usize> {
        let len = self.rope.len();
        if needle.is_empty() || from > len {
            return None;
        }
        let pattern = needle.rope.to_string();
        let haystack = self.rope.slice_to_cow(from..len);
        haystack.find(pattern.as_str()).map(|offset| from + offset)
    }

    /// One pass over the materialized text.
    fn find_all(&self, needle: &Self) -> Vec<Range<usize>> {
        if needle.is_empty() {
            return Vec::new();
        }
        let haystack = self.rope.to_string();
        let pattern = needle.rope.to_string();
        haystack
            .match_indices(pattern.as_str())
            .map(|(start, found)| start..start + found.len())
            .collect()
    }

    fn slice(&self, range: Range<usize>) -> Self {
        let len = self.rope.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        Self::parse(&self.rope.slice_to_cow(start..end))
    }

    fn insert(&mut self, at: usize, other: &Self) {
        if other.is_empty() {
            return;
        }
        let at = at.min(self.rope.len());
        let mut builder = Builder::new(self.rope.len());
        builder.replace(at..at, other.rope.clone());
        self.rope = builder.build().apply(&self.rope);
    }

    fn replace_all(&mut self, ranges: &[Range<usize>], with: &Self) {
        if ranges.is_empty() {
            return;
        }
        let mut builder = Builder::new(self.rope.len());
        for range in ranges {
            if with.is_empty() {
                builder.delete(range.clone());
            } else {
                builder.replace(range.clone(), with.rope.clone());
            }
        }
        self.rope = builder.build().apply(&self.rope);
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.rope.to_string().as_bytes())
    }

    fn text(&self) -> String {
        self.rope.to_string()
    }
}

/// Word-granularity buffer: whitespace-separated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBuffer {
    words: Vec<String>,
}

impl Buffer for WordBuffer {
    fn parse(source: &str) -> Self {
        Self {
            words: source.split_whitespace().map(str::to_string).collect(),
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn find(&self, needle: &Self, from: usize) -> Option<usize> {
        if needle.is_empty() || from > self.words.len() {
            return None;
        }
        self.words[from..]
            .windows(needle.words.len())
            .position(|window| window == needle.words.as_slice())
            .map(|offset| from + offset)
    }

    fn slice(&self, range: Range<usize>) -> Self {
        let len = self.words.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        Self {
            words: self.words[start..end].to_vec(),
        }
    }

    fn insert(&mut self, at: usize, other: &Self) {
        let at = at.min(self.words.len());
        let tail = self.words.split_off(at);
        self.words.extend(other.words.iter().cloned());
        self.words.extend(tail);
    }

    fn replace_all(&mut self, ranges: &[Range<usize>], with: &Self) {
        if ranges.is_empty() {
            return;
        }
        let mut words = Vec::with_capacity(self.words.len());
        let mut cursor = 0;
        for range in ranges {
            words.extend_from_slice(&self.words[cursor..range.start]);
            words.extend(with.words.iter().cloned());
            cursor = range.end;
        }
        words.extend_from_slice(&self.words[cursor..]);
        self.words = words;
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }

    fn text(&self) -> String {
        self.words.join(" ")
    }
}
