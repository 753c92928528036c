pub mod editing;
pub mod io;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    Buffer, Cmd, Document, History, Outcome, Patch, TextBuffer, WordBuffer,
};
pub use io::*;
pub use stats::{ChartLayout, WordCount, WordStatistics, render_chart};
