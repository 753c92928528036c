use std::io::{Read, Write};

use crate::editing::commands;
use crate::editing::{Buffer, Cmd, History, Patch, TextBuffer};
use crate::io::DocumentError;
use crate::stats::{ChartLayout, WordStatistics, render_chart};

/// An in-memory text document with phrase edits and snapshot undo
///
/// A document owns three things:
///
/// - **content**: the current elements, as characters ([`TextBuffer`]) or
///   words ([`WordBuffer`](crate::WordBuffer))
/// - **copy buffer**: the last range captured by [`copy_range`](Self::copy_range),
///   kept across other edits and never cleared by pasting
/// - **history**: full copies of content pushed by [`snapshot`](Self::snapshot)
///   and popped by [`undo`](Self::undo)
///
/// Every edit is a [`Cmd`] applied through [`apply`](Self::apply); the named
/// methods are shorthands. Invalid input (empty phrase, phrase not found,
/// undo count out of range) leaves all three untouched and is reported in the
/// returned [`Patch`].
///
/// ```rust
/// # use docket_engine::{Document, WordBuffer};
/// let mut doc: Document<WordBuffer> = Document::from_text("A B C D");
/// doc.copy_range("B", "C");
/// doc.paste_after("D");
/// assert_eq!(doc.text(), "A B C D B C");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<B = TextBuffer> {
    pub(crate) content: B,
    pub(crate) copy_buffer: B,
    pub(crate) history: History<B>,
    /// Incremented on every change to content
    pub(crate) version: u64,
}

impl<B: Buffer> Document<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding `text` parsed at this granularity
    pub fn from_text(text: &str) -> Self {
        Self {
            content: B::parse(text),
            ..Self::default()
        }
    }

    /// Create a document from raw bytes, which must be valid UTF-8
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Create a document from everything `reader` yields
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let mut doc = Self::default();
        doc.load(reader)?;
        Ok(doc)
    }

    /// Replace content with everything `reader` yields.
    ///
    /// History and copy buffer are kept. On error the content is unchanged.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<(), DocumentError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(|e| e.utf8_error())?;
        self.content = B::parse(&text);
        self.version += 1;
        log::debug!("loaded {} element(s)", self.content.len());
        Ok(())
    }

    /// Apply a command to the document
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        match &cmd {
            Cmd::Snapshot => commands::snapshot(self),
            Cmd::Undo { count } => commands::undo(self, *count),
            Cmd::CopyRange { start, end } => commands::copy_range(self, start, end),
            Cmd::PasteAfter { anchor } => commands::paste_after(self, anchor),
            Cmd::Erase { phrase } => commands::erase(self, phrase),
            Cmd::Substitute { old, new } => commands::substitute(self, old, new),
        }
    }

    pub fn snapshot(&mut self) -> Patch {
        self.apply(Cmd::Snapshot)
    }

    /// Undo `count` snapshots; a no-op unless `0 < count < snapshot_count()`
    pub fn undo(&mut self, count: usize) -> Patch {
        self.apply(Cmd::Undo { count })
    }

    pub fn copy_range(&mut self, start: &str, end: &str) -> Patch {
        self.apply(Cmd::CopyRange {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn paste_after(&mut self, anchor: &str) -> Patch {
        self.apply(Cmd::PasteAfter {
            anchor: anchor.to_string(),
        })
    }

    pub fn erase(&mut self, phrase: &str) -> Patch {
        self.apply(Cmd::Erase {
            phrase: phrase.to_string(),
        })
    }

    pub fn substitute(&mut self, old: &str, new: &str) -> Patch {
        self.apply(Cmd::Substitute {
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    /// Count case-folded words in the content
    pub fn word_statistics(&self) -> WordStatistics {
        WordStatistics::from_text(&self.content.text())
    }

    /// Write the word frequency chart for this document
    pub fn render_statistics_chart<W: Write>(
        &self,
        out: &mut W,
        layout: ChartLayout,
    ) -> std::io::Result<()> {
        if self.content.is_empty() {
            return writeln!(out, "Document is empty, no stats generated");
        }
        render_chart(&self.word_statistics(), layout, out)
    }

    /// Write content in its plain form (raw text, or one word per line)
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.content.write_to(out)
    }

    pub fn content(&self) -> &B {
        &self.content
    }

    pub fn copy_buffer(&self) -> &B {
        &self.copy_buffer
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn snapshot_count(&self) -> usize {
        self.history.len()
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }
}
