use std::ops::Range;

/// Why an edit did or did not change the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A required phrase argument was empty
    EmptyPhrase,
    /// A phrase (or the end phrase of a range) does not occur
    NotFound,
    /// Undo count was zero or not below the number of snapshots
    UndoOutOfRange,
}

/// Result of applying a command
///
/// Skipped commands leave the document untouched, so callers that ignore the
/// patch see a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub outcome: Outcome,
    /// Element ranges in the new content that were written (empty ranges
    /// mark pure deletions)
    pub changed: Vec<Range<usize>>,
    /// Number of phrase occurrences the command acted on
    pub matches: usize,
    pub version: u64,
}

impl Patch {
    pub(crate) fn skipped(outcome: Outcome, version: u64) -> Self {
        Self {
            outcome,
            changed: Vec::new(),
            matches: 0,
            version,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }
}
