use std::ops::Range;

use crate::editing::{Buffer, Document, Outcome, Patch};

/// Edit commands accepted by [`Document::apply`]
///
/// Phrases are plain strings; the document parses them at its own
/// granularity before searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Push a copy of the content onto the undo stack
    Snapshot,
    /// Restore the `count`-th most recent snapshot
    Undo { count: usize },
    /// Copy from the start of `start` through the end of the first `end`
    /// that follows it
    CopyRange { start: String, end: String },
    /// Insert the copy buffer right after the first `anchor`
    PasteAfter { anchor: String },
    /// Remove every non-overlapping `phrase`
    Erase { phrase: String },
    /// Replace every non-overlapping `old` with `new`
    Substitute { old: String, new: String },
}

pub(crate) fn snapshot<B: Buffer>(doc: &mut Document<B>) -> Patch {
    doc.history.push(doc.content.clone());
    log::trace!("snapshot taken, {} on the undo stack", doc.history.len());
    Patch {
        outcome: Outcome::Applied,
        changed: Vec::new(),
        matches: 0,
        version: doc.version,
    }
}

pub(crate) fn undo<B: Buffer>(doc: &mut Document<B>, count: usize) -> Patch {
    let available = doc.history.len();
    let Some(restored) = doc.history.rewind(count) else {
        log::debug!("undo({count}) skipped: {available} snapshot(s) available");
        return Patch::skipped(Outcome::UndoOutOfRange, doc.version);
    };
    doc.content = restored;
    doc.version += 1;
    Patch {
        outcome: Outcome::Applied,
        changed: vec![0..doc.content.len()],
        matches: count,
        version: doc.version,
    }
}

pub(crate) fn copy_range<B: Buffer>(doc: &mut Document<B>, start: &str, end: &str) -> Patch {
    let start_phrase = B::parse(start);
    let end_phrase = B::parse(end);
    if start_phrase.is_empty() || end_phrase.is_empty() {
        log::debug!("copy_range skipped: empty phrase");
        return Patch::skipped(Outcome::EmptyPhrase, doc.version);
    }

    let Some(start_pos) = doc.content.find(&start_phrase, 0) else {
        log::debug!("copy_range skipped: start phrase {start:?} not found");
        return Patch::skipped(Outcome::NotFound, doc.version);
    };
    let Some(end_pos) = doc
        .content
        .find(&end_phrase, start_pos + start_phrase.len())
    else {
        log::debug!("copy_range skipped: end phrase {end:?} not found after start");
        return Patch::skipped(Outcome::NotFound, doc.version);
    };

    doc.copy_buffer = doc.content.slice(start_pos..end_pos + end_phrase.len());
    Patch {
        outcome: Outcome::Applied,
        changed: Vec::new(),
        matches: 2,
        version: doc.version,
    }
}

pub(crate) fn paste_after<B: Buffer>(doc: &mut Document<B>, anchor: &str) -> Patch {
    let anchor_phrase = B::parse(anchor);
    if anchor_phrase.is_empty() {
        log::debug!("paste_after skipped: empty anchor");
        return Patch::skipped(Outcome::EmptyPhrase, doc.version);
    }
    let Some(pos) = doc.content.find(&anchor_phrase, 0) else {
        log::debug!("paste_after skipped: anchor {anchor:?} not found");
        return Patch::skipped(Outcome::NotFound, doc.version);
    };

    let at = pos + anchor_phrase.len();
    doc.content.insert(at, &doc.copy_buffer);
    doc.version += 1;
    Patch {
        outcome: Outcome::Applied,
        changed: vec![at..at + doc.copy_buffer.len()],
        matches: 1,
        version: doc.version,
    }
}

pub(crate) fn erase<B: Buffer>(doc: &mut Document<B>, phrase: &str) -> Patch {
    replace_every(doc, phrase, &B::default(), "erase")
}

pub(crate) fn substitute<B: Buffer>(doc: &mut Document<B>, old: &str, new: &str) -> Patch {
    let replacement = B::parse(new);
    if replacement.is_empty() {
        log::debug!("substitute skipped: empty replacement");
        return Patch::skipped(Outcome::EmptyPhrase, doc.version);
    }
    replace_every(doc, old, &replacement, "substitute")
}

/// Replace every leftmost non-overlapping occurrence of `phrase`.
///
/// Matches are collected on the current content in one pass. Resuming the
/// scan right after each rewritten span never sees text that straddles a
/// rewrite, so this equals removing and re-searching one match at a time.
fn replace_every<B: Buffer>(
    doc: &mut Document<B>,
    phrase: &str,
    replacement: &B,
    name: &str,
) -> Patch {
    let needle = B::parse(phrase);
    if needle.is_empty() {
        log::debug!("{name} skipped: empty phrase");
        return Patch::skipped(Outcome::EmptyPhrase, doc.version);
    }

    let ranges = doc.content.find_all(&needle);
    if ranges.is_empty() {
        log::debug!("{name} skipped: {phrase:?} not found");
        return Patch::skipped(Outcome::NotFound, doc.version);
    }

    doc.content.replace_all(&ranges, replacement);
    doc.version += 1;
    log::trace!("{name} rewrote {} occurrence(s) of {phrase:?}", ranges.len());

    Patch {
        outcome: Outcome::Applied,
        changed: shifted_ranges(&ranges, replacement.len()),
        matches: ranges.len(),
        version: doc.version,
    }
}

/// Map replaced ranges (old coordinates) to the spans their replacements
/// occupy in the new content.
fn shifted_ranges(ranges: &[Range<usize>], new_len: usize) -> Vec<Range<usize>> {
    let mut removed = 0;
    let mut added = 0;
    ranges
        .iter()
        .map(|range| {
            let start = range.start - removed + added;
            removed += range.len();
            added += new_len;
            start..start + new_len
        })
        .collect()
}
