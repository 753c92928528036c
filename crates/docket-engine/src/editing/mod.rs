/*!
 * # Editing Core
 *
 * A [`Document`] is a mutable buffer of elements edited by phrase: copy a
 * range between two phrases, paste it after a third, erase or substitute
 * every occurrence. Full-copy snapshots give multi-level undo.
 *
 * ## Granularity
 *
 * What an "element" is depends on the buffer type parameter:
 *
 * - **`TextBuffer`** (default): characters, stored in an `xi_rope::Rope`.
 *   Positions are byte offsets; edits compile to a single rope `Delta`.
 * - **`WordBuffer`**: whitespace-separated tokens in a `Vec<String>`.
 *   Positions are token indices.
 *
 * Phrases are parsed with the document's own granularity, so `"the "` is a
 * four-byte phrase to a text document and the single token `the` to a word
 * document.
 *
 * ## Commands
 *
 * Every edit is a [`Cmd`] applied through [`Document::apply`], which returns a
 * [`Patch`]. Commands with unusable input (empty phrase, phrase not found,
 * undo count out of range) change nothing; the patch's [`Outcome`] says why.
 *
 * ## Module Structure
 *
 * - **`buffer`**: the `Buffer` trait and its two implementations
 * - **`commands`**: `Cmd` and the search/splice logic behind each command
 * - **`document`**: `Document`, the owner of content, copy buffer and history
 * - **`history`**: the snapshot stack behind undo
 * - **`patch`**: edit result metadata
 */

pub mod buffer;
pub mod commands;
pub mod document;
pub mod history;
pub mod patch;

pub use buffer::{Buffer, TextBuffer, WordBuffer};
pub use commands::Cmd;
pub use document::Document;
pub use history::History;
pub use patch::{Outcome, Patch};
