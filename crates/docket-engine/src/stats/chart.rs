use std::io::{self, Write};

use super::WordStatistics;

/// Width of the right-aligned count column
pub const COUNT_WIDTH: usize = 5;

/// Column sizing for [`render_chart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Words longer than this are cut and flagged with `*`
    pub key_width: usize,
    /// The tallest bar fits within this many asterisks
    pub histogram_width: usize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            key_width: 20,
            histogram_width: 90,
        }
    }
}

impl ChartLayout {
    /// Occurrences represented by one asterisk
    pub fn scale(&self, max_count: usize) -> usize {
        max_count / self.histogram_width.max(1) + 1
    }
}

/// Write a word frequency table with a proportional asterisk histogram.
///
/// ```text
///                Word  | Count   (* is rounded to nearest 1 occurrences)
/// ------------------------------------------------------------ ...
///                  cat |     2   **
///                  dog |     1   *
/// ```
pub fn render_chart<W: Write>(
    stats: &WordStatistics,
    layout: ChartLayout,
    out: &mut W,
) -> io::Result<()> {
    let key_width = layout.key_width;
    let count_width = COUNT_WIDTH;
    let scale = layout.scale(stats.max_count());

    writeln!(
        out,
        "{:>key_width$} | {:>count_width$}   (* is rounded to nearest {scale} occurrences)",
        "Word ", "Count"
    )?;
    writeln!(
        out,
        "{}",
        "-".repeat(key_width + COUNT_WIDTH + layout.histogram_width + 5)
    )?;

    for entry in stats.entries() {
        let truncated = entry.word.chars().count() > key_width;
        let key: String = entry.word.chars().take(key_width).collect();
        let separator = if truncated { "* |" } else { " | " };
        // Round to the nearest whole asterisk
        let bar = "*".repeat((entry.count + scale / 2) / scale);
        writeln!(
            out,
            "{key:>key_width$}{separator}{:>count_width$}   {bar}",
            entry.count
        )?;
    }

    Ok(())
}
