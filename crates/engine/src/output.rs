//! Output formatting: one line per user, item ids separated by tabs.
//!
//! Lines have no trailing tab and are newline-terminated even when empty.

use pipeline::Candidate;
use std::io::{self, Write};

/// Format one user's list as a tab-separated line (without the newline)
pub fn format_line(recommendations: &[Candidate]) -> String {
    recommendations
        .iter()
        .map(|c| c.item_id.to_string())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Write every user's line, in user id order
pub fn write_recommendations<W: Write>(writer: &mut W, all: &[Vec<Candidate>]) -> io::Result<()> {
    for recommendations in all {
        writeln!(writer, "{}", format_line(recommendations))?;
    }
    writer.flush()
}
