//! Plain text report: one group per line.
//!
//! ```text
//! [ /data/a.jpg /backup/a.jpg ]
//! [ /data/notes.txt /data/old/notes.txt /tmp/notes.txt ]
//! ```
//!
//! Lines can be piped through `sort` for a stable, diffable listing.

use std::io::{self, Write};
use std::path::Path;

use crate::duplicates::DuplicateGroup;

/// Write every group as a bracketed, space-separated line of paths.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_groups<W: Write + ?Sized>(groups: &[DuplicateGroup], out: &mut W) -> io::Result<()> {
    for group in groups {
        write!(out, "[ ")?;
        for file in &group.files {
            write!(out, "{} ", file.path.display())?;
        }
        writeln!(out, "]")?;
    }
    Ok(())
}

/// Closing count line shown after the report.
#[must_use]
pub fn summary_line(group_count: usize) -> String {
    format!("Found {group_count} unique files with at least 1 duplicate.")
}

/// Hint printed when the report went to a file.
#[must_use]
pub fn sort_hint(path: &Path) -> String {
    format!(
        "It may be helpful to run 'sort {} > some_new_output.txt'",
        path.display()
    )
}
