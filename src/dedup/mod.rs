//! In-place deduplication of the domains file.
//!
//! The file is streamed line by line into a temporary file in the same
//! directory, keeping the first occurrence of every non-blank line. The
//! temporary file is then renamed over the original.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error_handling::DedupError;

/// Outcome of a deduplication pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DedupSummary {
    /// Lines written back to the file
    pub kept: usize,
    /// Blank or repeated lines that were dropped
    pub removed: usize,
}

/// Rewrites `path` so it contains each non-blank line once, in order of first
/// occurrence.
///
/// A line is blank when it is empty after trimming. Lines are compared and
/// written exactly as read; only the line terminator is normalized to `\n`.
/// The file keeps its permissions.
///
/// # Errors
///
/// Returns a [`DedupError`] if the file cannot be opened or read, the temporary
/// file cannot be written, or the final rename fails. The original file is only
/// replaced once everything else succeeded.
pub fn deduplicate_file(path: &Path) -> Result<DedupSummary, DedupError> {
    let input = File::open(path).map_err(|source| DedupError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let permissions = input
        .metadata()
        .map_err(|source| DedupError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .permissions();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source| DedupError::Write {
        path: path.to_path_buf(),
        source,
    };
    let temp = NamedTempFile::new_in(dir).map_err(write_err)?;

    let mut writer = BufWriter::new(temp);
    let summary = dedup_lines(BufReader::new(input), &mut writer).map_err(|e| match e {
        LineError::Read(source) => DedupError::Read {
            path: path.to_path_buf(),
            source,
        },
        LineError::Write(source) => write_err(source),
    })?;

    let temp = writer
        .into_inner()
        .map_err(|e| write_err(e.into_error()))?;
    // The rewritten file keeps the mode of the one it replaces
    temp.as_file()
        .set_permissions(permissions)
        .map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    temp.persist(path).map_err(|e| DedupError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(
        "Deduplicated {}: kept {}, removed {}",
        path.display(),
        summary.kept,
        summary.removed
    );
    Ok(summary)
}

enum LineError {
    Read(std::io::Error),
    Write(std::io::Error),
}

fn dedup_lines<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<DedupSummary, LineError> {
    let mut seen = HashSet::new();
    let mut summary = DedupSummary::default();

    for line in reader.lines() {
        let line = line.map_err(LineError::Read)?;
        if line.trim().is_empty() || seen.contains(&line) {
            summary.removed += 1;
            continue;
        }
        writeln!(writer, "{}", line).map_err(LineError::Write)?;
        seen.insert(line);
        summary.kept += 1;
    }

    writer.flush().map_err(LineError::Write)?;
    Ok(summary)
}
