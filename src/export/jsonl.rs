//! JSONL export functionality.
//!
//! Each line of the output file is a complete JSON object for one domain. This
//! format is ideal for piping to `jq` or loading into other tools line by line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::PRETTY_JSON_INDENT;

/// Append-only JSON Lines writer.
///
/// The file is created (or truncated) on open. Each record is flushed as it is
/// written, so the file holds every completed record even if the run is killed.
pub struct JsonlWriter {
    writer: BufWriter<File>,
    records: usize,
}

impl JsonlWriter {
    /// Creates `path`, truncating any existing content.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            records: 0,
        })
    }

    /// Writes `record` as one compact JSON line.
    pub fn write_record<T: Serialize>(&mut self, record: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flushes buffered data and syncs the file to disk.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(self.records)
    }
}

/// Renders `value` as JSON indented by four spaces, for console output.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(PRETTY_JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
