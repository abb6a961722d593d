//! Output of lookup results.
//!
//! Records are written to a JSON Lines file (one compact object per line) and
//! echoed to the console as indented JSON.

mod jsonl;

pub use jsonl::{to_pretty_json, JsonlWriter};
