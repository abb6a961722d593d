//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - HTTP client (optionally routed through a proxy)

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, ClientSetup};
pub use logger::init_logger_with;
