//! Logging setup for Tienda.
//!
//! Library crates only emit `tracing` events; binaries and test harnesses
//! call [`init_logging`] once to install a subscriber in either JSON (log
//! aggregation) or human-readable (development) format.

mod logging;

pub use logging::*;
