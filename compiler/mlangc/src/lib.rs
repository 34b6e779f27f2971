//! mlang front end driver.
//!
//! The binary in `main.rs` only parses arguments; each command lives in
//! [`commands`] and writes to caller-supplied writers so it can be driven
//! from tests.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
