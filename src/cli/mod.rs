//! CLI module
//!
//! Command-line interface over the access provider client.
//!
//! # Commands
//!
//! - `get` - Show one access provider
//! - `list` - Stream all access providers as JSON lines
//! - `who` - Stream the who list of an access provider
//! - `what` - Stream the data objects of an access provider
//! - `delete` - Delete an access provider

mod commands;
mod runner;

pub use commands::{parse_order_by, Cli, Commands};
pub use runner::Runner;
