//! Resource clients
//!
//! One module per Raito resource. Each client turns the resource's GraphQL
//! response unions into `Result`s and plugs its paged queries into the
//! pagination executor.

pub mod access_provider;
pub mod connection;

pub use access_provider::AccessProviderClient;
pub use connection::{Connection, Edge};
