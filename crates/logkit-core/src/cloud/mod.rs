//! Cloud logging backend client
//!
//! The client validates its inputs and hands out a handler that writes
//! structured entries to standard output. There is no network transport: a
//! log agent on the host picks the entries up.

mod client;
mod error;

pub use client::CloudClient;
pub use error::{CloudError, CloudResult};
