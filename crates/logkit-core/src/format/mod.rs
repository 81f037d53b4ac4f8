//! Record formatters
//!
//! - `LocalFormatter`: human-readable console lines
//! - `CloudFormatter`: single-line JSON for cloud log agents

mod traits;
mod local;
mod cloud;

pub use traits::Formatter;
pub use local::LocalFormatter;
pub use cloud::{CloudFormatter, CloudEntry};
