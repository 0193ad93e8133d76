//! DocSage Core — configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{DataPaths, DocSageConfig};
pub use error::{Error, Result};
