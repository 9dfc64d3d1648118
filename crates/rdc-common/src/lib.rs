//! RDC Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the RDC workspace.
//!
//! # Overview
//!
//! This crate provides the functionality used across all RDC workspace
//! members:
//!
//! - **Error Handling**: the shared [`EtlError`] type and result alias
//! - **Logging**: tracing subscriber setup with console/file output
//!
//! # Example
//!
//! ```no_run
//! use rdc_common::{EtlError, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| EtlError::Config(format!("invalid port: {raw}")))
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{EtlError, Result};
