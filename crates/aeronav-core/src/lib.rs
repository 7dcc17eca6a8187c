//! Core types for the aeronav free-flight navigation grid.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the aeronav workspace:
//! cell coordinates, grid identity, grid configuration, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;

pub use config::GridConfig;
pub use error::{ConfigError, GridError};
pub use id::{CellCoord, GridInstanceId, Offset};
