//! # snvscore-core
//!
//! Shared building blocks for the snvscore workspace: the request-scoped data
//! model (sequence windows, variant requests, score results), the calibration
//! constants used to classify a delta score, the error types every other
//! crate returns, and a couple of file utilities.
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
