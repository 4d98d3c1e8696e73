//! # Offline calibration of the classification constants
//!
//! Scores a table of labelled single nucleotide variants (loss-of-function
//! versus functional/intermediate, as in saturation mutagenesis screens of
//! BRCA1), then derives the constants the service classifies with:
//!
//! - `threshold`: the delta score that maximises Youden's J on the ROC curve
//! - `lof_std`, `func_std`: per-class sample standard deviations of the delta
//!
//! This runs once, offline, and writes a TOML file the service loads.
pub mod batch;
pub mod calibration;
pub mod consts;
pub mod output;
pub mod roc;
pub mod table;

// re-exports
pub use batch::*;
pub use calibration::*;
pub use output::*;
pub use roc::*;
pub use table::*;
