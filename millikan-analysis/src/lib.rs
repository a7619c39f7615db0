//! Statistics over a series of Millikan oil-drop runs
//!
//! ## Overview
//!
//! A single run gives one charge estimate with a few percent of
//! measurement error. The quantization of charge only shows up across a
//! series, so this crate takes the [`RunMeasurement`]s produced by
//! `millikan-core` and reduces them to the figures a lab report needs.
//!
//! ## Modules
//!
//! - [`stats`]: mean, population standard deviation, median, range
//! - [`fit`]: weighted least-squares line and residuals
//! - [`quantize`]: integer multiples of e and a refined e estimate
//! - [`summary`]: everything above for a run series in one record
//!
//! ```rust
//! use millikan_analysis::linearize_charge;
//! use millikan_core::constants::ELEMENTARY_CHARGE as E;
//!
//! let result = linearize_charge(&[E, 2.0 * E, E, 3.0 * E, E]).unwrap();
//! assert_eq!(result.multiples, [1, 2, 1, 3, 1]);
//! ```
//!
//! Needs an allocator; builds `no_std` with `alloc` when `std` is off.
//!
//! [`RunMeasurement`]: millikan_core::RunMeasurement

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod error;
pub mod fit;
pub mod quantize;
pub mod stats;
pub mod summary;

pub use error::{AnalysisError, AnalysisResult};
pub use fit::{residuals, weighted_linear_fit, LinearFit};
pub use quantize::{agreement_percent, linearize_charge, ChargeQuantization};
pub use summary::RunSummary;
