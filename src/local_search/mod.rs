//! Local search operators for improving a stop order.
//!
//! - [`two_opt_improve`] — Open-path 2-opt segment reversal

mod two_opt;

pub use two_opt::{two_opt_improve, DEFAULT_MAX_PASSES};
