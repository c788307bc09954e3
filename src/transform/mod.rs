//! Significance transforms for plotting
//!
//! Volcano plots put `-log10` of a significance column on the y axis. The
//! logarithm is undefined at zero, so non-positive values are floored first.

mod neglog;

pub use neglog::{neg_log10, NegLog10, SignificanceAxis};
