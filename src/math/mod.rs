//! Mathematical utilities for averaging and tinting

/// Exact integer rounding for channel averages and brightness scaling
pub mod rounding;
