//! Source image sampling

/// Cell cropping and brightness/color reduction
pub mod region;

pub use region::{RegionSampler, SampleMode, SampleTable};
