//! Flatten block implementations
//!
//! Flatten blocks collapse a multi-dimensional representation into a flat
//! vector. Their names form the fixed flatten subset of block types, so code
//! elsewhere can treat "any flattening block" as one class.

pub mod downsample;
pub mod plain;
pub mod plate_reduction;

pub use downsample::DownsampleFlattenBlock;
pub use plain::FlattenBlock;
pub use plate_reduction::PlateReductionFlattenBlock;
