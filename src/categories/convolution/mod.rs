//! Convolution block implementations
//!
//! Convolution blocks extract local features from grid-shaped inputs.

pub mod fixed_channel;
pub mod tunable;

pub use fixed_channel::{FixedChannelConvolutionBlock, FIXED_CHANNELS};
pub use tunable::TunableConvolutionBlock;
