//! Fully connected block implementations

pub mod fully_connected;
pub mod tunable;

pub use fully_connected::{FullyConnectedBlock, FIXED_OUTPUT_SIZES};
pub use tunable::TunableFullyConnectedBlock;
