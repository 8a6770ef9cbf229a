//! Recurrent block implementations
//!
//! Recurrent blocks carry state across the time axis of sequence inputs.

pub mod lstm;
pub mod svdf;

pub use lstm::{LstmBlock, LSTM_SIZES};
pub use svdf::TunableSvdfBlock;
