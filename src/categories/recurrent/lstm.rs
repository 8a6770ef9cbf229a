//! LSTM Block
//!
//! Single LSTM layer with a fixed number of units, registered as
//! `LSTM_<units>`.

use crate::categories::BlockCategory;
use crate::core::block::{BlockBuilder, BlockMetadata};

/// Unit counts registered as built-in kinds
pub const LSTM_SIZES: [u32; 2] = [64, 128];

pub struct LstmBlock {
    metadata: BlockMetadata,
    units: u32,
}

impl LstmBlock {
    pub fn new(units: u32) -> Self {
        Self {
            metadata: BlockMetadata::new(
                format!("LSTM_{}", units),
                BlockCategory::Recurrent,
                format!("LSTM layer with {} units", units),
            ),
            units,
        }
    }

    pub fn units(&self) -> u32 {
        self.units
    }
}

impl BlockBuilder for LstmBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }
}
