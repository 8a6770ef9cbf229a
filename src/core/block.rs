//! Block and builder traits
//!
//! A [`BlockBuilder`] is the registered implementation of one block kind: it
//! describes the kind, declares the hyperparameters the kind needs, and
//! constructs named [`Block`] instances. Builders are stateless and shared;
//! every instance they build is independent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::categories::BlockCategory;

use super::hparams::{Hyperparameters, ParameterValue};

/// Unique identifier for a block instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Generate a new random block ID
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a block kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Registered name, e.g. `TUNABLE_CONVOLUTION`
    pub name: String,
    /// Block category
    pub category: BlockCategory,
    /// Brief description of the block
    pub description: String,
    /// Block version
    pub version: String,
}

impl BlockMetadata {
    pub fn new(name: impl Into<String>, category: BlockCategory, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            version: "1.0.0".into(),
        }
    }
}

/// Registered implementation of a block kind
pub trait BlockBuilder: Send + Sync {
    /// Describe the block kind
    fn metadata(&self) -> &BlockMetadata;

    /// Hyperparameters this kind needs, keyed by local name
    ///
    /// Must be free of side effects; it is called every time a search space
    /// is assembled.
    fn requires_hparams(&self) -> Option<Hyperparameters> {
        None
    }

    /// Construct a new instance tagged with `name`
    fn build(&self, name: &str) -> Box<dyn Block> {
        Box::new(ConfiguredBlock::new(
            name,
            self.metadata().clone(),
            self.requires_hparams(),
        ))
    }
}

/// An instantiated block
pub trait Block: Send + Sync {
    /// Get the instance's unique identifier
    fn id(&self) -> BlockId;

    /// Name the instance was built under
    fn name(&self) -> &str;

    /// Metadata of the kind this instance was built from
    fn metadata(&self) -> &BlockMetadata;

    /// Apply hyperparameter values, keyed by local name
    fn initialize(&mut self, params: &HashMap<String, ParameterValue>) -> Result<(), BlockError>;

    /// Values currently applied
    fn parameters(&self) -> &HashMap<String, ParameterValue>;

    /// Clone the block as a trait object
    fn clone_box(&self) -> Box<dyn Block>;
}

impl Clone for Box<dyn Block> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Generic instance produced by [`BlockBuilder::build`]
///
/// Holds the kind's declared space and validates every `initialize` call
/// against it. Values left unset take the declaration's default.
#[derive(Debug, Clone)]
pub struct ConfiguredBlock {
    id: BlockId,
    name: String,
    metadata: BlockMetadata,
    space: Hyperparameters,
    params: HashMap<String, ParameterValue>,
}

impl ConfiguredBlock {
    pub fn new(name: &str, metadata: BlockMetadata, space: Option<Hyperparameters>) -> Self {
        let space = space.unwrap_or_default();
        let params = space.fill_defaults(&HashMap::new());
        Self {
            id: BlockId::new(),
            name: name.to_string(),
            metadata,
            space,
            params,
        }
    }

    /// Declared space of this instance
    pub fn space(&self) -> &Hyperparameters {
        &self.space
    }
}

impl Block for ConfiguredBlock {
    fn id(&self) -> BlockId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn initialize(&mut self, params: &HashMap<String, ParameterValue>) -> Result<(), BlockError> {
        let validation = self.space.validate(params);
        if !validation.valid {
            return Err(BlockError::InvalidParameter(format!(
                "{}: {}",
                self.name,
                validation.errors.join("; ")
            )));
        }
        self.params = self.space.fill_defaults(params);
        Ok(())
    }

    fn parameters(&self) -> &HashMap<String, ParameterValue> {
        &self.params
    }

    fn clone_box(&self) -> Box<dyn Block> {
        Box::new(self.clone())
    }
}

/// Block errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum BlockError {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
