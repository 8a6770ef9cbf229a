//! Core block abstractions and types
//!
//! This module defines the block and builder traits, the hyperparameter
//! container, the registry the factory resolves names against, and the
//! block type enumeration derived from it.

pub mod block;
pub mod block_type;
pub mod hparams;
pub mod registry;
