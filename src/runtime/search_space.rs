//! Search-space aggregation
//!
//! Walks a type enumeration in order, asks each selected block kind for its
//! declared hyperparameters, and merges every non-empty declaration into one
//! namespace under the prefix `"<block name>_"`.
//!
//! Prefixes are unique because registered names are, but one name can still
//! be a prefix of another (`CONV` and `CONV_A`), so `CONV`'s `A_x` and
//! `CONV_A`'s `x` would both become `CONV_A_x`. Such a collision is returned
//! as [`HParamError::DuplicateKey`] and means the registration set itself is
//! broken; nothing is silently overwritten.
//!
//! [`HParamError::DuplicateKey`]: crate::core::hparams::HParamError::DuplicateKey

use std::collections::HashSet;
use tracing::trace;

use crate::core::block_type::{BlockType, BlockTypes};
use crate::core::hparams::Hyperparameters;
use crate::core::registry::BlockSource;

use super::BlocksError;

/// Which block kinds contribute to a search space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlockSelection {
    /// Every registered kind
    #[default]
    All,
    /// Only the kinds with these names
    Only(HashSet<String>),
}

impl BlockSelection {
    /// Restrict to the given names
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BlockSelection::Only(names.into_iter().map(Into::into).collect())
    }

    /// Whether a kind with this name is selected
    pub fn includes(&self, name: &str) -> bool {
        match self {
            BlockSelection::All => true,
            BlockSelection::Only(names) => names.contains(name),
        }
    }

    /// Selected names with no non-empty identity in `types`, sorted
    pub fn unknown_names(&self, types: &BlockTypes) -> Vec<String> {
        match self {
            BlockSelection::All => Vec::new(),
            BlockSelection::Only(names) => {
                let mut unknown: Vec<String> = names
                    .iter()
                    .filter(|name| !types.by_name(name).is_some_and(|t| !t.is_empty()))
                    .cloned()
                    .collect();
                unknown.sort();
                unknown
            }
        }
    }
}

impl From<Option<Vec<String>>> for BlockSelection {
    fn from(names: Option<Vec<String>>) -> Self {
        match names {
            None => BlockSelection::All,
            Some(names) => BlockSelection::only(names),
        }
    }
}

/// Prefix that qualifies every key declared by `block_type`
pub fn namespace_prefix(block_type: &BlockType) -> String {
    format!("{}_", block_type.name())
}

/// Merge the declarations of every selected kind into a fresh namespace
///
/// The empty identity is always skipped. Names are resolved through
/// `source`; no builder cache is needed.
pub fn aggregate(
    source: &dyn BlockSource,
    types: &BlockTypes,
    selection: &BlockSelection,
) -> Result<Hyperparameters, BlocksError> {
    let mut space = Hyperparameters::new();

    for block_type in types {
        if block_type.is_empty() || !selection.includes(block_type.name()) {
            continue;
        }

        let builder = source.resolve(block_type.name())?;
        let Some(hparams) = builder.requires_hparams() else {
            continue;
        };
        if hparams.is_empty() {
            continue;
        }

        trace!(block_type = %block_type, count = hparams.len(), "merging declared hyperparameters");
        space.merge(&hparams, &namespace_prefix(block_type))?;
    }

    Ok(space)
}
