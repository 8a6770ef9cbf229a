//! Block type identities
//!
//! A [`BlockTypes`] enumeration is derived once from a [`BlockSource`]: every
//! registered name gets the identity value the source assigned it, and the
//! reserved [`EMPTY_BLOCK`] identity (value 0) is appended last. The
//! enumeration never changes after construction, even if the source does.

use std::fmt;
use std::sync::Arc;

use super::registry::BlockSource;

/// Name of the reserved "no block" identity
pub const EMPTY_BLOCK: &str = "EMPTY_BLOCK";

/// Names of the block kinds that collapse a multi-dimensional input into a
/// flat one
pub const FLATTEN_TYPES: [&str; 3] = ["FLATTEN", "DOWNSAMPLE_FLATTEN", "PLATE_REDUCTION_FLATTEN"];

/// Identity of a registered block kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockType {
    value: u32,
    name: Arc<str>,
}

impl BlockType {
    fn new(value: u32, name: &str) -> Self {
        Self {
            value,
            name: Arc::from(name),
        }
    }

    /// The reserved empty identity
    pub fn empty() -> Self {
        Self::new(0, EMPTY_BLOCK)
    }

    /// Integer identity
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Registered name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the reserved empty identity
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Whether this kind belongs to the flatten subset
    pub fn is_flatten(&self) -> bool {
        FLATTEN_TYPES.contains(&self.name())
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered, immutable enumeration of block type identities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTypes {
    types: Vec<BlockType>,
}

impl BlockTypes {
    /// Snapshot the names currently known to `source`
    pub fn from_source(source: &dyn BlockSource) -> Self {
        let mut types: Vec<BlockType> = source
            .base_enum()
            .iter()
            .map(|(name, value)| BlockType::new(*value, name))
            .collect();
        types.push(BlockType::empty());
        Self { types }
    }

    /// All identities in enumeration order, the empty identity included
    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.types.iter()
    }

    /// Number of identities, the empty identity included
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false; the empty identity is always a member
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The reserved empty identity
    pub fn empty(&self) -> &BlockType {
        // from_source always appends it last
        &self.types[self.types.len() - 1]
    }

    /// Look up an identity by name
    pub fn by_name(&self, name: &str) -> Option<&BlockType> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Look up an identity by integer value
    pub fn by_value(&self, value: u32) -> Option<&BlockType> {
        self.types.iter().find(|t| t.value() == value)
    }

    /// Members of the flatten subset that are present, in enumeration order
    pub fn flatten_types(&self) -> Vec<&BlockType> {
        self.types.iter().filter(|t| t.is_flatten()).collect()
    }
}

impl<'a> IntoIterator for &'a BlockTypes {
    type Item = &'a BlockType;
    type IntoIter = std::slice::Iter<'a, BlockType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
