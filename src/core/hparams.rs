//! Hyperparameter declarations and search-space container
//!
//! Blocks declare the tunable parameters they need as a [`Hyperparameters`]
//! collection. Collections from many blocks are merged under a per-block
//! prefix so that identically-named local parameters never collide.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// String value
    String(String),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of values
    Array(Vec<ParameterValue>),
    /// Null value
    Null,
}

impl ParameterValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }

    /// Try to convert to string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ParameterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(n) => Some(*n),
            ParameterValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to convert to integer. Floats only convert when they are integral
    /// and inside the `i64` range.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParameterValue::Integer(i) => Some(*i),
            // i64::MAX as f64 rounds up to 2^63, which is out of range
            ParameterValue::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            _ => None,
        }
    }

    /// Try to convert to boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParameterValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Equality that treats `Integer(3)` and `Number(3.0)` as the same value.
    pub fn loosely_eq(&self, other: &ParameterValue) -> bool {
        match (self, other) {
            (ParameterValue::Integer(_) | ParameterValue::Number(_), ParameterValue::Integer(_) | ParameterValue::Number(_)) => {
                self.as_number() == other.as_number()
            }
            _ => self == other,
        }
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::String(s)
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::String(s.to_string())
    }
}

impl From<f64> for ParameterValue {
    fn from(n: f64) -> Self {
        ParameterValue::Number(n)
    }
}

impl From<i64> for ParameterValue {
    fn from(i: i64) -> Self {
        ParameterValue::Integer(i)
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        ParameterValue::Boolean(b)
    }
}

/// A single tunable hyperparameter declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HParamSpec {
    /// One of a discrete set of values
    Choice { values: Vec<ParameterValue> },
    /// Integers in `[min, max]` reachable from `min` in multiples of `step`
    IntRange { min: i64, max: i64, step: i64 },
    /// Reals in `[min, max]`, sampled on a log scale when `log_scale` is set
    FloatRange { min: f64, max: f64, log_scale: bool },
    /// A constant that is part of the space but never searched over
    Fixed { value: ParameterValue },
}

impl HParamSpec {
    /// Discrete choice over the given values
    pub fn choice<V, I>(values: I) -> Self
    where
        V: Into<ParameterValue>,
        I: IntoIterator<Item = V>,
    {
        HParamSpec::Choice {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Integer range with unit step
    pub fn int_range(min: i64, max: i64) -> Self {
        HParamSpec::IntRange { min, max, step: 1 }
    }

    /// Linear real range
    pub fn float_range(min: f64, max: f64) -> Self {
        HParamSpec::FloatRange {
            min,
            max,
            log_scale: false,
        }
    }

    /// Log-scaled real range
    pub fn log_range(min: f64, max: f64) -> Self {
        HParamSpec::FloatRange {
            min,
            max,
            log_scale: true,
        }
    }

    /// Fixed value
    pub fn fixed(value: impl Into<ParameterValue>) -> Self {
        HParamSpec::Fixed {
            value: value.into(),
        }
    }

    /// Check that the declaration describes a non-empty space
    pub fn check(&self) -> Result<(), String> {
        match self {
            HParamSpec::Choice { values } if values.is_empty() => {
                Err("choice must list at least one value".into())
            }
            HParamSpec::IntRange { min, max, step } => {
                if min > max {
                    Err(format!("min {} is greater than max {}", min, max))
                } else if *step <= 0 {
                    Err(format!("step must be positive, got {}", step))
                } else {
                    Ok(())
                }
            }
            HParamSpec::FloatRange { min, max, log_scale } => {
                if !(min.is_finite() && max.is_finite()) {
                    Err("range bounds must be finite".into())
                } else if min > max {
                    Err(format!("min {} is greater than max {}", min, max))
                } else if *log_scale && *min <= 0.0 {
                    Err(format!("log-scaled range needs a positive min, got {}", min))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    /// Whether `value` lies inside this declaration's space
    pub fn contains(&self, value: &ParameterValue) -> bool {
        match self {
            HParamSpec::Choice { values } => values.iter().any(|v| v.loosely_eq(value)),
            HParamSpec::IntRange { min, max, step } => match value.as_integer() {
                // widened so the distance from min cannot overflow
                Some(v) if *step > 0 && v >= *min && v <= *max => {
                    (i128::from(v) - i128::from(*min)) % i128::from(*step) == 0
                }
                _ => false,
            },
            HParamSpec::FloatRange { min, max, .. } => match value.as_number() {
                Some(v) => v >= *min && v <= *max,
                None => false,
            },
            HParamSpec::Fixed { value: fixed } => fixed.loosely_eq(value),
        }
    }

    /// Value used when a block is initialized without an explicit choice
    pub fn default_value(&self) -> ParameterValue {
        match self {
            HParamSpec::Choice { values } => values.first().cloned().unwrap_or(ParameterValue::Null),
            HParamSpec::IntRange { min, .. } => ParameterValue::Integer(*min),
            HParamSpec::FloatRange { min, .. } => ParameterValue::Number(*min),
            HParamSpec::Fixed { value } => value.clone(),
        }
    }
}

/// Hyperparameter errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HParamError {
    /// A fully-qualified key was declared twice
    #[error("Duplicate hyperparameter key: {0}")]
    DuplicateKey(String),

    /// The declaration describes an empty or malformed space
    #[error("Invalid hyperparameter '{key}': {reason}")]
    InvalidSpec { key: String, reason: String },
}

/// Ordered collection of hyperparameter declarations
///
/// Insertion order is preserved, so a space assembled from blocks in a fixed
/// order always lists its keys in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hyperparameters {
    entries: IndexMap<String, HParamSpec>,
}

impl Hyperparameters {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Builder-style declaration, replacing any existing entry for `key`
    ///
    /// Intended for a block's own static declarations; use [`insert`] when
    /// the key may already be present.
    ///
    /// [`insert`]: Hyperparameters::insert
    pub fn with(mut self, key: impl Into<String>, spec: HParamSpec) -> Self {
        self.entries.insert(key.into(), spec);
        self
    }

    /// Declare a hyperparameter
    ///
    /// # Returns
    /// * `Ok(())` if the key is new and the declaration is well-formed
    /// * `Err(HParamError)` otherwise; the collection is left untouched
    pub fn insert(&mut self, key: impl Into<String>, spec: HParamSpec) -> Result<(), HParamError> {
        let key = key.into();
        spec.check()
            .map_err(|reason| HParamError::InvalidSpec { key: key.clone(), reason })?;
        if self.entries.contains_key(&key) {
            return Err(HParamError::DuplicateKey(key));
        }
        self.entries.insert(key, spec);
        Ok(())
    }

    /// Merge `other` into this collection, prefixing every key of `other`
    /// with `name_prefix`
    ///
    /// All prefixed keys and their declarations are checked before anything
    /// is inserted, so on a collision or a malformed declaration the
    /// collection is unchanged.
    pub fn merge(&mut self, other: &Hyperparameters, name_prefix: &str) -> Result<(), HParamError> {
        let mut staged = Vec::with_capacity(other.len());
        for (key, spec) in &other.entries {
            let qualified = format!("{}{}", name_prefix, key);
            if let Err(reason) = spec.check() {
                return Err(HParamError::InvalidSpec { key: qualified, reason });
            }
            if self.entries.contains_key(&qualified) || staged.iter().any(|(k, _)| k == &qualified) {
                return Err(HParamError::DuplicateKey(qualified));
            }
            staged.push((qualified, spec.clone()));
        }
        self.entries.extend(staged);
        Ok(())
    }

    /// Get a declaration by key
    pub fn get(&self, key: &str) -> Option<&HParamSpec> {
        self.entries.get(key)
    }

    /// Check whether a key is declared
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of declared hyperparameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HParamSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validate a set of chosen values against the declarations
    ///
    /// Unknown keys and values outside their declared space are errors.
    /// Declared keys without a value are reported as warnings since they
    /// fall back to their default.
    pub fn validate(&self, values: &HashMap<String, ParameterValue>) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for (key, value) in values {
            match self.entries.get(key) {
                None => {
                    result = result.merge(ValidationResult::error(format!(
                        "Unknown hyperparameter: {}",
                        key
                    )))
                }
                Some(spec) if !spec.contains(value) => {
                    result = result.merge(ValidationResult::error(format!(
                        "Value {:?} is outside the space of '{}'",
                        value, key
                    )))
                }
                Some(_) => {}
            }
        }

        for key in self.entries.keys() {
            if !values.contains_key(key) {
                result = result.with_warning(format!("'{}' not set, using default", key));
            }
        }

        result
    }

    /// Complete a set of chosen values with the default of every
    /// undeclared key. Does not validate.
    pub fn fill_defaults(&self, values: &HashMap<String, ParameterValue>) -> HashMap<String, ParameterValue> {
        let mut filled = values.clone();
        for (key, spec) in &self.entries {
            filled.entry(key.clone()).or_insert_with(|| spec.default_value());
        }
        filled
    }

    /// Serialize to a JSON object keyed in declaration order
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a Hyperparameters {
    type Item = (&'a String, &'a HParamSpec);
    type IntoIter = indexmap::map::Iter<'a, String, HParamSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Extract the values belonging to one prefix from a flat assignment over a
/// namespaced search space, with the prefix stripped.
pub fn scoped_values(
    values: &HashMap<String, ParameterValue>,
    prefix: &str,
) -> HashMap<String, ParameterValue> {
    values
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|local| (local.to_string(), value.clone()))
        })
        .collect()
}

/// Validation result
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,
    /// Error messages
    pub errors: Vec<String>,
    /// Warning messages
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a validation result with an error
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![msg.into()],
            warnings: Vec::new(),
        }
    }

    /// Add a warning to the validation result
    pub fn with_warning(mut self, msg: impl Into<String>) -> Self {
        self.warnings.push(msg.into());
        self
    }

    /// Check if the validation has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the validation has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Merge another validation result into this one
    pub fn merge(mut self, other: ValidationResult) -> Self {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }
}
