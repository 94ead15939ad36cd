//! Key descriptors: sort direction and named grouping keys.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::hash::CanonicalKey;

/// Direction of one ordering directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// Named view of a grouping key: an ordered mapping field name -> component.
///
/// A composite (array/tuple) projection maps its `i`-th component to the
/// `i`-th name. Any other projection maps every name to the whole value, so a
/// scalar key can still be read back by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    fields: IndexMap<String, Value>,
}

impl Key {
    pub fn new(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a named key from field names and a projected key value.
    pub fn from_projection<K: Serialize + ?Sized>(names: &[String], key: &K) -> Result<Self> {
        let value = serde_json::to_value(key)?;
        Self::from_value(names, value)
    }

    pub fn from_value(names: &[String], value: Value) -> Result<Self> {
        let mut fields = IndexMap::with_capacity(names.len());
        match value {
            Value::Array(components) if !components.is_empty() => {
                if names.len() > components.len() {
                    return Err(Error::InvalidArgument(format!(
                        "{} key names given for a key with {} components",
                        names.len(),
                        components.len()
                    )));
                }
                for (name, component) in names.iter().zip(components) {
                    fields.insert(name.clone(), component);
                }
            }
            other => {
                for name in names {
                    fields.insert(name.clone(), other.clone());
                }
            }
        }
        Ok(Self { fields })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical digest of the whole key. Field order is not significant,
    /// matching `Key` equality.
    pub fn digest(&self) -> CanonicalKey {
        let object: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        CanonicalKey::from_value(&Value::Object(object))
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest().hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}
