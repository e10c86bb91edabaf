//! Native SQL type to target-language type lookup.

use serde::Deserialize;
use std::collections::HashMap;

/// Read-only table translating engine-native column types into
/// target-language types.
///
/// Keys match exactly: no case folding and no stripping of size qualifiers,
/// so `varchar(20)` and `VARCHAR(20)` are distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping {
    entries: HashMap<String, String>,
}

impl TypeMapping {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Returns the mapped type for `sql_type`, or `None` when there is no
    /// exact entry. A missing entry is not an error.
    pub fn resolve(&self, sql_type: &str) -> Option<&str> {
        self.entries.get(sql_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
