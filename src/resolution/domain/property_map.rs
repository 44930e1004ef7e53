use std::collections::HashMap;

/// Properties every hierarchy starts with, before any model contributes.
pub const IMPLICIT_PROPERTIES: [(&str, &str); 2] = [
    ("project.build.sourceEncoding", "UTF-8"),
    ("project.reporting.outputEncoding", "UTF-8"),
];

/// Returns true when the value still carries a `${...}` token.
pub fn contains_placeholder(value: &str) -> bool {
    value
        .find("${")
        .is_some_and(|start| value[start + 2..].contains('}'))
}

/// Folded property view of a POM hierarchy.
///
/// Keys that were seeded implicitly are tracked so an explicit declaration
/// from any model can replace them regardless of precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    values: HashMap<String, String>,
    implicit: Vec<String>,
}

impl PropertyMap {
    /// An empty map without implicit defaults.
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
            implicit: Vec::new(),
        }
    }

    /// A map seeded with the implicit encoding defaults.
    pub fn with_defaults() -> Self {
        let mut map = Self::empty();
        for (key, value) in IMPLICIT_PROPERTIES {
            map.values.insert(key.to_string(), value.to_string());
            map.implicit.push(key.to_string());
        }
        map
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Unconditional write.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.implicit.retain(|k| k != &key);
        self.values.insert(key, value.into());
    }

    /// Writes only when the key is absent or still holds an implicit default.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.values.contains_key(&key) || self.implicit.contains(&key) {
            self.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for PropertyMap {
    fn default() -> Self {
        Self::with_defaults()
    }
}
