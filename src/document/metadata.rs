use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header key/value pairs taken from a document's front matter.
///
/// Keys are kept sorted so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    inner: BTreeMap<String, String>,
}

impl FrontMatter {
    pub fn new() -> Self {
        FrontMatter {
            inner: BTreeMap::new(),
        }
    }

    /// Later inserts for the same key overwrite earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get) but treats an empty value as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
