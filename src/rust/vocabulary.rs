use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

/// The ordered list of symptom names a model was trained on.
///
/// Position in the list is the feature index. When a name appears more than
/// once, lookups resolve to its last position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if let Some(previous) = index.insert(name.clone(), i) {
                warn!(
                    "Symptom '{}' appears at positions {} and {}; using {}",
                    name, previous, i, i
                );
            }
        }
        Self { names, index }
    }

    /// Feature-vector width
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Feature index of an exact symptom name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Symptom names in on-disk order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.names
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
