//! Concept dictionary
//!
//! The host system resolves concept names to ids once, ahead of any
//! evaluation; the pipeline treats the dictionary as an opaque, read-only
//! lookup. Population and reading are both safe from multiple threads.

use indexmap::IndexMap;
use parking_lot::RwLock;
use regimen_types::ConceptId;

/// Error raised when a concept name cannot be resolved.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DictionaryError {
    /// The name was never registered
    #[error("Unknown concept: {0}")]
    UnknownConcept(String),
}

/// Name-to-id lookup for clinical concepts.
///
/// Insertion order is preserved so listings are stable.
#[derive(Debug, Default)]
pub struct ConceptDictionary {
    entries: RwLock<IndexMap<String, ConceptId>>,
}

impl ConceptDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from name/id pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ConceptId)>,
        S: Into<String>,
    {
        let dictionary = Self::new();
        for (name, id) in entries {
            dictionary.register(name, id);
        }
        dictionary
    }

    /// Register a concept name.
    ///
    /// Re-registering a name overwrites the previous id.
    pub fn register(&self, name: impl Into<String>, id: ConceptId) {
        self.entries.write().insert(name.into(), id);
    }

    /// Resolve a concept name, if registered.
    pub fn resolve(&self, name: &str) -> Option<ConceptId> {
        self.entries.read().get(name).copied()
    }

    /// Resolve a concept name or fail.
    pub fn require(&self, name: &str) -> Result<ConceptId, DictionaryError> {
        self.resolve(name)
            .ok_or_else(|| DictionaryError::UnknownConcept(name.to_string()))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of registered concepts.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
