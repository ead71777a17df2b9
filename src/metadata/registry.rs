use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::metadata::{default_catalog, Descriptor};

static SHARED: Lazy<Registry> = Lazy::new(default_catalog);

/// Immutable catalogue of every queryable metadata column and entity,
/// built once and shared. Lookups are case-insensitive and include
/// historical names, so renamed columns keep answering under their old
/// spelling.
#[derive(Debug, Clone)]
pub struct Registry {
    root: String,
    entries: Vec<Descriptor>,
    index: IndexMap<String, usize>,
}

impl Registry {
    pub fn new(root: &str, entries: Vec<Descriptor>) -> Self {
        let mut index = IndexMap::new();
        for (position, entry) in entries.iter().enumerate() {
            for name in entry.all_names() {
                index.insert(name.to_string(), position);
            }
        }
        Self {
            root: root.to_lowercase(),
            entries,
            index,
        }
    }

    /// The process-wide registry with the default page catalogue.
    pub fn shared() -> &'static Registry {
        &SHARED
    }

    pub fn root_name(&self) -> &str {
        &self.root
    }

    pub fn is_root(&self, name: &str) -> bool {
        name.trim().to_lowercase() == self.root
    }

    pub fn lookup(&self, name: &str) -> Option<&Descriptor> {
        let normalized = name.trim().to_lowercase();
        self.index.get(&normalized).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[Descriptor] {
        &self.entries
    }
}
