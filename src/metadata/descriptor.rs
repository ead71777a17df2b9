use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::metadata::DataType;

/// Registry entry for a plain (single-valued) metadata column.
///
/// `persistent_name` is the field name used by the physical store; it may
/// differ from the logical name. `old_names` are deprecated names that keep
/// resolving to this descriptor so renames do not break existing queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarDescriptor {
    pub logical_name: String,
    pub persistent_name: String,
    pub old_names: Vec<String>,
    pub data_type: DataType,
    pub mutable: bool,
}

impl ScalarDescriptor {
    pub fn new(logical_name: &str, persistent_name: &str, data_type: DataType, mutable: bool) -> Self {
        Self {
            logical_name: logical_name.to_lowercase(),
            persistent_name: persistent_name.to_lowercase(),
            old_names: vec![],
            data_type,
            mutable,
        }
    }

    pub fn with_old_name(mut self, name: &str) -> Self {
        self.old_names.push(name.to_lowercase());
        self
    }

    /// True when `normalized` (already trimmed and lower-cased) is any of
    /// this descriptor's current or historical names.
    pub fn answers_to(&self, normalized: &str) -> bool {
        self.logical_name == normalized
            || self.persistent_name == normalized
            || self.old_names.iter().any(|n| n == normalized)
    }
}

/// Registry entry for a one-to-many ("tabular") metadata entity, e.g. a
/// page's list of aliases. The identifier column names one row of the
/// entity; the children are its remaining columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularDescriptor {
    pub logical_name: String,
    pub persistent_name: String,
    pub old_names: Vec<String>,
    pub identifier: ScalarDescriptor,
    pub children: IndexMap<String, ScalarDescriptor>,
}

impl TabularDescriptor {
    pub fn new(logical_name: &str, persistent_name: &str, identifier: ScalarDescriptor) -> Self {
        Self {
            logical_name: logical_name.to_lowercase(),
            persistent_name: persistent_name.to_lowercase(),
            old_names: vec![],
            identifier,
            children: IndexMap::new(),
        }
    }

    pub fn with_old_name(mut self, name: &str) -> Self {
        self.old_names.push(name.to_lowercase());
        self
    }

    pub fn with_child(mut self, child: ScalarDescriptor) -> Self {
        self.children.insert(child.logical_name.clone(), child);
        self
    }

    pub fn answers_to(&self, normalized: &str) -> bool {
        self.logical_name == normalized
            || self.persistent_name == normalized
            || self.old_names.iter().any(|n| n == normalized)
    }

    /// Find a column of this entity by any current or historical name. The
    /// identifier column is addressable like any other child.
    pub fn child(&self, name: &str) -> Option<&ScalarDescriptor> {
        let normalized = name.trim().to_lowercase();
        if self.identifier.answers_to(&normalized) {
            return Some(&self.identifier);
        }
        self.children.values().find(|c| c.answers_to(&normalized))
    }
}

/// One registry entry: either a plain column or a tabular entity. The
/// variant is inspected by pattern matching wherever the distinction
/// matters, in particular in the identifier resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Descriptor {
    Scalar(ScalarDescriptor),
    Tabular(TabularDescriptor),
}

impl Descriptor {
    pub fn logical_name(&self) -> &str {
        match self {
            Descriptor::Scalar(s) => &s.logical_name,
            Descriptor::Tabular(t) => &t.logical_name,
        }
    }

    pub fn persistent_name(&self) -> &str {
        match self {
            Descriptor::Scalar(s) => &s.persistent_name,
            Descriptor::Tabular(t) => &t.persistent_name,
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Descriptor::Scalar(s) => s.data_type,
            Descriptor::Tabular(_) => DataType::Tabular,
        }
    }

    pub fn is_tabular(&self) -> bool {
        matches!(self, Descriptor::Tabular(_))
    }

    pub fn all_names(&self) -> Vec<&str> {
        let (logical, persistent, old) = match self {
            Descriptor::Scalar(s) => (&s.logical_name, &s.persistent_name, &s.old_names),
            Descriptor::Tabular(t) => (&t.logical_name, &t.persistent_name, &t.old_names),
        };
        let mut names = vec![logical.as_str()];
        if persistent != logical {
            names.push(persistent.as_str());
        }
        names.extend(old.iter().map(|n| n.as_str()));
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias_entity() -> TabularDescriptor {
        TabularDescriptor::new("alias", "alias", ScalarDescriptor::new("path", "path", DataType::Text, true))
            .with_child(ScalarDescriptor::new("type", "type", DataType::Text, true))
    }

    #[test]
    fn answers_to_current_and_old_names() {
        let creator = ScalarDescriptor::new("creator", "creator", DataType::Text, false)
            .with_old_name("author");
        assert!(creator.answers_to("creator"));
        assert!(creator.answers_to("author"));
        assert!(!creator.answers_to("editor"));
    }

    #[test]
    fn tabular_child_lookup_includes_identifier() {
        let alias = alias_entity();
        assert_eq!(alias.child("path").unwrap().logical_name, "path");
        assert_eq!(alias.child("TYPE").unwrap().logical_name, "type");
        assert!(alias.child("missing").is_none());
    }

    #[test]
    fn descriptor_data_type() {
        let alias = Descriptor::Tabular(alias_entity());
        assert_eq!(alias.data_type(), DataType::Tabular);
        assert!(alias.is_tabular());

        let title = Descriptor::Scalar(ScalarDescriptor::new("title", "title", DataType::Text, true));
        assert_eq!(title.data_type(), DataType::Text);
    }

    #[test]
    fn all_names_skips_duplicate_persistent() {
        let modified = Descriptor::Scalar(
            ScalarDescriptor::new("modified", "modified", DataType::DateTime, false)
                .with_old_name("lastmodified"),
        );
        assert_eq!(modified.all_names(), vec!["modified", "lastmodified"]);
    }
}
