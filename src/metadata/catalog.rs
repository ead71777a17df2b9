use crate::metadata::{DataType, Descriptor, Registry, ScalarDescriptor, TabularDescriptor};

/// The built-in catalogue of page metadata. The root entity is `page`;
/// `alias` and `image` are its tabular attachments.
pub fn default_catalog() -> Registry {
    let entries = vec![
        scalar("title", DataType::Text, true),
        scalar("description", DataType::Text, true),
        scalar("keywords", DataType::Text, true),
        Descriptor::Scalar(
            ScalarDescriptor::new("creator", "creator", DataType::Text, false).with_old_name("author"),
        ),
        scalar("created", DataType::DateTime, false),
        Descriptor::Scalar(
            ScalarDescriptor::new("modified", "modified", DataType::DateTime, false)
                .with_old_name("lastmodified"),
        ),
        Descriptor::Scalar(
            ScalarDescriptor::new("ispublished", "ispublished", DataType::Boolean, true)
                .with_old_name("published"),
        ),
        scalar("region", DataType::Text, true),
        scalar("revision", DataType::Integer, false),
        scalar("properties", DataType::Json, true),
        Descriptor::Tabular(
            TabularDescriptor::new("alias", "alias", ScalarDescriptor::new("path", "path", DataType::Text, true))
                .with_child(ScalarDescriptor::new("type", "type", DataType::Text, true)),
        ),
        Descriptor::Tabular(
            TabularDescriptor::new("image", "image", ScalarDescriptor::new("src", "src", DataType::Text, true))
                .with_child(ScalarDescriptor::new("alt", "alt", DataType::Text, true))
                .with_child(ScalarDescriptor::new("caption", "caption", DataType::Text, true)),
        ),
    ];

    Registry::new("page", entries)
}

fn scalar(name: &str, data_type: DataType, mutable: bool) -> Descriptor {
    Descriptor::Scalar(ScalarDescriptor::new(name, name, data_type, mutable))
}
