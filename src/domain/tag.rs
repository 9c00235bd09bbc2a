//! Parsed tag record

use std::collections::BTreeMap;

/// Opaque key/value bag passed through to render handlers untouched
pub type Bag = toml::Table;

/// A parsed inline macro
///
/// Built once, by [`TagParser`](super::TagParser) or directly, and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    tag_type: String,
    value: String,
    attrs: BTreeMap<String, String>,
    data: Bag,
    options: Bag,
}

impl Tag {
    pub fn new(tag_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_type: tag_type.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Add an attribute, replacing any earlier value for the same name
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_data(mut self, data: Bag) -> Self {
        self.data = data;
        self
    }

    pub fn with_options(mut self, options: Bag) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn from_parts(
        tag_type: String,
        value: String,
        attrs: BTreeMap<String, String>,
        data: Bag,
        options: Bag,
    ) -> Self {
        Self {
            tag_type,
            value,
            attrs,
            data,
            options,
        }
    }

    pub fn tag_type(&self) -> &str {
        &self.tag_type
    }

    /// The primary unnamed payload (may be empty)
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn data(&self) -> &Bag {
        &self.data
    }

    pub fn options(&self) -> &Bag {
        &self.options
    }

    /// Look up an attribute; `None` means absent, which is not the same as `""`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Look up an attribute, falling back only when it is absent
    pub fn attr<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }
}
