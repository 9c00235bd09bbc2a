//! Tag type registry
//!
//! A [`TagRegistry`] maps tag type names to their declared attribute
//! vocabulary and an optional render handler. It is filled during start-up
//! and then shared by reference with the parser and renderer. When types may
//! still be registered while other threads parse, wrap it in a
//! [`SharedTagRegistry`].

use super::tag::{Bag, Tag};
use super::{TagParser, TagRenderer};
use crate::error::TagError;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Converts a parsed tag into output text
pub trait RenderHandler: Send + Sync {
    fn render(&self, tag: &Tag) -> String;
}

impl<F> RenderHandler for F
where
    F: Fn(&Tag) -> String + Send + Sync,
{
    fn render(&self, tag: &Tag) -> String {
        self(tag)
    }
}

/// Declaration of a single tag type
#[derive(Clone)]
pub struct TagTypeDefinition {
    name: String,
    attribute_names: Vec<String>,
    handler: Option<Arc<dyn RenderHandler>>,
}

impl TagTypeDefinition {
    /// Create a definition without a render handler
    ///
    /// Duplicate attribute names are dropped; declaration order is kept for
    /// enumeration only.
    pub fn new<I, S>(name: impl Into<String>, attribute_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for attr in attribute_names {
            let attr = attr.into();
            if !unique.contains(&attr) {
                unique.push(attr);
            }
        }

        Self {
            name: name.into(),
            attribute_names: unique,
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: impl RenderHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Whether `name` is a declared attribute marker for this type
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_names.iter().any(|a| a == name)
    }

    pub fn handler(&self) -> Option<&dyn RenderHandler> {
        self.handler.as_deref()
    }
}

impl fmt::Debug for TagTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagTypeDefinition")
            .field("name", &self.name)
            .field("attribute_names", &self.attribute_names)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Table of tag types keyed by exact, case-sensitive name
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    types: HashMap<String, TagTypeDefinition>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing any earlier one with the same name
    pub fn register(&mut self, definition: TagTypeDefinition) {
        let name = definition.name().to_string();
        tracing::debug!(
            tag_type = %name,
            attributes = ?definition.attribute_names(),
            has_handler = definition.handler().is_some(),
            "registering tag type"
        );
        if self.types.insert(name.clone(), definition).is_some() {
            tracing::debug!(tag_type = %name, "replaced existing tag type definition");
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&TagTypeDefinition> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered type names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Registry handle for types registered after start-up
///
/// Readers take the shared lock; [`register`](Self::register) takes the
/// exclusive one.
#[derive(Debug, Clone, Default)]
pub struct SharedTagRegistry {
    inner: Arc<RwLock<TagRegistry>>,
}

impl SharedTagRegistry {
    pub fn new(registry: TagRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn register(&self, definition: TagTypeDefinition) {
        // A single HashMap insert cannot leave the table half-written, so a
        // poisoned lock still guards consistent data.
        let mut registry = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        registry.register(definition);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains(name)
    }

    pub fn parse(&self, raw: &str, data: Bag, options: Bag) -> Result<Tag, TagError> {
        TagParser::parse(raw, &self.read(), data, options)
    }

    pub fn render(&self, tag: &Tag) -> Result<String, TagError> {
        TagRenderer::new(&self.read()).render(tag)
    }

    /// Parse and render under one read lock
    pub fn parse_and_render(&self, raw: &str, data: Bag, options: Bag) -> Result<String, TagError> {
        let registry = self.read();
        let tag = TagParser::parse(raw, &registry, data, options)?;
        TagRenderer::new(&registry).render(&tag)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, TagRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}
