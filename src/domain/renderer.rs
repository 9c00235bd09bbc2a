//! Dispatch of parsed tags to their render handlers

use super::registry::TagRegistry;
use super::tag::Tag;
use crate::error::TagError;

/// Renders tags with the handlers registered for their types
#[derive(Debug, Clone, Copy)]
pub struct TagRenderer<'a> {
    registry: &'a TagRegistry,
}

impl<'a> TagRenderer<'a> {
    pub fn new(registry: &'a TagRegistry) -> Self {
        Self { registry }
    }

    /// Invoke the handler for `tag`'s type and return its output unchanged
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidRenderHandler`] if the type has no handler,
    /// including when the type is not registered at all.
    pub fn render(&self, tag: &Tag) -> Result<String, TagError> {
        let handler = self
            .registry
            .lookup(tag.tag_type())
            .and_then(|definition| definition.handler())
            .ok_or_else(|| {
                tracing::debug!(tag_type = tag.tag_type(), "no render handler available");
                TagError::InvalidRenderHandler(tag.tag_type().to_string())
            })?;

        tracing::debug!(tag_type = tag.tag_type(), "rendering tag");
        Ok(handler.render(tag))
    }
}
