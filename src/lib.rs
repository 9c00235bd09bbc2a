//! macrotag - Inline tag macro parsing and rendering
//!
//! Parses compact inline macros such as `image: cat.png alt: A cat` into a
//! [`Tag`] and renders them with the handler registered for their type.
//!
//! ```
//! use macrotag::{Bag, Tag, TagParser, TagRegistry, TagRenderer, TagTypeDefinition};
//!
//! let mut registry = TagRegistry::new();
//! registry.register(
//!     TagTypeDefinition::new("link", ["title"])
//!         .with_handler(|tag: &Tag| format!("[{}]({})", tag.attr("title", tag.value()), tag.value())),
//! );
//!
//! let tag = TagParser::parse("link: https://example.com title: Home", &registry, Bag::new(), Bag::new()).unwrap();
//! assert_eq!(tag.get("title"), Some("Home"));
//! assert_eq!(TagRenderer::new(&registry).render(&tag).unwrap(), "[Home](https://example.com)");
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{
    Bag, RenderHandler, SharedTagRegistry, Tag, TagParser, TagRegistry, TagRenderer,
    TagTypeDefinition, TemplateHandler,
};
pub use error::{MacrotagError, TagError};
