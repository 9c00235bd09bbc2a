//! Render tag use case
//!
//! Parses a raw macro and dispatches it to the handler of its type.

use crate::domain::{Bag, TagParser, TagRegistry, TagRenderer};
use crate::error::Result;
use crate::infrastructure::Config;

/// Service for rendering raw macros
pub struct RenderTagService {
    registry: TagRegistry,
    options: Bag,
}

impl RenderTagService {
    /// Create a render service from a loaded config
    pub fn new(config: &Config) -> Self {
        RenderTagService {
            registry: config.build_registry(),
            options: config.options().clone(),
        }
    }

    /// Create a render service over an already populated registry
    ///
    /// Used when handlers are registered in code instead of the config file.
    pub fn with_registry(registry: TagRegistry, options: Bag) -> Self {
        RenderTagService { registry, options }
    }

    /// Parse and render one raw macro
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tag type is not registered
    /// - The tag type has no render handler
    pub fn execute(&self, raw: &str, data: Bag) -> Result<String> {
        let tag = TagParser::parse(raw, &self.registry, data, self.options.clone())?;
        let output = TagRenderer::new(&self.registry).render(&tag)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tag, TagTypeDefinition};
    use crate::error::{MacrotagError, TagError};

    #[test]
    fn test_execute_with_config_template() {
        let config = Config::parse(
            "[types.link]\nattributes = [\"title\"]\ntemplate = '<a href=\"{value}\">{title}</a>'\n",
        )
        .unwrap();
        let service = RenderTagService::new(&config);

        let output = service
            .execute("link: https://example.com title: Home", Bag::new())
            .unwrap();
        assert_eq!(output, r#"<a href="https://example.com">Home</a>"#);
    }

    #[test]
    fn test_execute_with_code_handler() {
        let mut registry = TagRegistry::new();
        registry.register(
            TagTypeDefinition::new("test", ["a", "b"]).with_handler(|tag: &Tag| {
                format!(
                    "test: {}-{}-{}",
                    tag.value(),
                    tag.attr("a", ""),
                    tag.attr("b", "")
                )
            }),
        );
        let service = RenderTagService::with_registry(registry, Bag::new());

        let output = service
            .execute("test: test value a: attrA b: attrB", Bag::new())
            .unwrap();
        assert_eq!(output, "test: test value-attrA-attrB");
    }

    #[test]
    fn test_execute_without_handler() {
        let config = Config::parse("[types.note]\nattributes = [\"title\"]\n").unwrap();
        let service = RenderTagService::new(&config);

        match service.execute("note: hi", Bag::new()).unwrap_err() {
            MacrotagError::Tag(TagError::InvalidRenderHandler(name)) => assert_eq!(name, "note"),
            other => panic!("Expected InvalidRenderHandler, got {:?}", other),
        }
    }
}
