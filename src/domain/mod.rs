//! Domain layer - Tag parsing, registry, and rendering

pub mod parser;
pub mod registry;
pub mod renderer;
pub mod tag;
pub mod template;

pub use parser::TagParser;
pub use registry::{RenderHandler, SharedTagRegistry, TagRegistry, TagTypeDefinition};
pub use renderer::TagRenderer;
pub use tag::{Bag, Tag};
pub use template::TemplateHandler;
