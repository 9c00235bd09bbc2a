//! Application layer - Use cases and orchestration

pub mod data;
pub mod list_types;
pub mod parse_tag;
pub mod render_tag;

pub use data::data_from_pairs;
pub use list_types::{ListTypesService, TypeSummary};
pub use parse_tag::ParseTagService;
pub use render_tag::RenderTagService;
