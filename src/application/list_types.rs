//! List tag types use case

use crate::domain::TagRegistry;
use crate::infrastructure::Config;

/// Summary of one registered tag type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSummary {
    pub name: String,
    pub attributes: Vec<String>,
    pub renderable: bool,
}

/// Service for listing registered tag types.
pub struct ListTypesService {
    registry: TagRegistry,
}

impl ListTypesService {
    /// Create a new list types service.
    pub fn new(config: &Config) -> Self {
        Self {
            registry: config.build_registry(),
        }
    }

    /// Summaries of all registered types, sorted by name.
    pub fn execute(&self) -> Vec<TypeSummary> {
        self.registry
            .names()
            .into_iter()
            .filter_map(|name| self.registry.lookup(name))
            .map(|definition| TypeSummary {
                name: definition.name().to_string(),
                attributes: definition.attribute_names().to_vec(),
                renderable: definition.handler().is_some(),
            })
            .collect()
    }
}
