//! Parse tag use case

use crate::domain::{Bag, Tag, TagParser, TagRegistry};
use crate::error::Result;
use crate::infrastructure::Config;

/// Service for parsing raw macros against the configured tag types
pub struct ParseTagService {
    registry: TagRegistry,
    options: Bag,
}

impl ParseTagService {
    /// Create a parse service from a loaded config
    pub fn new(config: &Config) -> Self {
        ParseTagService {
            registry: config.build_registry(),
            options: config.options().clone(),
        }
    }

    /// Parse one raw macro, attaching the config options and the given data
    pub fn execute(&self, raw: &str, data: Bag) -> Result<Tag> {
        Ok(TagParser::parse(
            raw,
            &self.registry,
            data,
            self.options.clone(),
        )?)
    }
}
