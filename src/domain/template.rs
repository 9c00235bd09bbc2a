//! Placeholder template render handler

use super::registry::RenderHandler;
use super::tag::Tag;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([^{}\s]+)\}").unwrap())
}

/// Render handler that fills `{placeholder}`s from the tag
///
/// - `{type}` is the tag type
/// - `{value}` is the primary value
/// - `{<attr>}` is the attribute value for each declared attribute, or its
///   default (empty unless configured) when absent
///
/// Unknown placeholders are left unchanged. Substitution runs once over the
/// template, so values containing braces are never expanded again.
#[derive(Debug, Clone)]
pub struct TemplateHandler {
    template: String,
    attribute_names: Vec<String>,
    defaults: BTreeMap<String, String>,
}

impl TemplateHandler {
    pub fn new<I, S>(template: impl Into<String>, attribute_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template: template.into(),
            attribute_names: attribute_names.into_iter().map(Into::into).collect(),
            defaults: BTreeMap::new(),
        }
    }

    /// Values used for attributes the tag does not carry
    pub fn with_defaults(mut self, defaults: BTreeMap<String, String>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    fn resolve<'a>(&'a self, tag: &'a Tag, key: &str) -> Option<&'a str> {
        match key {
            "type" => Some(tag.tag_type()),
            "value" => Some(tag.value()),
            _ if self.attribute_names.iter().any(|a| a == key) => {
                let fallback = self.defaults.get(key).map_or("", String::as_str);
                Some(tag.attr(key, fallback))
            }
            _ => None,
        }
    }
}

impl RenderHandler for TemplateHandler {
    fn render(&self, tag: &Tag) -> String {
        placeholder_regex()
            .replace_all(&self.template, |caps: &Captures| {
                match self.resolve(tag, &caps[1]) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
