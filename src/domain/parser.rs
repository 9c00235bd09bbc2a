//! Inline macro parsing
//!
//! A raw macro looks like `type: primary value attr: attr value`. The text
//! before the first colon names the tag type; the rest is split on attribute
//! markers, which are `name:` fragments whose `name` is declared for that
//! type. Any other `word:` fragment is plain text and stays inside the
//! segment it appears in.

use super::registry::TagRegistry;
use super::tag::{Bag, Tag};
use crate::error::TagError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Regex for candidate markers: a colon-free word at the start of the text or
/// after whitespace, followed by a colon
fn marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:^|\s)([^\s:]+):").unwrap())
}

/// Strip at most one leading space and all trailing whitespace
fn clean_segment(text: &str) -> String {
    text.strip_prefix(' ').unwrap_or(text).trim_end().to_string()
}

/// An attribute marker located in the remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker<'a> {
    name: &'a str,
    /// Byte offset where the marker name starts
    start: usize,
    /// Byte offset just past the marker colon
    end: usize,
}

/// Find the declared attribute markers in `remainder`, left to right
fn find_markers<'a>(remainder: &'a str, is_attribute: impl Fn(&str) -> bool) -> Vec<Marker<'a>> {
    let mut markers = Vec::new();

    for cap in marker_regex().captures_iter(remainder) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };

        if is_attribute(name.as_str()) {
            markers.push(Marker {
                name: name.as_str(),
                start: name.start(),
                end: whole.end(),
            });
        } else {
            tracing::trace!(fragment = name.as_str(), "absorbing undeclared attribute marker");
        }
    }

    markers
}

pub struct TagParser;

impl TagParser {
    /// Parse one raw macro against the registered tag types
    ///
    /// # Errors
    ///
    /// Returns [`TagError::UndefinedTagType`] if the type named before the
    /// first colon is not registered.
    pub fn parse(
        raw: &str,
        registry: &TagRegistry,
        data: Bag,
        options: Bag,
    ) -> Result<Tag, TagError> {
        let (type_prefix, remainder) = raw.split_once(':').unwrap_or((raw, ""));
        let tag_type = type_prefix.trim();

        let definition = registry
            .lookup(tag_type)
            .ok_or_else(|| TagError::UndefinedTagType(tag_type.to_string()))?;

        let mut attrs = BTreeMap::new();

        if remainder.trim().is_empty() {
            tracing::debug!(tag_type, "parsed tag with empty remainder");
            return Ok(Tag::from_parts(
                tag_type.to_string(),
                String::new(),
                attrs,
                data,
                options,
            ));
        }

        let markers = find_markers(remainder, |name| definition.has_attribute(name));

        let value_end = markers.first().map_or(remainder.len(), |m| m.start);
        let value = clean_segment(&remainder[..value_end]);

        for (i, marker) in markers.iter().enumerate() {
            let segment_end = markers.get(i + 1).map_or(remainder.len(), |next| next.start);
            // Later markers for the same name overwrite earlier ones
            attrs.insert(
                marker.name.to_string(),
                clean_segment(&remainder[marker.end..segment_end]),
            );
        }

        tracing::debug!(
            tag_type,
            value = %value,
            attributes = attrs.len(),
            "parsed tag"
        );

        Ok(Tag::from_parts(
            tag_type.to_string(),
            value,
            attrs,
            data,
            options,
        ))
    }
}
