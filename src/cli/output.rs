//! Output formatting utilities

use crate::application::TypeSummary;
use crate::domain::Tag;

/// Format a parsed tag for display
pub fn format_tag(tag: &Tag) -> String {
    let mut output = String::new();
    output.push_str(&format!("type: {}\n", tag.tag_type()));
    output.push_str(&format!("value: {:?}\n", tag.value()));

    if tag.attrs().is_empty() {
        output.push_str("attrs: (none)\n");
    } else {
        output.push_str("attrs:\n");
        for (name, value) in tag.attrs() {
            output.push_str(&format!("  {} = {:?}\n", name, value));
        }
    }

    if !tag.data().is_empty() {
        output.push_str("data:\n");
        for (key, value) in tag.data() {
            output.push_str(&format!("  {} = {}\n", key, value));
        }
    }

    output
}

/// Format a list of tag types for display.
pub fn format_type_list(types: &[TypeSummary]) -> String {
    if types.is_empty() {
        return "No tag types found".to_string();
    }

    let width = types.iter().map(|t| t.name.len()).max().unwrap_or(0);

    let mut output = String::new();
    for summary in types {
        let attributes = if summary.attributes.is_empty() {
            "-".to_string()
        } else {
            summary.attributes.join(", ")
        };
        output.push_str(&format!("{:<width$}  {}", summary.name, attributes, width = width));
        if !summary.renderable {
            output.push_str("  (no handler)");
        }
        output.push('\n');
    }

    output
}
