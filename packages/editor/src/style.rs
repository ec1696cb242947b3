//! Style codec: textual style declarations to and from a property mapping.
//!
//! `parse_style` reads the CSS-attribute form (`font-size: 16px; color: red`).
//! `format_style` emits the JSX-expression form (`fontSize: "16px", color:
//! "red"`). Keys stay camel-case because the output target is a markup
//! expression attribute, not a style attribute.

use std::collections::HashMap;
use tracing::warn;

/// Convert a hyphen-case key to camel-case (`font-size` → `fontSize`)
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a camel-case key to hyphen-case (`fontSize` → `font-size`)
pub fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Parse a style declaration list into a property mapping.
///
/// Splits on `;`, discards empty segments, splits each declaration on the
/// first `:`, and trims. A declaration with no `:` is dropped rather than
/// failing the whole parse.
pub fn parse_style(text: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();

    for segment in text.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        match segment.split_once(':') {
            Some((key, value)) => {
                props.insert(to_camel_case(key.trim()), value.trim().to_string());
            }
            None => {
                warn!(declaration = segment, "dropping malformed style declaration");
            }
        }
    }

    props
}

/// Format a property mapping as JSX object entries: `key: "value", ...`.
///
/// Keys are emitted in sorted order so output is deterministic regardless
/// of map iteration order.
pub fn format_style(props: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = props.keys().collect();
    keys.sort();

    keys.iter()
        .map(|key| format!("{}: \"{}\"", key, props[*key]))
        .collect::<Vec<_>>()
        .join(", ")
}
