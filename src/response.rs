/*!
 * Splitting and parsing of rega script responses.
 *
 * The device concatenates a script's console output and a structured
 * document describing the script's variables into a single body without
 * any length framing. This module finds the boundary between the two and
 * turns the document into a generic tree.
 */

use serde_json::{Map, Value};

use crate::errors::ProtocolError;

/// Literal marker that opens the structured part of a script response.
/// It doubles as the document's opening tag.
pub const DOCUMENT_BOUNDARY: &str = "<xml>";

/// Decoded result of a script execution
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptResponse {
    /// Free-form console output printed by the script
    pub output: String,

    /// Parsed document tree: the variables set by the script, plus the
    /// session fields the interpreter always appends
    pub document: Value,
}

/// Split a decoded response body at the document boundary.
///
/// Scripts can print the marker substring themselves, so the split happens
/// at the last occurrence, not the first. Returns the console output and
/// the document segment (which starts with the marker).
pub fn split_response(body: &str) -> Result<(&str, &str), ProtocolError> {
    match body.rfind(DOCUMENT_BOUNDARY) {
        Some(pos) => Ok((&body[..pos], &body[pos..])),
        None => Err(ProtocolError::MissingBoundary),
    }
}

/// Parse a decoded response body into console output and document tree.
///
/// A body without the boundary marker is a protocol error. A document
/// segment that fails to parse is also a protocol error, but the error
/// still carries the recovered output text.
pub fn parse_response(body: &str) -> Result<ScriptResponse, ProtocolError> {
    let (output, segment) = split_response(body)?;
    let document =
        roxmltree::Document::parse(segment).map_err(|source| ProtocolError::MalformedDocument {
            output: output.to_string(),
            source,
        })?;
    Ok(ScriptResponse {
        output: output.to_string(),
        document: element_value(document.root_element()),
    })
}

/// Convert an element into the generic tree form consumed by callers:
/// text-only elements become strings, nested elements an object keyed by
/// tag name, and repeated tag names an array in document order. An element
/// with a single child collapses to that child's value directly, never a
/// one-element array.
fn element_value(node: roxmltree::Node<'_, '_>) -> Value {
    let children: Vec<_> = node.children().filter(|c| c.is_element()).collect();
    let text: String = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    let text = text.trim();

    let has_attributes = node.attributes().next().is_some();
    if children.is_empty() && !has_attributes {
        return Value::String(text.to_string());
    }

    let mut map = Map::new();
    for child in children {
        let name = child.tag_name().name().to_string();
        let value = element_value(child);
        match map.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(name, value);
            }
        }
    }
    // attributes are rare in rega documents; children win on a name clash
    for attribute in node.attributes() {
        map.entry(attribute.name().to_string())
            .or_insert_with(|| Value::String(attribute.value().to_string()));
    }
    if !text.is_empty() {
        map.insert("_".to_string(), Value::String(text.to_string()));
    }
    Value::Object(map)
}
