//! Minimal element tree built on quick-xml events.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::NetlistError;

/// An element with its attributes and children.
#[derive(Debug, Clone)]
pub struct XmlElement {
    /// Tag name
    pub tag: String,
    /// Attributes in document order
    pub attrs: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
    /// Byte offset of the element in the source document.
    pub position: u64,
}

impl XmlElement {
    /// Attribute value by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value, or a malformed error naming the element.
    pub fn require_attr(&self, key: &str) -> Result<&str, NetlistError> {
        self.attr(key).ok_or_else(|| {
            NetlistError::malformed(format!(
                "<{}> at byte {} is missing attribute '{}'",
                self.tag, self.position, key
            ))
        })
    }
}

fn element_from(e: &BytesStart<'_>, position: u64) -> Result<XmlElement, NetlistError> {
    let tag = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| NetlistError::malformed(format!("invalid tag name: {e}")))?
        .to_string();

    let mut attrs = Vec::new();
    for attr_result in e.attributes() {
        let attr = attr_result
            .map_err(|e| NetlistError::malformed(format!("attribute error in <{tag}>: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| NetlistError::malformed(format!("attribute key error in <{tag}>: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| NetlistError::malformed(format!("attribute value error in <{tag}>: {e}")))?
            .into_owned();
        attrs.push((key, value));
    }

    Ok(XmlElement {
        tag,
        attrs,
        children: Vec::new(),
        position,
    })
}

/// Parse a document into its single root element. Text content is ignored.
pub fn parse_tree(text: &str) -> Result<XmlElement, NetlistError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() {
                    return Err(NetlistError::malformed(format!(
                        "content after the root element at byte {position}"
                    )));
                }
                stack.push(element_from(e, position)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = element_from(e, position)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => {
                        return Err(NetlistError::malformed(format!(
                            "content after the root element at byte {position}"
                        )));
                    }
                }
            }
            Ok(Event::End(_)) => {
                let Some(element) = stack.pop() else {
                    return Err(NetlistError::malformed(format!(
                        "unbalanced closing tag at byte {position}"
                    )));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(NetlistError::malformed(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(NetlistError::malformed(format!(
            "unexpected end of document inside <{}>",
            open.tag
        )));
    }

    root.ok_or_else(|| NetlistError::malformed("document has no root element"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree() {
        let root = parse_tree(
            r#"<?xml version="1.0"?>
            <netlist><scope name="top"><var name="a" kind="input"/></scope></netlist>"#,
        )
        .unwrap();
        assert_eq!(root.tag, "netlist");
        assert_eq!(root.children.len(), 1);
        let scope = &root.children[0];
        assert_eq!(scope.attr("name"), Some("top"));
        assert_eq!(scope.children[0].tag, "var");
        assert_eq!(scope.children[0].attr("kind"), Some("input"));
    }

    #[test]
    fn unescapes_attribute_values() {
        let root = parse_tree(r#"<netlist note="a &amp; b"/>"#).unwrap();
        assert_eq!(root.attr("note"), Some("a & b"));
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(parse_tree("<netlist><scope></netlist>").is_err());
    }

    #[test]
    fn rejects_unclosed_root() {
        assert!(parse_tree("<netlist><scope name=\"x\">").is_err());
    }

    #[test]
    fn rejects_two_roots() {
        assert!(parse_tree("<netlist/><netlist/>").is_err());
    }

    #[test]
    fn rejects_empty_document() {
        assert!(parse_tree("   ").is_err());
    }

    #[test]
    fn missing_attribute_reports_tag() {
        let root = parse_tree("<netlist><var kind=\"input\"/></netlist>").unwrap();
        let err = root.children[0].require_attr("name").unwrap_err();
        assert!(err.to_string().contains("<var>"));
    }
}
