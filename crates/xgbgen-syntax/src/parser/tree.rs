//! Generic element tree.
//!
//! The first of the two parsing phases: the raw description text is read into
//! a neutral tree of elements, attributes and text without any knowledge of
//! the protocol vocabulary. The typed builder walks this tree afterwards.

use miette::SourceSpan;
use crate::error::SyntaxError;
use super::ParseResult;

/// One element of a description document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order. Comments and processing
    /// instructions are dropped.
    pub children: Vec<Element>,
    /// Concatenated, trimmed text content directly inside this element.
    pub text: String,
    pub span: SourceSpan,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
            span: SourceSpan::from(0..0),
        }
    }

    /// Looks up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the children with the given element name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Builder-style helper used mostly by tests.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Reads `source` into an element tree rooted at the document element.
pub fn parse_tree(source: &str) -> ParseResult<Element> {
    let doc = roxmltree::Document::parse(source).map_err(|e| SyntaxError::Xml {
        reason: e.to_string(),
        span: None,
    })?;
    Ok(convert_node(doc.root_element()))
}

fn convert_node(node: roxmltree::Node<'_, '_>) -> Element {
    let range = node.range();
    let mut element = Element {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        children: Vec::new(),
        text: String::new(),
        span: SourceSpan::new(range.start.into(), range.end - range.start),
    };

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            element.children.push(convert_node(child));
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }
    element.text = text.trim().to_string();
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_attributes_children_and_text() {
        let root = parse_tree(
            r#"<?xml version="1.0"?>
            <xcb header="shape">
              <!-- comment -->
              <import>xproto</import>
              <typedef oldname="CARD8" newname="OP" />
            </xcb>"#,
        )
        .unwrap();

        assert_eq!(root.name, "xcb");
        assert_eq!(root.attr("header"), Some("shape"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].text, "xproto");
        assert_eq!(root.children[1].attr("newname"), Some("OP"));
        assert_eq!(root.children_named("typedef").count(), 1);
    }

    #[test]
    fn malformed_text_is_an_xml_error() {
        let err = parse_tree("<xcb header=\"x\"><enum></xcb>").unwrap_err();
        assert!(matches!(err, SyntaxError::Xml { .. }));
    }
}
