//! Minimal SVG element tree and its serializer.
//!
//! Composition builds an [`Element`] tree and serializes it once with
//! `quick-xml`. Attributes live in a sorted map, so output is byte-for-byte
//! reproducible for the same settings.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// SVG namespace written on the outermost element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with sorted attributes and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attrs: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, builder style.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Appends a child element, builder style.
    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    /// Appends a text node, builder style.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends a text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Inserts a child element before all existing children.
    pub fn prepend(&mut self, child: Element) {
        self.children.insert(0, Node::Element(child));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Finds the first descendant (or self) with the given tag name, depth first.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(name))
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// Streams this element and its subtree into a `quick-xml` writer.
    ///
    /// Childless elements are written self-closing. Text is escaped for
    /// `<`, `>` and `&` only so embedded JSON stays readable.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_to(writer)?,
                Node::Text(text) => {
                    let escaped = partial_escape(text.as_str());
                    writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    /// Serializes the subtree to a markup string.
    pub fn to_markup(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markup = self.to_markup().map_err(|_| fmt::Error)?;
        f.write_str(&markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attributes_are_sorted() {
        let el = Element::new("svg")
            .attr("x", "0")
            .attr("width", "74px")
            .attr("viewBox", "0 0 74 74")
            .attr("fill", "none")
            .attr("height", "74px");

        assert_eq!(
            el.to_string(),
            r#"<svg fill="none" height="74px" viewBox="0 0 74 74" width="74px" x="0"/>"#
        );
    }

    #[test]
    fn nested_elements_and_text() {
        let el = Element::new("text")
            .attr("x", "1")
            .child(Element::new("tspan").text("a < b & c"));

        assert_eq!(
            el.to_string(),
            r#"<text x="1"><tspan>a &lt; b &amp; c</tspan></text>"#
        );
    }

    #[test]
    fn text_keeps_quotes() {
        let el = Element::new("metadata").text(r#"{"a":"b"}"#);
        assert_eq!(el.to_string(), r#"<metadata>{"a":"b"}</metadata>"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = Element::new("image").attr("href", r#"a"b"#);
        assert_eq!(el.to_string(), r#"<image href="a&quot;b"/>"#);
    }

    #[test]
    fn prepend_and_find() {
        let mut root = Element::new("svg").child(Element::new("g"));
        root.prepend(Element::new("metadata").text("x"));

        let names: Vec<_> = root.child_elements().map(Element::name).collect();
        assert_eq!(names, ["metadata", "g"]);
        assert_eq!(root.find("metadata").unwrap().text_content(), "x");
        assert!(root.find("circle").is_none());
    }
}
