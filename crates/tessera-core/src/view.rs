//! Element/text view tree produced by section renderers.
//!
//! Renderers build trees with [`el`] and [`text`]; hosts serialize them with
//! [`ViewNode::to_html`]. Attribute values and text are escaped on output, so
//! editor-supplied strings cannot inject markup.

use serde::Serialize;
use std::fmt::Write;

/// Elements that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// A node in a rendered view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ViewNode {
    Element(Element),
    Text { text: String },
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

/// Start an element.
#[must_use]
pub const fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
#[must_use]
pub fn text(content: impl Into<String>) -> ViewNode {
    ViewNode::Text {
        text: content.into(),
    }
}

impl Element {
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ViewNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl ViewNode {
    /// Serialize the tree as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(&escape_html(text)),
            Self::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape_html(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// All text in document order, joined by single spaces.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        match self {
            Self::Text { text } => parts.push(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(parts);
                }
            }
        }
    }

    /// Every element with the given tag, depth-first.
    #[must_use]
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(tag, &mut found);
        found
    }

    fn collect_elements<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                child.collect_elements(tag, found);
            }
        }
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_nested_html() {
        let node: ViewNode = el("section")
            .id("faq")
            .child(el("h2").class("title").text("Questions"))
            .into();
        assert_eq!(
            node.to_html(),
            "<section id=\"faq\"><h2 class=\"title\">Questions</h2></section>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node: ViewNode = el("a")
            .attr("href", "\"><script>")
            .text("<b>&</b>")
            .into();
        assert_eq!(
            node.to_html(),
            "<a href=\"&quot;&gt;&lt;script&gt;\">&lt;b&gt;&amp;&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: ViewNode = el("input").attr("type", "email").into();
        assert_eq!(node.to_html(), "<input type=\"email\">");
    }

    #[test]
    fn text_content_joins_in_order() {
        let node: ViewNode = el("div")
            .child(el("p").text("one"))
            .child(el("p").text("two"))
            .into();
        assert_eq!(node.text_content(), "one two");
    }

    #[test]
    fn find_all_walks_depth_first() {
        let node: ViewNode = el("ul")
            .children(["a", "b"].map(|label| el("li").text(label)))
            .into();
        let items = node.find_all("li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].children, vec![text("b")]);
    }

    #[test]
    fn get_attr_returns_first_match() {
        let element = el("a").attr("href", "#top");
        assert_eq!(element.get_attr("href"), Some("#top"));
        assert_eq!(element.get_attr("rel"), None);
    }
}
