//! XML document tree and serializer
//!
//! The manifest is lowered into a small element tree which is then rendered
//! with two-space indentation. Elements whose children are all text render on
//! a single line; everything else gets one line per child.

use crate::models::manifest::{Manifest, Package, Version};
use crate::models::package::Changelog;

const INDENT: &str = "  ";

/// XML declaration emitted ahead of the root element
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped character data
    Text(String),
    /// CDATA section written inline
    CData(String),
    /// CDATA section opened and closed on lines of its own
    CDataBlock(String),
}

impl Node {
    fn is_text_like(&self) -> bool {
        !matches!(self, Node::Element(_))
    }
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn cdata(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::CData(text.into()));
        self
    }

    pub fn cdata_block(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::CDataBlock(text.into()));
        self
    }
}

/// Lower a manifest into the ReaPack index element tree
pub fn manifest_document(manifest: &Manifest) -> Element {
    let categories = manifest.categories.iter().map(|category| {
        Element::new("category")
            .attr("name", &category.name)
            .children(category.packages.iter().map(package_element))
    });

    let metadata = Element::new("metadata")
        .child(Element::new("description").cdata(&manifest.metadata.description))
        .child(
            Element::new("link")
                .attr("rel", "website")
                .text(&manifest.metadata.website),
        );

    Element::new("index")
        .attr("version", manifest.schema_version.to_string())
        .attr("name", &manifest.name)
        .attr("commit", &manifest.commit)
        .children(categories)
        .child(metadata)
}

fn package_element(package: &Package) -> Element {
    Element::new("reapack")
        .attr("name", &package.name)
        .attr("type", package.package_type.to_string())
        .attr("desc", &package.description)
        .child(version_element(&package.version))
}

fn version_element(version: &Version) -> Element {
    let changelog = match &version.changelog {
        Changelog::Inline(text) => Element::new("changelog").cdata(text),
        Changelog::Block(text) => Element::new("changelog").cdata_block(text),
    };

    let sources = version.sources.iter().map(|source| {
        let element = Element::new("source");
        let element = if source.main {
            element.attr("main", "main")
        } else {
            element
        };
        element.text(&source.url)
    });

    Element::new("version")
        .attr("name", &version.name)
        .attr("author", &version.author)
        .attr("time", &version.time)
        .child(changelog)
        .children(sources)
}

/// Render a complete document: declaration, root element, trailing newline
pub fn render_document(root: &Element) -> String {
    let mut output = String::new();
    output.push_str(DECLARATION);
    output.push('\n');
    write_element(&mut output, root, 0);
    output
}

fn write_element(output: &mut String, element: &Element, depth: usize) {
    let indent = INDENT.repeat(depth);
    output.push_str(&indent);
    write_open_tag(output, element);

    if element.children.is_empty() {
        output.insert(output.len() - 1, '/');
        output.push('\n');
        return;
    }

    if element.children.iter().all(Node::is_text_like) {
        for child in &element.children {
            write_inline(output, child, &indent);
        }
    } else {
        output.push('\n');
        for child in &element.children {
            match child {
                Node::Element(nested) => write_element(output, nested, depth + 1),
                text => {
                    output.push_str(&INDENT.repeat(depth + 1));
                    write_inline(output, text, &INDENT.repeat(depth + 1));
                    output.push('\n');
                }
            }
        }
        output.push_str(&indent);
    }

    output.push_str("</");
    output.push_str(&element.name);
    output.push_str(">\n");
}

fn write_open_tag(output: &mut String, element: &Element) {
    output.push('<');
    output.push_str(&element.name);
    for (name, value) in &element.attributes {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape(value, true));
        output.push('"');
    }
    output.push('>');
}

fn write_inline(output: &mut String, node: &Node, indent: &str) {
    match node {
        Node::Text(text) => output.push_str(&escape(text, false)),
        Node::CData(text) => output.push_str(&cdata(text)),
        Node::CDataBlock(text) => {
            output.push_str(&cdata(&format!("\n{}\n{}", text, indent)));
        }
        Node::Element(_) => {}
    }
}

/// Wrap text in a CDATA section, splitting any embedded terminator
pub fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

/// Escape markup characters; quotes only matter inside attributes
pub fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
