//! Markup Codec
//!
//! Every store node is persisted as a small static HTML page. The page has a
//! fixed, line-oriented shape: one `<h1>` line for the name, one `<li>` line per
//! child category or item, one `<li>` line per attribute. [`encode`] writes
//! that shape and [`decode`] scans it back line by line.
//!
//! This is a private format shared by the writer and its own reader. It is not
//! an HTML parser: lines that do not match a known shape are skipped, and names,
//! keys, and values must be non-empty, single-line, and free of `<` and `"`.

use crate::attributes::Attributes;
use regex::Regex;
use std::sync::LazyLock;

/// Extension of every backing document.
pub const DOC_EXTENSION: &str = "html";

/// File name of the backing document of a root or category node.
pub const INDEX_DOCUMENT: &str = "index.html";

const CATEGORY_MARKER: &str = "category";
const ITEM_MARKER: &str = "item";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h1>([^<]+)</h1>").expect("valid title pattern"));

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<li><a class="([^"]+)" href="[^"]+\.html">([^<]+)</a></li>"#)
        .expect("valid entry pattern")
});

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<li><span id="([^"]+)">([^<]+)</span></li>"#).expect("valid attribute pattern")
});

/// Decoded content of one node document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub name: String,
    pub categories: Vec<String>,
    pub items: Vec<String>,
    pub attributes: Attributes,
}

impl Content {
    /// Content of a freshly created node: a name and nothing else.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One scanned document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Title(&'a str),
    Category(&'a str),
    Item(&'a str),
    Attribute { key: &'a str, value: &'a str },
    Unrecognized,
}

impl<'a> Line<'a> {
    /// Classify a line. Patterns are tried in order: title, list entry, attribute.
    ///
    /// A list entry with an unknown marker is `Unrecognized`; it is not retried
    /// as an attribute.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = TITLE_RE.captures(line) {
            if let Some(name) = caps.get(1) {
                return Line::Title(name.as_str());
            }
        }
        if let Some(caps) = ENTRY_RE.captures(line) {
            return match (caps.get(1), caps.get(2)) {
                (Some(marker), Some(text)) => match marker.as_str() {
                    CATEGORY_MARKER => Line::Category(text.as_str()),
                    ITEM_MARKER => Line::Item(text.as_str()),
                    _ => Line::Unrecognized,
                },
                _ => Line::Unrecognized,
            };
        }
        if let Some(caps) = ATTRIBUTE_RE.captures(line) {
            if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
                return Line::Attribute {
                    key: key.as_str(),
                    value: value.as_str(),
                };
            }
        }
        Line::Unrecognized
    }
}

/// Relative link from a node document to a child category document.
pub fn category_href(short_name: &str) -> String {
    format!("{}/{}", short_name, INDEX_DOCUMENT)
}

/// Relative link from a node document to a child item document.
pub fn item_href(short_name: &str) -> String {
    format!("{}.{}", short_name, DOC_EXTENSION)
}

/// Render content as document lines, in category, item, attribute order.
pub fn encode(content: &Content) -> Vec<String> {
    let mut lines = Vec::with_capacity(
        7 + content.categories.len() + content.items.len() + content.attributes.len(),
    );
    lines.push("<!DOCTYPE html>".to_string());
    lines.push(
        r#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=UTF-8" /></head>"#
            .to_string(),
    );
    lines.push(format!(
        r#"<body><h1>{}</h1><div id="categories"><h2>Categories</h2><ul>"#,
        content.name
    ));
    for category in &content.categories {
        lines.push(format!(
            r#"<li><a class="{}" href="{}">{}</a></li>"#,
            CATEGORY_MARKER,
            category_href(category),
            category
        ));
    }
    lines.push(r#"</ul></div><div id="items"><h2>Items</h2><ul>"#.to_string());
    for item in &content.items {
        lines.push(format!(
            r#"<li><a class="{}" href="{}">{}</a></li>"#,
            ITEM_MARKER,
            item_href(item),
            item
        ));
    }
    lines.push(r#"</ul></div><div id="attributes"><h2>Attributes</h2><ul>"#.to_string());
    for (key, value) in content.attributes.iter() {
        lines.push(format!(r#"<li><span id="{}">{}</span></li>"#, key, value));
    }
    lines.push("</ul></div></body></html>".to_string());
    lines
}

/// Recover content from document lines.
///
/// When several title lines are present the last one wins; a repeated
/// attribute key keeps its last value.
pub fn decode<I, S>(lines: I) -> Content
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = Content::default();
    for line in lines {
        match Line::classify(line.as_ref()) {
            Line::Title(name) => content.name = name.to_string(),
            Line::Category(name) => content.categories.push(name.to_string()),
            Line::Item(name) => content.items.push(name.to_string()),
            Line::Attribute { key, value } => {
                content.attributes.insert(key, value);
            }
            Line::Unrecognized => {}
        }
    }
    content
}
