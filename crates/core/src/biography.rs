//! Plain-text extraction for the `spotlight` biography HTML.
//!
//! The fragment is parsed with `scraper` (servo's html5ever), which recovers
//! from any markup, so extraction cannot fail. Rules:
//! - text nodes are kept in document order, entities decoded
//! - `script`, `style`, `template` and `head` content is dropped
//! - block elements and `<br>` start a new line
//! - line breaks inside `<pre>` are kept
//! - whitespace runs collapse to one space; blank lines are dropped

use scraper::{ElementRef, Html, Node};

const SKIPPED: &[&str] = &["script", "style", "template", "head", "noscript"];

const BLOCKS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre", "section",
    "table", "td", "th", "tr", "ul",
];

/// Visible text of an HTML fragment.
#[must_use]
pub fn plain_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let mut raw = String::with_capacity(html.len());
    collect_text(fragment.root_element(), false, &mut raw);
    tidy(&raw)
}

fn collect_text(element: ElementRef<'_>, preformatted: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.extend(text.chars().map(|c| match c {
                    '\n' if preformatted => '\n',
                    c if c.is_whitespace() => ' ',
                    c => c,
                }));
            },
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED.contains(&name) {
                    continue;
                }
                let block = BLOCKS.contains(&name);
                if block {
                    out.push('\n');
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, preformatted || name == "pre", out);
                }
                if block {
                    out.push('\n');
                }
            },
            _ => {},
        }
    }
}

fn tidy(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
