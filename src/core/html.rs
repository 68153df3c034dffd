// src/core/html.rs
//! Minimal document-tree view over a parsed HTML page.
//!
//! Extraction needs only four things from a DOM: a node's tag name, its text,
//! its element children, and document order. `Document` exposes exactly that
//! over `scraper`'s tree, with lookups shaped like the questions extraction asks:
//! "first element matching P" (`find`) and "first element matching P after
//! this one" (`find_next`).
//!
//! Tag matching is ASCII case-insensitive. Text is whitespace-normalized.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

pub struct Document {
    html: Html,
}

/// Borrowed element inside a `Document`.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub fn tag(&self) -> &'a str {
        self.el.value().name()
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag().eq_ignore_ascii_case(tag)
    }

    pub fn is_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|t| self.is(t))
    }

    /// Concatenated text of the subtree, whitespace-collapsed and trimmed.
    pub fn text(&self) -> String {
        normalize_ws(&self.el.text().collect::<String>())
    }

    /// Direct element children.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.el.children().filter_map(ElementRef::wrap).map(|el| Node { el })
    }

    /// Descendant elements matching `pred`, in document order (self excluded).
    pub fn find_all<P>(&self, pred: P) -> Vec<Node<'a>>
    where
        P: Fn(&Node<'a>) -> bool,
    {
        self.el
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
            .filter(|n| pred(n))
            .collect()
    }
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    /// Every element in document (pre-)order.
    fn elements(&self) -> impl Iterator<Item = Node<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
    }

    /// First element in document order matching `pred`.
    pub fn find<P>(&self, pred: P) -> Option<Node<'_>>
    where
        P: Fn(&Node<'_>) -> bool,
    {
        self.elements().find(|n| pred(n))
    }

    /// First element after `from` in document order matching `pred`.
    /// `from`'s own descendants count as "after", as in an HTML source listing.
    pub fn find_next<'d, P>(&'d self, from: Node<'d>, pred: P) -> Option<Node<'d>>
    where
        P: Fn(&Node<'d>) -> bool,
    {
        self.elements()
            .skip_while(|n| n.el != from.el)
            .skip(1)
            .find(|n| pred(n))
    }

    pub fn find_all<P>(&self, pred: P) -> Vec<Node<'_>>
    where
        P: Fn(&Node<'_>) -> bool,
    {
        self.elements().filter(|n| pred(n)).collect()
    }
}
