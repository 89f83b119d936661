//! The small slice of an HTML tree the extractor needs.
//!
//! Extraction code only talks to [`Document`] and [`Element`]; the
//! implementations below back them with `scraper`'s parse tree.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

/// A parsed page that can look up elements by `id` attribute.
pub trait Document {
    type Node<'a>: Element
    where
        Self: 'a;

    fn find_by_id(&self, id: &str) -> Option<Self::Node<'_>>;
}

/// One element of a parsed page.
pub trait Element: Sized {
    /// Lowercase tag name.
    fn tag(&self) -> &str;

    /// First element below this one (self excluded) with the given tag.
    fn find_first_descendant(&self, tag: &str) -> Option<Self>;

    /// All elements below this one with the given tag, in document order.
    fn find_all_descendants(&self, tag: &str) -> Vec<Self>;

    /// Direct child elements with the given tag, in document order.
    fn find_children(&self, tag: &str) -> Vec<Self>;

    /// Every text node below this element, unmodified.
    fn text_segments(&self) -> Vec<String>;

    /// Concatenated text of all descendants.
    fn text_content(&self) -> String {
        self.text_segments().concat()
    }
}

impl Document for Html {
    type Node<'a> = ElementRef<'a>;

    fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        element_descendants(self.tree.root()).find(|e| e.value().id() == Some(id))
    }
}

impl<'a> Element for ElementRef<'a> {
    fn tag(&self) -> &str {
        self.value().name()
    }

    fn find_first_descendant(&self, tag: &str) -> Option<Self> {
        element_descendants(**self)
            .skip(1)
            .find(|e| e.value().name() == tag)
    }

    fn find_all_descendants(&self, tag: &str) -> Vec<Self> {
        element_descendants(**self)
            .skip(1)
            .filter(|e| e.value().name() == tag)
            .collect()
    }

    fn find_children(&self, tag: &str) -> Vec<Self> {
        self.children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == tag)
            .collect()
    }

    fn text_segments(&self) -> Vec<String> {
        self.text().map(str::to_string).collect()
    }
}

/// Element nodes under `node` (itself included when it is an element).
fn element_descendants<'a>(node: NodeRef<'a, Node>) -> impl Iterator<Item = ElementRef<'a>> {
    node.descendants().filter_map(ElementRef::wrap)
}
