// ABOUTME: Capability trait over a mutable tree of labeled nodes used by the relocator.
// ABOUTME: Implements the trait for dom_query::Document with node ids as handles.

//! Document tree capabilities.
//!
//! The relocator never touches a concrete DOM. It only needs to:
//! - enumerate elements of a tag in document order,
//! - read an attribute,
//! - look an element up by id,
//! - check that a handle still resolves and where the node sits,
//! - enumerate, clear and move child nodes.
//!
//! Every lookup returns an `Option`; the caller decides that absence means
//! "skip", never "fail".

use std::fmt;

use dom_query::{Document, NodeId, NodeRef};

use crate::compiled::get_or_compile;

const ID_SELECTOR: &str = "[id]";

/// A mutable tree of labeled nodes the relocator can operate on.
pub trait DocumentTree {
    /// Cheap copyable reference to a node in the tree.
    type Handle: Copy + Eq + fmt::Debug;

    /// Elements with the given tag name, in document order.
    ///
    /// An unusable tag yields no elements.
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Handle>;

    /// The value of a named attribute, if the node is an element carrying it.
    fn attribute(&self, node: Self::Handle, name: &str) -> Option<String>;

    /// The first element in document order whose `id` equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// True if the handle still resolves to a node.
    ///
    /// Detached nodes still resolve; only a node the tree has dropped does not.
    fn contains(&self, node: Self::Handle) -> bool;

    /// True if `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: Self::Handle, node: Self::Handle) -> bool;

    /// Child nodes of `node` (elements, text, comments), in order.
    fn children(&self, node: Self::Handle) -> Vec<Self::Handle>;

    /// Detaches every child of `node`. Returns how many were removed.
    fn clear_children(&mut self, node: Self::Handle) -> usize;

    /// Moves `child` from wherever it is to the end of `parent`'s children.
    fn move_child(&mut self, parent: Self::Handle, child: Self::Handle);
}

fn node_ref(doc: &Document, id: NodeId) -> Option<NodeRef<'_>> {
    doc.tree.get(&id)
}

impl DocumentTree for Document {
    type Handle = NodeId;

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        match get_or_compile(tag) {
            Some(matcher) => self
                .select_matcher(&matcher)
                .nodes()
                .iter()
                .map(|n| n.id)
                .collect(),
            None => Vec::new(),
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        node_ref(self, node)?.attr(name).map(|v| v.to_string())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let matcher = get_or_compile(ID_SELECTOR)?;
        self.select_matcher(&matcher)
            .nodes()
            .iter()
            .find(|n| n.attr("id").is_some_and(|v| &*v == id))
            .map(|n| n.id)
    }

    fn contains(&self, node: NodeId) -> bool {
        node_ref(self, node).is_some()
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node_ref(self, node);
        while let Some(n) = current {
            if n.id == ancestor {
                return true;
            }
            current = n.parent();
        }
        false
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        node_ref(self, node)
            .map(|n| n.children().iter().map(|c| c.id).collect())
            .unwrap_or_default()
    }

    fn clear_children(&mut self, node: NodeId) -> usize {
        let Some(parent) = node_ref(self, node) else {
            return 0;
        };
        let children = parent.children();
        for child in &children {
            child.remove_from_parent();
        }
        children.len()
    }

    fn move_child(&mut self, parent: NodeId, child: NodeId) {
        let (Some(parent), Some(child)) = (node_ref(self, parent), node_ref(self, child)) else {
            return;
        };
        child.remove_from_parent();
        parent.append_child(&child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
        <html><body>
            <div id="content-a"><span>old</span></div>
            <content cid="a">Hello <b>world</b></content>
            <content cid="b"></content>
            <p id="dup">first</p>
            <p id="dup">second</p>
        </body></html>"#;

    #[test]
    fn elements_by_tag_in_document_order() {
        let doc = Document::from(PAGE);
        let found = doc.elements_by_tag("content");
        assert_eq!(found.len(), 2);
        assert_eq!(doc.attribute(found[0], "cid").as_deref(), Some("a"));
        assert_eq!(doc.attribute(found[1], "cid").as_deref(), Some("b"));
    }

    #[test]
    fn invalid_tag_yields_nothing() {
        let doc = Document::from(PAGE);
        assert!(doc.elements_by_tag("[[[").is_empty());
    }

    #[test]
    fn element_by_id_returns_first_match() {
        let doc = Document::from(PAGE);
        let dup = doc.element_by_id("dup").unwrap();
        assert_eq!(doc.tree.get(&dup).unwrap().text().to_string(), "first");
        assert!(doc.element_by_id("nope").is_none());
    }

    #[test]
    fn children_include_text_nodes() {
        let doc = Document::from(PAGE);
        let fragment = doc.elements_by_tag("content")[0];
        assert_eq!(doc.children(fragment).len(), 2);
    }

    #[test]
    fn clear_and_move_children() {
        let mut doc = Document::from(PAGE);
        let slot = doc.element_by_id("content-a").unwrap();
        let fragment = doc.elements_by_tag("content")[0];

        assert_eq!(doc.clear_children(slot), 1);
        for child in doc.children(fragment) {
            doc.move_child(slot, child);
        }

        assert!(doc.children(fragment).is_empty());
        let slot_ref = doc.tree.get(&slot).unwrap();
        assert_eq!(slot_ref.inner_html().to_string(), "Hello <b>world</b>");
    }

    #[test]
    fn detached_nodes_still_resolve() {
        let mut doc = Document::from(PAGE);
        let slot = doc.element_by_id("content-a").unwrap();
        let old = doc.children(slot)[0];
        doc.clear_children(slot);
        assert!(doc.contains(old));
        assert!(doc.element_by_id("content-a").is_some());
        assert_eq!(doc.tree.get(&old).unwrap().text().to_string(), "old");
    }

    #[test]
    fn inclusive_ancestor() {
        let doc = Document::from(PAGE);
        let slot = doc.element_by_id("content-a").unwrap();
        let span = doc.children(slot)[0];
        assert!(doc.is_inclusive_ancestor(slot, span));
        assert!(doc.is_inclusive_ancestor(slot, slot));
        assert!(!doc.is_inclusive_ancestor(span, slot));
    }
}
