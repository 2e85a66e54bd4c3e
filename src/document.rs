//! In-memory document model.
//!
//! Rust UI hosts have no ambient DOM, so the crate ships a lightweight
//! document tree of its own: an [`indextree`] arena of text and element
//! nodes addressed by [`NodeId`] handles. It supports exactly the
//! operations the selection life cycle needs — child enumeration and
//! replacement, deep cloning, descendant queries by tag, class toggling
//! and inline styles — plus a deterministic markup rendering used to
//! verify that teardown restores the original content byte-for-byte.
//!
//! Detached nodes stay allocated in the arena until the document is
//! dropped; handles to them become dead (`contains` returns `false` once
//! a node leaves the tree reachable from the root).

use indextree::{Arena, NodeId};

use crate::style::StyleMap;

/// Payload of an element node: tag name, class list, inline styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementData {
    pub tag: String,
    pub classes: Vec<String>,
    pub style: StyleMap,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }
}

/// A document node: raw text or an element.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Text(String),
    Element(ElementData),
}

/// An arena-backed tree of [`NodeData`] nodes with a single root element.
#[derive(Debug)]
pub struct Document {
    arena: Arena<NodeData>,
    root: NodeId,
}

impl Document {
    /// Create a document whose root is an element with the given tag.
    pub fn new(root_tag: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeData::Element(ElementData::new(root_tag)));
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Whether `id` is alive and attached under the root (the root
    /// itself included).
    pub fn contains(&self, id: NodeId) -> bool {
        match self.arena.get(id) {
            Some(node) if !node.is_removed() => {
                id == self.root || id.ancestors(&self.arena).any(|a| a == self.root)
            }
            _ => false,
        }
    }

    // ── Node construction ────────────────────────────────────────────────

    /// Allocate a detached text node.
    pub fn create_text(&mut self, value: impl Into<String>) -> NodeId {
        self.arena.new_node(NodeData::Text(value.into()))
    }

    /// Allocate a detached element node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.arena
            .new_node(NodeData::Element(ElementData::new(tag)))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    // ── Tree navigation ──────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent())
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Snapshot of the current child list. Callers that mutate children
    /// while walking them must iterate this snapshot, never the live
    /// sibling chain.
    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Every element underneath `root` (excluding `root` itself) whose
    /// tag matches, in document order.
    pub fn descendants_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        root.descendants(&self.arena)
            .skip(1)
            .filter(|&id| self.tag(id) == Some(tag))
            .collect()
    }

    // ── Node kind access ─────────────────────────────────────────────────

    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.arena.get(id).map(|n| n.get())
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.data(id), Some(NodeData::Text(_)))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.data(id), Some(NodeData::Element(_)))
    }

    pub fn text_value(&self, id: NodeId) -> Option<&str> {
        match self.data(id) {
            Some(NodeData::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.data(id) {
            Some(NodeData::Element(el)) => Some(el.tag.as_str()),
            _ => None,
        }
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.data(id) {
            Some(NodeData::Element(el)) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.arena.get_mut(id).map(|n| n.get_mut()) {
            Some(NodeData::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of all text nodes underneath `id` (including
    /// `id` itself when it is a text node), in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in id.descendants(&self.arena) {
            if let Some(NodeData::Text(t)) = self.data(node) {
                out.push_str(t);
            }
        }
        out
    }

    // ── Classes and styles ───────────────────────────────────────────────

    /// Add `class` to an element's class list (no duplicates).
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .map(|el| el.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Overlay `style` onto an element's inline styles, key by key.
    pub fn apply_style(&mut self, id: NodeId, style: &StyleMap) {
        if let Some(el) = self.element_mut(id) {
            el.style.apply(style);
        }
    }

    /// Drop every inline style property on an element.
    pub fn clear_style(&mut self, id: NodeId) {
        if let Some(el) = self.element_mut(id) {
            el.style.clear();
        }
    }

    pub fn style(&self, id: NodeId) -> Option<&StyleMap> {
        self.element(id).map(|el| &el.style)
    }

    // ── Structural mutation ──────────────────────────────────────────────

    /// Substitute `new` for `old` at `old`'s position in its parent.
    ///
    /// When `old` is the document root, `new` becomes the root. The old
    /// subtree is detached, not freed.
    pub fn replace_node(&mut self, old: NodeId, new: NodeId) {
        if old == self.root {
            self.root = new;
            return;
        }
        old.insert_after(new, &mut self.arena);
        old.detach(&mut self.arena);
    }

    /// Deep copy of the subtree rooted at `id`; the copy is detached.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let data = self
            .arena
            .get(id)
            .map(|n| n.get().clone())
            .unwrap_or_else(|| NodeData::Text(String::new()));
        let copy = self.arena.new_node(data);
        for child in self.child_ids(id) {
            let child_copy = self.clone_subtree(child);
            copy.append(child_copy, &mut self.arena);
        }
        copy
    }

    // ── Markup rendering ─────────────────────────────────────────────────

    /// Deterministic markup rendering of a subtree.
    ///
    /// Classes render in insertion order, styles in property order, so
    /// two structurally equal subtrees always render identically. Used by
    /// hosts and tests to compare content before and after a life cycle.
    pub fn markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.render(id, &mut out);
        out
    }

    fn render(&self, id: NodeId, out: &mut String) {
        match self.data(id) {
            Some(NodeData::Text(t)) => out.push_str(t),
            Some(NodeData::Element(el)) => {
                out.push('<');
                out.push_str(&el.tag);
                if !el.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&el.classes.join(" "));
                    out.push('"');
                }
                if !el.style.is_empty() {
                    out.push_str(" style=\"");
                    let mut first = true;
                    for (k, v) in el.style.iter() {
                        if !first {
                            out.push_str("; ");
                        }
                        first = false;
                        out.push_str(k);
                        out.push_str(": ");
                        out.push_str(v);
                    }
                    out.push('"');
                }
                out.push('>');
                for child in self.child_ids(id) {
                    self.render(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> (Document, NodeId) {
        let mut doc = Document::new("article");
        let para = doc.create_element("p");
        let text = doc.create_text("hello world");
        doc.append_child(para, text);
        doc.append_child(doc.root(), para);
        (doc, para)
    }

    #[test]
    fn replace_node_preserves_sibling_order() {
        let mut doc = Document::new("div");
        let a = doc.create_text("a");
        let b = doc.create_text("b");
        let c = doc.create_text("c");
        for id in [a, b, c] {
            doc.append_child(doc.root(), id);
        }
        let repl = doc.create_text("B");
        doc.replace_node(b, repl);
        let texts: Vec<_> = doc
            .child_ids(doc.root())
            .into_iter()
            .map(|id| doc.text_value(id).unwrap().to_string())
            .collect();
        assert_eq!(texts, ["a", "B", "c"]);
        assert!(!doc.contains(b));
    }

    #[test]
    fn clone_subtree_is_deep_and_detached() {
        let (mut doc, para) = sample_doc();
        let copy = doc.clone_subtree(para);
        assert!(doc.parent(copy).is_none());
        assert_eq!(doc.text_content(copy), "hello world");

        // Mutating the original leaves the copy alone.
        let replacement = doc.create_text("changed");
        let original_text = doc.child_ids(para)[0];
        doc.replace_node(original_text, replacement);
        assert_eq!(doc.text_content(para), "changed");
        assert_eq!(doc.text_content(copy), "hello world");
    }

    #[test]
    fn descendants_by_tag_excludes_root_and_orders() {
        let mut doc = Document::new("div");
        let inner = doc.create_element("div");
        let s1 = doc.create_element("span");
        let s2 = doc.create_element("span");
        doc.append_child(doc.root(), s1);
        doc.append_child(doc.root(), inner);
        doc.append_child(inner, s2);
        assert_eq!(doc.descendants_by_tag(doc.root(), "span"), vec![s1, s2]);
        assert_eq!(doc.descendants_by_tag(doc.root(), "div"), vec![inner]);
    }

    #[test]
    fn markup_round_trips_classes_and_styles() {
        let (mut doc, para) = sample_doc();
        doc.add_class(para, "lead");
        let mut style = StyleMap::new();
        style.set("display", "inline");
        doc.apply_style(para, &style);
        assert_eq!(
            doc.markup(doc.root()),
            "<article><p class=\"lead\" style=\"display: inline\">hello world</p></article>"
        );
    }

    #[test]
    fn add_class_is_duplicate_free() {
        let (mut doc, para) = sample_doc();
        doc.add_class(para, "x");
        doc.add_class(para, "x");
        doc.remove_class(para, "x");
        assert!(!doc.has_class(para, "x"));
    }
}
