//! Word unitization: turning raw text into addressable word-units.
//!
//! Every text node underneath the target is replaced, in place, by a
//! wrapper element holding one `span` word-unit per whitespace-delimited
//! token, the units separated by single-space text nodes. Element
//! children are visited recursively. The walk iterates a snapshot of the
//! child list taken before any replacement — mutating a child list while
//! walking it is forbidden, and freshly inserted wrappers must never be
//! re-visited.

use indextree::NodeId;
use log::debug;

use crate::config::LassoConfig;
use crate::document::Document;
use crate::style::StyleMap;

/// Tag of every word-unit element.
pub const UNIT_TAG: &str = "span";
/// Tag of the wrapper element substituted for each unitized text node.
pub const WRAPPER_TAG: &str = "div";

/// Recursively replace text content under `root` with word-units.
///
/// Whitespace-only and empty text nodes are left untouched and the walk
/// continues with the next sibling. Returns the number of word-units
/// created.
pub fn wrap_words(doc: &mut Document, root: NodeId, config: &LassoConfig) -> usize {
    let mut created = 0;
    unitize_children(doc, root, config, &mut created);
    debug!("unitized {created} word(s) under target subtree");
    created
}

fn unitize_children(doc: &mut Document, parent: NodeId, config: &LassoConfig, created: &mut usize) {
    // Snapshot before mutating: replace_node edits the sibling chain.
    for child in doc.child_ids(parent) {
        if let Some(text) = doc.text_value(child).map(str::to_owned) {
            if text.trim().is_empty() {
                // Nothing to unitize; later siblings still get their turn.
                continue;
            }
            let wrapper = build_wrapper(doc, &text, config, created);
            doc.replace_node(child, wrapper);
        } else if doc.is_element(child) {
            unitize_children(doc, child, config, created);
        }
    }
}

/// Build the detached wrapper subtree for one text run: word-units joined
/// by single-space separators, under a styled wrapper element.
fn build_wrapper(
    doc: &mut Document,
    text: &str,
    config: &LassoConfig,
    created: &mut usize,
) -> NodeId {
    let wrapper = doc.create_element(WRAPPER_TAG);
    doc.add_class(wrapper, &config.wrapper_class);
    doc.apply_style(wrapper, &config.wrapper_style);

    let mut first = true;
    for token in text.split_whitespace() {
        if !first {
            let sep = doc.create_text(" ");
            doc.append_child(wrapper, sep);
        }
        first = false;
        let unit = make_unit(doc, token, &config.unit_class, &config.unit_style);
        doc.append_child(wrapper, unit);
        *created += 1;
    }
    wrapper
}

fn make_unit(doc: &mut Document, token: &str, class: &str, style: &StyleMap) -> NodeId {
    let unit = doc.create_element(UNIT_TAG);
    doc.add_class(unit, class);
    doc.apply_style(unit, style);
    let text = doc.create_text(token);
    doc.append_child(unit, text);
    unit
}

/// All word-units currently under `root`, in document order.
pub fn word_units(doc: &Document, root: NodeId) -> Vec<NodeId> {
    doc.descendants_by_tag(root, UNIT_TAG)
}
