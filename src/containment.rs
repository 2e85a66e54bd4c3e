//! Containment: deciding which word-units a stroke selected.
//!
//! A full re-evaluation runs at every stroke end. Each word-unit's
//! viewport box is translated into surface-local space (both rectangles
//! must share the surface's origin) and tested against the stroke's
//! bounding rectangle with the strict overlap test; matches get the
//! highlight class and style, everything else has its mark cleared.
//! Prior selection state is discarded wholesale, never diffed.

use indextree::NodeId;
use log::debug;

use crate::config::LassoConfig;
use crate::document::Document;
use crate::geometry::{BoundingRect, Point};
use crate::host::Host;
use crate::unitizer;

/// Classify every word-unit under `container` against `test_rect`
/// (surface-local), marking matches and unmarking the rest.
///
/// Returns the matched units in document order. Units the host cannot
/// lay out are treated as not intersecting.
pub fn classify<H: Host>(
    doc: &mut Document,
    host: &H,
    container: NodeId,
    surface_origin: Point,
    test_rect: BoundingRect,
    config: &LassoConfig,
) -> Vec<NodeId> {
    let mut selected = Vec::new();
    for unit in unitizer::word_units(doc, container) {
        let inside = host
            .element_box(doc, unit)
            .map(|viewport_box| {
                let local = viewport_box.translated(-surface_origin.x, -surface_origin.y);
                local.intersects(&test_rect)
            })
            .unwrap_or(false);
        if inside {
            doc.add_class(unit, &config.highlight_class);
            doc.apply_style(unit, &config.highlight_style);
            selected.push(unit);
        } else {
            doc.remove_class(unit, &config.highlight_class);
            doc.clear_style(unit);
        }
    }
    debug!("containment pass matched {} unit(s)", selected.len());
    selected
}

/// Space-joined text content of `units`, or `None` when empty.
pub fn selected_text(doc: &Document, units: &[NodeId]) -> Option<String> {
    if units.is_empty() {
        return None;
    }
    Some(
        units
            .iter()
            .map(|&u| doc.text_content(u))
            .collect::<Vec<_>>()
            .join(" "),
    )
}
