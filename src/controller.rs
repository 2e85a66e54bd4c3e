//! The selection controller: life cycle, stroke state and callbacks.
//!
//! One controller instance owns one selection life cycle at a time:
//!
//! ```text
//! Inactive ──initialize──▶ Ready ──Start──▶ Drawing ──End──▶ Ready … ──finish_drawing──▶ Inactive
//! ```
//!
//! Everything runs synchronously inside whatever host callback delivered
//! the input; the phase machine makes duplicate or out-of-order events
//! safe no-ops. Failures here are "nothing to do yet", so every guard is
//! a silent no-op rather than an error.

use indextree::NodeId;
use log::debug;

use crate::config::{LassoConfig, LassoOverrides};
use crate::containment;
use crate::document::Document;
use crate::geometry::{BoundingRect, Point};
use crate::host::{DrawSurface, Host, SurfaceOptions};
use crate::input::{PointerEvent, PointerSample, PointerSource, StrokePhase};
use crate::stroke::StrokePath;
use crate::unitizer;

/// Callback invoked once per completed stroke with the matched
/// word-units (possibly empty), in document order.
pub type SelectionCallback = Box<dyn FnMut(&Document, &[NodeId])>;

/// Callback invoked once per completed stroke with the space-joined text
/// of the matched units, or `None` when nothing matched.
pub type TextCallback = Box<dyn FnMut(Option<&str>)>;

/// Where the controller is in its life cycle.
///
/// `Inactive` covers both "never initialized" and "torn down"; a later
/// `initialize` starts a fresh life cycle with a new snapshot and a new
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inactive,
    Ready,
    Drawing,
}

/// Orchestrates word unitization, stroke capture, containment and
/// content restoration over a [`Host`].
pub struct SelectionController<H: Host> {
    config: LassoConfig,
    phase: Phase,
    surface: Option<H::Surface>,
    container: Option<NodeId>,
    snapshot: Option<NodeId>,
    path: StrokePath,
    bounds: Option<BoundingRect>,
    on_selection: Option<SelectionCallback>,
    on_text: Option<TextCallback>,
}

impl<H: Host> SelectionController<H> {
    /// Controller with the default configuration.
    pub fn new() -> Self {
        Self::with_overrides(LassoOverrides::default())
    }

    /// Controller with user overrides merged onto the defaults
    /// (see [`LassoConfig::with_overrides`]).
    pub fn with_overrides(overrides: LassoOverrides) -> Self {
        Self {
            config: LassoConfig::with_overrides(overrides),
            phase: Phase::Inactive,
            surface: None,
            container: None,
            snapshot: None,
            path: StrokePath::new(),
            bounds: None,
            on_selection: None,
            on_text: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn config(&self) -> &LassoConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_drawing(&self) -> bool {
        self.phase == Phase::Drawing
    }

    /// Bounding rectangle of the most recently completed stroke.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        self.bounds
    }

    /// The mounted drawing surface, while a life cycle is active. Hosts
    /// that repaint every frame read the retained state through this.
    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    /// Word-units currently carrying the highlight class, re-queried from
    /// the document (there is no separate selection set).
    pub fn selected_units(&self, doc: &Document) -> Vec<NodeId> {
        match self.container {
            Some(container) => unitizer::word_units(doc, container)
                .into_iter()
                .filter(|&u| doc.has_class(u, &self.config.highlight_class))
                .collect(),
            None => Vec::new(),
        }
    }

    // ── Callback registration ────────────────────────────────────────────

    /// Register the selection-changed callback. A single slot: each call
    /// overwrites the previous registration; teardown clears it.
    pub fn on_selection(&mut self, callback: impl FnMut(&Document, &[NodeId]) + 'static) {
        self.on_selection = Some(Box::new(callback));
    }

    /// Register the text-selected callback. Same single-slot semantics.
    pub fn on_text(&mut self, callback: impl FnMut(Option<&str>) + 'static) {
        self.on_text = Some(Box::new(callback));
    }

    // ── Life cycle ───────────────────────────────────────────────────────

    /// Begin a selection life cycle over `target`.
    ///
    /// No-op while a life cycle is already active, and no-op when
    /// `target` is not a live node of `doc` (the typed analogue of a
    /// null target). Snapshots the original content, unitizes it, mounts
    /// a viewport-sized surface and locks host scrolling.
    pub fn initialize(&mut self, host: &mut H, doc: &mut Document, target: NodeId) {
        if self.phase != Phase::Inactive {
            debug!("initialize ignored: life cycle already active");
            return;
        }
        if !doc.contains(target) {
            debug!("initialize ignored: target is not in the document");
            return;
        }

        self.snapshot = Some(doc.clone_subtree(target));
        self.container = Some(target);
        unitizer::wrap_words(doc, target, &self.config);

        let (width, height) = host.viewport_size();
        let surface = host.mount_surface(&SurfaceOptions {
            id: self.config.surface_id.clone(),
            style: self.config.surface_style.clone(),
            width,
            height,
        });
        self.surface = Some(surface);
        host.set_scroll_lock(true);
        self.phase = Phase::Ready;
        debug!("selection life cycle started ({width}x{height} surface)");
    }

    /// End the life cycle: unmount the surface, unlock scrolling, clear
    /// both callback slots and restore the pristine content snapshot.
    ///
    /// No-op when inactive. The restored subtree is a fresh node; hosts
    /// holding the old target id must re-resolve it.
    pub fn finish_drawing(&mut self, host: &mut H, doc: &mut Document) {
        if self.phase == Phase::Inactive {
            return;
        }
        if let Some(surface) = self.surface.take() {
            host.unmount_surface(surface);
        }
        host.set_scroll_lock(false);
        self.on_selection = None;
        self.on_text = None;
        if let (Some(container), Some(snapshot)) = (self.container.take(), self.snapshot.take()) {
            doc.replace_node(container, snapshot);
        }
        self.path = StrokePath::new();
        self.bounds = None;
        self.phase = Phase::Inactive;
        debug!("selection life cycle finished, content restored");
    }

    /// Clear all pixels on the surface. Independently callable; no-op
    /// when no surface is mounted.
    pub fn clear_canvas(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    /// Track a viewport size change while a surface is mounted.
    pub fn handle_viewport_resize(&mut self, host: &H) {
        if let Some(surface) = self.surface.as_mut() {
            let (width, height) = host.viewport_size();
            surface.resize(width, height);
        }
    }

    // ── Pointer input ────────────────────────────────────────────────────

    /// Feed one pointer event through the stroke state machine.
    ///
    /// Returns `true` when the event belongs to an active life cycle, in
    /// which case the host should suppress its default input behavior
    /// (scrolling, native gestures) for this event.
    pub fn handle_pointer(&mut self, host: &H, doc: &mut Document, event: PointerEvent) -> bool {
        if self.phase == Phase::Inactive {
            return false;
        }
        match event.phase {
            StrokePhase::Start => self.start_stroke(&event.sample),
            StrokePhase::Move => self.extend_stroke(&event.sample),
            StrokePhase::End => self.end_stroke(host, doc),
        }
        true
    }

    /// Resolve a sample into surface-local coordinates.
    ///
    /// Mouse and pen samples carry reliable target-relative offsets and
    /// use them directly; touch samples only carry trustworthy viewport
    /// coordinates, so the surface origin is subtracted.
    fn resolve(&self, sample: &PointerSample) -> Point {
        match sample.source {
            PointerSource::Mouse | PointerSource::Pen => sample.offset,
            PointerSource::Touch => {
                let origin = self
                    .surface
                    .as_ref()
                    .map(|s| s.origin())
                    .unwrap_or_default();
                Point::new(sample.client.x - origin.x, sample.client.y - origin.y)
            }
        }
    }

    fn start_stroke(&mut self, sample: &PointerSample) {
        if self.phase == Phase::Drawing {
            // First stroke wins; a second Start before End is ignored.
            return;
        }
        self.phase = Phase::Drawing;
        let point = self.resolve(sample);
        self.path.begin(point);
        if let Some(surface) = self.surface.as_mut() {
            surface.set_line_style(&self.config.line);
            surface.begin_path();
            surface.move_to(point);
        }
    }

    fn extend_stroke(&mut self, sample: &PointerSample) {
        if self.phase != Phase::Drawing {
            return;
        }
        let point = self.resolve(sample);
        self.path.push(point);
        if let Some(surface) = self.surface.as_mut() {
            surface.line_to(point);
            surface.stroke();
        }
    }

    /// Complete the stroke: bounding rectangle, visual feedback,
    /// containment pass, callback delivery.
    fn end_stroke(&mut self, host: &H, doc: &mut Document) {
        if self.phase != Phase::Drawing {
            return;
        }
        self.phase = Phase::Ready;

        // The path holds at least the seed point here, so bounds exist;
        // a single-point stroke just yields a zero-area rectangle.
        let Some(rect) = self.path.bounds() else {
            return;
        };
        self.bounds = Some(rect);

        let origin = self
            .surface
            .as_ref()
            .map(|s| s.origin())
            .unwrap_or_default();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
            surface.begin_path();
            surface.rect(rect);
            surface.stroke();
        }

        let Some(container) = self.container else {
            return;
        };
        let selected = containment::classify(doc, host, container, origin, rect, &self.config);
        let text = containment::selected_text(doc, &selected);

        if let Some(cb) = self.on_text.as_mut() {
            cb(text.as_deref());
        }
        if let Some(cb) = self.on_selection.as_mut() {
            cb(doc, &selected);
        }
    }
}

impl<H: Host> Default for SelectionController<H> {
    fn default() -> Self {
        Self::new()
    }
}
