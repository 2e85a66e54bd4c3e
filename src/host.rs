//! Collaborator traits for the host environment.
//!
//! The controller treats everything outside the selection core as a
//! black box behind two traits: [`DrawSurface`], a canvas-like raster
//! surface that can stroke line segments and rectangle outlines, and
//! [`Host`], the environment that mounts surfaces, reports viewport
//! geometry and resolves element layout boxes. Tests drive the
//! controller with recording fakes; [`crate::egui_surface`] is the
//! shipped real implementation.

use crate::config::LineStyle;
use crate::document::Document;
use crate::geometry::{BoundingRect, Point};
use crate::style::StyleMap;
use indextree::NodeId;

/// A raster drawing surface with a 2D-canvas-shaped API.
///
/// Path construction is stateful: `begin_path` starts a fresh path,
/// `move_to`/`line_to`/`rect` extend it, `stroke` paints it with the
/// current line style. All coordinates are surface-local.
pub trait DrawSurface {
    /// Resize the backing store, clearing it.
    fn resize(&mut self, width: f32, height: f32);

    /// The surface's top-left corner in viewport coordinates. Used to
    /// translate viewport-relative boxes into surface-local space.
    fn origin(&self) -> Point;

    /// Set the line style used by subsequent `stroke` calls.
    fn set_line_style(&mut self, style: &LineStyle);

    /// Start a fresh path, discarding any unstroked one.
    fn begin_path(&mut self);

    /// Move the path cursor without drawing.
    fn move_to(&mut self, point: Point);

    /// Extend the path with a line segment to `point`.
    fn line_to(&mut self, point: Point);

    /// Add a rectangle outline to the path.
    fn rect(&mut self, rect: BoundingRect);

    /// Paint the current path.
    fn stroke(&mut self);

    /// Clear all pixels.
    fn clear(&mut self);
}

/// Parameters for mounting a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    /// Identifier for the mounted surface (the configured surface id).
    pub id: String,
    /// Merged inline style for the surface element, passed through
    /// unvalidated.
    pub style: StyleMap,
    /// Initial size: the current viewport.
    pub width: f32,
    pub height: f32,
}

/// The host environment a selection life cycle runs in.
pub trait Host {
    type Surface: DrawSurface;

    /// Current viewport size in points.
    fn viewport_size(&self) -> (f32, f32);

    /// Create and mount a drawing surface over the content.
    fn mount_surface(&mut self, options: &SurfaceOptions) -> Self::Surface;

    /// Detach a previously mounted surface.
    fn unmount_surface(&mut self, surface: Self::Surface);

    /// Suppress (or restore) host-level scrolling while a life cycle is
    /// active, so strokes do not pan the content underneath.
    fn set_scroll_lock(&mut self, locked: bool);

    /// Layout oracle: the viewport-relative box of an element, if the
    /// host has laid it out. `None` means "not measurable", which the
    /// containment pass treats as not intersecting.
    fn element_box(&self, doc: &Document, element: NodeId) -> Option<BoundingRect>;
}
