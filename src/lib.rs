//! lassotext crate root: re-exports and module wiring.
//!
//! Draw a freehand lasso over text and select every word whose box
//! intersects the stroke's bounding rectangle. The crate splits into
//! cohesive modules:
//! - `config`/`style`: options, defaults and inline-style merging
//! - `document`: the in-memory content tree that gets unitized
//! - `geometry`/`stroke`: bounding rectangles and the active path
//! - `input`: the tagged pointer-sample boundary
//! - `unitizer`/`containment`: word-unit creation and classification
//! - `host`: collaborator traits (drawing surface, environment)
//! - `controller`: the selection life-cycle state machine
//! - `egui_surface`: the shipped egui surface and event adapter

pub mod config;
pub mod containment;
pub mod controller;
pub mod document;
pub mod egui_surface;
pub mod geometry;
pub mod host;
pub mod input;
pub mod stroke;
pub mod style;
pub mod unitizer;

// Public re-exports for a compact external API
pub use config::{LassoConfig, LassoOverrides, LineCap, LineStyle, DEFAULTS};
pub use controller::{Phase, SelectionController};
pub use document::{Document, ElementData, NodeData};
pub use egui_surface::{pointer_events, EguiSurface};
pub use geometry::{BoundingRect, Point};
pub use host::{DrawSurface, Host, SurfaceOptions};
pub use input::{PointerEvent, PointerSample, PointerSource, StrokePhase};
pub use indextree::NodeId;
pub use stroke::StrokePath;
pub use style::StyleMap;
