//! The input boundary: tagged pointer samples.
//!
//! Host environments deliver mouse, touch and pen events in their own
//! types; an adapter at the boundary (see [`crate::egui_surface`] for the
//! shipped one) translates each into a [`PointerEvent`]. The core only
//! ever sees these variants — it never inspects host event types, and the
//! mouse/touch coordinate quirks are resolved from the `source` tag alone.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// What produced a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
    /// Stylus input. Follows the mouse coordinate policy: pens report
    /// reliable target-relative offsets, unlike touch.
    Pen,
}

/// One position report from the input device.
///
/// `offset` is relative to the target element's top-left; `client` is
/// relative to the viewport. Which one the controller trusts depends on
/// the source: offset coordinates are unreliable for touch input, so
/// touch resolution goes through `client` minus the surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub source: PointerSource,
    pub offset: Point,
    pub client: Point,
}

impl PointerSample {
    pub fn new(source: PointerSource, offset: Point, client: Point) -> Self {
        Self {
            source,
            offset,
            client,
        }
    }

    /// A mouse sample whose offset and client positions coincide (surface
    /// anchored at the viewport origin).
    pub fn mouse(x: f32, y: f32) -> Self {
        let p = Point::new(x, y);
        Self::new(PointerSource::Mouse, p, p)
    }

    /// A touch sample carrying viewport coordinates only; the offset
    /// field is a zero placeholder that the controller never reads for
    /// this source.
    pub fn touch(client_x: f32, client_y: f32) -> Self {
        Self::new(
            PointerSource::Touch,
            Point::default(),
            Point::new(client_x, client_y),
        )
    }
}

/// Where in a stroke the sample falls.
///
/// `End` covers release, the pointer leaving the target and cancellation
/// alike — every way a stroke can stop is an end-of-stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokePhase {
    Start,
    Move,
    End,
}

/// A stroke-phase-tagged pointer sample, the only input the controller
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: StrokePhase,
    pub sample: PointerSample,
}

impl PointerEvent {
    pub fn new(phase: StrokePhase, sample: PointerSample) -> Self {
        Self { phase, sample }
    }
}
