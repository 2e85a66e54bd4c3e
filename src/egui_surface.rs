//! egui integration: a retained-shape [`DrawSurface`] and the adapter
//! from raw `egui::Event`s to [`PointerEvent`]s.
//!
//! egui repaints from scratch every frame, so the surface keeps the
//! canvas-style operations in a retained [`egui::Shape`] buffer that the
//! host paints each frame via [`EguiSurface::paint`]. Stroking is
//! idempotent per path: re-stroking the growing path of an active lasso
//! replaces its previous rendering instead of stacking translucent
//! copies.

use egui::{Color32, Pos2, Shape, Stroke, StrokeKind};
use log::trace;

use crate::config::{LineCap, LineStyle};
use crate::geometry::{BoundingRect, Point};
use crate::host::DrawSurface;
use crate::input::{PointerEvent, PointerSample, PointerSource, StrokePhase};

/// Stroke color used when the configured color string is empty or does
/// not parse.
pub const FALLBACK_STROKE_COLOR: Color32 = Color32::from_rgb(0x1f, 0x6f, 0xeb);

fn pos(p: Point) -> Pos2 {
    Pos2::new(p.x, p.y)
}

/// One subpath of the current path.
#[derive(Debug, Clone)]
enum SubPath {
    Line(Vec<Pos2>),
    Rect(egui::Rect),
}

/// A [`DrawSurface`] backed by retained egui shapes.
pub struct EguiSurface {
    origin: Point,
    width: f32,
    height: f32,
    stroke: Stroke,
    cap: LineCap,
    path: Vec<SubPath>,
    painted: Vec<Shape>,
    /// Start index in `painted` of the current path's rendering, once it
    /// has been stroked.
    path_paint_start: Option<usize>,
}

impl EguiSurface {
    /// Surface anchored at `origin` (viewport coordinates) with the
    /// given size.
    pub fn new(origin: Point, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
            stroke: Stroke::new(1.0, FALLBACK_STROKE_COLOR),
            cap: LineCap::Round,
            path: Vec::new(),
            painted: Vec::new(),
            path_paint_start: None,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// The retained shapes, in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.painted
    }

    /// Paint the retained shapes onto an egui painter. Call once per
    /// frame.
    pub fn paint(&self, painter: &egui::Painter) {
        painter.extend(self.painted.iter().cloned());
    }

    fn render_current_path(&self) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for sub in &self.path {
            match sub {
                SubPath::Line(points) => {
                    if points.len() >= 2 {
                        shapes.push(Shape::line(points.clone(), self.stroke));
                    }
                    if self.cap == LineCap::Round {
                        // PathStroke has no cap control; approximate
                        // round caps with end dots.
                        for p in [points.first(), points.last()].into_iter().flatten() {
                            shapes.push(Shape::circle_filled(
                                *p,
                                self.stroke.width / 2.0,
                                self.stroke.color,
                            ));
                        }
                    }
                }
                SubPath::Rect(rect) => {
                    shapes.push(Shape::rect_stroke(
                        *rect,
                        egui::CornerRadius::ZERO,
                        self.stroke,
                        StrokeKind::Middle,
                    ));
                }
            }
        }
        shapes
    }
}

impl DrawSurface for EguiSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        // A canvas resize clears the backing store.
        self.painted.clear();
        self.path_paint_start = None;
        trace!("surface resized to {width}x{height}");
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        let color = csscolorparser::parse(&style.color)
            .map(|c| {
                let [r, g, b, a] = c.to_rgba8();
                Color32::from_rgba_unmultiplied(r, g, b, a)
            })
            .unwrap_or(FALLBACK_STROKE_COLOR);
        self.stroke = Stroke::new(style.width, color);
        self.cap = style.cap;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.path_paint_start = None;
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(SubPath::Line(vec![pos(point)]));
    }

    fn line_to(&mut self, point: Point) {
        match self.path.last_mut() {
            Some(SubPath::Line(points)) => points.push(pos(point)),
            // line_to without a preceding move_to starts a subpath at
            // the target point.
            _ => self.path.push(SubPath::Line(vec![pos(point)])),
        }
    }

    fn rect(&mut self, rect: BoundingRect) {
        self.path.push(SubPath::Rect(egui::Rect::from_min_size(
            Pos2::new(rect.left, rect.top),
            egui::Vec2::new(rect.width, rect.height),
        )));
    }

    fn stroke(&mut self) {
        match self.path_paint_start {
            Some(start) => self.painted.truncate(start),
            None => self.path_paint_start = Some(self.painted.len()),
        }
        let rendered = self.render_current_path();
        self.painted.extend(rendered);
    }

    fn clear(&mut self) {
        self.painted.clear();
        self.path_paint_start = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Translate raw egui input events into [`PointerEvent`]s.
///
/// `target_rect` is the viewport-relative rectangle of the element the
/// lasso is attached to; offsets are computed against its top-left.
/// Primary-button presses and releases become stroke starts and ends,
/// `PointerGone` ends a stroke the way a pointer-out does, and touch
/// phases map one-to-one (cancel included — every way a stroke can stop
/// is an end).
pub fn pointer_events(target_rect: egui::Rect, events: &[egui::Event]) -> Vec<PointerEvent> {
    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                let phase = if *pressed {
                    StrokePhase::Start
                } else {
                    StrokePhase::End
                };
                out.push(PointerEvent::new(phase, mouse_sample(*pos, target_rect)));
            }
            egui::Event::PointerMoved(pos) => {
                out.push(PointerEvent::new(
                    StrokePhase::Move,
                    mouse_sample(*pos, target_rect),
                ));
            }
            egui::Event::PointerGone => {
                out.push(PointerEvent::new(
                    StrokePhase::End,
                    mouse_sample(target_rect.min, target_rect),
                ));
            }
            egui::Event::Touch { pos, phase, .. } => {
                let phase = match phase {
                    egui::TouchPhase::Start => StrokePhase::Start,
                    egui::TouchPhase::Move => StrokePhase::Move,
                    egui::TouchPhase::End | egui::TouchPhase::Cancel => StrokePhase::End,
                };
                out.push(PointerEvent::new(
                    phase,
                    PointerSample::new(
                        PointerSource::Touch,
                        Point::new(pos.x - target_rect.min.x, pos.y - target_rect.min.y),
                        Point::new(pos.x, pos.y),
                    ),
                ));
            }
            _ => {}
        }
    }
    out
}

fn mouse_sample(p: Pos2, target_rect: egui::Rect) -> PointerSample {
    PointerSample::new(
        PointerSource::Mouse,
        Point::new(p.x - target_rect.min.x, p.y - target_rect.min.y),
        Point::new(p.x, p.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(width: f32, color: &str) -> LineStyle {
        LineStyle {
            width,
            cap: LineCap::Butt,
            color: color.to_string(),
        }
    }

    #[test]
    fn restroking_the_same_path_does_not_accumulate() {
        let mut surface = EguiSurface::new(Point::default(), 100.0, 100.0);
        surface.set_line_style(&style(2.0, "red"));
        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(10.0, 0.0));
        surface.stroke();
        let after_first = surface.shapes().len();
        surface.line_to(Point::new(20.0, 0.0));
        surface.stroke();
        assert_eq!(surface.shapes().len(), after_first);
    }

    #[test]
    fn unparsable_color_falls_back() {
        let mut surface = EguiSurface::new(Point::default(), 10.0, 10.0);
        surface.set_line_style(&style(1.0, "definitely-not-a-color"));
        assert_eq!(surface.stroke.color, FALLBACK_STROKE_COLOR);
    }

    #[test]
    fn clear_drops_all_shapes() {
        let mut surface = EguiSurface::new(Point::default(), 10.0, 10.0);
        surface.set_line_style(&style(1.0, "#00ff00"));
        surface.begin_path();
        surface.rect(BoundingRect::new(1.0, 1.0, 5.0, 5.0));
        surface.stroke();
        assert!(!surface.shapes().is_empty());
        surface.clear();
        assert!(surface.shapes().is_empty());
    }

    #[test]
    fn touch_events_map_to_touch_source() {
        let target = egui::Rect::from_min_size(Pos2::new(10.0, 10.0), egui::Vec2::new(100.0, 100.0));
        let events = vec![egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(1),
            phase: egui::TouchPhase::Start,
            pos: Pos2::new(30.0, 40.0),
            force: None,
        }];
        let mapped = pointer_events(target, &events);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].phase, StrokePhase::Start);
        assert_eq!(mapped[0].sample.source, PointerSource::Touch);
        assert_eq!(mapped[0].sample.client, Point::new(30.0, 40.0));
        assert_eq!(mapped[0].sample.offset, Point::new(20.0, 30.0));
    }
}
