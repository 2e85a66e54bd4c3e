//! Recording fakes for the host collaborator traits, shared by the
//! integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lassotext::{
    BoundingRect, Document, DrawSurface, Host, LineStyle, NodeId, Point, SurfaceOptions,
};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize(f32, f32),
    SetLineStyle(LineStyle),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Rect(BoundingRect),
    Stroke,
    Clear,
}

/// A surface that records every call into a log shared with the host.
pub struct MockSurface {
    origin: Point,
    ops: Rc<RefCell<Vec<SurfaceOp>>>,
}

impl DrawSurface for MockSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.ops.borrow_mut().push(SurfaceOp::Resize(width, height));
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.ops
            .borrow_mut()
            .push(SurfaceOp::SetLineStyle(style.clone()));
    }

    fn begin_path(&mut self) {
        self.ops.borrow_mut().push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.borrow_mut().push(SurfaceOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.borrow_mut().push(SurfaceOp::LineTo(point));
    }

    fn rect(&mut self, rect: BoundingRect) {
        self.ops.borrow_mut().push(SurfaceOp::Rect(rect));
    }

    fn stroke(&mut self) {
        self.ops.borrow_mut().push(SurfaceOp::Stroke);
    }

    fn clear(&mut self) {
        self.ops.borrow_mut().push(SurfaceOp::Clear);
    }
}

/// A host with a fixed viewport, a hand-assigned layout table and a
/// shared view of the mounted surface's operation log.
pub struct MockHost {
    pub viewport: (f32, f32),
    pub surface_origin: Point,
    pub boxes: HashMap<NodeId, BoundingRect>,
    pub ops: Rc<RefCell<Vec<SurfaceOp>>>,
    pub mounted: u32,
    pub unmounted: u32,
    pub scroll_locked: bool,
    pub last_options: Option<SurfaceOptions>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            viewport: (800.0, 600.0),
            surface_origin: Point::default(),
            boxes: HashMap::new(),
            ops: Rc::new(RefCell::new(Vec::new())),
            mounted: 0,
            unmounted: 0,
            scroll_locked: false,
            last_options: None,
        }
    }

    /// Assign a viewport-relative layout box to an element.
    pub fn place(&mut self, element: NodeId, rect: BoundingRect) {
        self.boxes.insert(element, rect);
    }

    pub fn recorded_ops(&self) -> Vec<SurfaceOp> {
        self.ops.borrow().clone()
    }

    pub fn clear_ops(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl Host for MockHost {
    type Surface = MockSurface;

    fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn mount_surface(&mut self, options: &SurfaceOptions) -> MockSurface {
        self.mounted += 1;
        self.last_options = Some(options.clone());
        MockSurface {
            origin: self.surface_origin,
            ops: Rc::clone(&self.ops),
        }
    }

    fn unmount_surface(&mut self, _surface: MockSurface) {
        self.unmounted += 1;
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn element_box(&self, _doc: &Document, element: NodeId) -> Option<BoundingRect> {
        self.boxes.get(&element).copied()
    }
}

/// A document shaped `<body><div><p>text</p></div></body>`; returns the
/// document and the container div.
pub fn paragraph_doc(text: &str) -> (Document, NodeId) {
    let mut doc = Document::new("body");
    let container = doc.create_element("div");
    let para = doc.create_element("p");
    let content = doc.create_text(text);
    doc.append_child(para, content);
    doc.append_child(container, para);
    doc.append_child(doc.root(), container);
    (doc, container)
}
