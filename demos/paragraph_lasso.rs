//! Lasso words out of a paragraph.
//!
//! Minimal eframe host: it renders a document's word-units as labels,
//! reports their layout boxes back to the controller's host trait, feeds
//! raw egui input through the pointer adapter and repaints the retained
//! surface shapes every frame.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use eframe::egui;
use lassotext::{
    pointer_events, unitizer, BoundingRect, Document, EguiSurface, Host, NodeId, Phase, Point,
    SelectionController, SurfaceOptions,
};

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog while \
                         a curious cat watches from the warm windowsill";

struct DemoHost {
    viewport: (f32, f32),
    boxes: HashMap<NodeId, BoundingRect>,
    scroll_locked: bool,
}

impl Host for DemoHost {
    type Surface = EguiSurface;

    fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn mount_surface(&mut self, options: &SurfaceOptions) -> EguiSurface {
        EguiSurface::new(Point::default(), options.width, options.height)
    }

    fn unmount_surface(&mut self, _surface: EguiSurface) {}

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn element_box(&self, _doc: &Document, element: NodeId) -> Option<BoundingRect> {
        self.boxes.get(&element).copied()
    }
}

struct DemoApp {
    doc: Document,
    container: NodeId,
    host: DemoHost,
    controller: SelectionController<DemoHost>,
    last_text: Rc<RefCell<Option<String>>>,
    prev_viewport: (f32, f32),
}

impl DemoApp {
    fn new() -> Self {
        let mut doc = Document::new("body");
        let container = doc.create_element("div");
        let para = doc.create_element("p");
        let text = doc.create_text(PARAGRAPH);
        doc.append_child(para, text);
        doc.append_child(container, para);
        doc.append_child(doc.root(), container);
        Self {
            doc,
            container,
            host: DemoHost {
                viewport: (0.0, 0.0),
                boxes: HashMap::new(),
                scroll_locked: false,
            },
            controller: SelectionController::new(),
            last_text: Rc::new(RefCell::new(None)),
            prev_viewport: (0.0, 0.0),
        }
    }

    fn start_lasso(&mut self) {
        self.controller
            .initialize(&mut self.host, &mut self.doc, self.container);
        let captured = Rc::clone(&self.last_text);
        self.controller.on_text(move |text| {
            *captured.borrow_mut() = text.map(str::to_string);
        });
    }

    fn finish_lasso(&mut self) {
        self.controller.finish_drawing(&mut self.host, &mut self.doc);
        self.host.boxes.clear();
        // Restoration swapped in the snapshot; re-resolve the container.
        self.container = self.doc.child_ids(self.doc.root())[0];
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        self.host.viewport = (screen.width(), screen.height());
        if self.host.viewport != self.prev_viewport {
            self.prev_viewport = self.host.viewport;
            self.controller.handle_viewport_resize(&self.host);
        }

        let active = self.controller.phase() != Phase::Inactive;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!active, egui::Button::new("Start lasso"))
                    .clicked()
                {
                    self.start_lasso();
                }
                if ui
                    .add_enabled(active, egui::Button::new("Finish"))
                    .clicked()
                {
                    self.finish_lasso();
                }
                if self.host.scroll_locked {
                    ui.label("(scrolling locked)");
                }
            });
            ui.separator();

            if active {
                let highlight_class = self.controller.config().highlight_class.clone();
                ui.horizontal_wrapped(|ui| {
                    for unit in unitizer::word_units(&self.doc, self.container) {
                        let word = self.doc.text_content(unit);
                        let mut rich = egui::RichText::new(word).size(18.0);
                        if self.doc.has_class(unit, &highlight_class) {
                            rich = rich
                                .background_color(egui::Color32::YELLOW)
                                .color(egui::Color32::BLACK);
                        }
                        let rect = ui.label(rich).rect;
                        self.host.boxes.insert(
                            unit,
                            BoundingRect::new(rect.min.x, rect.min.y, rect.width(), rect.height()),
                        );
                    }
                });
                ui.separator();
                match &*self.last_text.borrow() {
                    Some(text) => ui.label(format!("Selected: {text}")),
                    None => ui.label("Drag a lasso around some words."),
                };
            } else {
                ui.label(egui::RichText::new(self.doc.text_content(self.container)).size(18.0));
                ui.separator();
                ui.label("Press “Start lasso”, then drag across the paragraph.");
            }
        });

        if active {
            let events = ctx.input(|i| i.events.clone());
            for event in pointer_events(screen, &events) {
                self.controller
                    .handle_pointer(&self.host, &mut self.doc, event);
            }
            if let Some(surface) = self.controller.surface() {
                let painter = ctx.layer_painter(egui::LayerId::new(
                    egui::Order::Foreground,
                    egui::Id::new("lasso-surface"),
                ));
                surface.paint(&painter);
            }
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    eframe::run_native(
        "lassotext — paragraph lasso",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}
