//! # Window Controller
//!
//! Reacts to decoded window messages: mouse input reshapes the ellipse,
//! paint and resize drive the graphics resources, destroy ends the loop.
//! Every handler runs to completion on the UI thread before the next message.

use tracing::{debug, error, info, trace, warn};

use crate::config::Config;
use crate::dispatch::{MessageHandler, Response};
use crate::dpi::DpiScale;
use crate::drag::DragController;
use crate::event::{Message, ModifierKeys};
use crate::hover::HoverTracker;
use crate::platform::Platform;
use crate::resources::{GraphicsBackend, GraphicsResources, PaintOutcome};
use crate::shape::PixelSize;

/// Appended to the window title while rendering is degraded.
pub const DEGRADED_TITLE_SUFFIX: &str = " (rendering unavailable)";

pub struct WindowController<B: GraphicsBackend> {
    title: String,
    scale: DpiScale,
    drag: DragController,
    hover: HoverTracker,
    graphics: GraphicsResources<B>,
}

impl<B: GraphicsBackend> WindowController<B> {
    pub fn new(config: &Config, backend: B) -> Self {
        Self {
            title: config.title.clone(),
            scale: DpiScale::identity(),
            drag: DragController::new(config.normalize_radii),
            hover: HoverTracker::new(),
            graphics: GraphicsResources::new(backend, config.palette, config.retry_limit),
        }
    }

    pub fn scale(&self) -> DpiScale {
        self.scale
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn hover(&self) -> &HoverTracker {
        &self.hover
    }

    pub fn graphics(&self) -> &GraphicsResources<B> {
        &self.graphics
    }

    pub fn graphics_mut(&mut self) -> &mut GraphicsResources<B> {
        &mut self.graphics
    }

    fn on_create(&mut self) -> Response {
        if let Err(err) = self.graphics.backend_mut().initialize() {
            error!(%err, "graphics unavailable, refusing window creation");
            return Response::Fail;
        }

        self.scale = match self.graphics.backend().desktop_dpi() {
            Some((dpi_x, dpi_y)) => DpiScale::from_dpi(dpi_x, dpi_y),
            None => {
                debug!("desktop DPI unavailable, using 1:1 scale");
                DpiScale::identity()
            }
        };
        info!(scale_x = self.scale.scale_x(), scale_y = self.scale.scale_y(), "window created");
        Response::Handled
    }

    fn on_destroy(&mut self, platform: &mut dyn Platform) {
        self.graphics.discard();
        platform.post_quit(0);
    }

    fn on_paint(&mut self, platform: &mut dyn Platform) {
        let was_degraded = self.graphics.is_degraded();

        platform.begin_paint();
        let outcome = self.graphics.paint(&self.drag.ellipse(), platform.client_size());
        platform.end_paint();

        if let PaintOutcome::Skipped(_) | PaintOutcome::Discarded(_) = outcome {
            if !self.graphics.is_degraded() {
                platform.invalidate();
            }
        }

        match (was_degraded, self.graphics.is_degraded()) {
            (false, true) => platform.set_title(&format!("{}{}", self.title, DEGRADED_TITLE_SUFFIX)),
            (true, false) => platform.set_title(&self.title),
            _ => {}
        }
    }

    fn on_resize(&mut self, platform: &mut dyn Platform, size: PixelSize) {
        match self.graphics.resize(size) {
            Ok(true) => platform.invalidate(),
            Ok(false) => {}
            Err(err) => {
                warn!(%err, width = size.width, height = size.height, "resize failed");
                platform.invalidate();
            }
        }
    }

    fn on_left_button_down(&mut self, platform: &mut dyn Platform, x: i32, y: i32) {
        platform.set_capture();
        self.drag.press(self.scale.to_dips(x, y));
        platform.invalidate();
    }

    fn on_left_button_up(&mut self, platform: &mut dyn Platform) {
        // Released before the capture so a re-entrant capture-changed finds nothing to end.
        self.drag.release();
        platform.release_capture();
    }

    fn on_mouse_move(&mut self, platform: &mut dyn Platform, x: i32, y: i32, keys: ModifierKeys) {
        if self.drag.drag_to(self.scale.to_dips(x, y), keys.primary_down()) {
            platform.invalidate();
        }
        self.hover.on_mouse_move(platform);
    }
}

impl<B: GraphicsBackend> MessageHandler for WindowController<B> {
    fn handle(&mut self, platform: &mut dyn Platform, message: Message) -> Response {
        match message {
            Message::Create => return self.on_create(),
            Message::Destroy => self.on_destroy(platform),
            Message::Paint => self.on_paint(platform),
            Message::Resize(size) => self.on_resize(platform, size),
            Message::LeftButtonDown { x, y, .. } => self.on_left_button_down(platform, x, y),
            Message::LeftButtonUp { .. } => self.on_left_button_up(platform),
            Message::MouseMove { x, y, keys } => self.on_mouse_move(platform, x, y, keys),
            Message::MouseWheel { delta, .. } => trace!(delta, "mouse wheel"),
            Message::MouseHover | Message::MouseLeave => self.hover.reset(),
            Message::CaptureChanged => {
                if self.drag.release() {
                    debug!("mouse capture lost, drag ended");
                }
            }
        }
        Response::Handled
    }
}
