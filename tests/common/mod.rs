//! Recording fakes for the window system and the graphics device.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use draw_circle::colors::Rgba;
use draw_circle::config::Config;
use draw_circle::controller::WindowController;
use draw_circle::dispatch::{MessageHandler, Response};
use draw_circle::error::{GraphicsError, GraphicsResult};
use draw_circle::event::{Message, ModifierKeys};
use draw_circle::platform::{Platform, PlatformError};
use draw_circle::resources::GraphicsBackend;
use draw_circle::shape::{Ellipse, PixelSize};

#[derive(Debug, Default)]
pub struct FakePlatform {
    pub size: PixelSize,
    pub invalidations: u32,
    pub paints_begun: u32,
    pub paints_ended: u32,
    pub captured: bool,
    pub capture_calls: u32,
    pub release_calls: u32,
    pub track_calls: u32,
    pub fail_tracking: bool,
    pub titles: Vec<String>,
    pub quit: Option<i32>,
}

impl FakePlatform {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { size: PixelSize::new(width, height), ..Default::default() }
    }
}

impl Platform for FakePlatform {
    fn client_size(&self) -> PixelSize {
        self.size
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn begin_paint(&mut self) {
        self.paints_begun += 1;
    }

    fn end_paint(&mut self) {
        self.paints_ended += 1;
    }

    fn set_capture(&mut self) {
        self.capture_calls += 1;
        self.captured = true;
    }

    fn release_capture(&mut self) {
        self.release_calls += 1;
        self.captured = false;
    }

    fn track_hover_and_leave(&mut self) -> Result<(), PlatformError> {
        self.track_calls += 1;
        if self.fail_tracking {
            Err(PlatformError::new("TrackMouseEvent", "access denied"))
        } else {
            Ok(())
        }
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn post_quit(&mut self, exit_code: i32) {
        self.quit = Some(exit_code);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Begin,
    Clear(Rgba),
    Fill(Ellipse, Rgba),
    End,
}

/// Render target whose lifetime is visible through a shared counter.
pub struct FakeTarget {
    pub size: PixelSize,
    live: Rc<Cell<i32>>,
}

impl Drop for FakeTarget {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

pub struct FakeBrush {
    pub color: Rgba,
    live: Rc<Cell<i32>>,
}

impl Drop for FakeBrush {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub dpi: Option<(f32, f32)>,
    pub fail_initialize: bool,
    pub initialized: bool,
    /// Upcoming `create_target` calls that fail
    pub fail_targets: u32,
    /// Upcoming `create_brush` calls that fail
    pub fail_brushes: u32,
    /// Upcoming `end_draw` calls that report device loss
    pub lose_device: u32,
    pub fail_resize: bool,
    pub targets_created: u32,
    pub brushes_created: u32,
    pub created_sizes: Vec<PixelSize>,
    pub resized_to: Vec<PixelSize>,
    pub calls: Vec<DrawCall>,
    pub live_targets: Rc<Cell<i32>>,
    pub live_brushes: Rc<Cell<i32>>,
}

impl FakeBackend {
    pub fn with_dpi(dpi_x: f32, dpi_y: f32) -> Self {
        Self { dpi: Some((dpi_x, dpi_y)), ..Default::default() }
    }

    pub fn frames_drawn(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::End).count()
    }
}

impl GraphicsBackend for FakeBackend {
    type Target = FakeTarget;
    type Brush = FakeBrush;

    fn initialize(&mut self) -> GraphicsResult<()> {
        if self.fail_initialize {
            return Err(GraphicsError::Factory("no Direct2D".into()));
        }
        self.initialized = true;
        Ok(())
    }

    fn desktop_dpi(&self) -> Option<(f32, f32)> {
        self.dpi
    }

    fn create_target(&mut self, size: PixelSize) -> GraphicsResult<FakeTarget> {
        if self.fail_targets > 0 {
            self.fail_targets -= 1;
            return Err(GraphicsError::CreateTarget("no adapter".into()));
        }
        self.targets_created += 1;
        self.created_sizes.push(size);
        self.live_targets.set(self.live_targets.get() + 1);
        Ok(FakeTarget { size, live: self.live_targets.clone() })
    }

    fn create_brush(&mut self, _target: &FakeTarget, color: Rgba) -> GraphicsResult<FakeBrush> {
        if self.fail_brushes > 0 {
            self.fail_brushes -= 1;
            return Err(GraphicsError::CreateBrush("out of memory".into()));
        }
        self.brushes_created += 1;
        self.live_brushes.set(self.live_brushes.get() + 1);
        Ok(FakeBrush { color, live: self.live_brushes.clone() })
    }

    fn resize_target(&mut self, _target: &FakeTarget, size: PixelSize) -> GraphicsResult<()> {
        if self.fail_resize {
            return Err(GraphicsError::Resize("bad size".into()));
        }
        self.resized_to.push(size);
        Ok(())
    }

    fn begin_draw(&mut self, _target: &FakeTarget) {
        self.calls.push(DrawCall::Begin);
    }

    fn clear(&mut self, _target: &FakeTarget, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_ellipse(&mut self, _target: &FakeTarget, ellipse: &Ellipse, brush: &FakeBrush) {
        self.calls.push(DrawCall::Fill(*ellipse, brush.color));
    }

    fn end_draw(&mut self, _target: &FakeTarget) -> GraphicsResult<()> {
        if self.lose_device > 0 {
            self.lose_device -= 1;
            return Err(GraphicsError::DeviceLost);
        }
        self.calls.push(DrawCall::End);
        Ok(())
    }
}

/// Controller with the default configuration, already past `WM_CREATE`.
pub fn created(backend: FakeBackend, platform: &mut FakePlatform) -> WindowController<FakeBackend> {
    created_with(&Config::default(), backend, platform)
}

pub fn created_with(
    config: &Config,
    backend: FakeBackend,
    platform: &mut FakePlatform,
) -> WindowController<FakeBackend> {
    let mut controller = WindowController::new(config, backend);
    assert_eq!(controller.handle(platform, Message::Create), Response::Handled);
    controller
}

pub fn press(x: i32, y: i32) -> Message {
    Message::LeftButtonDown { x, y, keys: ModifierKeys::LBUTTON }
}

pub fn drag(x: i32, y: i32) -> Message {
    Message::MouseMove { x, y, keys: ModifierKeys::LBUTTON }
}

pub fn hover_move(x: i32, y: i32) -> Message {
    Message::MouseMove { x, y, keys: ModifierKeys::empty() }
}

pub fn release(x: i32, y: i32) -> Message {
    Message::LeftButtonUp { x, y, keys: ModifierKeys::empty() }
}
