//! # Graphics Resource Manager
//!
//! Device-dependent resources (render target and brush) are created lazily on
//! the first paint and dropped whenever the device is lost:
//!
//! ```text
//!            paint (create ok)
//!   Unready ───────────────────▶ Ready
//!      ▲                           │
//!      └──── discard / device lost ┘
//! ```
//!
//! Consecutive failed frames are counted. Below the retry limit the caller is
//! told to retry right away; at the limit the manager reports itself degraded
//! and stops asking for immediate retries until a frame succeeds.

use tracing::{debug, info, warn};

use crate::colors::Rgba;
use crate::error::{GraphicsError, GraphicsResult};
use crate::shape::{Ellipse, PixelSize};

/// Default number of failed frames in a row before entering degraded state.
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Graphics services used by the paint cycle.
///
/// The Direct2D shell is the production implementation. Brushes and targets
/// are released by dropping them.
pub trait GraphicsBackend {
    type Target;
    type Brush;

    /// Acquire the device-independent objects. Called once when the window is
    /// created; an error refuses the window.
    fn initialize(&mut self) -> GraphicsResult<()>;

    /// Horizontal and vertical desktop density, if the display reports it.
    fn desktop_dpi(&self) -> Option<(f32, f32)>;

    fn create_target(&mut self, size: PixelSize) -> GraphicsResult<Self::Target>;

    fn create_brush(&mut self, target: &Self::Target, color: Rgba) -> GraphicsResult<Self::Brush>;

    fn resize_target(&mut self, target: &Self::Target, size: PixelSize) -> GraphicsResult<()>;

    fn begin_draw(&mut self, target: &Self::Target);

    fn clear(&mut self, target: &Self::Target, color: Rgba);

    fn fill_ellipse(&mut self, target: &Self::Target, ellipse: &Ellipse, brush: &Self::Brush);

    /// Flush the batch. `GraphicsError::DeviceLost` means the target must be recreated.
    fn end_draw(&mut self, target: &Self::Target) -> GraphicsResult<()>;
}

struct RenderResources<B: GraphicsBackend> {
    target: B::Target,
    brush: B::Brush,
}

/// Result of one paint cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOutcome {
    /// The frame was drawn and presented.
    Drawn,
    /// Resources could not be created; nothing was drawn.
    Skipped(GraphicsError),
    /// The batch failed at end of draw and resources were discarded.
    Discarded(GraphicsError),
}

impl PaintOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, PaintOutcome::Drawn)
    }
}

/// Colours the paint cycle uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub fill: Rgba,
}

pub struct GraphicsResources<B: GraphicsBackend> {
    backend: B,
    resources: Option<RenderResources<B>>,
    palette: Palette,
    retry_limit: u32,
    consecutive_failures: u32,
    degraded: bool,
}

impl<B: GraphicsBackend> GraphicsResources<B> {
    pub fn new(backend: B, palette: Palette, retry_limit: u32) -> Self {
        Self {
            backend,
            resources: None,
            palette,
            retry_limit: retry_limit.max(1),
            consecutive_failures: 0,
            degraded: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_ready(&self) -> bool {
        self.resources.is_some()
    }

    /// True once `retry_limit` frames in a row have failed.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Create the render target and brush if they do not exist.
    pub fn ensure_ready(&mut self, size: PixelSize) -> GraphicsResult<()> {
        if self.resources.is_some() {
            return Ok(());
        }

        let target = self.backend.create_target(size)?;
        // A target without its brush is dropped here, leaving us Unready.
        let brush = self.backend.create_brush(&target, self.palette.fill)?;
        debug!(width = size.width, height = size.height, "graphics resources created");
        self.resources = Some(RenderResources { target, brush });
        Ok(())
    }

    /// Release the render target and brush.
    pub fn discard(&mut self) {
        if self.resources.take().is_some() {
            debug!("graphics resources discarded");
        }
    }

    /// Resize the render target in place.
    ///
    /// Returns `Ok(false)` when there is nothing to resize. A failed resize
    /// discards the resources so the next paint starts over.
    pub fn resize(&mut self, size: PixelSize) -> GraphicsResult<bool> {
        let Some(res) = &self.resources else {
            return Ok(false);
        };
        match self.backend.resize_target(&res.target, size) {
            Ok(()) => Ok(true),
            Err(err) => {
                self.discard();
                Err(err)
            }
        }
    }

    /// Run one paint cycle for `ellipse` on a surface of `size`.
    pub fn paint(&mut self, ellipse: &Ellipse, size: PixelSize) -> PaintOutcome {
        let outcome = self.draw_frame(ellipse, size);
        self.record(&outcome);
        outcome
    }

    fn draw_frame(&mut self, ellipse: &Ellipse, size: PixelSize) -> PaintOutcome {
        if let Err(err) = self.ensure_ready(size) {
            return PaintOutcome::Skipped(err);
        }
        let Some(res) = &self.resources else {
            return PaintOutcome::Skipped(GraphicsError::CreateTarget("no render target".into()));
        };

        self.backend.begin_draw(&res.target);
        self.backend.clear(&res.target, self.palette.background);
        self.backend.fill_ellipse(&res.target, ellipse, &res.brush);
        match self.backend.end_draw(&res.target) {
            Ok(()) => PaintOutcome::Drawn,
            Err(err) => {
                self.discard();
                PaintOutcome::Discarded(err)
            }
        }
    }

    fn record(&mut self, outcome: &PaintOutcome) {
        match outcome {
            PaintOutcome::Drawn => {
                if self.degraded {
                    info!(failures = self.consecutive_failures, "rendering recovered");
                }
                self.consecutive_failures = 0;
                self.degraded = false;
            }
            PaintOutcome::Skipped(err) | PaintOutcome::Discarded(err) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                if matches!(err, GraphicsError::DeviceLost) {
                    warn!("graphics device lost, resources will be recreated");
                } else {
                    warn!(%err, failures = self.consecutive_failures, "frame not drawn");
                }
                if !self.degraded && self.consecutive_failures >= self.retry_limit {
                    self.degraded = true;
                    warn!(limit = self.retry_limit, "rendering degraded, waiting for next repaint");
                }
            }
        }
    }
}
