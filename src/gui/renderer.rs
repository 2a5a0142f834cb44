//! # Direct2D Renderer
//!
//! `GraphicsBackend` over a Direct2D factory and an HWND render target.
//! The factory is device-independent and lives as long as the window; the
//! render target and brush are recreated by the resource manager after
//! device loss.

use windows::{
    core::HRESULT,
    Win32::{
        Foundation::HWND,
        Graphics::Direct2D::{
            Common::{D2D1_COLOR_F, D2D_POINT_2F, D2D_SIZE_U},
            D2D1CreateFactory, ID2D1Factory, ID2D1HwndRenderTarget, ID2D1SolidColorBrush,
            D2D1_ELLIPSE, D2D1_FACTORY_TYPE_SINGLE_THREADED, D2D1_HWND_RENDER_TARGET_PROPERTIES,
            D2D1_PRESENT_OPTIONS_NONE, D2D1_RENDER_TARGET_PROPERTIES,
        },
    },
};

use crate::colors::Rgba;
use crate::error::{GraphicsError, GraphicsResult};
use crate::resources::GraphicsBackend;
use crate::shape::{Ellipse, PixelSize};

const D2DERR_RECREATE_TARGET: HRESULT = HRESULT(0x8899_000C_u32 as i32);

pub struct Direct2D {
    factory: Option<ID2D1Factory>,
    hwnd: HWND,
}

impl Direct2D {
    /// Backend for `hwnd`. The factory is created by `initialize`.
    pub fn new(hwnd: HWND) -> Self {
        Self { factory: None, hwnd }
    }
}

fn to_d2d_color(color: Rgba) -> D2D1_COLOR_F {
    D2D1_COLOR_F { r: color.r, g: color.g, b: color.b, a: color.a }
}

fn to_d2d_size(size: PixelSize) -> D2D_SIZE_U {
    D2D_SIZE_U { width: size.width, height: size.height }
}

fn to_d2d_ellipse(ellipse: &Ellipse) -> D2D1_ELLIPSE {
    D2D1_ELLIPSE {
        point: D2D_POINT_2F { x: ellipse.center.x, y: ellipse.center.y },
        radiusX: ellipse.radius_x,
        radiusY: ellipse.radius_y,
    }
}

impl GraphicsBackend for Direct2D {
    type Target = ID2D1HwndRenderTarget;
    type Brush = ID2D1SolidColorBrush;

    fn initialize(&mut self) -> GraphicsResult<()> {
        if self.factory.is_none() {
            let factory: ID2D1Factory =
                unsafe { D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None) }
                    .map_err(|e| GraphicsError::Factory(e.to_string()))?;
            self.factory = Some(factory);
        }
        Ok(())
    }

    fn desktop_dpi(&self) -> Option<(f32, f32)> {
        let factory = self.factory.as_ref()?;
        let (mut dpi_x, mut dpi_y) = (0.0f32, 0.0f32);
        unsafe { factory.GetDesktopDpi(&mut dpi_x, &mut dpi_y) };
        Some((dpi_x, dpi_y))
    }

    fn create_target(&mut self, size: PixelSize) -> GraphicsResult<Self::Target> {
        let render_target_properties = D2D1_RENDER_TARGET_PROPERTIES::default();
        let hwnd_render_target_properties = D2D1_HWND_RENDER_TARGET_PROPERTIES {
            hwnd: self.hwnd,
            pixelSize: to_d2d_size(size),
            presentOptions: D2D1_PRESENT_OPTIONS_NONE,
        };

        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| GraphicsError::CreateTarget("factory not initialized".into()))?;
        unsafe {
            factory
                .CreateHwndRenderTarget(&render_target_properties, &hwnd_render_target_properties)
        }
        .map_err(|e| GraphicsError::CreateTarget(e.to_string()))
    }

    fn create_brush(&mut self, target: &Self::Target, color: Rgba) -> GraphicsResult<Self::Brush> {
        unsafe { target.CreateSolidColorBrush(&to_d2d_color(color), None) }
            .map_err(|e| GraphicsError::CreateBrush(e.to_string()))
    }

    fn resize_target(&mut self, target: &Self::Target, size: PixelSize) -> GraphicsResult<()> {
        unsafe { target.Resize(&to_d2d_size(size)) }.map_err(|e| GraphicsError::Resize(e.to_string()))
    }

    fn begin_draw(&mut self, target: &Self::Target) {
        unsafe { target.BeginDraw() };
    }

    fn clear(&mut self, target: &Self::Target, color: Rgba) {
        unsafe { target.Clear(Some(&to_d2d_color(color))) };
    }

    fn fill_ellipse(&mut self, target: &Self::Target, ellipse: &Ellipse, brush: &Self::Brush) {
        unsafe { target.FillEllipse(&to_d2d_ellipse(ellipse), brush) };
    }

    fn end_draw(&mut self, target: &Self::Target) -> GraphicsResult<()> {
        unsafe { target.EndDraw(None, None) }.map_err(|e| {
            if e.code() == D2DERR_RECREATE_TARGET {
                GraphicsError::DeviceLost
            } else {
                GraphicsError::Draw(e.to_string())
            }
        })
    }
}
