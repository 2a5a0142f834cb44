//! # DPI Scaling
//!
//! Mouse messages report physical pixels while Direct2D draws in
//! device-independent pixels (DIPs, 1/96 inch). `DpiScale` is built once when
//! the window is created and handed to whoever converts coordinates.

use crate::shape::Point;

/// Density Windows treats as 100% scaling.
pub const REFERENCE_DPI: f32 = 96.0;

/// Immutable pixel → DIP conversion factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpiScale {
    scale_x: f32,
    scale_y: f32,
}

impl Default for DpiScale {
    fn default() -> Self {
        Self::identity()
    }
}

impl DpiScale {
    /// 1 pixel == 1 DIP on both axes.
    pub const fn identity() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0 }
    }

    /// Build from the dots-per-inch reported by the display.
    ///
    /// An axis whose density is zero, negative or not finite keeps a scale of 1.0.
    pub fn from_dpi(dpi_x: f32, dpi_y: f32) -> Self {
        Self {
            scale_x: axis_scale(dpi_x),
            scale_y: axis_scale(dpi_y),
        }
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    /// Convert a physical pixel coordinate to DIPs.
    pub fn to_dips(&self, pixel_x: i32, pixel_y: i32) -> Point {
        Point::new(pixel_x as f32 / self.scale_x, pixel_y as f32 / self.scale_y)
    }
}

fn axis_scale(dpi: f32) -> f32 {
    if dpi.is_finite() && dpi > 0.0 {
        dpi / REFERENCE_DPI
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dpi_is_identity() {
        assert_eq!(DpiScale::from_dpi(96.0, 96.0), DpiScale::identity());
    }

    #[test]
    fn test_high_dpi_halves_coordinates() {
        let scale = DpiScale::from_dpi(192.0, 144.0);
        let p = scale.to_dips(200, 300);
        assert!((p.x - 100.0).abs() < 0.001);
        assert!((p.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_invalid_dpi_falls_back_per_axis() {
        let scale = DpiScale::from_dpi(0.0, f32::NAN);
        assert_eq!(scale, DpiScale::identity());

        let scale = DpiScale::from_dpi(120.0, -5.0);
        assert!((scale.scale_x() - 1.25).abs() < 0.001);
        assert!((scale.scale_y() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_identity_is_linear() {
        let scale = DpiScale::identity();
        for &(x, y) in &[(0, 0), (3, -7), (640, 480), (-1200, 55)] {
            for k in [-2, 1, 3, 10] {
                let scaled = scale.to_dips(k * x, k * y);
                let base = scale.to_dips(x, y);
                assert!((scaled.x - k as f32 * base.x).abs() < 0.001);
                assert!((scaled.y - k as f32 * base.y).abs() < 0.001);
            }
        }
    }

    #[test]
    fn test_monotonic_for_positive_scale() {
        let scale = DpiScale::from_dpi(144.0, 120.0);
        let mut prev = scale.to_dips(-500, -500);
        for v in -499..500 {
            let p = scale.to_dips(v, v);
            assert!(p.x > prev.x);
            assert!(p.y > prev.y);
            prev = p;
        }
    }
}
