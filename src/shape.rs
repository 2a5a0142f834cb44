//! Geometry for the single drawable ellipse.

/// Smallest radius given to a freshly pressed ellipse so it shows as a dot.
pub const MIN_RADIUS: f32 = 1.0;

/// A point in device-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Ellipse defined by its centre and signed radii, in DIPs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Ellipse {
    pub const fn new(center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self { center, radius_x, radius_y }
    }

    /// A dot of `MIN_RADIUS` at `center`.
    pub const fn dot(center: Point) -> Self {
        Self::new(center, MIN_RADIUS, MIN_RADIUS)
    }

    /// Ellipse inscribed in the box spanned by `anchor` and `corner`.
    ///
    /// Radii keep the sign of the displacement, so dragging up or left of the
    /// anchor yields negative radii. A zero half-extent becomes `MIN_RADIUS`.
    pub fn from_corners(anchor: Point, corner: Point) -> Self {
        let half_width = (corner.x - anchor.x) / 2.0;
        let half_height = (corner.y - anchor.y) / 2.0;
        Self {
            center: Point::new(anchor.x + half_width, anchor.y + half_height),
            radius_x: non_zero(half_width),
            radius_y: non_zero(half_height),
        }
    }

    /// Same ellipse with both radii made non-negative.
    pub fn normalized(self) -> Self {
        Self {
            radius_x: self.radius_x.abs(),
            radius_y: self.radius_y.abs(),
            ..self
        }
    }
}

fn non_zero(half_extent: f32) -> f32 {
    if half_extent == 0.0 {
        MIN_RADIUS
    } else {
        half_extent
    }
}

/// Client-area size in physical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_down_right() {
        let e = Ellipse::from_corners(Point::new(100.0, 100.0), Point::new(200.0, 150.0));
        assert_eq!(e.center, Point::new(150.0, 125.0));
        assert_eq!((e.radius_x, e.radius_y), (50.0, 25.0));
    }

    #[test]
    fn test_from_corners_keeps_sign() {
        let e = Ellipse::from_corners(Point::new(100.0, 100.0), Point::new(50.0, 50.0));
        assert_eq!(e.center, Point::new(75.0, 75.0));
        assert_eq!((e.radius_x, e.radius_y), (-25.0, -25.0));
    }

    #[test]
    fn test_zero_extent_is_a_dot() {
        let a = Point::new(10.0, 20.0);
        assert_eq!(Ellipse::from_corners(a, a), Ellipse::dot(a));

        let line = Ellipse::from_corners(a, Point::new(30.0, 20.0));
        assert_eq!((line.radius_x, line.radius_y), (10.0, MIN_RADIUS));
    }

    #[test]
    fn test_normalized() {
        let e = Ellipse::new(Point::new(1.0, 2.0), -3.0, 4.0).normalized();
        assert_eq!(e, Ellipse::new(Point::new(1.0, 2.0), 3.0, 4.0));
    }
}
