//! Linear gradients and paints
//!
//! A gradient is defined by two points and an ordered list of color stops.
//! Any point on the canvas is projected onto the start->end axis; the
//! projection parameter picks the color, clamped to the first and last
//! stops outside the axis.

use super::color::Rgba;
use super::path::Point;

/// A color at a position along a gradient axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in [0, 1]
    pub offset: f32,
    pub color: Rgba,
}

/// Two-point linear gradient with ordered color stops
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Create a gradient with no stops
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Add a color stop
    ///
    /// Stops are kept sorted by offset; stops with equal offsets keep their
    /// insertion order. Offsets are clamped to [0, 1].
    pub fn add_stop(mut self, offset: f32, color: Rgba) -> Self {
        let offset = if offset.is_finite() { offset.clamp(0.0, 1.0) } else { 0.0 };
        let index = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(index, ColorStop { offset, color });
        self
    }

    #[cfg(test)]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Gradient parameter of a point: 0 at `start`, 1 at `end`, unclamped
    fn parameter(&self, p: Point) -> Option<f32> {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f32::EPSILON {
            return None;
        }
        Some(((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq)
    }

    /// Color of the gradient at a canvas point
    ///
    /// A gradient without stops is transparent. A degenerate gradient
    /// (start == end) paints its last stop everywhere.
    pub fn color_at(&self, p: Point) -> Rgba {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgba::new(0, 0, 0, 0.0),
        };

        let t = match self.parameter(p) {
            Some(t) => t,
            None => return last.color,
        };

        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }

        last.color
    }
}

/// How a stroke or fill is colored
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

impl Paint {
    /// Color at a canvas point
    pub fn color_at(&self, p: Point) -> Rgba {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear(gradient) => gradient.color_at(p),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Linear(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> LinearGradient {
        LinearGradient::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0))
            .add_stop(0.0, Rgba::new(0, 0, 0, 0.0))
            .add_stop(1.0, Rgba::new(200, 100, 0, 1.0))
    }

    #[test]
    fn test_endpoints_and_clamping() {
        let g = horizontal();
        assert_eq!(g.color_at(Point::new(0.0, 50.0)), Rgba::new(0, 0, 0, 0.0));
        assert_eq!(g.color_at(Point::new(100.0, -5.0)), Rgba::new(200, 100, 0, 1.0));
        assert_eq!(g.color_at(Point::new(-40.0, 0.0)), Rgba::new(0, 0, 0, 0.0));
        assert_eq!(g.color_at(Point::new(500.0, 0.0)), Rgba::new(200, 100, 0, 1.0));
    }

    #[test]
    fn test_midpoint_ignores_perpendicular_axis() {
        let g = horizontal();
        let a = g.color_at(Point::new(50.0, 0.0));
        let b = g.color_at(Point::new(50.0, 999.0));
        assert_eq!(a, b);
        assert_eq!((a.r, a.g, a.b), (100, 50, 0));
        assert!((a.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_stops_sorted() {
        let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0))
            .add_stop(1.0, Rgba::new(255, 255, 255, 1.0))
            .add_stop(0.0, Rgba::new(0, 0, 0, 1.0))
            .add_stop(0.5, Rgba::new(255, 0, 0, 1.0));
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.color_at(Point::new(3.0, 5.0)), Rgba::new(255, 0, 0, 1.0));
    }

    #[test]
    fn test_degenerate_gradient() {
        let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
            .add_stop(0.0, Rgba::new(1, 2, 3, 1.0))
            .add_stop(1.0, Rgba::new(4, 5, 6, 0.5));
        assert_eq!(g.color_at(Point::new(10.0, 10.0)), Rgba::new(4, 5, 6, 0.5));

        let empty = LinearGradient::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_eq!(empty.color_at(Point::new(0.5, 0.0)).a, 0.0);
    }
}
