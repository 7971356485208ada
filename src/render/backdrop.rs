//! Scrolling signal renderer - the animated backdrop graph
//!
//! Draws the signal buffer as a smoothed line with a glow, and fills the
//! area beneath it down to the bottom edge.
//!
//! ## Smoothing
//!
//! Consecutive points are joined by quadratic curves whose control point
//! is the first point of each pair and whose end point is the midpoint of
//! the pair. The result is a continuous rounded line with O(1) work per
//! segment, without solving for a full spline.

use std::collections::VecDeque;

use super::canvas::{Canvas, LineJoin, Shadow, StrokeStyle};
use super::color::{Rgba, CYAN, PURPLE};
use super::gradient::{LinearGradient, Paint};
use super::path::{Path, Point};
use crate::signal::{RandomSource, SignalBuffer, SPACING};

/// Colors and stroke parameters of the backdrop
#[derive(Clone, Debug, PartialEq)]
pub struct BackdropStyle {
    /// Stroke gradient color at the left edge
    pub line_start: Rgba,
    /// Stroke gradient color at the right edge
    pub line_end: Rgba,
    /// Fill gradient color at the top edge
    pub fill_top: Rgba,
    /// Fill gradient color at the bottom edge
    pub fill_bottom: Rgba,
    pub line_width: f32,
    pub glow_blur: f32,
    pub glow_color: Rgba,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            line_start: CYAN.with_alpha(0.5),
            line_end: PURPLE.with_alpha(0.5),
            fill_top: CYAN.with_alpha(0.0),
            fill_bottom: PURPLE.with_alpha(0.1),
            line_width: 2.0,
            glow_blur: 15.0,
            glow_color: CYAN.with_alpha(0.2),
        }
    }
}

/// Owns the signal and draws it
pub struct ScrollingSignalRenderer<R: RandomSource> {
    signal: SignalBuffer<R>,
    pub style: BackdropStyle,
}

impl<R: RandomSource> ScrollingSignalRenderer<R> {
    pub fn new(rng: R, style: BackdropStyle) -> Self {
        Self {
            signal: SignalBuffer::new(rng),
            style,
        }
    }

    /// Rebuild the signal for new surface dimensions
    pub fn resize(&mut self, width: f32, height: f32) {
        self.signal.resize(width, height);
    }

    /// Advance one frame of scrolling
    pub fn update(&mut self) {
        self.signal.update();
    }

    pub fn signal(&self) -> &SignalBuffer<R> {
        &self.signal
    }

    /// Horizontal gradient used to stroke the line
    fn stroke_paint(&self, width: f32) -> Paint {
        LinearGradient::new(Point::new(0.0, 0.0), Point::new(width, 0.0))
            .add_stop(0.0, self.style.line_start)
            .add_stop(1.0, self.style.line_end)
            .into()
    }

    /// Vertical gradient used to fill beneath the line
    fn fill_paint(&self, height: f32) -> Paint {
        LinearGradient::new(Point::new(0.0, 0.0), Point::new(0.0, height))
            .add_stop(0.0, self.style.fill_top)
            .add_stop(1.0, self.style.fill_bottom)
            .into()
    }

    /// Render the current state
    ///
    /// Zero-size surfaces and empty signals only clear.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.draw_points(
            canvas,
            self.signal.points(),
            self.signal.scroll_offset(),
            self.signal.width(),
            self.signal.height(),
        );
    }

    fn draw_points<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        points: &VecDeque<f32>,
        offset: f32,
        width: f32,
        height: f32,
    ) {
        canvas.clear_rect(0.0, 0.0, width, height);

        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let (mut path, start_x, end_x) = match smoothed_path(points, offset, height) {
            Some(line) => line,
            None => return,
        };

        let stroke = StrokeStyle {
            width: self.style.line_width,
            join: LineJoin::Round,
            paint: self.stroke_paint(width),
            shadow: Some(Shadow {
                blur: self.style.glow_blur,
                color: self.style.glow_color,
            }),
        };
        canvas.stroke(&path, &stroke);

        path.line_to(Point::new(end_x, height))
            .line_to(Point::new(start_x, height))
            .close();
        canvas.fill(&path, &self.fill_paint(height));
    }
}

/// Build the smoothed line through all points
///
/// # Arguments
/// * `points` - Normalized values, oldest first
/// * `offset` - Current scroll offset in pixels
/// * `height` - Surface height the values are scaled by
///
/// # Returns
/// The path and the x coordinates of its first and last points (the fill
/// needs them to close the area), or `None` for an empty signal
fn smoothed_path(points: &VecDeque<f32>, offset: f32, height: f32) -> Option<(Path, f32, f32)> {
    let first = *points.front()?;
    let screen = |i: usize, v: f32| Point::new(i as f32 * SPACING - offset, v * height);

    let start_x = -SPACING - offset;
    let mut path = Path::new();
    path.move_to(Point::new(start_x, first * height));

    for i in 0..points.len() - 1 {
        let current = screen(i, points[i]);
        let next = screen(i + 1, points[i + 1]);
        path.quad_to(current, current.midpoint(next));
    }

    let end_x = (points.len() - 1) as f32 * SPACING - offset;
    Some((path, start_x, end_x))
}
