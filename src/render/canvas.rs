//! Canvas trait - the 2D drawing context the backdrop renders into
//!
//! The trait mirrors the handful of 2D-context operations the backdrop
//! needs: clearing a region, stroking a path and filling a path. Stroke
//! state (width, join, glow) travels with each call instead of living in
//! mutable context state, so a glow can never leak from the stroke into
//! the fill.

use super::color::Rgba;
use super::gradient::Paint;
use super::path::Path;

/// How consecutive stroke segments are joined
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Blurred shadow drawn beneath a stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Blur radius in pixels
    pub blur: f32,
    pub color: Rgba,
}

/// Everything needed to stroke a path
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub width: f32,
    pub join: LineJoin,
    pub paint: Paint,
    /// Optional glow; `None` disables it
    pub shadow: Option<Shadow>,
}

/// A 2D drawing surface
pub trait Canvas {
    /// Clear a rectangular region to the surface's background
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Stroke the outline of a path
    fn stroke(&mut self, path: &Path, style: &StrokeStyle);

    /// Fill the interior of a path
    fn fill(&mut self, path: &Path, paint: &Paint);
}

/// A canvas that records every call, for inspecting draw output in tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

/// One recorded canvas call
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    Clear { x: f32, y: f32, width: f32, height: f32 },
    Stroke { path: Path, style: StrokeStyle },
    Fill { path: Path, paint: Paint },
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> Vec<(&Path, &StrokeStyle)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Stroke { path, style } => Some((path, style)),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(&Path, &Paint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Fill { path, paint } => Some((path, paint)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(CanvasOp::Clear { x, y, width, height });
    }

    fn stroke(&mut self, path: &Path, style: &StrokeStyle) {
        self.ops.push(CanvasOp::Stroke {
            path: path.clone(),
            style: style.clone(),
        });
    }

    fn fill(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(CanvasOp::Fill {
            path: path.clone(),
            paint: paint.clone(),
        });
    }
}
