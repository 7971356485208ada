//! Render module - drawing the backdrop
//!
//! This module provides:
//! - `Canvas` trait, the 2D drawing context the backdrop targets
//! - Paths, colors and linear gradients
//! - `PainterCanvas`, the egui implementation of `Canvas`
//! - `ScrollingSignalRenderer`, the backdrop graph itself

mod backdrop;
mod canvas;
mod color;
mod gradient;
mod painter;
mod path;
mod triangulate;

pub use backdrop::{BackdropStyle, ScrollingSignalRenderer};
#[allow(unused_imports)]
pub use canvas::{Canvas, LineJoin, Shadow, StrokeStyle};
pub use color::Rgba;
#[allow(unused_imports)]
pub use color::{BACKGROUND, CYAN, PURPLE};
pub use painter::PainterCanvas;

#[cfg(test)]
pub use canvas::{CanvasOp, RecordingCanvas};
