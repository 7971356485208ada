//! egui-backed canvas
//!
//! `PainterCanvas` adapts an `egui::Painter` to the `Canvas` trait:
//!
//! - Strokes are flattened and drawn segment by segment, each segment
//!   colored by the paint at its midpoint, so gradients follow the line
//! - Round joins add a disc at sharp corners to cover the outer wedge
//! - Shadows are approximated by stacking wider translucent strokes
//!   beneath the line (egui has no blur filter for paths)
//! - Fills are triangulated and submitted as a mesh with per-vertex
//!   colors, which reproduces linear gradients exactly

use eframe::egui::{self, Color32, Mesh, Pos2, Rect, Shape, Stroke, Vec2};

use super::canvas::{Canvas, LineJoin, Shadow, StrokeStyle};
use super::color::Rgba;
use super::gradient::Paint;
use super::path::{Path, Point, Polyline};
use super::triangulate::triangulate;

/// Line segments per quadratic curve
const CURVE_SAMPLES: usize = 8;

/// Number of translucent strokes used to fake a blurred shadow
const GLOW_LAYERS: usize = 5;

/// Turns sharper than this (cosine of the angle) get a join disc
const ROUND_JOIN_MIN_COS: f32 = 0.94;

/// A canvas drawing through an egui painter
///
/// Canvas coordinates have their origin at `origin` in screen space.
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    background: Color32,
}

impl<'a> PainterCanvas<'a> {
    /// # Arguments
    /// * `painter` - Target painter (its clip rect bounds the drawing)
    /// * `origin` - Screen position of canvas coordinate (0, 0)
    /// * `background` - Color used by `clear_rect`
    pub fn new(painter: &'a egui::Painter, origin: Pos2, background: Rgba) -> Self {
        Self {
            painter,
            origin,
            background: background.to_color32(),
        }
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }

    /// Draw one flattened subpath
    fn stroke_polyline<F>(&self, line: &Polyline, width: f32, join: LineJoin, color_at: F)
    where
        F: Fn(Point) -> Color32,
    {
        let mut points = line.points.clone();
        if line.closed && points.len() > 2 {
            points.push(points[0]);
        }

        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            if a == b {
                continue;
            }
            let color = color_at(a.midpoint(b));
            self.painter.line_segment(
                [self.to_screen(a), self.to_screen(b)],
                Stroke::new(width, color),
            );
        }

        if join == LineJoin::Round {
            for corner in points.windows(3) {
                if is_sharp_turn(corner[0], corner[1], corner[2]) {
                    self.painter.circle_filled(
                        self.to_screen(corner[1]),
                        width / 2.0,
                        color_at(corner[1]),
                    );
                }
            }
        }
    }

    /// Approximate a blurred shadow with widening translucent strokes
    fn draw_glow(&self, lines: &[Polyline], width: f32, shadow: Shadow) {
        if shadow.blur <= 0.0 || shadow.color.a <= 0.0 {
            return;
        }

        let alpha = layer_alpha(shadow.color.a, GLOW_LAYERS);
        let color = shadow.color.with_alpha(alpha).to_color32();

        for layer in 1..=GLOW_LAYERS {
            let spread = shadow.blur * layer as f32 / GLOW_LAYERS as f32;
            for line in lines {
                self.stroke_polyline(line, width + spread, LineJoin::Round, |_| color);
            }
        }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let rect = Rect::from_min_size(self.to_screen(Point::new(x, y)), Vec2::new(width, height));
        self.painter.rect_filled(rect, 0.0, self.background);
    }

    fn stroke(&mut self, path: &Path, style: &StrokeStyle) {
        if style.width <= 0.0 || path.is_empty() {
            return;
        }

        let lines = path.flatten(CURVE_SAMPLES);

        if let Some(shadow) = style.shadow {
            self.draw_glow(&lines, style.width, shadow);
        }

        for line in &lines {
            self.stroke_polyline(line, style.width, style.join, |p| {
                style.paint.color_at(p).to_color32()
            });
        }
    }

    fn fill(&mut self, path: &Path, paint: &Paint) {
        // Every subpath is filled as if closed
        for line in path.flatten(CURVE_SAMPLES) {
            let triangles = triangulate(&line.points);
            if triangles.is_empty() {
                continue;
            }

            let mut mesh = Mesh::default();
            for p in &line.points {
                mesh.colored_vertex(self.to_screen(*p), paint.color_at(*p).to_color32());
            }
            for [a, b, c] in triangles {
                mesh.add_triangle(a, b, c);
            }
            self.painter.add(Shape::mesh(mesh));
        }
    }
}

/// Alpha for each of `layers` stacked strokes so that together they
/// cover to `alpha`
fn layer_alpha(alpha: f32, layers: usize) -> f32 {
    let alpha = alpha.clamp(0.0, 1.0);
    if layers == 0 {
        return alpha;
    }
    1.0 - (1.0 - alpha).powf(1.0 / layers as f32)
}

/// Whether the path turns sharply enough at `b` to show a join gap
fn is_sharp_turn(a: Point, b: Point, c: Point) -> bool {
    let (ux, uy) = (b.x - a.x, b.y - a.y);
    let (vx, vy) = (c.x - b.x, c.y - b.y);
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    if len <= f32::EPSILON {
        return false;
    }
    (ux * vx + uy * vy) / len < ROUND_JOIN_MIN_COS
}
