//! Path construction and flattening
//!
//! `Path` records drawing commands the way a 2D canvas context does
//! (move-to, quadratic-curve-to, line-to, close). Rendering backends that
//! only understand polylines call `flatten()` to sample the curves.

/// A point in canvas pixel coordinates (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A single path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier with a control point and an end point
    QuadTo(Point, Point),
    Close,
}

/// A flattened subpath
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// A sequence of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo(ctrl, end));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[cfg(test)]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sample the path into polylines, one per subpath
    ///
    /// # Arguments
    /// * `curve_samples` - Number of line segments per quadratic curve
    ///   (at least 1)
    ///
    /// Segments without a current point start a new subpath at their first
    /// point, like a canvas context does. After `Close`, drawing continues
    /// from the start of the closed subpath.
    pub fn flatten(&self, curve_samples: usize) -> Vec<Polyline> {
        let curve_samples = curve_samples.max(1);
        let mut lines: Vec<Polyline> = Vec::new();
        let mut current: Option<Polyline> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if let Some(line) = current.take() {
                        lines.push(line);
                    }
                    current = Some(Polyline {
                        points: vec![p],
                        closed: false,
                    });
                }
                PathCommand::LineTo(p) => {
                    current
                        .get_or_insert_with(|| Polyline {
                            points: vec![p],
                            closed: false,
                        })
                        .points
                        .push(p);
                }
                PathCommand::QuadTo(ctrl, end) => {
                    let line = current.get_or_insert_with(|| Polyline {
                        points: vec![ctrl],
                        closed: false,
                    });
                    let start = *line.points.last().unwrap_or(&ctrl);
                    for i in 1..=curve_samples {
                        let t = i as f32 / curve_samples as f32;
                        line.points.push(quadratic_bezier(start, ctrl, end, t));
                    }
                }
                PathCommand::Close => {
                    if let Some(mut line) = current.take() {
                        line.closed = true;
                        let restart = line.points[0];
                        lines.push(line);
                        current = Some(Polyline {
                            points: vec![restart],
                            closed: false,
                        });
                    }
                }
            }
        }

        if let Some(line) = current {
            if line.points.len() > 1 {
                lines.push(line);
            }
        }

        lines
    }
}

/// Evaluate a quadratic Bézier curve at parameter t
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    Point::new(
        mt2 * p0.x + 2.0 * mt * t * p1.x + t2 * p2.x,
        mt2 * p0.y + 2.0 * mt * t * p1.y + t2 * p2.y,
    )
}
