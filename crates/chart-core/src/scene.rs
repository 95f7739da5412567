// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic scene graph and the minimal drawing surface trait.

/// Horizontal anchoring for text shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One drawable shape with absolute canvas-pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    /// Polyline path: straight segments through `points` in order.
    Path {
        points: Vec<(f64, f64)>,
        stroke: String,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        bold: bool,
        fill: String,
        anchor: TextAnchor,
    },
}

/// Minimal capability interface for anything charts can draw onto.
pub trait Surface {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64);
    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str);
    fn path(&mut self, points: &[(f64, f64)], stroke: &str, stroke_width: f64);
    fn text(&mut self, x: f64, y: f64, content: &str, size: f64, bold: bool, fill: &str, anchor: TextAnchor);
}

/// Recording surface: the scene graph a backend serializes.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: impl Into<String>) -> Self {
        Self { width, height, background: background.into(), shapes: Vec::new() }
    }
}

impl Surface for Scene {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        self.shapes.push(Shape::Rect { x, y, width, height, fill: fill.to_string() });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.shapes.push(Shape::Line { x1, y1, x2, y2, stroke: stroke.to_string(), stroke_width });
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.shapes.push(Shape::Circle { cx, cy, r, fill: fill.to_string() });
    }

    fn path(&mut self, points: &[(f64, f64)], stroke: &str, stroke_width: f64) {
        self.shapes.push(Shape::Path {
            points: points.to_vec(),
            stroke: stroke.to_string(),
            stroke_width,
        });
    }

    fn text(&mut self, x: f64, y: f64, content: &str, size: f64, bold: bool, fill: &str, anchor: TextAnchor) {
        self.shapes.push(Shape::Text {
            x,
            y,
            content: content.to_string(),
            size,
            bold,
            fill: fill.to_string(),
            anchor,
        });
    }
}
