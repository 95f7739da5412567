// File: crates/chart-render-svg/src/lib.rs
// Summary: SVG backend: serializes a chart-core Scene to an SVG document.

use anyhow::{Context, Result};
use chart_core::{Scene, Shape, TextAnchor};
use std::path::Path;

/// Serialize a scene graph into a standalone SVG document string.
pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">",
        w = scene.width,
        h = scene.height,
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        scene.width,
        scene.height,
        escape(&scene.background),
    ));
    for shape in &scene.shapes {
        svg.push_str(&shape_svg(shape));
    }
    svg.push_str("</svg>");
    svg
}

/// Serialize and write the scene to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir for '{}'", path.display()))?;
    }
    std::fs::write(path, render_svg(scene))
        .with_context(|| format!("write SVG '{}'", path.display()))?;
    Ok(())
}

fn shape_svg(shape: &Shape) -> String {
    match shape {
        Shape::Rect { x, y, width, height, fill } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            fmt(*x),
            fmt(*y),
            fmt(*width),
            fmt(height.max(0.0)),
            escape(fill),
        ),
        Shape::Line { x1, y1, x2, y2, stroke, stroke_width } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt(*x1),
            fmt(*y1),
            fmt(*x2),
            fmt(*y2),
            escape(stroke),
            fmt(*stroke_width),
        ),
        Shape::Circle { cx, cy, r, fill } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            fmt(*cx),
            fmt(*cy),
            fmt(*r),
            escape(fill),
        ),
        Shape::Path { points, stroke, stroke_width } => {
            let mut d = String::new();
            for (i, (x, y)) in points.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{}{},{}", cmd, fmt(*x), fmt(*y)));
            }
            format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                d,
                escape(stroke),
                fmt(*stroke_width),
            )
        }
        Shape::Text { x, y, content, size, bold, fill, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let weight = if *bold { " font-weight=\"bold\"" } else { "" };
            format!(
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\"{} fill=\"{}\">{}</text>",
                fmt(*x),
                fmt(*y),
                fmt(*size),
                anchor,
                weight,
                escape(fill),
                escape(content),
            )
        }
    }
}

/// Compact numeric attribute formatting: round coordinates print without a
/// fractional part, everything else keeps two decimals.
fn fmt(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.2}")
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::Surface;

    #[test]
    fn document_wraps_background_and_shapes() {
        let mut scene = Scene::new(290, 290, "#EBE9E0");
        scene.circle(10.0, 20.0, 5.0, "orange");
        let svg = render_svg(&scene);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("width=\"290\""));
        assert!(svg.contains("fill=\"#EBE9E0\""));
        assert!(svg.contains("<circle cx=\"10\" cy=\"20\" r=\"5\" fill=\"orange\"/>"));
    }

    #[test]
    fn path_uses_move_then_line_commands() {
        let mut scene = Scene::new(100, 100, "#fff");
        scene.path(&[(0.0, 1.0), (2.5, 3.0)], "#E3120B", 2.0);
        let svg = render_svg(&scene);
        assert!(svg.contains("d=\"M0,1L2.50,3\""));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut scene = Scene::new(100, 100, "#fff");
        scene.text(0.0, 0.0, "a < b & c", 12.0, false, "#000", chart_core::TextAnchor::Start);
        let svg = render_svg(&scene);
        assert!(svg.contains(">a &lt; b &amp; c</text>"));
    }
}
