// File: crates/chart-core/src/decor.rs
// Summary: Chart decoration emitters (accent block, title, subtitle, footer).

use crate::scene::{Surface, TextAnchor};
use crate::types::{Insets, FOOTER_COLOR};

/// 30x10 accent rectangle at the top-left of the canvas, aligned with the
/// plot's left edge.
pub fn accent_block(surface: &mut impl Surface, margin: &Insets, color: &str) {
    surface.rect(margin.left as f64, 0.0, 30.0, 10.0, color);
}

/// Bold 16px title, 30px below the canvas top.
pub fn title(surface: &mut impl Surface, margin: &Insets, text: &str) {
    if text.is_empty() {
        return;
    }
    surface.text(margin.left as f64, 30.0, text, 16.0, true, "#000000", TextAnchor::Start);
}

/// 14px subtitle, 48px below the canvas top.
pub fn subtitle(surface: &mut impl Surface, margin: &Insets, text: &str) {
    if text.is_empty() {
        return;
    }
    surface.text(margin.left as f64, 48.0, text, 14.0, false, "#000000", TextAnchor::Start);
}

/// 10px footer in dark gray, 12px above the canvas bottom.
pub fn footer(surface: &mut impl Surface, margin: &Insets, canvas_height: u32, text: &str) {
    if text.is_empty() {
        return;
    }
    surface.text(
        margin.left as f64,
        canvas_height as f64 - 12.0,
        text,
        10.0,
        false,
        FOOTER_COLOR,
        TextAnchor::Start,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn emit_all(margin: &Insets) -> Scene {
        let mut scene = Scene::new(595, 290, "#EBE9E0");
        accent_block(&mut scene, margin, "#E3120B");
        title(&mut scene, margin, "Title");
        subtitle(&mut scene, margin, "Subtitle");
        footer(&mut scene, margin, 290, "Source: somewhere");
        scene
    }

    #[test]
    fn decorations_are_idempotent_in_position() {
        let margin = Insets::new(40, 60, 80, 40);
        let a = emit_all(&margin);
        let b = emit_all(&margin);
        assert_eq!(a.shapes, b.shapes);
    }

    #[test]
    fn empty_strings_emit_nothing() {
        let margin = Insets::default();
        let mut scene = Scene::new(290, 290, "#EBE9E0");
        title(&mut scene, &margin, "");
        subtitle(&mut scene, &margin, "");
        footer(&mut scene, &margin, 290, "");
        assert!(scene.shapes.is_empty());
    }
}
