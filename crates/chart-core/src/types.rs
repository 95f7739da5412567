// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas presets, colors, margins).

/// Default canvas background fill.
pub const BACKGROUND_COLOR: &str = "#EBE9E0";
/// Default accent color used for the styling block and canvas border.
pub const ACCENT_COLOR: &str = "#E3120B";
/// Footer text fill.
pub const FOOTER_COLOR: &str = "#333333";

/// Named preset canvas sizes (width, height) for standard web column layouts.
pub const CANVAS_PRESETS: [(&str, (u32, u32)); 3] = [
    ("standard-web-1-column", (290, 290)),
    ("standard-web-2-column", (595, 290)),
    ("standard-web-3-column", (903, 290)),
];

/// Look up a preset canvas size by name.
pub fn canvas_preset(name: &str) -> Option<(u32, u32)> {
    CANVAS_PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, dims)| dims)
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 60, 80, 40)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup() {
        assert_eq!(canvas_preset("standard-web-2-column"), Some((595, 290)));
        assert_eq!(canvas_preset("nope"), None);
    }
}
