// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome colors and the cell palette.

/// Fixed 11-step sequential diverging palette, cold to warm.
/// This is the data encoding itself, so it does not vary by theme.
pub const PALETTE: [&str; 11] = [
    "#313695", "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf",
    "#fee090", "#fdae61", "#f46d43", "#d73027", "#a50026",
];

/// Chart chrome colors as SVG color strings.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub tick: &'static str,
    pub cell_stroke: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            tick: "#64646e",
            cell_stroke: "none",
            tooltip_background: "rgba(20, 20, 30, 0.88)",
            tooltip_text: "#fafafc",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            tick: "#9696a0",
            cell_stroke: "none",
            tooltip_background: "rgba(235, 235, 245, 0.92)",
            tooltip_text: "#121214",
        }
    }

    /// The cell palette; shared by every theme.
    pub fn palette(&self) -> &'static [&'static str; 11] {
        &PALETTE
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
