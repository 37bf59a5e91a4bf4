// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Rgba;

/// Ten-color categorical cycle used when a series sets no colors of its own.
pub const CATEGORY_PALETTE: [Rgba; 10] = [
    Rgba::rgb(0x1f, 0x77, 0xb4),
    Rgba::rgb(0xff, 0x7f, 0x0e),
    Rgba::rgb(0x2c, 0xa0, 0x2c),
    Rgba::rgb(0xd6, 0x27, 0x28),
    Rgba::rgb(0x94, 0x67, 0xbd),
    Rgba::rgb(0x8c, 0x56, 0x4b),
    Rgba::rgb(0xe3, 0x77, 0xc2),
    Rgba::rgb(0x7f, 0x7f, 0x7f),
    Rgba::rgb(0xbc, 0xbd, 0x22),
    Rgba::rgb(0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub title: Rgba,
    pub bar: Rgba,
    pub line_stroke: Rgba,
    pub histogram: Rgba,
    pub edge: Rgba,
    pub pie_label: Rgba,
    pub palette: &'static [Rgba],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            title: Rgba::rgb(245, 245, 250),
            bar: Rgba::rgb(64, 160, 255),
            line_stroke: Rgba::rgb(64, 160, 255),
            histogram: Rgba::rgb(96, 156, 255),
            edge: Rgba::rgb(8, 8, 10),
            pie_label: Rgba::rgb(245, 245, 250),
            palette: &CATEGORY_PALETTE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::rgb(230, 230, 235),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            tick: Rgba::rgb(60, 60, 70),
            title: Rgba::rgb(0, 0, 0),
            bar: Rgba::rgb(0x1f, 0x77, 0xb4),
            line_stroke: Rgba::rgb(0x1f, 0x77, 0xb4),
            histogram: Rgba::rgb(0x1f, 0x77, 0xb4),
            edge: Rgba::BLACK,
            pie_label: Rgba::rgb(20, 20, 30),
            palette: &CATEGORY_PALETTE,
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            grid: Rgba::rgb(0x07, 0x36, 0x42),       // base02
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),  // base1
            axis_label: Rgba::rgb(0xee, 0xe8, 0xd5), // base2
            tick: Rgba::rgb(0x83, 0x94, 0x96),       // base0
            title: Rgba::rgb(0xfd, 0xf6, 0xe3),      // base3
            bar: Rgba::rgb(0x26, 0x8b, 0xd2),        // blue
            line_stroke: Rgba::rgb(0x26, 0x8b, 0xd2),
            histogram: Rgba::rgb(0x2a, 0xa1, 0x98),  // cyan
            edge: Rgba::rgb(0x00, 0x2b, 0x36),
            pie_label: Rgba::rgb(0xee, 0xe8, 0xd5),
            palette: &CATEGORY_PALETTE,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            axis_line: Rgba::rgb(0x65, 0x7b, 0x83),  // base00
            axis_label: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            tick: Rgba::rgb(0x58, 0x6e, 0x75),       // base01
            title: Rgba::rgb(0x00, 0x2b, 0x36),
            bar: Rgba::rgb(0x26, 0x8b, 0xd2),
            line_stroke: Rgba::rgb(0x26, 0x8b, 0xd2),
            histogram: Rgba::rgb(0x2a, 0xa1, 0x98),
            edge: Rgba::rgb(0x07, 0x36, 0x42),
            pie_label: Rgba::rgb(0x00, 0x2b, 0x36),
            palette: &CATEGORY_PALETTE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xff, 0xff, 0xff),
            tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
            title: Rgba::rgb(0xff, 0xff, 0xff),
            bar: Rgba::rgb(0x00, 0xff, 0xff),
            line_stroke: Rgba::rgb(0x00, 0xff, 0xff),
            histogram: Rgba::rgb(0x00, 0xaa, 0xff),
            edge: Rgba::rgb(0xff, 0xff, 0xff),
            pie_label: Rgba::rgb(0xff, 0xff, 0xff),
            palette: &CATEGORY_PALETTE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
