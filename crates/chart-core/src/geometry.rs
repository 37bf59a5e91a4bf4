// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 * 0.5,
            (self.top + self.bottom) as f32 * 0.5,
        )
    }

    /// Map a value in `[min, max]` onto the horizontal pixel span.
    pub fn map_x(&self, v: f64, min: f64, max: f64) -> f32 {
        let span = (max - min).max(1e-9);
        self.left as f32 + ((v - min) / span) as f32 * self.width() as f32
    }

    /// Map a value in `[min, max]` onto the vertical pixel span (min at the bottom).
    pub fn map_y(&self, v: f64, min: f64, max: f64) -> f32 {
        let span = (max - min).max(1e-9);
        self.bottom as f32 - ((v - min) / span) as f32 * self.height() as f32
    }
}
