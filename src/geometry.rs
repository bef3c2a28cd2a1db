//! Small geometry helpers for icon layout.
//!
//! Layout is computed in floating-point pixels and only turned into
//! attribute strings at the very end, through [`fmt_num`].

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X offset from the left edge of the viewport
    pub x: f64,
    /// Y offset from the top edge of the viewport
    pub y: f64,
    /// Width of the rectangle
    pub width: f64,
    /// Height of the rectangle
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Outline of the rectangle with rounded corners, as SVG path data.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn rounded_path(&self, radius: f64) -> String {
        let radius = radius.min(self.width / 2.0).min(self.height / 2.0).max(0.0);
        let x = fmt_num(self.x + radius);
        let y = fmt_num(self.y);
        let h = fmt_num(self.width - 2.0 * radius);
        let v = fmt_num(self.height - 2.0 * radius);
        let r = fmt_num(radius);
        format!(
            "M{x},{y} h{h} a{r},{r} 0 0 1 {r},{r} v{v} a{r},{r} 0 0 1 -{r},{r} \
             h-{h} a{r},{r} 0 0 1 -{r},-{r} v-{v} a{r},{r} 0 0 1 {r},-{r} z"
        )
    }
}

/// Formats a pixel value for an attribute.
///
/// Values are rounded to two decimals; whole numbers print without a
/// fractional part.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // collapses -0
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Formats a pixel length with an explicit `px` unit.
pub fn px(value: f64) -> String {
    format!("{}px", fmt_num(value))
}

/// Builds closed SVG path data through the given points.
pub fn polygon_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd}{},{} ", fmt_num(p.x), fmt_num(p.y)));
    }
    d.push('Z');
    d
}
