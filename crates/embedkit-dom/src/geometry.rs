//! Rect Geometry
//!
//! Rectangle math for viewport intersection checks.

/// Axis-aligned rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 { self.y }
    pub fn left(&self) -> f64 { self.x }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Overlap with another rect, None when disjoint
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > x && bottom > y {
            Some(Rect {
                x,
                y,
                width: right - x,
                height: bottom - y,
            })
        } else {
            None
        }
    }

    /// Fraction of this rect covered by `viewport`, 0.0 for degenerate rects
    pub fn intersection_ratio(&self, viewport: &Rect) -> f64 {
        if self.area() <= 0.0 {
            return 0.0;
        }
        self.intersect(viewport)
            .map(|i| i.area() / self.area())
            .unwrap_or(0.0)
    }
}
