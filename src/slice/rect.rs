use serde::Serialize;

/// A pixel rectangle, half-open on its right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from inclusive corner coordinates
    pub fn from_corners(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// One past the last column
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last row
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Grow by `amount` pixels on every side, clamped to a `bound_width` x `bound_height` image.
    ///
    /// The result never leaves `[0, bound_width) x [0, bound_height)`.
    pub fn expand_clamped(&self, amount: u32, bound_width: u32, bound_height: u32) -> Rect {
        let x0 = self.x.saturating_sub(amount).min(bound_width);
        let y0 = self.y.saturating_sub(amount).min(bound_height);
        let x1 = self.right().saturating_add(amount).min(bound_width);
        let y1 = self.bottom().saturating_add(amount).min(bound_height);

        Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Check if this rectangle fully contains another
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }
}
