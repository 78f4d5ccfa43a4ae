//! Proportional geometry of the split-circle icon
//!
//! Every measurement is a fixed fraction of the canvas side length, truncated to whole
//! pixels, so the composition looks the same at every density. The predicates below decide
//! pixel membership with hard edges: a pixel is either inside a shape or it is not.

/// Pixel measurements derived from a square canvas of side `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    pub center: i64,
    pub main_radius: i64,
    pub split_offset: i64,
    pub divider_width: i64,
    pub divider_inset: i64,
    pub corner_radius: i64,
}

impl Geometry {
    pub fn new(size: u32) -> Self {
        let scaled = |factor: f64| (size as f64 * factor) as i64;

        Self {
            size,
            center: i64::from(size / 2),
            main_radius: scaled(0.28),
            split_offset: scaled(0.04),
            divider_width: scaled(0.015).max(2),
            divider_inset: scaled(0.02),
            corner_radius: scaled(0.18),
        }
    }

    /// Left half of the disk centered at `center - split_offset`
    pub fn in_left_half_disk(&self, x: u32, y: u32) -> bool {
        let cx = self.center - self.split_offset;
        i64::from(x) <= cx && in_disk(x, y, cx, self.center, self.main_radius)
    }

    /// Right half of the disk centered at `center + split_offset`
    pub fn in_right_half_disk(&self, x: u32, y: u32) -> bool {
        let cx = self.center + self.split_offset;
        i64::from(x) >= cx && in_disk(x, y, cx, self.center, self.main_radius)
    }

    pub fn in_divider(&self, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let left = self.center - self.divider_width / 2;
        let half_height = self.main_radius - self.divider_inset;

        (left..left + self.divider_width).contains(&x)
            && (self.center - half_height..=self.center + half_height).contains(&y)
    }

    /// Rounded rectangle spanning the whole canvas with `corner_radius` corners
    pub fn in_rounded_rect(&self, x: u32, y: u32) -> bool {
        let last = i64::from(self.size) - 1;
        let r = self.corner_radius;
        let (x, y) = (i64::from(x), i64::from(y));

        // Distance to the nearest point of the rectangle inset by the corner radius.
        let inner_max = (last - r).max(r);
        let dx = x - x.clamp(r, inner_max);
        let dy = y - y.clamp(r, inner_max);
        dx * dx + dy * dy <= r * r
    }

    /// Circle inscribed in the canvas
    pub fn in_inscribed_circle(&self, x: u32, y: u32) -> bool {
        let radius = (f64::from(self.size) - 1.0) / 2.0;
        let dx = f64::from(x) - radius;
        let dy = f64::from(y) - radius;
        dx * dx + dy * dy <= radius * radius
    }
}

fn in_disk(x: u32, y: u32, cx: i64, cy: i64, radius: i64) -> bool {
    let dx = i64::from(x) - cx;
    let dy = i64::from(y) - cy;
    dx * dx + dy * dy <= radius * radius
}
