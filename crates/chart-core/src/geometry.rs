// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

use crate::types::Insets;

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

    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub const fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width - insets.right as i32,
            height - insets.bottom as i32,
        )
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }

    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) as f32 * 0.5 }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_removes_margins() {
        let r = RectI32::inset(1024, 640, &Insets::new(88, 32, 56, 72));
        assert_eq!(r, RectI32::from_ltrb(88, 56, 992, 568));
        assert_eq!(r.width(), 904);
        assert_eq!(r.height(), 512);
        assert!(!r.is_empty());
    }

    #[test]
    fn oversized_insets_give_empty_rect() {
        let r = RectI32::inset(100, 100, &Insets::new(60, 60, 10, 10));
        assert!(r.is_empty());
    }
}
