//! Window geometry primitives
//!
//! Plain integer/float value types shared by the window API, plus the pure
//! overlap computation behind monitor selection. Nothing in this module
//! touches GLFW.

/// Width and height of a window or framebuffer, in screen or pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in the relevant unit
    pub w: i32,
    /// Height in the relevant unit
    pub h: i32,
}

/// Position of a window's top-left corner in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    /// Horizontal screen coordinate
    pub x: i32,
    /// Vertical screen coordinate
    pub y: i32,
}

/// Per-axis content scale (DPI) factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Horizontal scale factor
    pub x: f32,
    /// Vertical scale factor
    pub y: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Aspect ratio constraint expressed as a rational pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aspect {
    /// Ratio numerator (width component)
    pub num: i32,
    /// Ratio denominator (height component)
    pub den: i32,
}

impl Aspect {
    /// A ratio constrains the window only when both components are positive.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.num > 0 && self.den > 0
    }
}

/// Axis-aligned rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Area of the overlap between two rectangles, zero when disjoint.
    ///
    /// Widened to `i64` so large multi-monitor extents cannot overflow.
    #[must_use]
    pub fn intersection_area(self, other: Self) -> i64 {
        let ix = self.x.max(other.x);
        let iy = self.y.max(other.y);
        let iw = (self.x + self.w).min(other.x + other.w) - ix;
        let ih = (self.y + self.h).min(other.y + other.h) - iy;
        if iw > 0 && ih > 0 {
            i64::from(iw) * i64::from(ih)
        } else {
            0
        }
    }
}

/// Index of the work area overlapping `window` the most.
///
/// Ties break toward the earlier index (strictly-greater comparison), which
/// keeps selection stable for a window centered on the seam between two
/// identical monitors. A window overlapping nothing still selects the first
/// area, mirroring GLFW's own "first monitor is a sane default" behavior.
/// Returns `None` only for an empty slice.
#[must_use]
pub fn best_overlap_index(window: Rect, areas: &[Rect]) -> Option<usize> {
    let mut best = None;
    let mut best_area = -1_i64;
    for (index, area) in areas.iter().enumerate() {
        let overlap = window.intersection_area(*area);
        if overlap > best_area {
            best_area = overlap;
            best = Some(index);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_validity_requires_both_positive() {
        assert!(Aspect { num: 16, den: 9 }.is_valid());
        assert!(!Aspect { num: 0, den: 9 }.is_valid());
        assert!(!Aspect { num: 16, den: 0 }.is_valid());
        assert!(!Aspect { num: -16, den: 9 }.is_valid());
    }

    #[test]
    fn test_intersection_area_clamps_to_zero() {
        let a = Rect { x: 0, y: 0, w: 100, h: 100 };
        let disjoint = Rect { x: 200, y: 200, w: 50, h: 50 };
        let touching = Rect { x: 100, y: 0, w: 50, h: 100 };
        assert_eq!(a.intersection_area(disjoint), 0);
        assert_eq!(a.intersection_area(touching), 0);
    }

    #[test]
    fn test_intersection_area_partial_overlap() {
        let a = Rect { x: 0, y: 0, w: 100, h: 100 };
        let b = Rect { x: 50, y: 50, w: 100, h: 100 };
        assert_eq!(a.intersection_area(b), 50 * 50);
        assert_eq!(b.intersection_area(a), 50 * 50);
    }

    #[test]
    fn test_best_overlap_picks_strict_maximum() {
        let window = Rect { x: 1800, y: 100, w: 800, h: 600 };
        let left = Rect { x: 0, y: 0, w: 1920, h: 1080 };
        let right = Rect { x: 1920, y: 0, w: 1920, h: 1080 };
        // 120px of the window on the left monitor, 680px on the right.
        assert_eq!(best_overlap_index(window, &[left, right]), Some(1));
    }

    #[test]
    fn test_best_overlap_tie_prefers_first_enumerated() {
        // Window centered exactly on the seam of two identical monitors.
        let window = Rect { x: 1520, y: 100, w: 800, h: 600 };
        let left = Rect { x: 0, y: 0, w: 1920, h: 1080 };
        let right = Rect { x: 1920, y: 0, w: 1920, h: 1080 };
        assert_eq!(
            window.intersection_area(left),
            window.intersection_area(right)
        );
        assert_eq!(best_overlap_index(window, &[left, right]), Some(0));
    }

    #[test]
    fn test_best_overlap_zero_overlap_still_selects_first() {
        let window = Rect { x: -5000, y: -5000, w: 100, h: 100 };
        let areas = [
            Rect { x: 0, y: 0, w: 1920, h: 1080 },
            Rect { x: 1920, y: 0, w: 1920, h: 1080 },
        ];
        assert_eq!(best_overlap_index(window, &areas), Some(0));
    }

    #[test]
    fn test_best_overlap_empty_enumeration() {
        let window = Rect { x: 0, y: 0, w: 800, h: 600 };
        assert_eq!(best_overlap_index(window, &[]), None);
    }
}
