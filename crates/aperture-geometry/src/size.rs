//! Two-dimensional unsigned size and its preference ordering.
//!
//! # Ordering
//! Sizes sort by "preference", smaller first, using these criteria in turn:
//! ```text
//!   1. smaller width AND smaller height      → smaller
//!   2. width >= other AND height >= other    → not smaller
//!   3. otherwise smaller area (u64)          → smaller
//!   4. equal area: smaller width             → smaller
//!   5. equal area and width: smaller height  → smaller
//! ```
//! Pipeline code picks sensor and output resolutions from this order, so it
//! must not be replaced by a lexicographic or area-only compare. Step 5 only
//! separates zero-width sizes, which the first four steps leave unordered.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, parse_pair};
use crate::point::Point;
use crate::rectangle::Rectangle;

/// A two-dimensional size with integer precision.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable,
)]
pub struct Size {
    /// Width in the caller's unit (usually pixels).
    pub width: u32,
    /// Height in the caller's unit (usually pixels).
    pub height: u32,
}

impl Size {
    /// Create a size with the given width and height.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if both the width and height are 0.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// `width * height` computed in 64 bits.
    #[inline]
    pub const fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Round width and height down to multiples of the given alignments.
    ///
    /// An alignment of 0 leaves that dimension unchanged.
    pub fn align_down_to(&mut self, h_alignment: u32, v_alignment: u32) -> &mut Self {
        self.width = align_down(self.width, h_alignment);
        self.height = align_down(self.height, v_alignment);
        self
    }

    /// Round width and height up to multiples of the given alignments.
    ///
    /// An alignment of 0 leaves that dimension unchanged. A dimension whose
    /// next multiple does not fit in `u32` stays at the largest multiple that
    /// does.
    pub fn align_up_to(&mut self, h_alignment: u32, v_alignment: u32) -> &mut Self {
        self.width = align_up(self.width, h_alignment);
        self.height = align_up(self.height, v_alignment);
        self
    }

    /// Clamp width and height to at most those of `bound`.
    pub fn bound_to(&mut self, bound: Size) -> &mut Self {
        self.width = self.width.min(bound.width);
        self.height = self.height.min(bound.height);
        self
    }

    /// Grow width and height to at least those of `expand`.
    pub fn expand_to(&mut self, expand: Size) -> &mut Self {
        self.width = self.width.max(expand.width);
        self.height = self.height.max(expand.height);
        self
    }

    /// Copy of this size with [`Size::align_down_to`] applied.
    #[must_use]
    pub fn aligned_down_to(mut self, h_alignment: u32, v_alignment: u32) -> Self {
        self.align_down_to(h_alignment, v_alignment);
        self
    }

    /// Copy of this size with [`Size::align_up_to`] applied.
    #[must_use]
    pub fn aligned_up_to(mut self, h_alignment: u32, v_alignment: u32) -> Self {
        self.align_up_to(h_alignment, v_alignment);
        self
    }

    /// Component-wise minimum with `bound`.
    #[must_use]
    pub fn bounded_to(mut self, bound: Size) -> Self {
        self.bound_to(bound);
        self
    }

    /// Component-wise maximum with `expand`.
    #[must_use]
    pub fn expanded_to(mut self, expand: Size) -> Self {
        self.expand_to(expand);
        self
    }

    /// Shrink to the largest size with the aspect ratio of `ratio` that fits
    /// inside this one.
    ///
    /// Both components of `ratio` must be non-zero. Debug builds assert on
    /// it; release builds log a warning and return `self` unchanged.
    #[must_use]
    pub fn bounded_to_aspect_ratio(self, ratio: Size) -> Self {
        if !check_ratio(ratio, "bounded_to_aspect_ratio") {
            return self;
        }

        let ratio1 = u64::from(self.width) * u64::from(ratio.height);
        let ratio2 = u64::from(ratio.width) * u64::from(self.height);

        if ratio1 > ratio2 {
            Self::new((ratio2 / u64::from(ratio.height)) as u32, self.height)
        } else {
            Self::new(self.width, (ratio1 / u64::from(ratio.width)) as u32)
        }
    }

    /// Grow to the smallest size with the aspect ratio of `ratio` that covers
    /// this one.
    ///
    /// Same precondition as [`Size::bounded_to_aspect_ratio`]. A result
    /// dimension beyond `u32::MAX` is truncated to its low 32 bits.
    #[must_use]
    pub fn expanded_to_aspect_ratio(self, ratio: Size) -> Self {
        if !check_ratio(ratio, "expanded_to_aspect_ratio") {
            return self;
        }

        let ratio1 = u64::from(self.width) * u64::from(ratio.height);
        let ratio2 = u64::from(ratio.width) * u64::from(self.height);

        if ratio1 < ratio2 {
            Self::new((ratio2 / u64::from(ratio.height)) as u32, self.height)
        } else {
            Self::new(self.width, (ratio1 / u64::from(ratio.width)) as u32)
        }
    }

    /// A rectangle of this size whose center is `center`.
    ///
    /// The top-left corner is `center - size / 2` with truncating division.
    /// A corner below `i32::MIN` wraps like [`Rectangle::translate_by`].
    pub fn centered_to(self, center: Point) -> Rectangle {
        let x = i64::from(center.x) - i64::from(self.width / 2);
        let y = i64::from(center.y) - i64::from(self.height / 2);

        Rectangle::new(x as i32, y as i32, self.width, self.height)
    }
}

fn align_down(value: u32, alignment: u32) -> u32 {
    if alignment == 0 {
        return value;
    }
    value / alignment * alignment
}

fn align_up(value: u32, alignment: u32) -> u32 {
    let down = align_down(value, alignment);
    if down == value {
        return value;
    }
    down.checked_add(alignment).unwrap_or(down)
}

fn check_ratio(ratio: Size, op: &'static str) -> bool {
    debug_assert!(
        ratio.width != 0 && ratio.height != 0,
        "{op}: aspect ratio {ratio} has a zero component"
    );
    if ratio.width == 0 || ratio.height == 0 {
        tracing::warn!("{op}: aspect ratio {ratio} has a zero component, size left unchanged");
        return false;
    }
    true
}

// Float scaling narrows with `as u32`: fractions truncate toward zero,
// negative and NaN results become 0, overflow saturates at u32::MAX.

impl Mul<f32> for Size {
    type Output = Self;

    fn mul(self, factor: f32) -> Self::Output {
        Self::new(
            (self.width as f32 * factor) as u32,
            (self.height as f32 * factor) as u32,
        )
    }
}

impl Div<f32> for Size {
    type Output = Self;

    fn div(self, factor: f32) -> Self::Output {
        Self::new(
            (self.width as f32 / factor) as u32,
            (self.height as f32 / factor) as u32,
        )
    }
}

impl MulAssign<f32> for Size {
    fn mul_assign(&mut self, factor: f32) {
        *self = *self * factor;
    }
}

impl DivAssign<f32> for Size {
    fn div_assign(&mut self, factor: f32) {
        *self = *self / factor;
    }
}

impl Ord for Size {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if self.width < other.width && self.height < other.height {
            return Ordering::Less;
        }
        if self.width >= other.width && self.height >= other.height {
            return Ordering::Greater;
        }

        self.area()
            .cmp(&other.area())
            .then_with(|| self.width.cmp(&other.width))
            // zero-width sizes share area and width; keep them distinct
            .then_with(|| self.height.cmp(&other.height))
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = GeometryError;

    /// Parse the `WxH` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_pair(s.trim(), "x", "size", s)?;
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_only_when_both_zero() {
        assert!(Size::default().is_null());
        assert!(!Size::new(0, 1).is_null());
        assert!(!Size::new(1, 0).is_null());
    }

    #[test]
    fn test_align_down_in_place_chains() {
        let mut s = Size::new(1923, 1087);
        s.align_down_to(16, 8).bound_to(Size::new(1900, 2000));
        assert_eq!(s, Size::new(1900, 1080));
    }

    #[test]
    fn test_align_up() {
        assert_eq!(Size::new(1921, 1080).aligned_up_to(16, 16), Size::new(1936, 1088));
        assert_eq!(Size::new(64, 64).aligned_up_to(16, 16), Size::new(64, 64));
    }

    #[test]
    fn test_zero_alignment_is_noop() {
        let s = Size::new(641, 479);
        assert_eq!(s.aligned_down_to(0, 0), s);
        assert_eq!(s.aligned_up_to(0, 2), Size::new(641, 480));
    }

    #[test]
    fn test_align_up_saturates_at_largest_multiple() {
        let s = Size::new(u32::MAX, 10).aligned_up_to(16, 4);
        assert_eq!(s.width, u32::MAX / 16 * 16);
        assert_eq!(s.height, 12);
    }

    #[test]
    fn test_bounded_and_expanded_do_not_mutate() {
        let s = Size::new(640, 480);
        assert_eq!(s.bounded_to(Size::new(320, 960)), Size::new(320, 480));
        assert_eq!(s.expanded_to(Size::new(320, 960)), Size::new(640, 960));
        assert_eq!(s, Size::new(640, 480));
    }

    #[test]
    fn test_bounded_to_aspect_ratio_shrinks_width() {
        let s = Size::new(1920, 1080).bounded_to_aspect_ratio(Size::new(4, 3));
        assert_eq!(s, Size::new(1440, 1080));
    }

    #[test]
    fn test_bounded_to_aspect_ratio_shrinks_height() {
        let s = Size::new(1440, 1440).bounded_to_aspect_ratio(Size::new(16, 9));
        assert_eq!(s, Size::new(1440, 810));
    }

    #[test]
    fn test_expanded_to_aspect_ratio() {
        assert_eq!(
            Size::new(1440, 1080).expanded_to_aspect_ratio(Size::new(16, 9)),
            Size::new(1920, 1080)
        );
        assert_eq!(
            Size::new(1920, 1080).expanded_to_aspect_ratio(Size::new(4, 3)),
            Size::new(1920, 1440)
        );
    }

    #[test]
    fn test_aspect_ratio_uses_wide_intermediates() {
        let big = Size::new(4_000_000_000, 3_000_000_000);
        assert_eq!(big.bounded_to_aspect_ratio(Size::new(4, 3)), big);
        assert_eq!(
            big.bounded_to_aspect_ratio(Size::new(1, 1)),
            Size::new(3_000_000_000, 3_000_000_000)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero component")]
    fn test_zero_ratio_asserts_in_debug() {
        let _ = Size::new(640, 480).bounded_to_aspect_ratio(Size::new(0, 3));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_zero_ratio_is_identity_in_release() {
        let s = Size::new(640, 480);
        assert_eq!(s.expanded_to_aspect_ratio(Size::new(4, 0)), s);
    }

    #[test]
    fn test_centered_to_truncates_half_size() {
        let r = Size::new(5, 4).centered_to(Point::new(10, 10));
        assert_eq!(r, Rectangle::new(8, 8, 5, 4));
    }

    #[test]
    fn test_float_scaling_truncates() {
        assert_eq!(Size::new(640, 480) * 1.5, Size::new(960, 720));
        assert_eq!(Size::new(5, 7) * 0.5, Size::new(2, 3));
        assert_eq!(Size::new(640, 480) / 3.0, Size::new(213, 160));
        assert_eq!(Size::new(640, 480) * -1.0, Size::new(0, 0));

        let mut s = Size::new(100, 50);
        s *= 2.0;
        s /= 4.0;
        assert_eq!(s, Size::new(50, 25));
    }

    #[test]
    fn test_ordering_dominance() {
        assert!(Size::new(2, 2) < Size::new(3, 3));
        assert!(!(Size::new(3, 3) < Size::new(3, 2)));
        assert!(Size::new(3, 2) < Size::new(3, 3));
    }

    #[test]
    fn test_ordering_mixed_uses_area_then_width() {
        // 1x10 (area 10) vs 4x3 (area 12): neither dominates
        assert!(Size::new(1, 10) < Size::new(4, 3));
        // equal areas fall back to width
        assert!(Size::new(4, 3) < Size::new(6, 2));
        assert!(Size::new(6, 2) > Size::new(4, 3));
        assert!(Size::new(2, 6) < Size::new(3, 4));
    }

    #[test]
    fn test_ordering_separates_zero_width_sizes() {
        let a = Size::new(0, 2);
        let b = Size::new(0, 3);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(a.max(b), b);
        assert_eq!(b.max(a), b);
        assert!(a <= b && !(b <= a));
    }

    #[test]
    fn test_ordering_area_uses_wide_intermediates() {
        let a = Size::new(u32::MAX, 2);
        let b = Size::new(2, u32::MAX - 1);
        assert!(b < a);
    }

    #[test]
    fn test_display_and_parse() {
        let s = Size::new(1920, 1080);
        assert_eq!(s.to_string(), "1920x1080");
        assert_eq!("1920x1080".parse::<Size>().unwrap(), s);
        assert!("1920*1080".parse::<Size>().is_err());
        assert!("-1x1080".parse::<Size>().is_err());
    }
}
