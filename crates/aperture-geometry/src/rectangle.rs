//! Positioned rectangle in a caller-defined coordinate space.
//!
//! Rectangles identify an area of an image: a top-left corner `(x, y)` plus
//! a width and height. The unit and the origin the corner refers to depend
//! on where the rectangle is used (sensor array, ISP crop, output buffer).
//! Nothing constrains a rectangle to lie inside any bound; bounding is done
//! explicitly with [`Rectangle::bounded_to`] and [`Rectangle::enclosed_in`].

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, parse_pair};
use crate::point::Point;
use crate::size::Size;

#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable,
)]
pub struct Rectangle {
    /// Horizontal coordinate of the top-left corner.
    pub x: i32,
    /// Vertical coordinate of the top-left corner.
    pub y: i32,
    /// Distance between the left and right sides.
    pub width: u32,
    /// Distance between the top and bottom sides.
    pub height: u32,
}

impl Rectangle {
    /// Rectangle with its top-left corner at `(x, y)`.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` with its top-left corner at `(x, y)`.
    #[inline]
    pub const fn with_size(x: i32, y: i32, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Rectangle of `size` with its top-left corner at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::with_size(0, 0, size)
    }

    /// True if both the width and height are 0.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The top-left corner.
    #[inline]
    pub const fn top_left(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center point, using truncating division of the size.
    pub fn center(self) -> Point {
        let x = i64::from(self.x) + i64::from(self.width / 2);
        let y = i64::from(self.y) + i64::from(self.height / 2);
        Point::new(x as i32, y as i32)
    }

    fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Apply a non-uniform rational scaling in place.
    ///
    /// `x` and `width` are multiplied by `numerator.width / denominator.width`,
    /// `y` and `height` by `numerator.height / denominator.height`. Products
    /// are computed in 64 bits and the quotient truncates toward zero.
    ///
    /// Both denominator components must be non-zero. Debug builds assert on
    /// it; release builds log a warning and leave the rectangle unchanged.
    pub fn scale_by(&mut self, numerator: Size, denominator: Size) -> &mut Self {
        debug_assert!(
            denominator.width != 0 && denominator.height != 0,
            "scale_by: denominator {denominator} has a zero component"
        );
        if denominator.width == 0 || denominator.height == 0 {
            tracing::warn!(
                "scale_by: denominator {denominator} has a zero component, rectangle left unchanged"
            );
            return self;
        }

        self.x = (i64::from(self.x) * i64::from(numerator.width) / i64::from(denominator.width))
            as i32;
        self.y = (i64::from(self.y) * i64::from(numerator.height)
            / i64::from(denominator.height)) as i32;
        self.width = (u64::from(self.width) * u64::from(numerator.width)
            / u64::from(denominator.width)) as u32;
        self.height = (u64::from(self.height) * u64::from(numerator.height)
            / u64::from(denominator.height)) as u32;

        self
    }

    /// Shift the top-left corner by `point`; the size is unchanged.
    pub fn translate_by(&mut self, point: Point) -> &mut Self {
        self.x = self.x.wrapping_add(point.x);
        self.y = self.y.wrapping_add(point.y);
        self
    }

    /// Copy of this rectangle with [`Rectangle::scale_by`] applied.
    #[must_use]
    pub fn scaled_by(mut self, numerator: Size, denominator: Size) -> Self {
        self.scale_by(numerator, denominator);
        self
    }

    /// Copy of this rectangle shifted by `point`.
    #[must_use]
    pub fn translated_by(mut self, point: Point) -> Self {
        self.translate_by(point);
        self
    }

    /// Standard intersection with `bound`.
    ///
    /// Each axis is handled on its own: when the rectangles do not overlap
    /// horizontally the width is 0, and likewise for the height, but the
    /// other dimension keeps whatever span it had. A zero in either
    /// dimension means "no intersection".
    #[must_use]
    pub fn bounded_to(self, bound: Rectangle) -> Self {
        let top_left_x = self.x.max(bound.x);
        let top_left_y = self.y.max(bound.y);
        let bottom_right_x = self.right().min(bound.right());
        let bottom_right_y = self.bottom().min(bound.bottom());

        let width = (bottom_right_x - i64::from(top_left_x)).max(0) as u32;
        let height = (bottom_right_y - i64::from(top_left_y)).max(0) as u32;

        Self::new(top_left_x, top_left_y, width, height)
    }

    /// Move this rectangle so it does not extend beyond `boundary`.
    ///
    /// Edges outside the boundary are brought back by translation. The size
    /// only changes when a dimension is larger than the boundary's, in which
    /// case it is clipped to the boundary's. This is not an intersection;
    /// see [`Rectangle::bounded_to`] for that.
    #[must_use]
    pub fn enclosed_in(self, boundary: Rectangle) -> Self {
        let mut result = self.bounded_to(Self::with_size(self.x, self.y, boundary.size()));

        // result is no larger than boundary, so the ranges are never empty.
        result.x = i64::from(result.x)
            .clamp(i64::from(boundary.x), boundary.right() - i64::from(result.width))
            as i32;
        result.y = i64::from(result.y)
            .clamp(i64::from(boundary.y), boundary.bottom() - i64::from(result.height))
            as i32;

        if result != self {
            tracing::trace!(from = %self, to = %result, %boundary, "rectangle enclosed");
        }

        result
    }
}

impl From<Size> for Rectangle {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}x{})/{}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl FromStr for Rectangle {
    type Err = GeometryError;

    /// Parse the `(XxY)/WxH` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, size) = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.split_once(")/"))
            .ok_or_else(|| GeometryError::parse("rectangle", s))?;

        let (x, y) = parse_pair(position, "x", "rectangle", s)?;
        let (width, height) = parse_pair(size, "x", "rectangle", s)?;

        Ok(Self::new(x, y, width, height))
    }
}
