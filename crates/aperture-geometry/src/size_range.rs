//! Inclusive range of sizes with optional quantization steps.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, parse_pair};
use crate::size::Size;

/// A range of sizes within `[min, max]` on both axes.
///
/// Valid sizes are
/// ```text
///   width  = min.width  + h_step * i   (width  <= max.width)
///   height = min.height + v_step * j   (height <= max.height)
/// ```
/// Steps are not alignments: `min` need not be a multiple of the step.
/// A step of 0 only guarantees the endpoints, no intermediate size.
///
/// Equality compares `min` and `max` only. Two ranges with the same bounds
/// but different steps are equal.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct SizeRange {
    pub min: Size,
    pub max: Size,
    pub h_step: u32,
    pub v_step: u32,
}

impl SizeRange {
    /// A range covering exactly one size, with steps of 1.
    pub const fn single(size: Size) -> Self {
        Self::with_steps(size, size, 1, 1)
    }

    /// A range from `min` to `max` with steps of 1.
    pub const fn new(min: Size, max: Size) -> Self {
        Self::with_steps(min, max, 1, 1)
    }

    /// A range from `min` to `max` with explicit steps (0 disables a step).
    pub const fn with_steps(min: Size, max: Size, h_step: u32, v_step: u32) -> Self {
        Self {
            min,
            max,
            h_step,
            v_step,
        }
    }

    /// True if `size` is inside the bounds and on the step grid.
    pub fn contains(&self, size: Size) -> bool {
        if size.width < self.min.width
            || size.width > self.max.width
            || size.height < self.min.height
            || size.height > self.max.height
        {
            return false;
        }

        on_step(size.width - self.min.width, self.h_step)
            && on_step(size.height - self.min.height, self.v_step)
    }
}

fn on_step(offset: u32, step: u32) -> bool {
    step == 0 || offset % step == 0
}

impl PartialEq for SizeRange {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl Eq for SizeRange {}

impl From<Size> for SizeRange {
    fn from(size: Size) -> Self {
        Self::single(size)
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})-({})/(+{},+{})",
            self.min, self.max, self.h_step, self.v_step
        )
    }
}

impl FromStr for SizeRange {
    type Err = GeometryError;

    /// Parse the `(min)-(max)/(+h,+v)` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GeometryError::parse("size range", s);

        let rest = s.trim().strip_prefix('(').ok_or_else(malformed)?;
        let (min, rest) = rest.split_once(")-(").ok_or_else(malformed)?;
        let (max, steps) = rest.split_once(")/(+").ok_or_else(malformed)?;
        let steps = steps.strip_suffix(')').ok_or_else(malformed)?;
        let (h_step, v_step) = parse_pair(steps, ",+", "size range", s)?;

        Ok(Self {
            min: min.parse()?,
            max: max.parse()?,
            h_step,
            v_step,
        })
    }
}
