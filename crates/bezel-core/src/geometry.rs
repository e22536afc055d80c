//! Length, inset, corner, and transform primitives for frame layouts.
//!
//! # Design
//! - Values mirror CSS units so layouts map one-to-one onto inline styles.
//! - Pixel values are `f64`; half-pixel radii (e.g. `17.5px`) are expected.

use std::fmt::{self, Display, Formatter};

use crate::orientation::Orientation;

/// A CSS length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the containing block (or of the element itself for radii
    /// and translations).
    Percent(f64),
    /// Left to normal flow.
    #[default]
    Auto,
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Returns `true` when the length defers to normal flow.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Pixel value when the length is absolute.
    #[must_use]
    pub const fn as_px(self) -> Option<f64> {
        match self {
            Self::Px(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for Length {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(formatter, "{value}px"),
            Self::Percent(value) => write!(formatter, "{value}%"),
            Self::Auto => formatter.write_str("auto"),
        }
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Build a size from its extents.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size with width and height exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Interpret `self` as a portrait size and present it in `orientation`.
    #[must_use]
    pub const fn oriented(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => self,
            Orientation::Landscape => self.swapped(),
        }
    }
}

/// Absolute-position offsets; `Auto` sides are left unset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Offset from the top edge.
    pub top: Length,
    /// Offset from the right edge.
    pub right: Length,
    /// Offset from the bottom edge.
    pub bottom: Length,
    /// Offset from the left edge.
    pub left: Length,
}

impl Insets {
    /// Offsets pinned to the top and left edges.
    #[must_use]
    pub const fn top_left(top: Length, left: Length) -> Self {
        Self {
            top,
            right: Length::Auto,
            bottom: Length::Auto,
            left,
        }
    }

    /// Offsets pinned to the top and right edges.
    #[must_use]
    pub const fn top_right(top: Length, right: Length) -> Self {
        Self {
            top,
            right,
            bottom: Length::Auto,
            left: Length::Auto,
        }
    }

    /// Offsets pinned to the bottom and left edges.
    #[must_use]
    pub const fn bottom_left(bottom: Length, left: Length) -> Self {
        Self {
            top: Length::Auto,
            right: Length::Auto,
            bottom,
            left,
        }
    }
}

/// Per-corner border radii.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    /// Top-left corner.
    pub top_left: Length,
    /// Top-right corner.
    pub top_right: Length,
    /// Bottom-right corner.
    pub bottom_right: Length,
    /// Bottom-left corner.
    pub bottom_left: Length,
}

impl CornerRadii {
    /// Same radius on every corner.
    #[must_use]
    pub const fn uniform(radius: Length) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Returns `true` when all four corners share one radius.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

/// Single CSS transform function.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Transform {
    /// No transform.
    #[default]
    None,
    /// Horizontal translation.
    TranslateX(Length),
    /// Vertical translation.
    TranslateY(Length),
    /// Clockwise rotation in degrees.
    Rotate(f64),
    /// Uniform scale factor.
    Scale(f64),
}

impl Display for Transform {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("none"),
            Self::TranslateX(length) => write!(formatter, "translateX({length})"),
            Self::TranslateY(length) => write!(formatter, "translateY({length})"),
            Self::Rotate(degrees) => write!(formatter, "rotate({degrees}deg)"),
            Self::Scale(factor) => write!(formatter, "scale({factor})"),
        }
    }
}
