//! Device orientation and the landscape presentation contract.
//!
//! # Design
//! - Specifications are stored in portrait; orientation is applied at layout time.
//! - Landscape swaps the box dimensions. Rotating the box as well is opt-in.

use serde::{Deserialize, Serialize};

/// Physical orientation of the emulated device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tall presentation; specification dimensions are used as-is.
    #[default]
    Portrait,
    /// Wide presentation; width and height are swapped.
    Landscape,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Landscape`].
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }

    /// The opposite orientation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    /// Lowercase identifier used in markup and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// How a landscape frame is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LandscapeTransform {
    /// Swap width and height only; content is never rotated.
    #[default]
    Swap,
    /// Swap width and height and rotate the box by 90 degrees.
    SwapAndRotate,
}

impl LandscapeTransform {
    /// Rotation in degrees applied to a box presented in `orientation`.
    #[must_use]
    pub const fn rotation(self, orientation: Orientation) -> Option<f64> {
        match (self, orientation) {
            (Self::SwapAndRotate, Orientation::Landscape) => Some(90.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_round_trips() {
        assert_eq!(Orientation::Portrait.toggled(), Orientation::Landscape);
        assert_eq!(Orientation::Portrait.toggled().toggled(), Orientation::Portrait);
        assert!(Orientation::Landscape.is_landscape());
        assert!(!Orientation::Portrait.is_landscape());
    }

    #[test]
    fn rotation_only_applies_to_rotated_landscape() {
        assert_eq!(LandscapeTransform::Swap.rotation(Orientation::Landscape), None);
        assert_eq!(
            LandscapeTransform::SwapAndRotate.rotation(Orientation::Portrait),
            None
        );
        assert_eq!(
            LandscapeTransform::SwapAndRotate.rotation(Orientation::Landscape),
            Some(90.0)
        );
    }

    #[test]
    fn serde_uses_lowercase_identifiers() {
        let parsed: Orientation = serde_json::from_str("\"landscape\"").expect("orientation");
        assert_eq!(parsed, Orientation::Landscape);
        let transform: LandscapeTransform =
            serde_json::from_str("\"swap-and-rotate\"").expect("transform");
        assert_eq!(transform, LandscapeTransform::SwapAndRotate);
        assert_eq!(Orientation::Portrait.as_str(), "portrait");
    }
}
