//! Device specification records, the fixed preset table, and lookup.
//!
//! # Design
//! - Presets are `const` records; the table is an ordered static array looked up by key.
//! - Lookup never fails outward: unknown identifiers resolve to
//!   [`DEFAULT_SPECIFICATION`] and are reported through a [`DiagnosticSink`].
//! - Custom specifications are returned verbatim without range validation.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::LookupError;
use crate::geometry::Size;
use crate::orientation::Orientation;

/// Shape of the camera/sensor cutout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotchVariant {
    /// No cutout.
    #[default]
    None,
    /// Classic notch tab hanging from the top edge.
    Notch,
    /// Floating pill below the top edge.
    DynamicIsland,
    /// Small circular camera hole.
    PunchHole,
}

impl NotchVariant {
    /// Identifier used in configuration and markup class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Notch => "notch",
            Self::DynamicIsland => "dynamic-island",
            Self::PunchHole => "punch-hole",
        }
    }
}

/// Geometry and style of one device frame, always in portrait.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpecification {
    /// Portrait width in pixels.
    pub width: u32,
    /// Portrait height in pixels.
    pub height: u32,
    /// Outer frame corner radius.
    pub border_radius: u32,
    /// CSS color of the bezel.
    pub bezel_color: Cow<'static, str>,
    /// Bezel thickness, applied as frame padding.
    pub bezel_thickness: u32,
    /// Cutout variant.
    #[serde(default, rename = "notchType", alias = "notchVariant")]
    pub notch: NotchVariant,
    /// Cutout width; ignored for [`NotchVariant::None`].
    #[serde(default)]
    pub notch_width: u32,
    /// Cutout height; ignored for [`NotchVariant::None`].
    #[serde(default)]
    pub notch_height: u32,
}

impl DeviceSpecification {
    /// Portrait dimensions.
    #[must_use]
    pub fn portrait_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Dimensions presented in `orientation`.
    #[must_use]
    pub fn size_for(&self, orientation: Orientation) -> Size {
        self.portrait_size().oriented(orientation)
    }

    /// Corner radius of the screen inside the bezel, clamped at zero.
    #[must_use]
    pub const fn screen_radius(&self) -> u32 {
        self.border_radius.saturating_sub(self.bezel_thickness)
    }
}

impl Default for DeviceSpecification {
    fn default() -> Self {
        DEFAULT_SPECIFICATION
    }
}

/// iPhone 13: classic notch.
pub const IPHONE_13: DeviceSpecification = DeviceSpecification {
    width: 390,
    height: 844,
    border_radius: 44,
    bezel_color: Cow::Borrowed("#1A1A1C"),
    bezel_thickness: 12,
    notch: NotchVariant::Notch,
    notch_width: 150,
    notch_height: 34,
};

/// iPhone 14 Pro: dynamic island.
pub const IPHONE_14_PRO: DeviceSpecification = DeviceSpecification {
    width: 393,
    height: 852,
    border_radius: 53,
    bezel_color: Cow::Borrowed("#1A1A1C"),
    bezel_thickness: 12,
    notch: NotchVariant::DynamicIsland,
    notch_width: 120,
    notch_height: 35,
};

/// Galaxy S21: punch hole.
pub const GALAXY_S21: DeviceSpecification = DeviceSpecification {
    width: 360,
    height: 800,
    border_radius: 34,
    bezel_color: Cow::Borrowed("#121212"),
    bezel_thickness: 10,
    notch: NotchVariant::PunchHole,
    notch_width: 10,
    notch_height: 10,
};

/// Pixel 6: punch hole with a thicker bezel.
pub const PIXEL_6: DeviceSpecification = DeviceSpecification {
    width: 393,
    height: 830,
    border_radius: 30,
    bezel_color: Cow::Borrowed("#1F1F1F"),
    bezel_thickness: 14,
    notch: NotchVariant::PunchHole,
    notch_width: 10,
    notch_height: 10,
};

/// Fallback used whenever a specification cannot be resolved.
pub const DEFAULT_SPECIFICATION: DeviceSpecification = IPHONE_13;

/// Ordered preset table keyed by device identifier.
static PRESETS: [(&str, DeviceSpecification); 4] = [
    ("iphone13", IPHONE_13),
    ("iphone14Pro", IPHONE_14_PRO),
    ("galaxyS21", GALAXY_S21),
    ("pixel6", PIXEL_6),
];

/// Iterate the preset table in display order.
pub fn presets() -> impl Iterator<Item = (DeviceType, &'static DeviceSpecification)> {
    PRESETS
        .iter()
        .map(|(key, spec)| (DeviceType::parse(key), spec))
}

/// Device selector: a preset, `custom`, or an unrecognised identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    /// iPhone 13.
    #[default]
    Iphone13,
    /// iPhone 14 Pro.
    Iphone14Pro,
    /// Galaxy S21.
    GalaxyS21,
    /// Pixel 6.
    Pixel6,
    /// Caller-supplied specification.
    Custom,
    /// Identifier with no preset; resolves to the default specification.
    Unknown(String),
}

impl DeviceType {
    /// Parse an identifier; never fails, unknown values are preserved.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "iphone13" => Self::Iphone13,
            "iphone14Pro" => Self::Iphone14Pro,
            "galaxyS21" => Self::GalaxyS21,
            "pixel6" => Self::Pixel6,
            "custom" => Self::Custom,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Identifier as accepted by [`DeviceType::parse`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Iphone13 => "iphone13",
            Self::Iphone14Pro => "iphone14Pro",
            Self::GalaxyS21 => "galaxyS21",
            Self::Pixel6 => "pixel6",
            Self::Custom => "custom",
            Self::Unknown(value) => value,
        }
    }

    /// Human-readable name for pickers.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Iphone13 => "iPhone 13",
            Self::Iphone14Pro => "iPhone 14 Pro",
            Self::GalaxyS21 => "Galaxy S21",
            Self::Pixel6 => "Pixel 6",
            Self::Custom => "Custom",
            Self::Unknown(value) => value,
        }
    }

    /// Preset record for this selector, if it names one.
    #[must_use]
    pub fn preset(&self) -> Option<&'static DeviceSpecification> {
        if matches!(self, Self::Custom | Self::Unknown(_)) {
            return None;
        }
        let key = self.as_str();
        PRESETS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, spec)| spec)
    }
}

impl FromStr for DeviceType {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

impl From<String> for DeviceType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DeviceType> for String {
    fn from(value: DeviceType) -> Self {
        match value {
            DeviceType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Resolve a specification without falling back.
///
/// # Errors
///
/// Returns [`LookupError::UnknownDeviceType`] when `device_type` names no
/// preset, or when it is [`DeviceType::Custom`] and `custom` is `None`.
pub fn try_resolve_specification(
    device_type: &DeviceType,
    custom: Option<&DeviceSpecification>,
) -> Result<DeviceSpecification, LookupError> {
    let resolved = match device_type {
        DeviceType::Custom => custom.cloned(),
        preset => preset.preset().cloned(),
    };
    resolved.ok_or_else(|| LookupError::UnknownDeviceType {
        requested: device_type.to_string(),
    })
}

/// Resolve a specification, substituting [`DEFAULT_SPECIFICATION`] and
/// emitting a diagnostic when the selector cannot be honoured.
pub fn resolve_specification(
    device_type: &DeviceType,
    custom: Option<&DeviceSpecification>,
    sink: &dyn DiagnosticSink,
) -> DeviceSpecification {
    try_resolve_specification(device_type, custom).unwrap_or_else(|err| {
        sink.emit(&Diagnostic::from(err));
        DEFAULT_SPECIFICATION
    })
}

/// Parse `name` and resolve it with [`resolve_specification`].
pub fn resolve_specification_by_name(
    name: &str,
    custom: Option<&DeviceSpecification>,
    sink: &dyn DiagnosticSink,
) -> DeviceSpecification {
    resolve_specification(&DeviceType::parse(name), custom, sink)
}
