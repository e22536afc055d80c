//! Emulator configuration, defaults, and validation.
//!
//! # Design
//! - Every default lives in [`defaults`]; serde, props, and builders read from it.
//! - JSON input uses camelCase keys and tolerates missing fields.
//! - Strict validation is available to hosts; rendering itself only normalizes.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceSpecification, DeviceType};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ConfigError, ConfigResult};
use crate::orientation::{LandscapeTransform, Orientation};

/// Default values for [`EmulatorConfig`] fields.
pub mod defaults {
    use crate::device::DeviceType;
    use crate::orientation::{LandscapeTransform, Orientation};

    /// Device shown when none is selected.
    pub const DEVICE_TYPE: DeviceType = DeviceType::Iphone13;
    /// Initial orientation.
    pub const ORIENTATION: Orientation = Orientation::Portrait;
    /// Uniform scale applied to the whole frame.
    pub const SCALE: f64 = 1.0;
    /// Draw the bezel, cutout, and buttons.
    pub const SHOW_FRAME: bool = true;
    /// Draw hardware buttons.
    pub const SHOW_BUTTONS: bool = true;
    /// Container background; empty means transparent.
    pub const BACKGROUND_COLOR: &str = "";
    /// Landscape presentation contract.
    pub const LANDSCAPE_TRANSFORM: LandscapeTransform = LandscapeTransform::Swap;
    /// Embedded page loading timeout; `None` waits indefinitely.
    pub const LOADING_TIMEOUT_MS: Option<u32> = None;
}

/// Per-render emulator input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmulatorConfig {
    /// Device preset, `custom`, or an unknown identifier.
    pub device_type: DeviceType,
    /// Specification used when `device_type` is `custom`.
    #[serde(alias = "customSpecs")]
    pub custom_specification: Option<DeviceSpecification>,
    /// Caller-controlled orientation.
    pub orientation: Orientation,
    /// Uniform cosmetic scale.
    pub scale: f64,
    /// Draw the bezel; when `false` content sits in a plain clipped box.
    pub show_frame: bool,
    /// Draw hardware buttons.
    pub show_buttons: bool,
    /// Page to embed; takes precedence over child content.
    pub url: Option<String>,
    /// Extra class for the outer container.
    pub class_name: Option<String>,
    /// Container background color.
    pub background_color: String,
    /// Landscape presentation contract.
    pub landscape_transform: LandscapeTransform,
    /// Dismiss the loading overlay after this many milliseconds.
    pub loading_timeout_ms: Option<u32>,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::new(defaults::DEVICE_TYPE)
    }
}

impl EmulatorConfig {
    /// Configuration for `device_type` with every other field defaulted.
    #[must_use]
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            device_type,
            custom_specification: None,
            orientation: defaults::ORIENTATION,
            scale: defaults::SCALE,
            show_frame: defaults::SHOW_FRAME,
            show_buttons: defaults::SHOW_BUTTONS,
            url: None,
            class_name: None,
            background_color: defaults::BACKGROUND_COLOR.to_string(),
            landscape_transform: defaults::LANDSCAPE_TRANSFORM,
            loading_timeout_ms: defaults::LOADING_TIMEOUT_MS,
        }
    }

    /// Custom device configuration.
    #[must_use]
    pub fn custom(specification: DeviceSpecification) -> Self {
        Self {
            custom_specification: Some(specification),
            ..Self::new(DeviceType::Custom)
        }
    }

    /// Set the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Toggle the frame.
    #[must_use]
    pub fn with_show_frame(mut self, show_frame: bool) -> Self {
        self.show_frame = show_frame;
        self
    }

    /// Toggle the hardware buttons.
    #[must_use]
    pub fn with_show_buttons(mut self, show_buttons: bool) -> Self {
        self.show_buttons = show_buttons;
        self
    }

    /// Embed `url`.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the container background.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Add a container class.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Choose the landscape contract.
    #[must_use]
    pub fn with_landscape_transform(mut self, transform: LandscapeTransform) -> Self {
        self.landscape_transform = transform;
        self
    }

    /// Dismiss the loading overlay after `timeout_ms`.
    #[must_use]
    pub fn with_loading_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.loading_timeout_ms = Some(timeout_ms);
        self
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::InvalidField`] when [`EmulatorConfig::validate`] fails.
    pub fn from_json(input: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for a non-positive or non-finite
    /// scale, a blank URL, or a zero loading timeout.
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_valid_scale(self.scale) {
            return Err(ConfigError::InvalidField {
                field: "scale",
                value: Some(self.scale.to_string()),
                reason: "must be a positive finite number",
            });
        }
        if let Some(url) = self.url.as_deref().filter(|url| url.trim().is_empty()) {
            return Err(ConfigError::InvalidField {
                field: "url",
                value: Some(url.to_string()),
                reason: "must not be blank",
            });
        }
        if self.loading_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidField {
                field: "loadingTimeoutMs",
                value: Some("0".to_string()),
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// URL to embed, trimmed; blank values mean no URL.
    #[must_use]
    pub fn embedded_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Scale to apply, reporting and replacing invalid values with the default.
    #[must_use]
    pub fn effective_scale(&self, sink: &dyn DiagnosticSink) -> f64 {
        if is_valid_scale(self.scale) {
            self.scale
        } else {
            sink.emit(&Diagnostic::InvalidScale { value: self.scale });
            defaults::SCALE
        }
    }
}

fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}
