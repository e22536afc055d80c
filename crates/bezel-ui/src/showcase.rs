//! Showcase state transitions, kept DOM-free so they are testable natively.
//!
//! # Design
//! - The showcase holds a single [`EmulatorConfig`]; every control maps to a
//!   [`ShowcaseAction`] applied through [`apply`].
//! - Host pages may seed the initial configuration with a JSON blob.

use bezel_core::{ConfigResult, DeviceType, EmulatorConfig, presets};

/// Element id of the optional JSON configuration block on the host page.
pub const CONFIG_ELEMENT_ID: &str = "bezel-config";

/// Smallest scale offered by the slider.
pub const MIN_SCALE: f64 = 0.25;
/// Largest scale offered by the slider.
pub const MAX_SCALE: f64 = 1.5;

/// User interactions in the showcase.
#[derive(Clone, Debug, PartialEq)]
pub enum ShowcaseAction {
    /// Pick a device by identifier.
    SelectDevice(String),
    /// Flip between portrait and landscape.
    ToggleOrientation,
    /// Show or hide the bezel.
    ToggleFrame,
    /// Show or hide hardware buttons.
    ToggleButtons,
    /// Set the display scale.
    SetScale(f64),
}

/// Apply `action` to `config`, returning the updated configuration.
#[must_use]
pub fn apply(config: &EmulatorConfig, action: ShowcaseAction) -> EmulatorConfig {
    let mut next = config.clone();
    match action {
        ShowcaseAction::SelectDevice(key) => next.device_type = DeviceType::parse(&key),
        ShowcaseAction::ToggleOrientation => next.orientation = config.orientation.toggled(),
        ShowcaseAction::ToggleFrame => next.show_frame = !config.show_frame,
        ShowcaseAction::ToggleButtons => next.show_buttons = !config.show_buttons,
        ShowcaseAction::SetScale(scale) if scale.is_finite() => {
            next.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
        ShowcaseAction::SetScale(_) => {}
    }
    next
}

/// Device picker entries as `(identifier, label)` pairs.
#[must_use]
pub fn device_options() -> Vec<(String, String)> {
    presets()
        .map(|(device, _)| (device.as_str().to_string(), device.label().to_string()))
        .collect()
}

/// Initial configuration from the host page's JSON block, if any.
///
/// # Errors
///
/// Propagates parse and validation failures from [`EmulatorConfig::from_json`].
pub fn initial_config(raw: Option<&str>) -> ConfigResult<EmulatorConfig> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => EmulatorConfig::from_json(raw),
        None => Ok(EmulatorConfig::default()),
    }
}
