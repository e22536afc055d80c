//! Emulator shell planning: specification resolution, content strategy, and
//! the container/scale/body composition.
//!
//! # Design
//! - A plan is rebuilt on every render from the configuration; nothing persists.
//! - URLs win over child content and are embedded in a sandboxed iframe.
//! - Scale is a transform on a wrapper and never feeds back into frame geometry.

use crate::config::EmulatorConfig;
use crate::css::Style;
use crate::device::{DeviceSpecification, resolve_specification};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::LookupError;
use crate::frame::{FrameLayout, FrameOptions};
use crate::geometry::{Length, Size, Transform};
use crate::orientation::{LandscapeTransform, Orientation};

/// Sandbox tokens for embedded pages.
pub const IFRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-forms allow-popups";
/// Permissions policy for embedded pages.
pub const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
/// Accessible title for embedded pages.
pub const IFRAME_TITLE: &str = "Mobile Device Emulator Content";
/// Text shown when no specification could be produced.
pub const PLACEHOLDER_MESSAGE: &str = "Error: Failed to load device specifications";

const UNFRAMED_RADIUS: f64 = 8.0;
const CONTAINER_PADDING: &str = "2rem";
const CONTAINER_RADIUS: &str = "0.5rem";
const SCALE_TRANSITION: &str = "transform 0.3s ease";
const OVERLAY_BACKGROUND: &str = "#f3f4f6";

/// Page embedded in an isolated browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedPage {
    /// Page address.
    pub url: String,
    /// `sandbox` attribute value.
    pub sandbox: &'static str,
    /// `allow` attribute value.
    pub allow: &'static str,
    /// `title` attribute value.
    pub title: &'static str,
}

impl EmbeddedPage {
    /// Embed `url` with the standard sandbox and permissions.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sandbox: IFRAME_SANDBOX,
            allow: IFRAME_ALLOW,
            title: IFRAME_TITLE,
        }
    }

    /// Positioning context holding the iframe and its overlay.
    #[must_use]
    pub fn wrapper_style() -> Style {
        Style::new()
            .with("position", "relative")
            .with("width", Length::Percent(100.0))
            .with("height", Length::Percent(100.0))
    }

    /// Inline style for the iframe.
    #[must_use]
    pub fn iframe_style() -> Style {
        Style::new()
            .with("width", Length::Percent(100.0))
            .with("height", Length::Percent(100.0))
            .with("border", "none")
            .with("background-color", "white")
    }

    /// Inline style for the loading overlay covering the iframe.
    #[must_use]
    pub fn overlay_style() -> Style {
        Style::new()
            .with("position", "absolute")
            .with("inset", Length::ZERO)
            .with("display", "flex")
            .with("align-items", "center")
            .with("justify-content", "center")
            .with("background-color", OVERLAY_BACKGROUND)
    }
}

/// What goes inside the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentPlan {
    /// Embed a page.
    Embedded(EmbeddedPage),
    /// Render caller-supplied children unmodified.
    Children,
}

/// Plain clipped box used when the frame is disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnframedLayout {
    /// Box size after orientation.
    pub size: Size,
    /// Rotation in degrees, when the landscape contract rotates.
    pub rotation: Option<f64>,
}

impl UnframedLayout {
    /// Size `spec` for `orientation`.
    #[must_use]
    pub fn compute(
        spec: &DeviceSpecification,
        orientation: Orientation,
        landscape: LandscapeTransform,
    ) -> Self {
        Self {
            size: spec.size_for(orientation),
            rotation: landscape.rotation(orientation),
        }
    }

    /// Inline style for the box.
    #[must_use]
    pub fn style(&self) -> Style {
        Style::new()
            .with_size(self.size)
            .with("overflow", "hidden")
            .with("border-radius", Length::Px(UNFRAMED_RADIUS))
            .with(
                "transform",
                self.rotation.map_or(Transform::None, Transform::Rotate),
            )
    }
}

/// Body of the emulator.
#[derive(Clone, Debug, PartialEq)]
pub enum EmulatorBody {
    /// Full device frame.
    Framed(FrameLayout),
    /// Content in a plain clipped box.
    Unframed(UnframedLayout),
    /// No specification; show this message instead.
    Placeholder(&'static str),
}

/// Everything needed to render one emulator.
#[derive(Clone, Debug, PartialEq)]
pub struct EmulatorPlan {
    /// Specification in use, absent only for placeholders.
    pub spec: Option<DeviceSpecification>,
    /// Frame, plain box, or placeholder.
    pub body: EmulatorBody,
    /// Content strategy.
    pub content: ContentPlan,
    /// Normalized scale factor.
    pub scale: f64,
    /// Container background color.
    pub background_color: String,
    /// Extra container class.
    pub class_name: Option<String>,
    /// Loading overlay timeout.
    pub loading_timeout_ms: Option<u32>,
}

impl EmulatorPlan {
    /// Resolve the specification for `config` and plan the render.
    #[must_use]
    pub fn build(config: &EmulatorConfig, sink: &dyn DiagnosticSink) -> Self {
        let spec = resolve_specification(
            &config.device_type,
            config.custom_specification.as_ref(),
            sink,
        );
        Self::from_resolved(config, Some(spec), sink)
    }

    /// Plan the render around an already-resolved specification.
    ///
    /// A missing specification yields [`EmulatorBody::Placeholder`].
    #[must_use]
    pub fn from_resolved(
        config: &EmulatorConfig,
        spec: Option<DeviceSpecification>,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let body = match &spec {
            None => {
                sink.emit(&Diagnostic::from(LookupError::MissingSpecification));
                EmulatorBody::Placeholder(PLACEHOLDER_MESSAGE)
            }
            Some(spec) if config.show_frame => EmulatorBody::Framed(FrameLayout::compute(
                spec,
                FrameOptions {
                    orientation: config.orientation,
                    show_buttons: config.show_buttons,
                    landscape: config.landscape_transform,
                },
            )),
            Some(spec) => EmulatorBody::Unframed(UnframedLayout::compute(
                spec,
                config.orientation,
                config.landscape_transform,
            )),
        };
        let content = config
            .embedded_url()
            .map_or(ContentPlan::Children, |url| {
                ContentPlan::Embedded(EmbeddedPage::new(url))
            });
        Self {
            spec,
            body,
            content,
            scale: config.effective_scale(sink),
            background_color: config.background_color.clone(),
            class_name: config.class_name.clone(),
            loading_timeout_ms: config.loading_timeout_ms,
        }
    }

    /// Returns `true` when only the placeholder should be rendered.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.body, EmulatorBody::Placeholder(_))
    }

    /// Inline style for the outer container.
    #[must_use]
    pub fn container_style(&self) -> Style {
        let style = Style::new()
            .with("display", "flex")
            .with("justify-content", "center")
            .with("align-items", "center")
            .with("padding", CONTAINER_PADDING);
        let style = if self.background_color.is_empty() {
            style
        } else {
            style.with("background-color", &self.background_color)
        };
        style
            .with("border-radius", CONTAINER_RADIUS)
            .with("max-width", Length::Percent(100.0))
            .with("overflow", "auto")
    }

    /// Inline style for the scale wrapper.
    #[must_use]
    pub fn scale_style(&self) -> Style {
        Style::new()
            .with("transform", Transform::Scale(self.scale))
            .with("transform-origin", "center")
            .with("transition", SCALE_TRANSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DEFAULT_SPECIFICATION, DeviceType, GALAXY_S21, IPHONE_14_PRO};
    use crate::diagnostics::RecordingSink;

    #[test]
    fn url_takes_precedence_over_children() {
        let sink = RecordingSink::new();
        let config = EmulatorConfig::new(DeviceType::Iphone14Pro).with_url("https://example.com");
        let plan = EmulatorPlan::build(&config, &sink);
        match plan.content {
            ContentPlan::Embedded(page) => {
                assert_eq!(page.url, "https://example.com");
                assert_eq!(page.sandbox, IFRAME_SANDBOX);
                assert!(page.allow.contains("gyroscope"));
            }
            ContentPlan::Children => panic!("expected embedded page"),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn blank_url_renders_children() {
        let config = EmulatorConfig::default().with_url("  ");
        let plan = EmulatorPlan::build(&config, &RecordingSink::new());
        assert_eq!(plan.content, ContentPlan::Children);
    }

    #[test]
    fn unframed_box_uses_oriented_dimensions() {
        let config = EmulatorConfig::new(DeviceType::GalaxyS21)
            .with_show_frame(false)
            .with_orientation(Orientation::Landscape);
        let plan = EmulatorPlan::build(&config, &RecordingSink::new());
        let EmulatorBody::Unframed(layout) = plan.body else {
            panic!("expected unframed body");
        };
        assert_eq!(layout.size, Size::new(800.0, 360.0));
        assert_eq!(layout.rotation, None);
        assert_eq!(layout.style().get("border-radius"), Some("8px"));
    }

    #[test]
    fn unframed_box_rotates_when_requested() {
        let layout = UnframedLayout::compute(
            &GALAXY_S21,
            Orientation::Landscape,
            LandscapeTransform::SwapAndRotate,
        );
        assert_eq!(layout.style().get("transform"), Some("rotate(90deg)"));
    }

    #[test]
    fn framed_body_carries_options() {
        let config = EmulatorConfig::new(DeviceType::Iphone14Pro).with_show_buttons(false);
        let plan = EmulatorPlan::build(&config, &RecordingSink::new());
        let EmulatorBody::Framed(layout) = &plan.body else {
            panic!("expected framed body");
        };
        assert_eq!(layout.spec, IPHONE_14_PRO);
        assert!(layout.buttons.is_empty());
        assert!(layout.notch.is_some());
    }

    #[test]
    fn missing_specification_renders_placeholder() {
        let sink = RecordingSink::new();
        let plan = EmulatorPlan::from_resolved(&EmulatorConfig::default(), None, &sink);
        assert!(plan.is_placeholder());
        assert_eq!(plan.body, EmulatorBody::Placeholder(PLACEHOLDER_MESSAGE));
        assert_eq!(sink.events(), vec![Diagnostic::MissingSpecification]);
    }

    #[test]
    fn unknown_device_still_renders_default_frame() {
        let sink = RecordingSink::new();
        let plan = EmulatorPlan::build(&EmulatorConfig::new(DeviceType::parse("foo")), &sink);
        assert_eq!(plan.spec, Some(DEFAULT_SPECIFICATION));
        assert!(!plan.is_placeholder());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn scale_is_cosmetic() {
        let sink = RecordingSink::new();
        let base = EmulatorPlan::build(&EmulatorConfig::new(DeviceType::Pixel6), &sink);
        let scaled = EmulatorPlan::build(
            &EmulatorConfig::new(DeviceType::Pixel6).with_scale(0.5),
            &sink,
        );
        assert_eq!(base.body, scaled.body);
        assert_eq!(scaled.scale_style().get("transform"), Some("scale(0.5)"));
        assert_eq!(base.scale_style().get("transform"), Some("scale(1)"));
    }

    #[test]
    fn container_background_is_optional() {
        let sink = RecordingSink::new();
        let plain = EmulatorPlan::build(&EmulatorConfig::default(), &sink);
        assert_eq!(plain.container_style().get("background-color"), None);
        let tinted = EmulatorPlan::build(
            &EmulatorConfig::default().with_background_color("#eee"),
            &sink,
        );
        assert_eq!(tinted.container_style().get("background-color"), Some("#eee"));
        assert_eq!(tinted.container_style().get("padding"), Some("2rem"));
    }
}
