//! Frame, screen, cutout, and hardware button layout.
//!
//! # Design
//! - Layout is a pure function of the specification and [`FrameOptions`].
//! - Centred cutouts use percentages plus a translation, so they hold
//!   regardless of the host's box sizing.
//! - Stacking, bottom to top: content, cutout (`z-index: 10`), buttons on the
//!   outer frame edge.

use crate::config::defaults;
use crate::css::Style;
use crate::device::{DEFAULT_SPECIFICATION, DeviceSpecification, NotchVariant};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::LookupError;
use crate::geometry::{CornerRadii, Insets, Length, Size, Transform};
use crate::orientation::{LandscapeTransform, Orientation};

const FRAME_SHADOW: &str = "0 25px 50px -12px rgba(0, 0, 0, 0.25)";
const FRAME_TRANSITION: &str = "transform 0.5s ease";
const SCREEN_BACKGROUND: &str = "#fff";
const NOTCH_Z_INDEX: u32 = 10;

const BUTTON_COLOR: &str = "#0F0F0F";
const BUTTON_RADIUS: f64 = 2.0;
const BUTTON_DEPTH: f64 = 5.0;
const BUTTON_OFFSET: f64 = -5.0;

/// Presentation options for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOptions {
    /// Device orientation.
    pub orientation: Orientation,
    /// Render power and volume buttons.
    pub show_buttons: bool,
    /// Landscape presentation contract.
    pub landscape: LandscapeTransform,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            orientation: defaults::ORIENTATION,
            show_buttons: defaults::SHOW_BUTTONS,
            landscape: defaults::LANDSCAPE_TRANSFORM,
        }
    }
}

/// Hardware button identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Power/side button.
    Power,
    /// Upper volume rocker.
    VolumeUp,
    /// Lower volume rocker.
    VolumeDown,
}

impl ButtonKind {
    /// Class-name friendly identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Left,
    Right,
}

struct ButtonPlacement {
    kind: ButtonKind,
    edge: Edge,
    length: f64,
    portrait_offset: f64,
    landscape_offset: f64,
}

const BUTTONS: [ButtonPlacement; 3] = [
    ButtonPlacement {
        kind: ButtonKind::Power,
        edge: Edge::Right,
        length: 15.0,
        portrait_offset: 30.0,
        landscape_offset: 40.0,
    },
    ButtonPlacement {
        kind: ButtonKind::VolumeUp,
        edge: Edge::Left,
        length: 25.0,
        portrait_offset: 25.0,
        landscape_offset: 40.0,
    },
    ButtonPlacement {
        kind: ButtonKind::VolumeDown,
        edge: Edge::Left,
        length: 25.0,
        portrait_offset: 35.0,
        landscape_offset: 70.0,
    },
];

/// Positioned camera cutout.
#[derive(Clone, Debug, PartialEq)]
pub struct NotchLayout {
    /// Cutout shape.
    pub variant: NotchVariant,
    /// Offsets within the screen.
    pub insets: Insets,
    /// Box size after orientation.
    pub size: Size,
    /// Corner radii.
    pub corners: CornerRadii,
    /// Centering translation, if any.
    pub transform: Transform,
    /// Fill color (the bezel color).
    pub color: String,
}

impl NotchLayout {
    /// Inline style for the cutout element.
    #[must_use]
    pub fn style(&self) -> Style {
        Style::new()
            .with("position", "absolute")
            .with_insets(&self.insets)
            .with_size(self.size)
            .with_corners(&self.corners)
            .with_transform(self.transform)
            .with("background-color", &self.color)
            .with("z-index", NOTCH_Z_INDEX)
    }
}

/// Positioned hardware button on the frame edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonLayout {
    /// Which button.
    pub kind: ButtonKind,
    /// Offsets relative to the frame.
    pub insets: Insets,
    /// Box size after orientation.
    pub size: Size,
}

impl ButtonLayout {
    /// Inline style for the button element.
    #[must_use]
    pub fn style(&self) -> Style {
        Style::new()
            .with("position", "absolute")
            .with_insets(&self.insets)
            .with_size(self.size)
            .with("background-color", BUTTON_COLOR)
            .with("border-radius", Length::Px(BUTTON_RADIUS))
            .with("pointer-events", "none")
    }
}

/// Complete frame layout: the visual tree as data.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    /// Specification the layout was computed from.
    pub spec: DeviceSpecification,
    /// Options used for the computation.
    pub options: FrameOptions,
    /// Outer frame size after orientation.
    pub outer: Size,
    /// Outer corner radius.
    pub frame_radius: f64,
    /// Screen corner radius, `max(0, border_radius - bezel_thickness)`.
    pub screen_radius: f64,
    /// Frame rotation in degrees, when the landscape contract rotates.
    pub rotation: Option<f64>,
    /// Cutout, absent for [`NotchVariant::None`].
    pub notch: Option<NotchLayout>,
    /// Buttons, empty when disabled.
    pub buttons: Vec<ButtonLayout>,
}

impl FrameLayout {
    /// Lay out a frame for `spec`.
    #[must_use]
    pub fn compute(spec: &DeviceSpecification, options: FrameOptions) -> Self {
        let orientation = options.orientation;
        let buttons = if options.show_buttons {
            BUTTONS
                .iter()
                .map(|placement| button_layout(placement, orientation))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            spec: spec.clone(),
            options,
            outer: spec.size_for(orientation),
            frame_radius: f64::from(spec.border_radius),
            screen_radius: f64::from(spec.screen_radius()),
            rotation: options.landscape.rotation(orientation),
            notch: notch_layout(spec, orientation),
            buttons,
        }
    }

    /// Lay out a frame for `spec`, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingSpecification`] when `spec` is `None`.
    pub fn try_compute(
        spec: Option<&DeviceSpecification>,
        options: FrameOptions,
    ) -> Result<Self, LookupError> {
        spec.map(|spec| Self::compute(spec, options))
            .ok_or(LookupError::MissingSpecification)
    }

    /// Lay out a frame, substituting the default specification when `spec` is
    /// absent.
    #[must_use]
    pub fn for_optional(
        spec: Option<&DeviceSpecification>,
        options: FrameOptions,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        Self::try_compute(spec, options).unwrap_or_else(|err| {
            sink.emit(&Diagnostic::from(err));
            Self::compute(&DEFAULT_SPECIFICATION, options)
        })
    }

    /// Pixel size of the screen area inside the bezel.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        let bezel = f64::from(self.spec.bezel_thickness) * 2.0;
        Size::new(
            (self.outer.width - bezel).max(0.0),
            (self.outer.height - bezel).max(0.0),
        )
    }

    /// Inline style for the outer frame.
    #[must_use]
    pub fn frame_style(&self) -> Style {
        let transform = self.rotation.map_or(Transform::None, Transform::Rotate);
        Style::new()
            .with_size(self.outer)
            .with("box-sizing", "border-box")
            .with("border-radius", Length::Px(self.frame_radius))
            .with("background-color", &self.spec.bezel_color)
            .with("padding", Length::Px(f64::from(self.spec.bezel_thickness)))
            .with("position", "relative")
            .with("box-shadow", FRAME_SHADOW)
            .with("transform", transform)
            .with("transition", FRAME_TRANSITION)
    }

    /// Inline style for the clipped screen area.
    #[must_use]
    pub fn screen_style(&self) -> Style {
        Style::new()
            .with("width", Length::Percent(100.0))
            .with("height", Length::Percent(100.0))
            .with("border-radius", Length::Px(self.screen_radius))
            .with("overflow", "hidden")
            .with("background-color", SCREEN_BACKGROUND)
            .with("position", "relative")
    }

    /// Inline style for the content wrapper at the bottom of the stack.
    #[must_use]
    pub fn content_style() -> Style {
        Style::new()
            .with("width", Length::Percent(100.0))
            .with("height", Length::Percent(100.0))
            .with("overflow", "hidden")
    }
}

fn notch_layout(spec: &DeviceSpecification, orientation: Orientation) -> Option<NotchLayout> {
    let landscape = orientation.is_landscape();
    let width = f64::from(spec.notch_width);
    let height = f64::from(spec.notch_height);
    let natural = Size::new(width, height);
    let (insets, size, corners, transform) = match spec.notch {
        NotchVariant::None => return None,
        NotchVariant::DynamicIsland => {
            let corners = CornerRadii::uniform(Length::Px(width.min(height) / 2.0));
            if landscape {
                (
                    Insets::top_left(Length::Percent(50.0), Length::ZERO),
                    natural.swapped(),
                    corners,
                    Transform::TranslateY(Length::Percent(-50.0)),
                )
            } else {
                (
                    Insets::top_left(Length::ZERO, Length::Percent(50.0)),
                    natural,
                    corners,
                    Transform::TranslateX(Length::Percent(-50.0)),
                )
            }
        }
        NotchVariant::Notch => {
            let radius = Length::Px(width / 4.0);
            if landscape {
                (
                    Insets::bottom_left(Length::ZERO, Length::ZERO),
                    natural.swapped(),
                    CornerRadii {
                        top_left: radius,
                        ..CornerRadii::uniform(Length::ZERO)
                    },
                    Transform::None,
                )
            } else {
                (
                    Insets::top_left(Length::ZERO, Length::Percent(50.0)),
                    natural,
                    CornerRadii {
                        bottom_right: radius,
                        bottom_left: radius,
                        ..CornerRadii::uniform(Length::ZERO)
                    },
                    Transform::TranslateX(Length::Percent(-50.0)),
                )
            }
        }
        NotchVariant::PunchHole => {
            let inset = Length::Px(height);
            let insets = if landscape {
                Insets::top_right(Length::Auto, inset)
            } else {
                Insets::top_left(inset, inset)
            };
            (
                insets,
                natural,
                CornerRadii::uniform(Length::Percent(50.0)),
                Transform::None,
            )
        }
    };
    Some(NotchLayout {
        variant: spec.notch,
        insets,
        size,
        corners,
        transform,
        color: spec.bezel_color.to_string(),
    })
}

fn button_layout(placement: &ButtonPlacement, orientation: Orientation) -> ButtonLayout {
    let (edge_offset, top, size) = if orientation.is_landscape() {
        (
            Length::Percent(placement.landscape_offset),
            Length::Px(BUTTON_OFFSET),
            Size::new(placement.length, BUTTON_DEPTH),
        )
    } else {
        (
            Length::Px(BUTTON_OFFSET),
            Length::Percent(placement.portrait_offset),
            Size::new(BUTTON_DEPTH, placement.length),
        )
    };
    let insets = match placement.edge {
        Edge::Left => Insets::top_left(top, edge_offset),
        Edge::Right => Insets::top_right(top, edge_offset),
    };
    ButtonLayout {
        kind: placement.kind,
        insets,
        size,
    }
}
