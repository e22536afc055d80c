//! Phone frame component.
//!
//! # Design
//! - Geometry comes from [`FrameLayout`]; this module only emits markup.
//! - Stacking inside the screen: content first, cutout above it.
//! - Buttons are decorative and hidden from assistive technology.

use bezel_core::{
    ButtonLayout, DeviceSpecification, FrameLayout, FrameOptions, LandscapeTransform,
    NotchLayout, Orientation, defaults,
};
use yew::prelude::*;

use crate::console::ConsoleSink;

/// Device frame properties.
#[derive(Properties, PartialEq)]
pub struct DeviceFrameProps {
    /// Specification to draw; the default device is used when absent.
    #[prop_or_default]
    pub spec: Option<DeviceSpecification>,
    /// Orientation.
    #[prop_or(defaults::ORIENTATION)]
    pub orientation: Orientation,
    /// Draw power and volume buttons.
    #[prop_or(defaults::SHOW_BUTTONS)]
    pub show_buttons: bool,
    /// Landscape presentation contract.
    #[prop_or(defaults::LANDSCAPE_TRANSFORM)]
    pub landscape: LandscapeTransform,
    /// Extra classes on the outer frame.
    #[prop_or_default]
    pub class: Classes,
    /// Screen content.
    #[prop_or_default]
    pub children: Children,
}

/// Phone-shaped frame around arbitrary content.
#[function_component(DeviceFrame)]
pub fn device_frame(props: &DeviceFrameProps) -> Html {
    let options = FrameOptions {
        orientation: props.orientation,
        show_buttons: props.show_buttons,
        landscape: props.landscape,
    };
    let layout = FrameLayout::for_optional(props.spec.as_ref(), options, &ConsoleSink);
    let content = html! { <>{ for props.children.iter() }</> };
    render_frame(&layout, props.class.clone(), content)
}

/// Render `layout` with `content` on the screen.
#[must_use]
pub fn render_frame(layout: &FrameLayout, class: Classes, content: Html) -> Html {
    let notch = layout.notch.as_ref().map_or_else(Html::default, render_notch);
    html! {
        <div
            class={classes!("bezel-frame", layout.options.orientation.as_str(), class)}
            style={layout.frame_style().to_css()}
        >
            <div class="bezel-screen" style={layout.screen_style().to_css()}>
                <div class="bezel-content" style={FrameLayout::content_style().to_css()}>
                    { content }
                </div>
                { notch }
            </div>
            { for layout.buttons.iter().map(render_button) }
        </div>
    }
}

fn render_notch(notch: &NotchLayout) -> Html {
    html! {
        <div
            class={classes!("bezel-notch", notch.variant.as_str())}
            style={notch.style().to_css()}
        />
    }
}

fn render_button(button: &ButtonLayout) -> Html {
    html! {
        <div
            class={classes!("bezel-button", button.kind.as_str())}
            style={button.style().to_css()}
            aria-hidden="true"
        />
    }
}
