//! Emulator shell component.
//!
//! # Design
//! - The plan is rebuilt from props on every render; orientation follows the
//!   caller.
//! - Load state only moves forward; once dismissed, the overlay stays hidden
//!   for the life of the component.
//! - The optional timeout timer is dropped as soon as the state leaves
//!   `Loading` or the component unmounts.

use bezel_core::{
    ContentPlan, DeviceSpecification, DeviceType, EmbeddedPage, EmulatorBody, EmulatorConfig,
    EmulatorPlan, LandscapeTransform, LoadEvent, LoadState, Orientation, defaults,
};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::components::device_frame::render_frame;
use crate::components::spinner::Spinner;
use crate::console::ConsoleSink;

/// Emulator properties.
#[derive(Properties, PartialEq)]
pub struct MobileDeviceEmulatorProps {
    /// Device preset, `custom`, or any other identifier.
    #[prop_or(defaults::DEVICE_TYPE)]
    pub device_type: DeviceType,
    /// Specification used when `device_type` is `custom`.
    #[prop_or_default]
    pub custom_specification: Option<DeviceSpecification>,
    /// Orientation.
    #[prop_or(defaults::ORIENTATION)]
    pub orientation: Orientation,
    /// Uniform display scale.
    #[prop_or(defaults::SCALE)]
    pub scale: f64,
    /// Draw the bezel.
    #[prop_or(defaults::SHOW_FRAME)]
    pub show_frame: bool,
    /// Draw hardware buttons.
    #[prop_or(defaults::SHOW_BUTTONS)]
    pub show_buttons: bool,
    /// Page to embed instead of children.
    #[prop_or_default]
    pub url: Option<AttrValue>,
    /// Extra classes on the outer container.
    #[prop_or_default]
    pub class: Classes,
    /// Container background color.
    #[prop_or(AttrValue::Static(defaults::BACKGROUND_COLOR))]
    pub background_color: AttrValue,
    /// Landscape presentation contract.
    #[prop_or(defaults::LANDSCAPE_TRANSFORM)]
    pub landscape: LandscapeTransform,
    /// Dismiss the loading overlay after this many milliseconds.
    #[prop_or(defaults::LOADING_TIMEOUT_MS)]
    pub loading_timeout_ms: Option<u32>,
    /// Content rendered when no URL is given.
    #[prop_or_default]
    pub children: Children,
}

impl MobileDeviceEmulatorProps {
    /// Configuration equivalent to these props.
    #[must_use]
    pub fn to_config(&self) -> EmulatorConfig {
        EmulatorConfig {
            device_type: self.device_type.clone(),
            custom_specification: self.custom_specification.clone(),
            orientation: self.orientation,
            scale: self.scale,
            show_frame: self.show_frame,
            show_buttons: self.show_buttons,
            url: self.url.as_ref().map(ToString::to_string),
            class_name: (!self.class.is_empty()).then(|| self.class.to_string()),
            background_color: self.background_color.to_string(),
            landscape_transform: self.landscape,
            loading_timeout_ms: self.loading_timeout_ms,
        }
    }
}

/// Device frame with optional embedded page, scaling, and loading overlay.
#[function_component(MobileDeviceEmulator)]
pub fn mobile_device_emulator(props: &MobileDeviceEmulatorProps) -> Html {
    let config = props.to_config();
    let plan = EmulatorPlan::build(&config, &ConsoleSink);
    let load_state = use_state_eq(LoadState::default);

    {
        let load_state = load_state.clone();
        use_effect_with_deps(
            move |(timeout_ms, state): &(Option<u32>, LoadState)| {
                let handle = match (*timeout_ms, *state) {
                    (Some(timeout_ms), LoadState::Loading) => {
                        Some(Timeout::new(timeout_ms, move || {
                            load_state.set(load_state.apply(LoadEvent::TimedOut));
                        }))
                    }
                    _ => None,
                };
                move || drop(handle)
            },
            (plan.loading_timeout_ms, *load_state),
        );
    }

    let onload = {
        let load_state = load_state.clone();
        Callback::from(move |_: Event| load_state.set(load_state.apply(LoadEvent::Loaded)))
    };

    let content = match &plan.content {
        ContentPlan::Embedded(page) => render_embedded(page, load_state.shows_indicator(), onload),
        ContentPlan::Children => html! { <>{ for props.children.iter() }</> },
    };

    let body = match &plan.body {
        EmulatorBody::Framed(layout) => render_frame(layout, Classes::new(), content),
        EmulatorBody::Unframed(layout) => html! {
            <div class="bezel-unframed" style={layout.style().to_css()}>
                { content }
            </div>
        },
        EmulatorBody::Placeholder(message) => html! {
            <div class="bezel-placeholder" role="alert">{ *message }</div>
        },
    };

    html! {
        <div
            class={classes!("bezel-emulator", plan.class_name.clone())}
            style={plan.container_style().to_css()}
        >
            <div class="bezel-scale" style={plan.scale_style().to_css()}>
                { body }
            </div>
        </div>
    }
}

fn render_embedded(page: &EmbeddedPage, loading: bool, onload: Callback<Event>) -> Html {
    html! {
        <div class="bezel-embedded" style={EmbeddedPage::wrapper_style().to_css()}>
            <iframe
                src={page.url.clone()}
                title={page.title}
                sandbox={page.sandbox}
                allow={page.allow}
                style={EmbeddedPage::iframe_style().to_css()}
                {onload}
            />
            if loading {
                <div class="bezel-loading" style={EmbeddedPage::overlay_style().to_css()}>
                    <Spinner />
                </div>
            }
        </div>
    }
}
