use bezel_core::{EmulatorConfig, Orientation, presets};
use gloo::console;
use gloo::utils::document;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{DeviceFrame, MobileDeviceEmulator};
use crate::showcase::{
    CONFIG_ELEMENT_ID, MAX_SCALE, MIN_SCALE, ShowcaseAction, apply, device_options,
    initial_config,
};

fn load_initial_config() -> EmulatorConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    initial_config(raw.as_deref()).unwrap_or_else(|err| {
        console::error!("invalid showcase configuration", err.to_string());
        EmulatorConfig::default()
    })
}

#[function_component(ShowcaseApp)]
pub(crate) fn showcase_app() -> Html {
    let config = use_state(load_initial_config);
    let dispatch = {
        let config = config.clone();
        Callback::from(move |action: ShowcaseAction| config.set(apply(&config, action)))
    };

    let on_device = dispatch.reform(|event: Event| {
        let value = event
            .target_dyn_into::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default();
        ShowcaseAction::SelectDevice(value)
    });
    let on_scale = dispatch.reform(|event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map_or(f64::NAN, |input| input.value_as_number());
        ShowcaseAction::SetScale(value)
    });
    let on_orientation = dispatch.reform(|_: MouseEvent| ShowcaseAction::ToggleOrientation);
    let on_frame = dispatch.reform(|_: MouseEvent| ShowcaseAction::ToggleFrame);
    let on_buttons = dispatch.reform(|_: MouseEvent| ShowcaseAction::ToggleButtons);

    let selected = config.device_type.as_str().to_string();
    let orientation_label = match config.orientation {
        Orientation::Portrait => "Switch to landscape",
        Orientation::Landscape => "Switch to portrait",
    };
    let frame_label = if config.show_frame { "Hide frame" } else { "Show frame" };
    let buttons_label = if config.show_buttons {
        "Hide buttons"
    } else {
        "Show buttons"
    };

    html! {
        <main class="bezel-showcase">
            <section class="bezel-controls">
                <select onchange={on_device}>
                    { for device_options().into_iter().map(|(key, label)| html! {
                        <option value={key.clone()} selected={key == selected}>{ label }</option>
                    }) }
                </select>
                <button type="button" onclick={on_orientation}>{ orientation_label }</button>
                <button type="button" onclick={on_frame}>{ frame_label }</button>
                <button type="button" onclick={on_buttons} disabled={!config.show_frame}>
                    { buttons_label }
                </button>
                <input
                    type="range"
                    min={MIN_SCALE.to_string()}
                    max={MAX_SCALE.to_string()}
                    step="0.05"
                    value={config.scale.to_string()}
                    oninput={on_scale}
                />
            </section>
            <MobileDeviceEmulator
                device_type={config.device_type.clone()}
                custom_specification={config.custom_specification.clone()}
                orientation={config.orientation}
                scale={config.scale}
                show_frame={config.show_frame}
                show_buttons={config.show_buttons}
                url={config.url.clone().map(AttrValue::from)}
                class={classes!(config.class_name.clone())}
                background_color={AttrValue::from(config.background_color.clone())}
                landscape={config.landscape_transform}
                loading_timeout_ms={config.loading_timeout_ms}
            >
                <div class="bezel-demo-content">
                    <h1>{ config.device_type.label().to_string() }</h1>
                    <p>{ format!("{} mode", config.orientation.as_str()) }</p>
                </div>
            </MobileDeviceEmulator>
            <section class="bezel-gallery">
                { for presets().map(|(device, spec)| html! {
                    <figure>
                        <DeviceFrame spec={Some(spec.clone())} orientation={config.orientation}>
                            <p class="bezel-demo-content">{ device.label().to_string() }</p>
                        </DeviceFrame>
                        <figcaption>{ device.label().to_string() }</figcaption>
                    </figure>
                }) }
            </section>
        </main>
    }
}

/// Mount the showcase on `#root`, or on `<body>` when that element is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<ShowcaseApp>::with_root(root).render();
    } else {
        yew::Renderer::<ShowcaseApp>::new().render();
    }
}
