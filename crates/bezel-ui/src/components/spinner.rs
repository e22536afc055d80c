//! Loading spinner.

use yew::prelude::*;

const KEYFRAMES: &str = "@keyframes bezel-spin { to { transform: rotate(360deg); } }";
const ACCENT: &str = "#3b82f6";

/// Spinner properties.
#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Diameter in pixels.
    #[prop_or(48)]
    pub size: u32,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible label.
    #[prop_or(AttrValue::Static("Loading"))]
    pub label: AttrValue,
}

/// Rotating ring shown while an embedded page loads.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let style = format!(
        "display: inline-block; width: {size}px; height: {size}px; border-radius: 50%; \
         border-top: 2px solid {ACCENT}; border-bottom: 2px solid {ACCENT}; \
         animation: bezel-spin 1s linear infinite;",
        size = props.size
    );
    html! {
        <>
            <style>{ KEYFRAMES }</style>
            <span
                class={classes!("bezel-spinner", props.class.clone())}
                role="status"
                aria-label={props.label.clone()}
                style={style}
            />
        </>
    }
}
