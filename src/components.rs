//! Pure Yew view components for the pace calculator form.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse. All form state lives in the main
//! component.

use crate::config::{
    DISTANCE_MIN, DISTANCE_PLACEHOLDER, DISTANCE_STEP, PACE_CAPTION, TIME_PLACEHOLDER,
};
use pace_calculator::{format_pace, Pace};
use yew::prelude::*;

/// Numeric input for the distance in kilometers.
#[derive(Properties, PartialEq)]
pub struct DistanceInputProps {
    pub value: String,
    pub oninput: Callback<InputEvent>,
}

#[function_component(DistanceInput)]
pub fn distance_input(props: &DistanceInputProps) -> Html {
    html! {
        <div class="form-group">
            <label for="distance">{ "Distance (km)" }</label>
            <input type="number"
                id="distance"
                min={DISTANCE_MIN}
                step={DISTANCE_STEP}
                placeholder={DISTANCE_PLACEHOLDER}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}

/// Free-text input for the elapsed time, with an inline error element
/// shown when the last commit failed validation.
#[derive(Properties, PartialEq)]
pub struct TimeInputProps {
    pub value: String,
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TimeInput)]
pub fn time_input(props: &TimeInputProps) -> Html {
    html! {
        <div class="form-group">
            <label for="time">{ "Time (hh:mm:ss)" }</label>
            <input type="text"
                id="time"
                class={if props.error.is_some() { "invalid" } else { "" }}
                placeholder={TIME_PLACEHOLDER}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Displays the computed pace with a one-shot pulse animation.
///
/// The `animate` flag toggles the animation class; the caller clears it
/// again through `onanimationend` so the pulse runs once per calculation.
#[derive(Properties, PartialEq)]
pub struct PaceDisplayProps {
    pub pace: Pace,
    pub animate: bool,
    pub onanimationend: Callback<AnimationEvent>,
}

#[function_component(PaceDisplay)]
pub fn pace_display(props: &PaceDisplayProps) -> Html {
    html! {
        <div class="pace-result">
            <div class="pace-caption">{ PACE_CAPTION }</div>
            <div class={if props.animate { "pace-value pulse" } else { "pace-value" }}
                onanimationend={props.onanimationend.clone()}>
                { format_pace(props.pace) }
            </div>
        </div>
    }
}
