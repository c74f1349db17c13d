//! Main module for the pace calculator application using Yew.
//! Wires UI components, state hooks, and the calculate action.

use pace_calculator::{compute_pace, Pace};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;

use components::{DistanceInput, PaceDisplay, TimeInput};
use config::{APP_SUBTITLE, APP_TITLE};

/// Primary application component owning the form state.
#[function_component(Main)]
fn main_component() -> Html {
    let distance_text = use_state(String::new);
    let time_text = use_state(String::new);
    let pace = use_state(|| Pace::ZERO);
    let animate = use_state(|| false);
    let time_error = use_state(|| None::<String>);

    // --- OnInput handlers for the text states ---
    let distance_oninput = {
        let distance_text_setter = distance_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            distance_text_setter.set(input.value());
        })
    };
    let time_oninput = {
        let time_text_setter = time_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            time_text_setter.set(input.value());
        })
    };

    // Run the computation against the current field contents. A malformed
    // time surfaces as an inline error and leaves the last pace in place;
    // any other invalid input resets the display to 0:00/km.
    let calculate = {
        let distance_text = distance_text.clone();
        let time_text = time_text.clone();
        let pace = pace.clone();
        let animate = animate.clone();
        let time_error = time_error.clone();
        Callback::from(move |_: MouseEvent| {
            match compute_pace(&distance_text, &time_text) {
                Ok(result) => {
                    time_error.set(None);
                    pace.set(result);
                    if result != Pace::ZERO {
                        animate.set(true);
                    }
                }
                Err(e) => {
                    time_error.set(Some(e.to_string()));
                }
            }
        })
    };

    // Re-arm the pulse once it has played
    let pulse_done = {
        let animate = animate.clone();
        Callback::from(move |_: AnimationEvent| {
            animate.set(false);
        })
    };

    html! {
        <div class="container">
            <div class="header">
                <h2>{ APP_TITLE }</h2>
                <p class="subtitle">{ APP_SUBTITLE }</p>
            </div>

            <div class="form">
                <DistanceInput
                    value={(*distance_text).clone()}
                    oninput={distance_oninput}
                />
                <TimeInput
                    value={(*time_text).clone()}
                    error={(*time_error).clone()}
                    oninput={time_oninput}
                />

                <button class="calculate-button" onclick={calculate}>
                    { "Calculate Pace" }
                </button>

                <PaceDisplay
                    pace={*pace}
                    animate={*animate}
                    onanimationend={pulse_done}
                />
            </div>
        </div>
    }
}

/// App wrapper around the main component.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
