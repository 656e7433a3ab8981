//! Early access signup. Submission is simulated locally: a short delay
//! stands in for the backend call, then a success message shows for a few
//! seconds. No network request leaves the page.

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

const SUBMIT_DELAY_MS: u32 = 1_500;
const SUCCESS_DWELL_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Submitting,
    Success,
}

#[function_component(EarlyAccessForm)]
pub fn early_access_form() -> Html {
    let state = use_state_eq(|| SubmitState::Idle);
    let email_ref = use_node_ref();
    // Resubmitting restarts the cycle; stale dwell timers must not reset
    // the newer state.
    let generation = use_mut_ref(|| 0u32);

    let onsubmit = {
        let state = state.clone();
        let email_ref = email_ref.clone();
        let generation = generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SubmitState::Submitting {
                return;
            }
            let Some(input) = email_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if input.value().is_empty() {
                return;
            }

            *generation.borrow_mut() += 1;
            let my_generation = *generation.borrow();
            log!("simulating early access signup");
            state.set(SubmitState::Submitting);

            let state = state.clone();
            let generation = generation.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                if *generation.borrow() != my_generation {
                    return;
                }
                input.set_value("");
                state.set(SubmitState::Success);

                TimeoutFuture::new(SUCCESS_DWELL_MS).await;
                if *generation.borrow() == my_generation {
                    state.set(SubmitState::Idle);
                }
            });
        })
    };

    let submitting = *state == SubmitState::Submitting;

    html! {
        <div class="early-access">
            <form class="early-access-form" {onsubmit}>
                <input
                    ref={email_ref}
                    type="email"
                    class="form-control"
                    placeholder="Enter your email"
                />
                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    { if submitting { "Submitting..." } else { "Get Early Access" } }
                </button>
            </form>
            {
                if *state == SubmitState::Success {
                    html! {
                        <div class="success-message">
                            <p>{"✓ Thank you! You've been added to our early access list."}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
