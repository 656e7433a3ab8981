//! Animated statistic counters.
//!
//! Each counter arms a one-shot visibility trigger over its value element;
//! the first time the element is sufficiently on screen, a fixed 2000 ms
//! quartic-ease-out interpolation runs from zero to the declared target,
//! writing the formatted value on every animation frame and the exactly
//! formatted target on the last one. Targets are non-negative by contract;
//! the displayed value never decreases.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::effects::observe_once;

pub const COUNT_DURATION_MS: f64 = 2000.0;
const COUNTER_THRESHOLD: f64 = 0.5;
const COUNTER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One-shot gate consumed on first fire. Holding the pending slot as a
/// takeable value (rather than a flag that is read and then written) keeps
/// a duplicate notification in the same observer batch from restarting the
/// animation.
pub(crate) struct OneShot(Cell<Option<()>>);

impl OneShot {
    pub fn new() -> Self {
        Self(Cell::new(Some(())))
    }

    pub fn fire(&self) -> bool {
        self.0.take().is_some()
    }
}

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Eased counter value after `elapsed_ms` of a run toward `target`.
pub fn sample(target: f64, elapsed_ms: f64) -> f64 {
    let progress = (elapsed_ms / COUNT_DURATION_MS).clamp(0.0, 1.0);
    target * ease_out_quart(progress)
}

/// Magnitude-dependent display format, keyed on the final target so every
/// frame of a run renders in the same shape: millions to one decimal with
/// an `M` suffix, thousands as comma-grouped integers, anything smaller to
/// one decimal place.
pub fn format_stat(target: f64, value: f64) -> String {
    if target >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if target >= 1_000.0 {
        group_thousands(value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(window), Some(callback)) = (web_sys::window(), frame.borrow().as_ref()) {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drive one animation run to completion. There is no cancellation: a run
/// on an element that has left the document keeps writing to the detached
/// node until it finishes.
fn animate(element: Element, target: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let start = window.performance().map(|p| p.now()).unwrap_or_default();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduler = Rc::clone(&frame);
    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let elapsed = now - start;
        if elapsed < COUNT_DURATION_MS {
            element.set_text_content(Some(&format_stat(target, sample(target, elapsed))));
            request_frame(&scheduler);
        } else {
            // Land on the exact target, not the eased approximation.
            element.set_text_content(Some(&format_stat(target, target)));
            let _ = scheduler.borrow_mut().take();
        }
    }));
    request_frame(&frame);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Final value, non-negative. Negative stats belong to the charts, not
    /// the counters.
    pub target: f64,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &Props) -> Html {
    let value_ref = use_node_ref();

    {
        let value_ref = value_ref.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let armed = value_ref.cast::<Element>().and_then(|element| {
                    let gate = OneShot::new();
                    let handle = observe_once(
                        Some((COUNTER_THRESHOLD, COUNTER_ROOT_MARGIN)),
                        move |visible: &Element| {
                            if gate.fire() {
                                animate(visible.clone(), target);
                            }
                        },
                    )?;
                    handle.observe(&element);
                    Some(handle)
                });
                move || drop(armed)
            },
            (),
        );
    }

    html! {
        <div class="stat-card">
            <span class="stat-value" ref={value_ref}>{"0"}</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_monotonicity() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        let mut previous = 0.0;
        for step in 0..=100 {
            let eased = ease_out_quart(step as f64 / 100.0);
            assert!(eased >= previous, "easing must never decrease");
            previous = eased;
        }
    }

    #[test]
    fn million_targets_format_to_one_decimal_with_suffix() {
        assert_eq!(format_stat(7_500_000.0, 7_500_000.0), "7.5M");
        assert_eq!(format_stat(1_000_000.0, 1_000_000.0), "1.0M");
        // Mid-animation values render in the target's shape.
        assert_eq!(format_stat(1_000_000.0, 340_000.0), "0.3M");
    }

    #[test]
    fn thousand_targets_format_grouped() {
        assert_eq!(format_stat(4_400.0, 4_400.0), "4,400");
        assert_eq!(format_stat(1_000.0, 1_000.0), "1,000");
        assert_eq!(format_stat(999_999.0, 999_999.0), "999,999");
        assert_eq!(format_stat(4_400.0, 123.4), "123");
    }

    #[test]
    fn small_targets_format_to_one_decimal() {
        assert_eq!(format_stat(7.5, 7.5), "7.5");
        assert_eq!(format_stat(82.0, 82.0), "82.0");
        assert_eq!(format_stat(999.0, 999.0), "999.0");
        assert_eq!(format_stat(0.0, 0.0), "0.0");
    }

    #[test]
    fn end_state_equals_direct_formatting() {
        for target in [0.0, 7.5, 82.0, 999.0, 1_000.0, 4_400.0, 999_999.0, 1_000_000.0, 7_500_000.0] {
            let finished = sample(target, COUNT_DURATION_MS);
            assert_eq!(format_stat(target, finished), format_stat(target, target));
        }
    }

    #[test]
    fn sampled_values_never_decrease() {
        let target = 4_400.0;
        let mut previous = 0.0;
        for frame in 0..=125 {
            let value = sample(target, frame as f64 * 16.0);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(sample(target, COUNT_DURATION_MS), target);
        assert_eq!(sample(target, COUNT_DURATION_MS + 500.0), target);
    }

    #[test]
    fn gate_fires_exactly_once() {
        let gate = OneShot::new();
        // The element crosses the threshold, scrolls away and crosses again.
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(!gate.fire());
    }
}
