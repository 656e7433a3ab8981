//! Fixed top navigation: smooth scrolling to page sections, scroll-spy
//! highlighting, a direction-aware hide-on-scroll bar and the mobile burger
//! menu.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::effects::{Debouncer, Subscription};

/// In-page sections, in document order, as (element id, link title).
pub const SECTIONS: [(&str, &str); 4] = [
    ("impact", "The Impact"),
    ("materials", "Materials"),
    ("findings", "Findings"),
    ("early-access", "Early Access"),
];

/// Fixed navbar height compensated when jumping to a section.
const NAVBAR_OFFSET_PX: f64 = 80.0;
/// Slack above a section within which it already counts as current.
const SPY_OFFSET_PX: f64 = 100.0;
/// The bar only hides once the page is scrolled past this point.
const HIDE_AFTER_PX: f64 = 100.0;
const HIDE_DEBOUNCE_MS: u32 = 10;

pub(crate) struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Resolve which section the viewport is currently in. Later sections win
/// when bands overlap, matching document-order traversal.
pub(crate) fn current_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let mut current = None;
    for section in sections {
        let band_top = section.top - SPY_OFFSET_PX;
        if scroll_y >= band_top && scroll_y < band_top + section.height {
            current = Some(section.id);
        }
    }
    current
}

/// Hide-on-scroll state: hidden while scrolling down past the threshold,
/// revealed on any upward scroll.
pub(crate) struct NavVisibility {
    last_y: f64,
}

impl NavVisibility {
    pub fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    pub fn on_scroll(&mut self, y: f64) -> bool {
        let hidden = y > self.last_y && y > HIDE_AFTER_PX;
        self.last_y = y;
        hidden
    }
}

pub(crate) fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(section) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let options = ScrollToOptions::new();
        options.set_top(section.offset_top() as f64 - NAVBAR_OFFSET_PX);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let active_section = use_state_eq(|| None::<&'static str>);
    let hidden = use_state_eq(|| false);
    let menu_open = use_state(|| false);

    // Scroll-spy: re-resolve the current section on every scroll.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_for_cb = window.clone();

                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_for_cb.scroll_y().unwrap_or(0.0);
                    let mut bounds = Vec::with_capacity(SECTIONS.len());
                    for (id, _) in SECTIONS {
                        if let Some(section) = document
                            .get_element_by_id(id)
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        {
                            bounds.push(SectionBounds {
                                id,
                                top: section.offset_top() as f64,
                                height: section.client_height() as f64,
                            });
                        }
                    }
                    active_section.set(current_section(scroll_y, &bounds));
                }) as Box<dyn FnMut()>);

                let subscription = Subscription::listen(window.as_ref(), "scroll", callback);
                move || drop(subscription)
            },
            (),
        );
    }

    // Hide-on-scroll, debounced so rapid scroll deltas collapse into one
    // visibility decision.
    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let visibility = Rc::new(RefCell::new(NavVisibility::new(
                    window.scroll_y().unwrap_or(0.0),
                )));
                let debouncer = Debouncer::new(HIDE_DEBOUNCE_MS);
                let window_for_cb = window.clone();

                let callback = Closure::wrap(Box::new(move || {
                    let hidden = hidden.clone();
                    let visibility = Rc::clone(&visibility);
                    let window = window_for_cb.clone();
                    debouncer.call(move || {
                        let y = window.scroll_y().unwrap_or(0.0);
                        hidden.set(visibility.borrow_mut().on_scroll(y));
                    });
                }) as Box<dyn FnMut()>);

                let subscription = Subscription::listen(window.as_ref(), "scroll", callback);
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*hidden).then(|| "hidden"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={nav_link("hero")}>
                    {"ImpactMeter"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for SECTIONS.iter().map(|&(id, title)| {
                            let is_active = *active_section == Some(id);
                            html! {
                                <a
                                    href={format!("#{id}")}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={nav_link(id)}
                                >
                                    { title }
                                </a>
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "impact", top: 600.0, height: 800.0 },
            SectionBounds { id: "materials", top: 1400.0, height: 900.0 },
            SectionBounds { id: "findings", top: 2300.0, height: 700.0 },
        ]
    }

    #[test]
    fn spy_resolves_section_bands() {
        let sections = page();
        assert_eq!(current_section(0.0, &sections), None);
        assert_eq!(current_section(500.0, &sections), Some("impact"));
        assert_eq!(current_section(1299.0, &sections), Some("impact"));
        assert_eq!(current_section(1300.0, &sections), Some("materials"));
        assert_eq!(current_section(2250.0, &sections), Some("findings"));
    }

    #[test]
    fn spy_prefers_later_section_on_overlap() {
        let sections = vec![
            SectionBounds { id: "a", top: 100.0, height: 2000.0 },
            SectionBounds { id: "b", top: 500.0, height: 400.0 },
        ];
        // Both bands contain y=450; the later section wins.
        assert_eq!(current_section(450.0, &sections), Some("b"));
    }

    #[test]
    fn spy_none_past_last_section() {
        let sections = page();
        assert_eq!(current_section(5000.0, &sections), None);
    }

    #[test]
    fn navbar_hides_only_scrolling_down_past_threshold() {
        let mut visibility = NavVisibility::new(0.0);
        assert!(!visibility.on_scroll(50.0), "below threshold stays visible");
        assert!(visibility.on_scroll(300.0), "downward past threshold hides");
        assert!(!visibility.on_scroll(200.0), "upward scroll reveals");
        assert!(visibility.on_scroll(400.0), "downward again hides");
        assert!(!visibility.on_scroll(400.0), "no movement keeps it visible");
    }
}
