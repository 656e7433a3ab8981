//! Page-level scroll effects and the subscription plumbing behind them.
//!
//! Every listener and observer is owned by a handle whose `Drop` tears the
//! registration down, so unmounting the page leaves nothing attached to the
//! window or document.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

const REVEAL_SELECTORS: &str = ".stat-card, .finding-card, .alternative-card, .cta-card";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const PARALLAX_SPEED: f64 = 0.5;
const VIEWPORT_DEBOUNCE_MS: u32 = 250;
const MOBILE_MAX_WIDTH: f64 = 768.0;
const TABLET_MAX_WIDTH: f64 = 1024.0;

/// An event listener registration that unregisters itself when dropped.
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Subscription {
    pub fn listen(target: &EventTarget, event: &'static str, callback: Closure<dyn FnMut()>) -> Self {
        if target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("failed to attach {} listener", event);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// Invoke the listener once outside of any event, for initial state.
    pub fn fire_now(&self) {
        let _ = self
            .callback
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .call0(&JsValue::NULL);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` that disconnects when dropped. The callback
/// unobserves each element on its first sufficient visibility, so every
/// observation is one-shot.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Build a one-shot visibility observer: `on_visible` runs when an observed
/// element first crosses the threshold, after which the element is removed
/// from observation. Returns `None` (with a warning) when the facility is
/// unavailable, so callers degrade to never firing.
pub fn observe_once<F>(init: Option<(f64, &str)>, on_visible: F) -> Option<ObserverHandle>
where
    F: Fn(&Element) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match init {
        Some((threshold, root_margin)) => {
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            options.set_root_margin(root_margin);
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };

    match observer {
        Ok(observer) => Some(ObserverHandle {
            observer,
            _callback: callback,
        }),
        Err(_) => {
            warn!("IntersectionObserver unavailable; visibility triggers stay disarmed");
            None
        }
    }
}

/// Trailing-edge debouncer over `gloo` timeouts. Each call cancels the
/// previously pending action.
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, action: impl FnOnce() + 'static) {
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            action();
        });
        drop(self.pending.borrow_mut().replace(timeout));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
}

pub fn classify_viewport(width: f64) -> Viewport {
    if width <= MOBILE_MAX_WIDTH {
        Viewport::Mobile
    } else if width <= TABLET_MAX_WIDTH {
        Viewport::Tablet
    } else {
        Viewport::Desktop
    }
}

fn apply_viewport_classes(body: &Element, viewport: Viewport) {
    let kept = body
        .class_name()
        .split_whitespace()
        .filter(|class| *class != "mobile-view" && *class != "tablet-view")
        .collect::<Vec<_>>()
        .join(" ");
    let classes = match viewport {
        Viewport::Mobile => format!("{kept} mobile-view"),
        Viewport::Tablet => format!("{kept} tablet-view"),
        Viewport::Desktop => kept,
    };
    body.set_class_name(classes.trim());
}

/// Everything the landing page arms on mount: card reveals, the hero
/// parallax, image lazy-load flags and viewport body classes. Dropping the
/// struct removes all of it.
pub struct ScrollEffects {
    _reveal: Option<ObserverHandle>,
    _lazy: Option<ObserverHandle>,
    _parallax: Option<Subscription>,
    _viewport: Option<Subscription>,
}

impl ScrollEffects {
    pub fn mount() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        let (Some(window), Some(document)) = (window, document) else {
            return Self {
                _reveal: None,
                _lazy: None,
                _parallax: None,
                _viewport: None,
            };
        };
        Self {
            _reveal: arm_reveal(&document),
            _lazy: arm_lazy_loading(&document),
            _parallax: Some(arm_parallax(&window, &document)),
            _viewport: Some(arm_viewport_classes(&window, &document)),
        }
    }
}

fn observe_all(document: &Document, selectors: &str, handle: &ObserverHandle, arm_class: &str) {
    let Ok(nodes) = document.query_selector_all(selectors) else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            element.set_class_name(format!("{} {arm_class}", element.class_name()).trim());
            handle.observe(&element);
        }
    }
}

/// Cards start hidden (`fade-in-element`) and get `animate-in` appended the
/// first time they become visible; the CSS transition does the rest.
fn arm_reveal(document: &Document) -> Option<ObserverHandle> {
    let handle = observe_once(Some((REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN)), |element| {
        let classes = element.class_name();
        if !classes.contains("animate-in") {
            element.set_class_name(&format!("{classes} animate-in"));
        }
    })?;
    observe_all(document, REVEAL_SELECTORS, &handle, "fade-in-element");
    Some(handle)
}

fn arm_lazy_loading(document: &Document) -> Option<ObserverHandle> {
    let handle = observe_once(None, |element| {
        let classes = element.class_name();
        if !classes.contains("loaded") {
            element.set_class_name(&format!("{classes} loaded"));
        }
    })?;
    observe_all(document, "img[src]", &handle, "lazy-load");
    Some(handle)
}

fn arm_parallax(window: &Window, document: &Document) -> Subscription {
    let window_for_cb = window.clone();
    let document = document.clone();
    let callback = Closure::wrap(Box::new(move || {
        let scrolled = window_for_cb.page_y_offset().unwrap_or(0.0);
        let Ok(elements) = document.query_selector_all(".hero-visual") else {
            return;
        };
        for index in 0..elements.length() {
            if let Some(element) = elements.get(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = element.set_attribute(
                    "style",
                    &format!("transform: translateY({}px)", scrolled * PARALLAX_SPEED),
                );
            }
        }
    }) as Box<dyn FnMut()>);
    Subscription::listen(window.as_ref(), "scroll", callback)
}

fn arm_viewport_classes(window: &Window, document: &Document) -> Subscription {
    let window_for_cb = window.clone();
    let document = document.clone();
    let debouncer = Debouncer::new(VIEWPORT_DEBOUNCE_MS);
    let callback = Closure::wrap(Box::new(move || {
        let window = window_for_cb.clone();
        let document = document.clone();
        debouncer.call(move || {
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            if let Some(body) = document.body() {
                apply_viewport_classes(&body, classify_viewport(width));
            }
        });
    }) as Box<dyn FnMut()>);
    let subscription = Subscription::listen(window.as_ref(), "resize", callback);
    // Initial classification before the first resize.
    subscription.fire_now();
    subscription
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_boundaries() {
        assert_eq!(classify_viewport(320.0), Viewport::Mobile);
        assert_eq!(classify_viewport(768.0), Viewport::Mobile);
        assert_eq!(classify_viewport(769.0), Viewport::Tablet);
        assert_eq!(classify_viewport(1024.0), Viewport::Tablet);
        assert_eq!(classify_viewport(1025.0), Viewport::Desktop);
        assert_eq!(classify_viewport(1920.0), Viewport::Desktop);
    }
}
