//! Reveal-on-enter: reports when an element scrolls into the viewport.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Stop observing after the first intersection. When false the element
    /// hides again whenever it leaves the viewport.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
            trigger_once: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealUpdate {
    pub visible: bool,
    pub stop_observing: bool,
}

/// Folds one intersection entry into the current visibility.
pub fn on_intersection(visible: bool, is_intersecting: bool, trigger_once: bool) -> RevealUpdate {
    match (is_intersecting, trigger_once) {
        (true, once) => RevealUpdate { visible: true, stop_observing: once },
        (false, true) => RevealUpdate { visible, stop_observing: false },
        (false, false) => RevealUpdate { visible: false, stop_observing: false },
    }
}

/// Attach the returned ref to the element to watch. The flag starts false
/// and flips according to `options`; the observer is disconnected on unmount.
#[hook]
pub fn use_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    {
        let node = node.clone();
        let setter = visible.setter();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<web_sys::Element>() {
                    Some(element) => observe(element, options.clone(), setter),
                    None => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            options,
        );
    }
    (node, *visible)
}

fn observe(
    element: web_sys::Element,
    options: RevealOptions,
    setter: UseStateSetter<bool>,
) -> Box<dyn FnOnce()> {
    let trigger_once = options.trigger_once;
    let fallback = setter.clone();
    let mut current = false;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let update = on_intersection(current, entry.is_intersecting(), trigger_once);
                current = update.visible;
                setter.set(update.visible);
                if update.stop_observing {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
            fallback.set(true);
            return Box::new(|| ());
        }
    };
    observer.observe(&element);

    Box::new(move || {
        observer.disconnect();
        drop(callback);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fire_once() {
        let options = RevealOptions::default();
        assert!(options.trigger_once);
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn once_stops_observing_after_first_entry() {
        let update = on_intersection(false, true, true);
        assert_eq!(update, RevealUpdate { visible: true, stop_observing: true });
    }

    #[test]
    fn once_stays_visible_when_leaving() {
        let update = on_intersection(true, false, true);
        assert!(update.visible);
        assert!(!update.stop_observing);
    }

    #[test]
    fn every_time_resets_when_leaving() {
        let entered = on_intersection(false, true, false);
        assert_eq!(entered, RevealUpdate { visible: true, stop_observing: false });
        let left = on_intersection(entered.visible, false, false);
        assert!(!left.visible);
    }

    #[test]
    fn stays_hidden_before_first_entry() {
        assert!(!on_intersection(false, false, true).visible);
    }
}
