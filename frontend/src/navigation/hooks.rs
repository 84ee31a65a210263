use std::cell::RefCell;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use crate::navigation::menu::{MenuAction, MenuState};
use crate::navigation::scroll::{HeaderScroll, HeaderThresholds, NavVisibility, ScrollSample};

/// Registers a passive listener on `window` and returns the function that
/// removes it. Without a window, or if registration fails, nothing is
/// attached and the returned destructor is a no-op.
pub(crate) fn listen_window_passive(
    event: &'static str,
    handler: impl Fn() + 'static,
) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    let callback = Closure::<dyn Fn()>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("Failed to register {} listener: {:?}", event, err);
        return Box::new(|| ());
    }
    Box::new(move || {
        if let Some(win) = web_sys::window() {
            if let Err(err) =
                win.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, err);
            }
        }
    })
}

fn window_sample() -> Option<ScrollSample> {
    let scroll_y = web_sys::window()?.scroll_y().ok()?;
    Some(ScrollSample::from_scroll_y(scroll_y))
}

/// Header flags driven by the window scroll offset. One listener per mount;
/// the component only re-renders when a flag actually flips.
#[hook]
pub fn use_header_scroll(thresholds: HeaderThresholds) -> NavVisibility {
    let visibility = use_state_eq(NavVisibility::default);
    {
        let setter = visibility.setter();
        use_effect_with_deps(
            move |thresholds: &HeaderThresholds| {
                let tracker = RefCell::new(HeaderScroll::new(*thresholds));
                // Initial call, the page may be restored mid-scroll
                if let Some(first) = window_sample() {
                    setter.set(tracker.borrow_mut().seed(first));
                }
                let sample = move || {
                    if let Some(current) = window_sample() {
                        let mut tracker = tracker.borrow_mut();
                        let before = tracker.state();
                        let next = tracker.observe(current);
                        if tracker.state() != before {
                            log::debug!(
                                "Header {:?} at offset {}",
                                tracker.state(),
                                tracker.last_offset()
                            );
                        }
                        setter.set(next);
                    }
                };
                let destructor = listen_window_passive("scroll", sample);
                move || {
                    destructor();
                }
            },
            thresholds,
        );
    }
    *visibility
}

/// Overlay menu state that closes itself whenever `current_path` changes.
#[hook]
pub fn use_overlay_menu(current_path: String) -> UseReducerHandle<MenuState> {
    let menu = use_reducer(MenuState::default);
    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(MenuAction::RouteChanged);
                || ()
            },
            current_path,
        );
    }
    menu
}

#[hook]
pub fn use_scroll_to_top(current_path: String) {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        current_path,
    );
}
