use yew::prelude::*;

use crate::navigation::hooks::listen_window_passive;

/// Percentage of the page scrolled, clamped to 0..=100. A page that
/// cannot scroll reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total.is_nan() || total <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

fn read_progress() -> Option<f64> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height() as f64;
    Some(scroll_progress(scroll_y, height, viewport))
}

#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(value) = read_progress() {
                        setter.set(value);
                    }
                };
                update();
                let destructor = listen_window_passive("scroll", update);
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_down() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
    }

    #[test]
    fn short_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
    }
}
