//! Scroll-triggered entrance animations.
//!
//! Everything here is driven by [`use_reveal`]: the wrapper starts
//! transparent and offset, and transitions into place once it enters the
//! viewport. CSS does the interpolation, Rust only flips the end state.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::counter::{
    counter_running, counter_value, decimals_of, format_counter, COUNTER_FRAMES,
};
use crate::animation::progress::use_scroll_progress;
use crate::animation::reveal::{use_reveal, RevealOptions};

pub const EASE: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
const OFFSET_PX: i32 = 40;

fn section_reveal() -> RevealOptions {
    RevealOptions {
        threshold: 0.0,
        root_margin: "-50px",
        trigger_once: true,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting `(x, y)` offset before the reveal.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, OFFSET_PX),
            Direction::Down => (0, -OFFSET_PX),
            Direction::Left => (OFFSET_PX, 0),
            Direction::Right => (-OFFSET_PX, 0),
            Direction::None => (0, 0),
        }
    }
}

pub fn reveal_style(direction: Direction, visible: bool, delay: f64, duration: f64) -> String {
    let (x, y) = if visible { (0, 0) } else { direction.offset() };
    format!(
        "opacity: {}; transform: translate3d({}px, {}px, 0); \
         transition: opacity {duration}s {EASE} {delay}s, transform {duration}s {EASE} {delay}s;",
        if visible { 1 } else { 0 },
        x,
        y,
    )
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub direction: Direction,
    /// Seconds.
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let (node, visible) = use_reveal(section_reveal());
    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(props.direction, visible, props.delay, props.duration)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerContext {
    pub visible: bool,
    pub stagger_delay: f64,
}

#[derive(Properties, PartialEq)]
pub struct StaggerContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.1)]
    pub stagger_delay: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Reveals its [`StaggerItem`] children one after another.
#[function_component(StaggerContainer)]
pub fn stagger_container(props: &StaggerContainerProps) -> Html {
    let (node, visible) = use_reveal(section_reveal());
    let context = StaggerContext {
        visible,
        stagger_delay: props.stagger_delay,
    };
    html! {
        <ContextProvider<StaggerContext> context={context}>
            <div ref={node} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        </ContextProvider<StaggerContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerItemProps {
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StaggerItem)]
pub fn stagger_item(props: &StaggerItemProps) -> Html {
    let context = use_context::<StaggerContext>().unwrap_or(StaggerContext {
        visible: true,
        stagger_delay: 0.0,
    });
    let delay = props.index as f64 * context.stagger_delay;
    html! {
        <div
            class={props.class.clone()}
            style={reveal_style(props.direction, context.visible, delay, 0.5)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub end: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2_000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up to `end` the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let (node, visible) = use_reveal(section_reveal());
    let frame = use_state_eq(|| 0_u32);
    {
        let setter = frame.setter();
        let start = *frame;
        let step_ms = (props.duration_ms / COUNTER_FRAMES).max(1);
        // Re-runs once the last frame lands, which drops the interval
        use_effect_with_deps(
            move |running: &bool| {
                let interval = running.then(|| {
                    let mut current = start;
                    Interval::new(step_ms, move || {
                        if current < COUNTER_FRAMES {
                            current += 1;
                            setter.set(current);
                        }
                    })
                });
                move || drop(interval)
            },
            counter_running(visible, *frame),
        );
    }
    let value = counter_value(props.end, *frame, COUNTER_FRAMES);
    html! {
        <span ref={node} class={props.class.clone()}>
            { format_counter(value, decimals_of(props.end), &props.suffix) }
        </span>
    }
}

/// Thin bar pinned to the top of the viewport showing read progress.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_scroll_progress();
    html! {
        <div
            class="scroll-progress"
            style={format!("transform: scaleX({:.4});", progress / 100.0)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_uses_direction_offset() {
        let style = reveal_style(Direction::Left, false, 0.0, 0.6);
        assert!(style.starts_with("opacity: 0; transform: translate3d(40px, 0px, 0);"));
        let style = reveal_style(Direction::Up, false, 0.0, 0.6);
        assert!(style.contains("translate3d(0px, 40px, 0)"));
    }

    #[test]
    fn visible_state_is_in_place() {
        let style = reveal_style(Direction::Right, true, 0.2, 0.5);
        assert!(style.starts_with("opacity: 1; transform: translate3d(0px, 0px, 0);"));
        assert!(style.contains("opacity 0.5s cubic-bezier(0.25, 0.1, 0.25, 1) 0.2s"));
    }

    #[test]
    fn none_direction_only_fades() {
        assert_eq!(Direction::None.offset(), (0, 0));
        assert_eq!(Direction::Down.offset(), (0, -40));
    }
}
