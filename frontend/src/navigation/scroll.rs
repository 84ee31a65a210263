//! Scroll-reactive header state.
//!
//! The header tracks two things from the window scroll offset: whether the
//! page has left the top (`scrolled`, used for the frosted background) and
//! whether the bar should slide out of view while the user reads downward
//! (`hidden`).

/// Pixel offsets that drive the header's two flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderThresholds {
    /// `scrolled` turns on strictly above this offset.
    pub scrolled: u32,
    /// The bar is never hidden at or below this offset.
    pub hide: u32,
}

/// One reading of the window's vertical offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollSample {
    pub offset: u32,
}

impl ScrollSample {
    pub fn new(offset: u32) -> Self {
        Self { offset }
    }

    /// Converts a raw `window.scrollY`. Overscroll bounce can report
    /// negative values and NaN is possible on detached documents; both read as 0.
    pub fn from_scroll_y(scroll_y: f64) -> Self {
        let offset = if scroll_y.is_finite() && scroll_y > 0.0 {
            scroll_y.round().min(u32::MAX as f64) as u32
        } else {
            0
        };
        Self { offset }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// What the header renders from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavVisibility {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Next show/hide state given the previous state and the last two offsets.
pub fn next_visibility(state: Visibility, last: u32, current: u32, hide_threshold: u32) -> Visibility {
    let moving_down = current > last;
    match state {
        Visibility::Visible if moving_down && current > hide_threshold => Visibility::Hidden,
        Visibility::Hidden if !moving_down => Visibility::Visible,
        unchanged => unchanged,
    }
}

/// Owned per-header tracker. Holds only the previous offset and the
/// current state, so each sample is constant time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderScroll {
    thresholds: HeaderThresholds,
    last_offset: u32,
    state: Visibility,
    scrolled: bool,
}

impl HeaderScroll {
    pub fn new(thresholds: HeaderThresholds) -> Self {
        Self {
            thresholds,
            last_offset: 0,
            state: Visibility::Visible,
            scrolled: false,
        }
    }

    /// Takes the reading made on mount. There is no delta yet, so the bar
    /// stays visible and only `scrolled` and the reference offset are set.
    pub fn seed(&mut self, sample: ScrollSample) -> NavVisibility {
        self.state = Visibility::Visible;
        self.scrolled = sample.offset > self.thresholds.scrolled;
        self.last_offset = sample.offset;
        self.visibility()
    }

    pub fn observe(&mut self, sample: ScrollSample) -> NavVisibility {
        let current = sample.offset;
        self.state = next_visibility(self.state, self.last_offset, current, self.thresholds.hide);
        self.scrolled = current > self.thresholds.scrolled;
        self.last_offset = current;
        self.visibility()
    }

    pub fn visibility(&self) -> NavVisibility {
        NavVisibility {
            scrolled: self.scrolled,
            hidden: self.state == Visibility::Hidden,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn last_offset(&self) -> u32 {
        self.last_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker(hide: u32) -> HeaderScroll {
        HeaderScroll::new(HeaderThresholds { scrolled: 20, hide })
    }

    fn feed(tracker: &mut HeaderScroll, offsets: &[u32]) -> Vec<Visibility> {
        offsets
            .iter()
            .map(|&offset| {
                tracker.observe(ScrollSample::new(offset));
                tracker.state()
            })
            .collect()
    }

    #[test]
    fn starts_visible_and_unscrolled() {
        let tracker = tracker(100);
        assert_eq!(tracker.state(), Visibility::Visible);
        assert_eq!(tracker.visibility(), NavVisibility::default());
    }

    #[test]
    fn hides_past_threshold_and_reappears_on_upward_scroll() {
        let mut tracker = tracker(150);
        let states = feed(&mut tracker, &[0, 50, 200, 180]);
        assert_eq!(
            states,
            vec![
                Visibility::Visible,
                Visibility::Visible,
                Visibility::Hidden,
                Visibility::Visible
            ]
        );
    }

    #[test]
    fn scrolled_flag_ignores_direction() {
        let mut tracker = tracker(100);
        assert!(!tracker.observe(ScrollSample::new(19)).scrolled);
        assert!(tracker.observe(ScrollSample::new(21)).scrolled);
        assert!(!tracker.observe(ScrollSample::new(20)).scrolled);
        assert!(tracker.observe(ScrollSample::new(500)).scrolled);
        assert!(tracker.observe(ScrollSample::new(300)).scrolled);
    }

    #[test]
    fn stationary_sample_shows_the_bar() {
        let mut tracker = tracker(100);
        feed(&mut tracker, &[150, 300]);
        assert_eq!(tracker.state(), Visibility::Hidden);
        tracker.observe(ScrollSample::new(300));
        assert_eq!(tracker.state(), Visibility::Visible);
    }

    #[test]
    fn moving_down_below_threshold_keeps_bar_visible() {
        let mut tracker = tracker(100);
        feed(&mut tracker, &[10, 40, 99, 100]);
        assert_eq!(tracker.state(), Visibility::Visible);
        assert_eq!(tracker.last_offset(), 100);
    }

    #[test]
    fn top_of_page_is_always_visible() {
        let mut tracker = tracker(100);
        feed(&mut tracker, &[400, 800]);
        let nav = tracker.observe(ScrollSample::new(0));
        assert!(!nav.hidden);
        assert!(!nav.scrolled);
    }

    #[test]
    fn mounting_mid_page_keeps_bar_visible() {
        let mut tracker = tracker(100);
        let nav = tracker.seed(ScrollSample::from_scroll_y(800.0));
        assert_eq!(nav, NavVisibility { scrolled: true, hidden: false });
        assert_eq!(tracker.last_offset(), 800);

        let nav = tracker.observe(ScrollSample::new(820));
        assert_eq!(nav, NavVisibility { scrolled: true, hidden: true });
    }

    #[test]
    fn seeding_at_top_is_unscrolled() {
        let mut tracker = tracker(100);
        assert_eq!(tracker.seed(ScrollSample::new(0)), NavVisibility::default());
        tracker.observe(ScrollSample::new(50));
        assert_eq!(tracker.state(), Visibility::Visible);
    }

    #[test]
    fn raw_scroll_y_is_clamped_and_rounded() {
        assert_eq!(ScrollSample::from_scroll_y(-35.0).offset, 0);
        assert_eq!(ScrollSample::from_scroll_y(f64::NAN).offset, 0);
        assert_eq!(ScrollSample::from_scroll_y(120.6).offset, 121);
        assert_eq!(ScrollSample::from_scroll_y(1e12).offset, u32::MAX);
    }

    proptest! {
        #[test]
        fn non_increasing_offsets_end_visible(mut offsets in prop::collection::vec(0u32..10_000, 1..50)) {
            offsets.sort_unstable_by(|a, b| b.cmp(a));
            let mut tracker = tracker(100);
            feed(&mut tracker, &offsets);
            prop_assert_eq!(tracker.state(), Visibility::Visible);
        }

        #[test]
        fn increasing_offsets_past_threshold_end_hidden(
            start in 0u32..1_000,
            steps in prop::collection::vec(1u32..200, 1..30),
            hide in 0u32..500,
        ) {
            let mut offsets = Vec::with_capacity(steps.len() + 1);
            let mut offset = start;
            offsets.push(offset);
            for step in steps {
                offset += step;
                offsets.push(offset);
            }
            prop_assume!(offset > hide);
            let mut tracker = tracker(hide);
            feed(&mut tracker, &offsets);
            prop_assert_eq!(tracker.state(), Visibility::Hidden);
        }

        #[test]
        fn hidden_implies_downward_past_threshold(offsets in prop::collection::vec(0u32..2_000, 1..60)) {
            let mut tracker = tracker(150);
            let mut last = 0;
            for offset in offsets {
                let nav = tracker.observe(ScrollSample::new(offset));
                if nav.hidden {
                    prop_assert!(offset > last && offset > 150);
                }
                prop_assert_eq!(nav.scrolled, offset > 20);
                last = offset;
            }
        }
    }
}
