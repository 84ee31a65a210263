//! Count-up numbers for the stats strip.

/// Number of frames a count-up runs for.
pub const COUNTER_FRAMES: u32 = 60;

/// Value shown at `frame` of `frames`, easing out so the last digits settle slowly.
pub fn counter_value(end: f64, frame: u32, frames: u32) -> f64 {
    if frames == 0 || frame >= frames {
        return end;
    }
    let t = frame as f64 / frames as f64;
    let eased = 1.0 - (1.0 - t).powi(3);
    end * eased
}

/// The count-up timer only needs to run while the counter is on screen
/// and has frames left to show.
pub fn counter_running(visible: bool, frame: u32) -> bool {
    visible && frame < COUNTER_FRAMES
}

/// Decimal places written in `end`, so `99.5` animates as `0.0 .. 99.5`.
pub fn decimals_of(end: f64) -> usize {
    let text = format!("{}", end);
    text.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

pub fn format_counter(value: f64, decimals: usize, suffix: &str) -> String {
    format!("{:.*}{}", decimals, value, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_end() {
        assert_eq!(counter_value(200.0, 0, COUNTER_FRAMES), 0.0);
        assert_eq!(counter_value(200.0, COUNTER_FRAMES, COUNTER_FRAMES), 200.0);
        assert_eq!(counter_value(200.0, 5, 0), 200.0);
    }

    #[test]
    fn eases_out() {
        let early = counter_value(100.0, 6, 60);
        let late = counter_value(100.0, 54, 60) - counter_value(100.0, 48, 60);
        assert!(early > late);
    }

    #[test]
    fn timer_stops_after_last_frame() {
        assert!(!counter_running(false, 0));
        assert!(counter_running(true, 0));
        assert!(counter_running(true, COUNTER_FRAMES - 1));
        assert!(!counter_running(true, COUNTER_FRAMES));
    }

    #[test]
    fn keeps_decimal_places_of_end() {
        assert_eq!(decimals_of(15.0), 0);
        assert_eq!(decimals_of(99.5), 1);
        assert_eq!(format_counter(99.5, decimals_of(99.5), "%"), "99.5%");
        assert_eq!(format_counter(132.7, 0, "+"), "133+");
    }
}
