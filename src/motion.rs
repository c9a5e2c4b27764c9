//! Motion Math
//!
//! Frame stepping for counters and the scroll-position arithmetic used by
//! the header, parallax and smooth-scroll behaviors.

/// Assumed frame interval (~60 updates per second)
pub const FRAME_MS: f64 = 16.0;

/// What a counter shows after one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    /// Still counting; show this value and request another frame
    Running(i64),
    /// Done; show the exact target and stop
    Finished(i64),
}

impl CounterFrame {
    pub fn value(&self) -> i64 {
        match self {
            CounterFrame::Running(v) | CounterFrame::Finished(v) => *v,
        }
    }
}

/// Linear count from zero to a target in fixed-size steps
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32) -> Self {
        let frames = (duration_ms as f64 / FRAME_MS).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target as f64
    }

    /// Advance by one frame
    pub fn step(&mut self) -> CounterFrame {
        if self.is_finished() {
            return CounterFrame::Finished(self.target);
        }
        self.current += self.increment;
        if self.is_finished() {
            CounterFrame::Finished(self.target)
        } else {
            CounterFrame::Running(self.current.floor() as i64)
        }
    }
}

/// Fires at most once, no matter how often it is triggered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// Returns true only on the first call
    pub fn trigger(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// Starts a counter's animation the first time it becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTrigger {
    target: i64,
    duration_ms: u32,
    latch: OnceLatch,
}

impl CounterTrigger {
    pub fn new(target: i64, duration_ms: u32) -> Self {
        Self { target, duration_ms, latch: OnceLatch::default() }
    }

    /// The animation to run, or `None` if this counter already started
    pub fn on_visible(&mut self) -> Option<CounterAnimation> {
        self.latch
            .trigger()
            .then(|| CounterAnimation::new(self.target, self.duration_ms))
    }
}

/// Parse the leading integer of an attribute value.
///
/// Accepts leading whitespace and an optional sign, stops at the first
/// non-digit: `"1,200"` is 1, `"  42px"` is 42, `"abc"` is `None`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Scroll position that puts `element_top` just below a fixed header
pub fn anchor_scroll_top(element_top: f64, header_height: f64) -> f64 {
    element_top - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(anim: &mut CounterAnimation) -> (Vec<i64>, usize) {
        let mut shown = Vec::new();
        let mut frames = 0;
        loop {
            frames += 1;
            assert!(frames < 10_000, "counter never finished");
            match anim.step() {
                CounterFrame::Running(v) => shown.push(v),
                CounterFrame::Finished(v) => {
                    shown.push(v);
                    return (shown, frames);
                }
            }
        }
    }

    #[test]
    fn test_counter_reaches_exact_target() {
        let mut anim = CounterAnimation::new(100, 2000);
        let (shown, frames) = run_to_end(&mut anim);
        assert_eq!(*shown.last().unwrap(), 100);
        // 2000ms / 16ms = 125 steps, allow one for float rounding
        assert!((125..=126).contains(&frames), "frames = {}", frames);
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert!(shown.iter().all(|v| *v <= 100));
    }

    #[test]
    fn test_counter_stops_after_finish() {
        let mut anim = CounterAnimation::new(100, 2000);
        run_to_end(&mut anim);
        assert!(anim.is_finished());
        assert_eq!(anim.step(), CounterFrame::Finished(100));
        assert_eq!(anim.step().value(), 100);
    }

    #[test]
    fn test_counter_never_overshoots_large_target() {
        let mut anim = CounterAnimation::new(1003, 2000);
        let (shown, _) = run_to_end(&mut anim);
        assert!(shown.iter().all(|v| *v <= 1003));
        assert_eq!(*shown.last().unwrap(), 1003);
    }

    #[test]
    fn test_counter_zero_and_negative_targets() {
        assert_eq!(CounterAnimation::new(0, 2000).step(), CounterFrame::Finished(0));
        assert_eq!(CounterAnimation::new(-5, 2000).step(), CounterFrame::Finished(-5));
    }

    #[test]
    fn test_counter_zero_duration() {
        assert_eq!(CounterAnimation::new(10, 0).step(), CounterFrame::Finished(10));
    }

    #[test]
    fn test_once_latch() {
        let mut latch = OnceLatch::default();
        assert!(latch.trigger());
        assert!(!latch.trigger());
        assert!(!latch.trigger());
    }

    #[test]
    fn test_counter_trigger_starts_once() {
        let mut trigger = CounterTrigger::new(120, 2000);
        let first = trigger.on_visible().expect("first sighting starts");
        assert_eq!(first, CounterAnimation::new(120, 2000));
        // Scrolling away and back must not restart it
        assert_eq!(trigger.on_visible(), None);
        assert_eq!(trigger.on_visible(), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("100"), Some(100));
        assert_eq!(parse_leading_int("  42px"), Some(42));
        assert_eq!(parse_leading_int("1,200"), Some(1));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_header_threshold() {
        assert!(!header_is_scrolled(0.0, 100.0));
        assert!(!header_is_scrolled(100.0, 100.0));
        assert!(header_is_scrolled(100.5, 100.0));
    }

    #[test]
    fn test_scroll_offsets() {
        assert_eq!(parallax_offset(300.0, 0.5), 150.0);
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_scroll_top(1200.0, 0.0), 1200.0);
    }
}
