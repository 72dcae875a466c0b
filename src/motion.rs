//! Pure pieces of the page's animation: the viewport reveal latch, stagger
//! timing, entrance presets, and the hero's ambient effects. The components
//! in `app` wire these to the DOM.

use std::time::Duration;

/// Root margin for the reveal observer. Negative so a section must be a
/// little way on screen before it counts as visible.
pub const REVEAL_MARGIN: &str = "-50px";

/// One-way visibility flag. Once revealed it stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection observation. Returns true only on the
    /// observation that trips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Delay schedule for siblings animating in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub step: f64,
}

impl Stagger {
    pub const CARDS: Stagger = Stagger {
        delay_children: 0.2,
        step: 0.1,
    };
    pub const BADGES: Stagger = Stagger {
        delay_children: 0.2,
        step: 0.08,
    };
    pub const BLOCKS: Stagger = Stagger {
        delay_children: 0.4,
        step: 0.2,
    };

    pub fn delay(&self, index: usize) -> f64 {
        self.delay_children + self.step * index as f64
    }

    /// CSS `transition-delay` value for the sibling at `index`.
    pub fn css(&self, index: usize) -> String {
        format!("{:.2}s", self.delay(index))
    }
}

/// Entrance presets. Each maps to Tailwind classes for the hidden and
/// resting states; `transition` classes live on the element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Fade,
    FadeUp,
    FadeUpSmall,
    FromLeft,
    FromRight,
    Pop,
}

impl Entrance {
    pub fn classes(self, revealed: bool) -> &'static str {
        if revealed {
            return match self {
                Self::Fade => "opacity-100",
                Self::FadeUp | Self::FadeUpSmall => "opacity-100 translate-y-0",
                Self::FromLeft | Self::FromRight => "opacity-100 translate-x-0",
                Self::Pop => "opacity-100 translate-y-0 scale-100",
            };
        }
        match self {
            Self::Fade => "opacity-0",
            Self::FadeUp => "opacity-0 translate-y-8",
            Self::FadeUpSmall => "opacity-0 translate-y-5",
            Self::FromLeft => "opacity-0 -translate-x-8",
            Self::FromRight => "opacity-0 translate-x-8",
            Self::Pop => "opacity-0 translate-y-5 scale-75",
        }
    }
}

pub const STAR_COUNT: usize = 20;

/// A twinkling background marker, positioned in percent of the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub left: f64,
    pub top: f64,
    pub duration: f64,
}

/// Build the star field from a source of uniform samples in `[0, 1)`.
pub fn star_field(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left: sample() * 100.0,
            top: sample() * 100.0,
            duration: sample() * 3.0 + 2.0,
        })
        .collect()
}

pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub const GLOW_RADIUS: f64 = 192.0;

/// Top-left corner of the glow disc so that it is centred on the pointer.
pub fn glow_origin(x: f64, y: f64) -> (f64, f64) {
    (x - GLOW_RADIUS, y - GLOW_RADIUS)
}

pub fn glow_scale(scrolled: bool) -> f64 {
    if scrolled {
        0.8
    } else {
        1.0
    }
}

pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);
pub const COUNTER_TICK: Duration = Duration::from_millis(30);

/// Value shown by a count-up animation after `elapsed`, eased out (cubic).
pub fn counter_value(target: u32, elapsed: Duration, duration: Duration) -> u32 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
    let eased = 1.0 - (1.0 - t).powi(3);
    ((target as f64) * eased).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_is_one_way() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // scrolling away and back never resets or re-fires
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_reports_a_change_exactly_once() {
        let mut latch = RevealLatch::default();
        let observations = [false, false, true, true, false, true, false];
        let changes: Vec<bool> = observations.iter().map(|v| latch.observe(*v)).collect();
        assert_eq!(
            changes,
            vec![false, false, true, false, false, false, false]
        );
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Stagger::CARDS.css(0), "0.20s");
        assert_eq!(Stagger::CARDS.css(3), "0.50s");
        assert_eq!(Stagger::BADGES.css(5), "0.60s");
        assert_eq!(Stagger::BLOCKS.css(1), "0.60s");

        let delays: Vec<f64> = (0..12).map(|i| Stagger::BADGES.delay(i)).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entrance_classes() {
        for entrance in [
            Entrance::Fade,
            Entrance::FadeUp,
            Entrance::FadeUpSmall,
            Entrance::FromLeft,
            Entrance::FromRight,
            Entrance::Pop,
        ] {
            assert!(entrance.classes(false).contains("opacity-0"));
            assert!(entrance.classes(true).contains("opacity-100"));
        }
    }

    #[test]
    fn test_star_field_ranges() {
        // cycle through the edges of the sample range
        let samples = [0.0, 0.5, 0.999_999];
        let mut i = 0;
        let stars = star_field(STAR_COUNT, || {
            let s = samples[i % samples.len()];
            i += 1;
            s
        });
        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars {
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            assert!((2.0..5.0).contains(&star.duration));
        }
    }

    #[test]
    fn test_scroll_and_glow() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));

        assert_eq!(glow_origin(400.0, 300.0), (208.0, 108.0));
        assert_eq!(glow_scale(false), 1.0);
        assert_eq!(glow_scale(true), 0.8);
    }

    #[test]
    fn test_counter_value() {
        let duration = COUNTER_DURATION;
        assert_eq!(counter_value(20, Duration::ZERO, duration), 0);
        assert_eq!(counter_value(20, duration, duration), 20);
        assert_eq!(counter_value(20, duration * 2, duration), 20);
        assert_eq!(counter_value(15, Duration::from_millis(10), Duration::ZERO), 15);

        // ease-out: past half the target at half time
        let half = counter_value(100, duration / 2, duration);
        assert!(half > 50 && half < 100, "got {half}");

        let mut last = 0;
        for step in 0..=50 {
            let v = counter_value(100, COUNTER_TICK * step, duration);
            assert!(v >= last);
            assert!(v <= 100);
            last = v;
        }
        assert_eq!(last, 100);
    }
}
