//! Circular skill indicators: ring fill plus an eased percentage counter,
//! played once when the card first becomes visible.

use std::f64::consts::PI;

/// `1 - (1 - t)^5`, with `t` clamped to `[0, 1]`.
pub fn ease_out_quint(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(5)
}

/// Displayed counter value after `elapsed` ms of a `duration` ms animation.
pub fn counter_value(start: u32, end: u32, elapsed: f64, duration: f64) -> u32 {
    let progress = if duration > 0.0 {
        (elapsed / duration).min(1.0)
    } else {
        1.0
    };
    let (start, end) = (f64::from(start), f64::from(end));
    let value = (start + (end - start) * ease_out_quint(progress)).floor();
    value.max(0.0) as u32
}

/// `stroke-dashoffset` that fills `percentage` of a ring of `radius`.
pub fn stroke_offset(percentage: u32, radius: f64) -> f64 {
    let circumference = 2.0 * PI * radius;
    circumference - (f64::from(percentage) / 100.0) * circumference
}

/// Parse a `data-percentage` attribute the way `parseInt` would: optional
/// leading whitespace and sign, then the leading run of digits. Clamped to
/// `0..=100`.
pub fn parse_percentage(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: u64 = digits[..end].parse().ok()?;
    if negative {
        return Some(0);
    }
    Some(value.min(100) as u32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorPhase {
    Unobserved,
    Pending,
    Animating,
    Done,
}

#[derive(Debug)]
pub struct SkillIndicator {
    target: u32,
    duration_ms: f64,
    phase: IndicatorPhase,
    displayed: u32,
    counter_start: Option<f64>,
}

impl SkillIndicator {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target: target.min(100),
            duration_ms,
            phase: IndicatorPhase::Unobserved,
            displayed: 0,
            counter_start: None,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn phase(&self) -> IndicatorPhase {
        self.phase
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Registered with the visibility observer.
    pub fn observe(&mut self) {
        if self.phase == IndicatorPhase::Unobserved {
            self.phase = IndicatorPhase::Pending;
        }
    }

    /// Feed a visibility ratio. Returns `true` exactly once: on the first
    /// report at or above `threshold` while pending.
    pub fn on_visibility(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.phase != IndicatorPhase::Pending || ratio < threshold {
            return false;
        }
        self.phase = IndicatorPhase::Animating;
        true
    }

    pub fn ring_offset(&self, radius: f64) -> f64 {
        stroke_offset(self.target, radius)
    }

    /// Advance the counter to frame time `now` (ms). The first call fixes the
    /// start time. Moves to `Done` once the full duration has elapsed.
    pub fn counter_frame(&mut self, now: f64) -> u32 {
        if self.phase == IndicatorPhase::Done {
            return self.displayed;
        }
        let start = *self.counter_start.get_or_insert(now);
        let elapsed = (now - start).max(0.0);
        self.displayed = counter_value(0, self.target, elapsed, self.duration_ms);
        if elapsed >= self.duration_ms {
            self.displayed = self.target;
            self.phase = IndicatorPhase::Done;
        }
        self.displayed
    }

    pub fn is_done(&self) -> bool {
        self.phase == IndicatorPhase::Done
    }
}
