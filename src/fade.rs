//! Stepped volume fades.
//!
//! A fade moves the volume toward a target by a fixed step on every tick and
//! snaps to the target once the remaining distance is smaller than one step,
//! so it always lands exactly on the target after a bounded number of ticks.

use crate::constants::{
    FADE_IN_TICK_MS, FADE_OUT_TICK_MS, FADE_STEP, TARGET_VOLUME, VOLUME_MAX, VOLUME_MIN,
};
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct FadeSettings {
    pub step: f64,
    pub fade_out_interval: Duration,
    pub fade_in_interval: Duration,
    pub target_volume: f64,
}

impl Default for FadeSettings {
    fn default() -> Self {
        Self {
            step: FADE_STEP,
            fade_out_interval: Duration::from_millis(FADE_OUT_TICK_MS),
            fade_in_interval: Duration::from_millis(FADE_IN_TICK_MS),
            target_volume: TARGET_VOLUME,
        }
    }
}

impl FadeSettings {
    /// Pull out-of-range values back to something that still converges.
    pub fn sanitized(self) -> Self {
        let defaults = FadeSettings::default();
        let step = if self.step.is_finite() && self.step > 0.0 {
            self.step.min(VOLUME_MAX)
        } else {
            defaults.step
        };
        let target_volume = if self.target_volume.is_finite() {
            clamp_volume(self.target_volume)
        } else {
            defaults.target_volume
        };
        let non_zero = |d: Duration, fallback: Duration| if d.is_zero() { fallback } else { d };
        Self {
            step,
            fade_out_interval: non_zero(self.fade_out_interval, defaults.fade_out_interval),
            fade_in_interval: non_zero(self.fade_in_interval, defaults.fade_in_interval),
            target_volume,
        }
    }

    /// Upper bound on ticks needed to cover `distance`.
    pub fn max_ticks(&self, distance: f64) -> u32 {
        (distance.abs() / self.step).ceil() as u32 + 1
    }
}

#[inline]
pub fn clamp_volume(v: f64) -> f64 {
    if v.is_nan() {
        return VOLUME_MIN;
    }
    v.clamp(VOLUME_MIN, VOLUME_MAX)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeStep {
    Moving(f64),
    Arrived(f64),
}

/// Advance `current` one step toward `target`.
pub fn step_volume(current: f64, target: f64, step: f64) -> FadeStep {
    let target = clamp_volume(target);
    let diff = target - current;
    if diff.abs() < step {
        FadeStep::Arrived(target)
    } else {
        FadeStep::Moving(clamp_volume(current + step.copysign(diff)))
    }
}

/// What to do once a fade lands on its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Continuation {
    Settle,
    /// Stop, load `url`, then start playback.
    SwapAndPlay { url: String },
}

#[derive(Clone, Debug)]
pub struct Fade {
    pub target: f64,
    pub then: Continuation,
    pub started_at: Instant,
    pub ticks: u32,
}

impl Fade {
    pub fn new(target: f64, then: Continuation) -> Self {
        Self {
            target: clamp_volume(target),
            then,
            started_at: Instant::now(),
            ticks: 0,
        }
    }
}
