//! Animation clock: variable-timestep advancement of simulation time.
//!
//! The clock owns only its reference timestamp; the elapsed simulation time
//! lives in [`SimulationState`]. Timestamps are caller-supplied seconds so
//! the render loop can feed it wall-clock instants while tests inject
//! synthetic sequences.

use crate::state::SimulationState;

#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationClock {
    last: Option<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `state.time` by the delta since the previous tick.
    ///
    /// The first tick after construction or [`reset`](Self::reset) only
    /// records the reference timestamp and advances by zero. The reference
    /// is updated on every tick, paused or not, so resuming never applies a
    /// stale pre-pause delta. Negative or non-finite deltas (clock
    /// regression) are clamped to zero.
    ///
    /// Returns the delta actually added to `state.time`.
    pub fn tick(&mut self, state: &mut SimulationState, now: f64) -> f64 {
        let delta = match self.last {
            Some(last) => {
                let d = now - last;
                if d.is_finite() && d > 0.0 {
                    d
                } else {
                    if d < 0.0 || !d.is_finite() {
                        log::warn!("clock regression: delta {d} clamped to 0");
                    }
                    0.0
                }
            }
            None => 0.0,
        };
        self.last = Some(now);
        if state.paused {
            0.0
        } else {
            state.time += delta;
            delta
        }
    }

    /// Rewind simulation time to zero and forget the reference timestamp,
    /// putting the clock back in its first-tick state. Idempotent and
    /// independent of the pause flag; `omega`/`radius` are untouched.
    pub fn reset(&mut self, state: &mut SimulationState) {
        state.time = 0.0;
        self.last = None;
    }
}
