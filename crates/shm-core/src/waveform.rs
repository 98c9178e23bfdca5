//! Trailing-window waveform of the projected displacement.
//!
//! The window is regenerated from scratch on every call rather than kept as
//! an incremental ring buffer: point counts are small (~160 at the default
//! settings) and a stateless derivation cannot drift from the model.

use crate::constants::{WAVEFORM_DURATION, WAVEFORM_STEP};
use crate::kinematics::{displacement_at, ProjectionAxis};

/// One sample of the shadow's displacement history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformPoint {
    pub t: f64,
    pub value: f64,
}

/// Look-back window configuration: how far back to plot and at what spacing.
#[derive(Clone, Copy, Debug)]
pub struct WaveformWindow {
    pub duration: f64,
    pub step: f64,
}

impl Default for WaveformWindow {
    fn default() -> Self {
        Self {
            duration: WAVEFORM_DURATION,
            step: WAVEFORM_STEP,
        }
    }
}

impl WaveformWindow {
    /// Sample `[max(0, time - duration), time]` at `step`, ending exactly at
    /// `time`. Never emits negative-time points; when `time < duration` the
    /// window truncates at zero. Non-empty for any `time >= 0`.
    pub fn sample(
        &self,
        time: f64,
        omega: f64,
        radius: f64,
        axis: ProjectionAxis,
    ) -> Vec<WaveformPoint> {
        let start = (time - self.duration).max(0.0);
        let span = time - start;
        let steps = if self.step > 0.0 {
            (span / self.step).floor() as usize
        } else {
            0
        };
        let mut points = Vec::with_capacity(steps + 2);
        for i in 0..=steps {
            let t = (start + i as f64 * self.step).min(time);
            points.push(WaveformPoint {
                t,
                value: displacement_at(t, omega, radius, axis),
            });
        }
        // The stepped grid rarely lands on `time` exactly; close the window
        // with the live endpoint so the trace meets the shadow.
        if points.last().map(|p| time - p.t > 1e-9).unwrap_or(true) {
            points.push(WaveformPoint {
                t: time,
                value: displacement_at(time, omega, radius, axis),
            });
        }
        points
    }
}
