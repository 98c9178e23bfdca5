//! Authoritative simulation state and the control surface the UI writes
//! through. All setters are total: out-of-range input is clamped, never
//! rejected.

use crate::constants::{
    DEFAULT_OMEGA, DEFAULT_RADIUS, OMEGA_MAX, OMEGA_MIN, RADIUS_MAX, RADIUS_MIN,
};
use crate::kinematics::{KinematicSample, ProjectionAxis};

/// The one mutable record the animation loop and the controls write to.
///
/// `time` advances only through [`crate::clock::AnimationClock::tick`];
/// everything else is an idempotent scalar replacement.
#[derive(Clone, Copy, Debug)]
pub struct SimulationState {
    /// Elapsed simulation seconds, `>= 0`.
    pub time: f64,
    /// Angular velocity, rad/s, kept inside `[OMEGA_MIN, OMEGA_MAX]`.
    pub omega: f64,
    /// Orbit radius in display units, kept inside `[RADIUS_MIN, RADIUS_MAX]`.
    pub radius: f64,
    /// While set, ticks do not advance `time`.
    pub paused: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            time: 0.0,
            omega: DEFAULT_OMEGA,
            radius: DEFAULT_RADIUS,
            paused: false,
        }
    }
}

impl SimulationState {
    pub fn set_omega(&mut self, omega: f64) {
        self.omega = omega.clamp(OMEGA_MIN, OMEGA_MAX);
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.clamp(RADIUS_MIN, RADIUS_MAX);
    }

    pub fn adjust_omega(&mut self, delta: f64) {
        self.set_omega(self.omega + delta);
    }

    pub fn adjust_radius(&mut self, delta: f64) {
        self.set_radius(self.radius + delta);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Derive the instantaneous kinematic sample for the current snapshot.
    pub fn sample(&self, axis: ProjectionAxis) -> KinematicSample {
        KinematicSample::at(self.time, self.omega, self.radius, axis)
    }
}

/// The four independently toggleable overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorKind {
    Radius,
    Velocity,
    Acceleration,
    Projection,
}

/// Visibility flags for the vector overlays, written by the UI and read by
/// the scene mapper each frame.
#[derive(Clone, Copy, Debug)]
pub struct VectorVisibility {
    pub radius: bool,
    pub velocity: bool,
    pub acceleration: bool,
    pub projection: bool,
}

impl Default for VectorVisibility {
    fn default() -> Self {
        Self {
            radius: true,
            velocity: false,
            acceleration: false,
            projection: true,
        }
    }
}

impl VectorVisibility {
    pub fn set(&mut self, kind: VectorKind, visible: bool) {
        *self.flag_mut(kind) = visible;
    }

    pub fn toggle(&mut self, kind: VectorKind) {
        let flag = self.flag_mut(kind);
        *flag = !*flag;
    }

    pub fn is_visible(&self, kind: VectorKind) -> bool {
        match kind {
            VectorKind::Radius => self.radius,
            VectorKind::Velocity => self.velocity,
            VectorKind::Acceleration => self.acceleration,
            VectorKind::Projection => self.projection,
        }
    }

    fn flag_mut(&mut self, kind: VectorKind) -> &mut bool {
        match kind {
            VectorKind::Radius => &mut self.radius,
            VectorKind::Velocity => &mut self.velocity,
            VectorKind::Acceleration => &mut self.acceleration,
            VectorKind::Projection => &mut self.projection,
        }
    }
}
