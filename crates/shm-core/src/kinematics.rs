//! Closed-form kinematics for a particle in uniform circular motion and its
//! one-axis projection.
//!
//! Everything here is a pure function of `(time, omega, radius)`: no stored
//! state, no error paths. All formulas are trigonometric and total over
//! finite reals, so callers only need to keep `omega` and `radius` inside
//! the control-surface ranges for the output to stay legible.

use glam::DVec2;

/// Which component of the circular motion is observed as the SHM shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionAxis {
    /// Vertical shadow: `y = r sin(wt)`.
    Sine,
    /// Horizontal shadow: `x = r cos(wt)`.
    Cosine,
}

/// Instantaneous state of the particle and its projection, derived from
/// `(time, omega, radius)`. Simulation space is y-up with the orbit center
/// at the origin.
#[derive(Clone, Copy, Debug)]
pub struct KinematicSample {
    /// Angular position `theta = omega * time`, radians.
    pub theta: f64,
    /// Position on the circle, `(r cos theta, r sin theta)`.
    pub position: DVec2,
    /// Tangential velocity, magnitude `r*omega`, leading the position by 90 degrees.
    pub velocity: DVec2,
    /// Centripetal acceleration, magnitude `r*omega^2`, pointing at the center.
    pub acceleration: DVec2,
    /// Scalar displacement along the chosen axis.
    pub displacement: f64,
    /// Time-derivative of `displacement`.
    pub projected_velocity: f64,
    /// Second time-derivative of `displacement`; always `-omega^2 * displacement`.
    pub projected_acceleration: f64,
}

impl KinematicSample {
    pub fn at(time: f64, omega: f64, radius: f64, axis: ProjectionAxis) -> Self {
        let theta = omega * time;
        let (sin, cos) = theta.sin_cos();
        let position = DVec2::new(radius * cos, radius * sin);
        let velocity = DVec2::new(-radius * omega * sin, radius * omega * cos);
        let acceleration = DVec2::new(
            -radius * omega * omega * cos,
            -radius * omega * omega * sin,
        );
        let (displacement, projected_velocity, projected_acceleration) = match axis {
            ProjectionAxis::Sine => (position.y, velocity.y, acceleration.y),
            ProjectionAxis::Cosine => (position.x, velocity.x, acceleration.x),
        };
        Self {
            theta,
            position,
            velocity,
            acceleration,
            displacement,
            projected_velocity,
            projected_acceleration,
        }
    }
}

/// Orbital speed `r*omega`.
#[inline]
pub fn orbital_speed(omega: f64, radius: f64) -> f64 {
    radius * omega
}

/// Centripetal acceleration magnitude `r*omega^2`.
#[inline]
pub fn centripetal_accel(omega: f64, radius: f64) -> f64 {
    radius * omega * omega
}

/// Displacement of the shadow along `axis` at time `t`. Shared by the
/// instantaneous sample and the waveform sampler so both always agree.
#[inline]
pub fn displacement_at(time: f64, omega: f64, radius: f64, axis: ProjectionAxis) -> f64 {
    let theta = omega * time;
    match axis {
        ProjectionAxis::Sine => radius * theta.sin(),
        ProjectionAxis::Cosine => radius * theta.cos(),
    }
}
