//! Maps simulation-space kinematics into view-space primitives.
//!
//! Simulation space is y-up with the orbit center at the origin; view space
//! is y-down with the origin at the top-left of the fixed viewbox
//! (`VIEW_WIDTH` x `VIEW_HEIGHT`). The three historical layout variants of
//! the visualization differ only in where the projection screen sits, so
//! they are one enum here and share every formula.

use glam::{DVec2, Vec2};

use crate::constants::{
    ACCEL_GLYPH_SCALE, GLYPH_MAX_RATIO, VELOCITY_GLYPH_SCALE, VIEW_HEIGHT, VIEW_WIDTH,
};
use crate::kinematics::ProjectionAxis;
use crate::state::{SimulationState, VectorVisibility};

/// Geometric placement variants of the visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Screen to the right of the circle; the shadow traces the sine
    /// (vertical) component.
    VerticalScreen,
    /// Same screen placement, but presented alongside the cosine
    /// convention's displacement-vs-time chart.
    VerticalChart,
    /// Screen below the circle; the shadow traces the cosine (horizontal)
    /// component.
    HorizontalScreen,
}

impl Layout {
    /// The projection convention each placement observes.
    pub fn axis(self) -> ProjectionAxis {
        match self {
            Layout::VerticalScreen => ProjectionAxis::Sine,
            Layout::VerticalChart | Layout::HorizontalScreen => ProjectionAxis::Cosine,
        }
    }

    pub fn next(self) -> Layout {
        match self {
            Layout::VerticalScreen => Layout::VerticalChart,
            Layout::VerticalChart => Layout::HorizontalScreen,
            Layout::HorizontalScreen => Layout::VerticalScreen,
        }
    }
}

/// Where the orbit and the projection screen sit inside the viewbox.
#[derive(Clone, Copy, Debug)]
pub struct SceneGeometry {
    /// Orbit center in view space.
    pub center: Vec2,
    /// Distance from the center to the projection screen line.
    pub screen_offset: f32,
}

impl Default for SceneGeometry {
    fn default() -> Self {
        Self {
            center: Vec2::new(220.0, 250.0),
            screen_offset: 280.0,
        }
    }
}

impl SceneGeometry {
    /// Convert a simulation-space point (y-up, orbit-centered) to view space.
    #[inline]
    pub fn to_view(&self, sim: DVec2) -> Vec2 {
        Vec2::new(
            self.center.x + sim.x as f32,
            self.center.y - sim.y as f32,
        )
    }
}

/// A directed view-space segment for one vector overlay.
#[derive(Clone, Copy, Debug)]
pub struct VectorGlyph {
    pub from: Vec2,
    pub to: Vec2,
}

impl VectorGlyph {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Everything the display layer needs for one frame, derived from a single
/// consistent snapshot of the simulation state.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub layout: Layout,
    pub center: Vec2,
    pub orbit_radius: f32,
    pub theta: f64,
    pub particle: Vec2,
    /// Shadow position on the projection screen. Shares the particle's view
    /// y (vertical screen) or view x (horizontal screen).
    pub shadow: Vec2,
    /// Endpoints of the projection screen line.
    pub screen: (Vec2, Vec2),
    pub radius_glyph: Option<VectorGlyph>,
    pub velocity_glyph: Option<VectorGlyph>,
    pub acceleration_glyph: Option<VectorGlyph>,
    /// Particle-to-shadow ray, present when the projection overlay is on.
    pub projection_ray: Option<VectorGlyph>,
}

impl SceneFrame {
    pub fn build(
        state: &SimulationState,
        visibility: &VectorVisibility,
        layout: Layout,
        geometry: &SceneGeometry,
    ) -> Self {
        let sample = state.sample(layout.axis());
        let center = geometry.center;
        let orbit_radius = state.radius as f32;
        let particle = geometry.to_view(sample.position);

        let (shadow, screen) = match layout {
            Layout::VerticalScreen | Layout::VerticalChart => {
                let x = center.x + geometry.screen_offset;
                let shadow = Vec2::new(x, particle.y);
                let half = orbit_radius + 50.0;
                (
                    shadow,
                    (Vec2::new(x, center.y - half), Vec2::new(x, center.y + half)),
                )
            }
            Layout::HorizontalScreen => {
                let y = (center.y + geometry.screen_offset).min(VIEW_HEIGHT - 20.0);
                let shadow = Vec2::new(particle.x, y);
                let half = orbit_radius + 50.0;
                (
                    shadow,
                    (Vec2::new(center.x - half, y), Vec2::new(center.x + half, y)),
                )
            }
        };

        let radius_glyph = visibility.radius.then_some(VectorGlyph {
            from: center,
            to: particle,
        });
        let velocity_glyph = visibility.velocity.then(|| {
            glyph_from(
                geometry,
                sample.position,
                sample.velocity,
                VELOCITY_GLYPH_SCALE,
                state.radius,
            )
        });
        let acceleration_glyph = visibility.acceleration.then(|| {
            glyph_from(
                geometry,
                sample.position,
                sample.acceleration,
                ACCEL_GLYPH_SCALE,
                state.radius,
            )
        });
        let projection_ray = visibility.projection.then_some(VectorGlyph {
            from: particle,
            to: shadow,
        });

        Self {
            layout,
            center,
            orbit_radius,
            theta: sample.theta,
            particle,
            shadow,
            screen,
            radius_glyph,
            velocity_glyph,
            acceleration_glyph,
            projection_ray,
        }
    }
}

/// Build a glyph anchored at the particle, pointing along `vector`, with its
/// length damped by `scale` and hard-capped at `GLYPH_MAX_RATIO` times the
/// orbit radius so maxed-out sliders cannot push it arbitrarily off canvas.
fn glyph_from(
    geometry: &SceneGeometry,
    anchor_sim: DVec2,
    vector_sim: DVec2,
    scale: f64,
    orbit_radius: f64,
) -> VectorGlyph {
    let magnitude = vector_sim.length();
    let length = (magnitude * scale).min(GLYPH_MAX_RATIO * orbit_radius);
    let dir = if magnitude > 0.0 {
        vector_sim / magnitude
    } else {
        DVec2::ZERO
    };
    VectorGlyph {
        from: geometry.to_view(anchor_sim),
        to: geometry.to_view(anchor_sim + dir * length),
    }
}

/// Rectangle in view space where the waveform chart is drawn, shared by the
/// front-end so the trace lines up under the scene.
#[derive(Clone, Copy, Debug)]
pub struct ChartRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for ChartRect {
    fn default() -> Self {
        Self {
            min: Vec2::new(40.0, VIEW_HEIGHT - 90.0),
            max: Vec2::new(VIEW_WIDTH - 40.0, VIEW_HEIGHT - 10.0),
        }
    }
}

impl ChartRect {
    /// Map a waveform point into the chart. `t` spans the trailing window
    /// ending at `time`; `value` spans `[-radius, radius]` vertically with
    /// zero at the middle.
    pub fn plot(&self, t: f64, value: f64, time: f64, duration: f64, radius: f64) -> Vec2 {
        let t0 = time - duration;
        let u = if duration > 0.0 {
            (((t - t0) / duration) as f32).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let v = if radius > 0.0 {
            ((value / radius) as f32).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let mid = 0.5 * (self.min.y + self.max.y);
        let half = 0.5 * (self.max.y - self.min.y);
        Vec2::new(self.min.x + u * (self.max.x - self.min.x), mid - v * half)
    }
}
