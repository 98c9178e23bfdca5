// Host-side tests for the pure kinematic model.

use shm_core::{
    centripetal_accel, displacement_at, orbital_speed, KinematicSample, ProjectionAxis,
};

const OMEGAS: &[f64] = &[0.5, 1.0, 2.0, 3.7, 5.0];
const RADII: &[f64] = &[50.0, 120.0, 180.0];

fn time_grid() -> impl Iterator<Item = f64> {
    (0..200).map(|i| i as f64 * 0.13)
}

#[test]
fn acceleration_opposes_displacement_for_both_axes() {
    // The defining SHM property: a == -omega^2 * displacement, always.
    for axis in [ProjectionAxis::Sine, ProjectionAxis::Cosine] {
        for &omega in OMEGAS {
            for &radius in RADII {
                for t in time_grid() {
                    let s = KinematicSample::at(t, omega, radius, axis);
                    let expected = -omega * omega * s.displacement;
                    let tol = 1e-9 * expected.abs().max(1.0);
                    assert!(
                        (s.projected_acceleration - expected).abs() < tol,
                        "a != -w^2*x at t={t} w={omega} r={radius} ({axis:?}): \
                         {} vs {expected}",
                        s.projected_acceleration
                    );
                }
            }
        }
    }
}

#[test]
fn particle_stays_on_circle() {
    for &omega in OMEGAS {
        for &radius in RADII {
            for t in time_grid() {
                let s = KinematicSample::at(t, omega, radius, ProjectionAxis::Sine);
                let r2 = s.position.length_squared();
                assert!(
                    (r2 - radius * radius).abs() < 1e-6 * radius * radius,
                    "off circle at t={t} w={omega} r={radius}: |p|^2={r2}"
                );
            }
        }
    }
}

#[test]
fn velocity_is_tangential_and_leads_position() {
    for t in time_grid() {
        let s = KinematicSample::at(t, 2.0, 120.0, ProjectionAxis::Sine);
        let dot = s.position.dot(s.velocity);
        assert!(dot.abs() < 1e-6, "velocity not perpendicular at t={t}: {dot}");
        // positive cross product: velocity leads the radius vector by 90 degrees
        let cross = s.position.x * s.velocity.y - s.position.y * s.velocity.x;
        assert!(cross > 0.0, "velocity does not lead position at t={t}");
    }
}

#[test]
fn acceleration_points_at_center() {
    for t in time_grid() {
        let s = KinematicSample::at(t, 3.7, 80.0, ProjectionAxis::Cosine);
        let expected = -3.7 * 3.7 * s.position;
        assert!(
            (s.acceleration - expected).length() < 1e-6,
            "acceleration not centripetal at t={t}"
        );
    }
}

#[test]
fn concrete_scenario_omega_2_radius_120() {
    let s = KinematicSample::at(0.0, 2.0, 120.0, ProjectionAxis::Sine);
    assert_eq!(s.displacement, 0.0);
    assert!((s.projected_velocity - 240.0).abs() < 1e-9);
    assert_eq!(s.projected_acceleration, 0.0);

    // Quarter period for omega=2: theta = pi/2, shadow at the top.
    let quarter = std::f64::consts::FRAC_PI_4;
    let s = KinematicSample::at(quarter, 2.0, 120.0, ProjectionAxis::Sine);
    assert!((s.displacement - 120.0).abs() < 1e-9);
    assert!(s.projected_velocity.abs() < 1e-9);
    assert!((s.projected_acceleration + 480.0).abs() < 1e-9);
}

#[test]
fn scalar_magnitudes_match_formulas() {
    assert_eq!(orbital_speed(2.0, 120.0), 240.0);
    assert_eq!(centripetal_accel(2.0, 120.0), 480.0);
    for t in time_grid() {
        let s = KinematicSample::at(t, 2.0, 120.0, ProjectionAxis::Sine);
        assert!((s.velocity.length() - 240.0).abs() < 1e-9);
        assert!((s.acceleration.length() - 480.0).abs() < 1e-9);
    }
}

#[test]
fn displacement_at_agrees_with_full_sample() {
    for axis in [ProjectionAxis::Sine, ProjectionAxis::Cosine] {
        for t in time_grid() {
            let s = KinematicSample::at(t, 1.3, 75.0, axis);
            let d = displacement_at(t, 1.3, 75.0, axis);
            assert_eq!(s.displacement, d, "divergent displacement at t={t} ({axis:?})");
        }
    }
}

#[test]
fn zero_omega_degenerates_without_panicking() {
    let s = KinematicSample::at(10.0, 0.0, 120.0, ProjectionAxis::Sine);
    assert!(s.position.x == 120.0 && s.position.y == 0.0);
    assert_eq!(s.displacement, 0.0);
    assert_eq!(s.projected_velocity, 0.0);
    assert_eq!(s.projected_acceleration, 0.0);
    assert!(s.position.is_finite() && s.velocity.is_finite() && s.acceleration.is_finite());
}
