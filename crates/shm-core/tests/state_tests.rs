// Tests for the control surface and the static derivation content.

use shm_core::{
    SimulationState, VectorKind, VectorVisibility, DERIVATION_STEPS, DEFAULT_OMEGA,
    DEFAULT_RADIUS, OMEGA_MAX, OMEGA_MIN, RADIUS_MAX, RADIUS_MIN,
};

#[test]
fn startup_defaults() {
    let sim = SimulationState::default();
    assert_eq!(sim.time, 0.0);
    assert_eq!(sim.omega, DEFAULT_OMEGA);
    assert_eq!(sim.radius, DEFAULT_RADIUS);
    assert!(!sim.paused);
}

#[test]
fn setters_clamp_to_the_slider_ranges() {
    let mut sim = SimulationState::default();
    sim.set_omega(100.0);
    assert_eq!(sim.omega, OMEGA_MAX);
    sim.set_omega(0.0);
    assert_eq!(sim.omega, OMEGA_MIN);
    sim.set_omega(3.3);
    assert_eq!(sim.omega, 3.3);

    sim.set_radius(9999.0);
    assert_eq!(sim.radius, RADIUS_MAX);
    sim.set_radius(-5.0);
    assert_eq!(sim.radius, RADIUS_MIN);
    sim.set_radius(77.0);
    assert_eq!(sim.radius, 77.0);
}

#[test]
fn adjustments_saturate_at_the_bounds() {
    let mut sim = SimulationState::default();
    for _ in 0..100 {
        sim.adjust_omega(0.5);
    }
    assert_eq!(sim.omega, OMEGA_MAX);
    for _ in 0..100 {
        sim.adjust_radius(-10.0);
    }
    assert_eq!(sim.radius, RADIUS_MIN);
}

#[test]
fn omega_stays_strictly_positive() {
    // Zero omega would degenerate the projection; the clamp floor prevents it.
    let mut sim = SimulationState::default();
    sim.set_omega(f64::NEG_INFINITY);
    assert!(sim.omega >= OMEGA_MIN);
    assert!(sim.omega > 0.0);
}

#[test]
fn visibility_set_and_toggle() {
    let mut vis = VectorVisibility::default();
    assert!(vis.is_visible(VectorKind::Radius));
    assert!(!vis.is_visible(VectorKind::Velocity));
    assert!(!vis.is_visible(VectorKind::Acceleration));
    assert!(vis.is_visible(VectorKind::Projection));

    vis.toggle(VectorKind::Velocity);
    assert!(vis.is_visible(VectorKind::Velocity));
    vis.toggle(VectorKind::Velocity);
    assert!(!vis.is_visible(VectorKind::Velocity));

    vis.set(VectorKind::Projection, false);
    assert!(!vis.is_visible(VectorKind::Projection));
    // idempotent replacement
    vis.set(VectorKind::Projection, false);
    assert!(!vis.is_visible(VectorKind::Projection));
}

#[test]
fn derivation_steps_are_complete_and_ordered() {
    assert_eq!(DERIVATION_STEPS.len(), 6);
    for (i, step) in DERIVATION_STEPS.iter().enumerate() {
        assert_eq!(step.id as usize, i + 1);
        assert!(!step.title.is_empty());
        assert!(!step.formula.is_empty());
        assert!(!step.description.is_empty());
    }
    // The sequence culminates in the SHM equation.
    assert!(DERIVATION_STEPS.last().unwrap().formula.contains("-w^2"));
}
