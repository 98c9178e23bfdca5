// Tests for the trailing-window waveform sampler.

use shm_core::{displacement_at, ProjectionAxis, WaveformWindow};

#[test]
fn window_clips_at_time_zero() {
    let window = WaveformWindow {
        duration: 8.0,
        step: 0.05,
    };
    let points = window.sample(5.0, 2.0, 120.0, ProjectionAxis::Sine);
    assert!(!points.is_empty());
    for p in &points {
        assert!(
            p.t >= 0.0 && p.t <= 5.0 + 1e-12,
            "point outside [0, 5]: t={}",
            p.t
        );
    }
    assert_eq!(points.first().unwrap().t, 0.0);
}

#[test]
fn window_ends_exactly_at_current_time() {
    let window = WaveformWindow::default();
    for time in [0.0, 0.37, 5.0, 12.0, 123.456] {
        let points = window.sample(time, 2.0, 120.0, ProjectionAxis::Sine);
        let last = points.last().unwrap();
        assert!(
            (last.t - time).abs() < 1e-9,
            "window at time={time} ends at {}",
            last.t
        );
    }
}

#[test]
fn full_window_once_enough_time_elapsed() {
    let window = WaveformWindow {
        duration: 8.0,
        step: 0.05,
    };
    let points = window.sample(20.0, 1.0, 100.0, ProjectionAxis::Cosine);
    let first = points.first().unwrap();
    assert!((first.t - 12.0).abs() < 1e-9, "window start {}", first.t);
    // duration/step grid plus the live endpoint
    assert!(points.len() >= 160 && points.len() <= 162, "len={}", points.len());
}

#[test]
fn points_are_strictly_ordered() {
    let window = WaveformWindow::default();
    let points = window.sample(30.0, 3.0, 60.0, ProjectionAxis::Sine);
    for pair in points.windows(2) {
        assert!(pair[0].t < pair[1].t, "out of order at t={}", pair[0].t);
    }
}

#[test]
fn values_agree_with_the_kinematic_model() {
    let window = WaveformWindow::default();
    for axis in [ProjectionAxis::Sine, ProjectionAxis::Cosine] {
        let points = window.sample(9.5, 2.5, 150.0, axis);
        for p in &points {
            let expected = displacement_at(p.t, 2.5, 150.0, axis);
            assert_eq!(p.value, expected, "divergent value at t={} ({axis:?})", p.t);
        }
    }
}

#[test]
fn time_zero_yields_single_origin_point() {
    let window = WaveformWindow::default();
    let points = window.sample(0.0, 2.0, 120.0, ProjectionAxis::Sine);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].t, 0.0);
    assert_eq!(points[0].value, 0.0);
}

#[test]
fn regeneration_is_deterministic() {
    // Stateless derivation: two calls with the same snapshot are identical.
    let window = WaveformWindow::default();
    let a = window.sample(7.3, 1.7, 110.0, ProjectionAxis::Sine);
    let b = window.sample(7.3, 1.7, 110.0, ProjectionAxis::Sine);
    assert_eq!(a, b);
}
