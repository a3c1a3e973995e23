/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_trace::bezier::*;
use flo_trace::tracer::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use std::sync::Arc;

fn seeded_tracer(settings: TracerSettings, seed: u64) -> CurveTracer<StdRng> {
    CurveTracer::with_rng(settings, Arc::new(BinomialCache::new()), StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn same_target_is_ignored() {
    let mut tracer = seeded_tracer(TracerSettings::new(50, 5, 0.2, 0.1), 1);

    tracer.update_target(Coord2(20.0, 30.0));
    for _ in 0..10 {
        tracer.next_point();
    }

    let cursor = tracer.cursor();
    let control_points = tracer.control_points().to_vec();

    tracer.update_target(Coord2(20.0, 30.0));

    assert!(tracer.cursor() == cursor);
    assert!(tracer.control_points() == &control_points[..]);
    assert!(tracer.state() == TraceState::Tracing);
}

#[test]
fn same_target_after_arrival_is_ignored() {
    let mut tracer = seeded_tracer(TracerSettings::new(5, 2, 0.2, 0.1), 2);

    tracer.update_target(Coord2(1.0, 2.0));
    for _ in 0..4 {
        tracer.next_point();
    }

    tracer.update_target(Coord2(1.0, 2.0));

    assert!(tracer.state() == TraceState::Idle);
    assert!(tracer.next_point() == Coord2(1.0, 2.0));
}

#[test]
fn retarget_mid_flight_starts_from_current_position() {
    let mut tracer = seeded_tracer(TracerSettings::new(40, 5, 0.3, 0.1), 3);

    tracer.update_target(Coord2(100.0, 0.0));
    let mut position = tracer.current_anchor();
    for _ in 0..15 {
        position = tracer.next_point();
    }

    tracer.update_target(Coord2(0.0, 100.0));

    let control_points = tracer.control_points();
    assert!(tracer.cursor() == 0);
    assert!(tracer.state() == TraceState::Tracing);
    assert!(control_points.len() == 7);
    assert!(control_points[0] == position);
    assert!(control_points[1] == Coord2(100.0, 0.0));
    assert!(control_points[6] == Coord2(0.0, 100.0));
}

#[test]
fn retarget_mid_flight_is_continuous() {
    let mut tracer = seeded_tracer(TracerSettings::new(100, 4, 0.2, 0.1), 4);

    tracer.update_target(Coord2(50.0, 50.0));
    let mut position = tracer.current_anchor();
    for _ in 0..30 {
        position = tracer.next_point();
    }

    tracer.update_target(Coord2(-50.0, 20.0));
    let next = tracer.next_point();

    // One step along the new curve: the curve is a couple of hundred units long at most
    assert!(position.distance_to(&next) < 10.0, "{:?} -> {:?}", position, next);
}

#[test]
fn retarget_mid_flight_arrives_exactly() {
    let mut tracer = seeded_tracer(TracerSettings::new(20, 3, 0.2, 0.1), 5);

    tracer.update_target(Coord2(10.0, 10.0));
    for _ in 0..8 {
        tracer.next_point();
    }

    tracer.update_target(Coord2(-10.0, 4.0));
    let path = (0..19).map(|_| tracer.next_point()).collect::<Vec<_>>();

    assert!(path[18] == Coord2(-10.0, 4.0));
    assert!(tracer.state() == TraceState::Idle);
}

#[test]
fn retarget_from_rest_jitters_every_interior_point() {
    let mut tracer = seeded_tracer(TracerSettings::new(20, 3, 0.0, 0.0), 6).starting_at(Coord2(0.0, 0.0));

    tracer.update_target(Coord2(8.0, 0.0));

    // No jitter: the interior points sit evenly along the line
    let control_points = tracer.control_points();
    assert!(control_points.len() == 5);
    for (point, x) in control_points.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0].iter()) {
        assert!((point.x() - x).abs() < 1e-12);
        assert!(point.y().abs() < 1e-12);
    }
}

#[test]
fn retarget_without_interior_points() {
    let mut tracer = seeded_tracer(TracerSettings::new(3, 0, 0.2, 0.1), 7);

    tracer.update_target(Coord2(4.0, 0.0));
    assert!(tracer.next_point() == Coord2(2.0, 0.0));

    tracer.update_target(Coord2(2.0, 6.0));
    assert!(tracer.control_points() == &[Coord2(2.0, 0.0), Coord2(2.0, 6.0)]);
    assert!(tracer.next_point() == Coord2(2.0, 3.0));
    assert!(tracer.next_point() == Coord2(2.0, 6.0));
}

#[test]
fn retarget_to_current_position() {
    let mut tracer = seeded_tracer(TracerSettings::new(10, 2, 0.5, 0.1), 8);

    tracer.update_target(Coord2(10.0, 0.0));
    let position = tracer.next_point();

    // The new curve loops out toward the old target and back again
    tracer.update_target(position);
    let control_points = tracer.control_points().to_vec();
    assert!(control_points == vec![position, Coord2(10.0, 0.0), position, position]);

    let path = (0..9).map(|_| tracer.next_point()).collect::<Vec<_>>();
    assert!(path[8] == position);
}

#[test]
fn non_finite_target_is_ignored() {
    let mut tracer = seeded_tracer(TracerSettings::new(30, 4, 0.2, 0.1), 9);

    tracer.update_target(Coord2(50.0, -20.0));
    for _ in 0..8 {
        tracer.next_point();
    }

    let cursor = tracer.cursor();
    let control_points = tracer.control_points().to_vec();

    for target in [Coord2(f64::NAN, 1.0), Coord2(1.0, f64::NAN), Coord2(f64::INFINITY, 0.0), Coord2(0.0, f64::NEG_INFINITY)] {
        tracer.update_target(target);

        assert!(tracer.cursor() == cursor);
        assert!(tracer.control_points() == &control_points[..]);
        assert!(tracer.target_anchor() == Coord2(50.0, -20.0));
        assert!(tracer.state() == TraceState::Tracing);
    }

    let mut last = tracer.current_anchor();
    while tracer.state() == TraceState::Tracing {
        last = tracer.next_point();
        assert!(last.x().is_finite() && last.y().is_finite(), "{:?}", last);
    }
    assert!(last == Coord2(50.0, -20.0));
}

#[test]
fn non_finite_target_at_rest_is_ignored() {
    let mut tracer = seeded_tracer(TracerSettings::new(10, 2, 0.2, 0.1), 10).starting_at(Coord2(3.0, 4.0));

    tracer.update_target(Coord2(f64::NAN, f64::NAN));

    assert!(tracer.state() == TraceState::Idle);
    assert!(tracer.control_points() == &[Coord2(3.0, 4.0)]);
    assert!(tracer.next_point() == Coord2(3.0, 4.0));
}
