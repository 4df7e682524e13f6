use approx::assert_relative_eq;
use bspline_knot_editor::{ControlPolygon, EditError, EditSession, KnotVector};
use glam::Vec2;

fn assert_knots(actual: &KnotVector, expected: &[f32]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Unerwartete Knotenanzahl: {:?}",
        actual.as_slice()
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-6);
    }
}

fn assert_consistent(session: &EditSession) {
    assert!(
        session
            .knots()
            .is_consistent(session.point_count(), session.order()),
        "Inkonsistenter Knotenvektor für {} Punkte bei Ordnung {}: {:?}",
        session.point_count(),
        session.order(),
        session.knots().as_slice()
    );
}

fn session_with(point_count: usize, order: usize) -> EditSession {
    let points = (0..point_count)
        .map(|i| Vec2::new(i as f32 * 0.1 - 0.5, 0.0))
        .collect();
    EditSession::with_points(points, order).expect("Session sollte aufbaubar sein")
}

#[test]
fn test_seeded_session_has_open_uniform_knots() {
    let session = EditSession::default();

    assert_eq!(session.point_count(), 4);
    assert_eq!(session.order(), 2);
    assert_knots(session.knots(), &[0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
}

#[test]
fn test_increase_order_on_four_points() {
    let mut session = EditSession::default();

    assert_eq!(session.increase_order(), Ok(3));

    assert_eq!(session.knots().len(), 8);
    assert_knots(
        session.knots(),
        &[0.0, 0.0, 0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 1.0],
    );
}

#[test]
fn test_decrease_order_at_one_is_refused_without_change() {
    let mut session = session_with(4, 1);
    let before = session.clone();

    assert_eq!(session.decrease_order(), Err(EditError::OrderTooSmall));
    assert_eq!(session, before);
}

#[test]
fn test_delete_on_four_points_order_three() {
    let mut session = session_with(4, 3);

    session.delete_point(1).expect("Löschen sollte erlaubt sein");

    assert_eq!(session.point_count(), 3);
    assert_knots(session.knots(), &[0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0]);
}

#[test]
fn test_delete_guard_at_order_four() {
    let mut session = session_with(4, 4);
    assert_knots(
        session.knots(),
        &[0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0],
    );

    session.delete_point(3).expect("4 Punkte bei Ordnung 4 dürfen löschen");
    assert_knots(
        session.knots(),
        &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
    );

    let before = session.clone();
    assert_eq!(
        session.delete_point(0),
        Err(EditError::TooFewPointsForOrder {
            points: 3,
            order: 4
        })
    );
    assert_eq!(session, before);
}

#[test]
fn test_find_nearest_prefers_highest_index_on_overlap() {
    let polygon = ControlPolygon::new(
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.005, 0.005),
            Vec2::new(0.5, 0.5),
        ],
        2,
    )
    .expect("Polygon sollte gültig sein");

    assert_eq!(polygon.find_nearest(Vec2::new(0.002, 0.002), 0.01), Some(1));
    assert_eq!(polygon.find_nearest(Vec2::new(-0.009, -0.009), 0.01), Some(0));
    assert_eq!(polygon.find_nearest(Vec2::new(0.2, 0.2), 0.01), None);
}

#[test]
fn test_hit_box_is_axis_aligned_not_radial() {
    let polygon = ControlPolygon::new(vec![Vec2::ZERO], 2).expect("Polygon sollte gültig sein");

    // Ecke der Box liegt außerhalb des Kreises mit gleichem Radius
    assert_eq!(polygon.find_nearest(Vec2::new(0.0095, 0.0095), 0.01), Some(0));
    assert_eq!(polygon.find_nearest(Vec2::new(0.011, 0.0), 0.01), None);
}

#[test]
fn test_move_point_never_touches_knots() {
    let mut session = session_with(6, 3);
    let knots = session.knots().clone();

    for step in 0..10 {
        let pos = Vec2::new(step as f32 * 0.05, -0.3);
        session.move_point(2, pos).expect("Index ist gültig");
        assert_eq!(session.polygon().point_at(2), Some(pos));
    }

    assert_eq!(session.knots(), &knots);
}

#[test]
fn test_order_round_trip_restores_knots() {
    for point_count in 3..10 {
        let mut session = session_with(point_count, 3);
        let before = session.knots().clone();

        session.increase_order().expect("Erhöhen sollte erlaubt sein");
        session.decrease_order().expect("Verringern sollte erlaubt sein");

        assert_eq!(session.knots(), &before, "Punktanzahl {point_count}");
    }
}

#[test]
fn test_invariants_hold_through_mixed_edit_sequence() {
    let mut session = EditSession::default();
    let mut seed: u32 = 0x2545_f491;

    for _ in 0..500 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let choice = (seed >> 16) % 6;
        let len = session.point_count();
        let index = if len == 0 { 0 } else { (seed as usize >> 4) % len };
        let pos = Vec2::new(
            ((seed >> 8) % 200) as f32 / 100.0 - 1.0,
            ((seed >> 20) % 200) as f32 / 100.0 - 1.0,
        );

        // Abgelehnte Vorbedingungen sind erlaubt, dürfen aber nichts verändern
        let before = session.clone();
        let result = match choice {
            0 => session.add_point(pos).map(|_| ()),
            1 if len > 0 => session.insert_point(index, pos),
            2 if len > 0 => session.delete_point(index).map(|_| ()),
            3 => session.increase_order().map(|_| ()),
            4 => session.decrease_order().map(|_| ()),
            _ if len > 0 => session.move_point(index, pos),
            _ => Ok(()),
        };
        if result.is_err() {
            assert_eq!(session, before);
        }

        assert!(session.point_count() + 1 >= session.order());
        assert_consistent(&session);
    }
}
