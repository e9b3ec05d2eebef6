use approx::assert_relative_eq;
use glam::Vec2;
use golf_shot_tracker::core::geodesy::{bearing, destination, distance};
use golf_shot_tracker::core::location_channel;
use golf_shot_tracker::{
    GeoPoint, GestureController, GestureEvent, GestureOutcome, GesturePhase, GestureState, Hole,
    HoleKey, HoleSession, InteractionMode, LocalMapHost, MapHost, SessionCommand, ShotOverlay,
    TrackerOptions,
};

const TEE: GeoPoint = GeoPoint::new(-37.8402, 145.0999);
const GREEN: GeoPoint = GeoPoint::new(-37.8384, 145.1001);

struct Fixture {
    controller: GestureController,
    session: HoleSession,
    host: LocalMapHost,
}

impl Fixture {
    fn new() -> Self {
        let (_publisher, reader) = location_channel();
        let session = HoleSession::new(
            Hole::new(1, 4, TEE, GREEN),
            HoleKey::new("2026-10-17", 1),
            TrackerOptions::default(),
            reader,
        );
        // 0.5 m/px, Norden oben, Zentrum etwa in Lochmitte
        let host = LocalMapHost::new(destination(TEE, 100.0, 5.0), Vec2::new(800.0, 800.0), 0.5);
        Self {
            controller: GestureController::new(),
            session,
            host,
        }
    }

    fn gesture(&mut self, event: GestureEvent) -> GestureOutcome {
        self.controller
            .handle_gesture(&mut self.session, &mut self.host, event)
    }

    fn command(&mut self, command: SessionCommand) {
        self.controller
            .handle_command(&mut self.session, &mut self.host, command);
    }

    fn tap_at(&mut self, point: GeoPoint) -> GestureOutcome {
        let screen = self.host.project(point);
        self.gesture(GestureEvent::Tap { screen })
    }

    fn pan(&mut self, point: GeoPoint, phase: GesturePhase) -> GestureOutcome {
        let screen = self.host.project(point);
        self.gesture(GestureEvent::Pan { screen, phase })
    }
}

fn projection(session: &HoleSession) -> golf_shot_tracker::app::overlays::StraightShotOverlay {
    match session.projection().map(|e| e.overlay) {
        Some(ShotOverlay::Straight(straight)) => straight,
        other => panic!("Gerade Projektion erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_recording_taps_build_shot_chain_with_labels() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::SetMode {
        mode: InteractionMode::ShotRecording,
    });

    let points = [
        TEE,
        destination(TEE, 110.0, 2.0),
        destination(TEE, 170.0, 6.0),
    ];
    for point in points {
        assert_eq!(fx.tap_at(point), GestureOutcome::Handled);
    }

    assert_eq!(fx.session.shots().len(), 3);
    assert_eq!(fx.session.chain().len(), 2);
    let labels: Vec<String> = fx.session.chain_labels().iter().map(|l| l.text()).collect();
    assert_eq!(labels[0], "110m");
    assert_eq!(fx.session.overlay_count(), 2);
}

#[test]
fn test_tap_on_shot_marker_truncates_from_that_shot() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::SetMode {
        mode: InteractionMode::ShotRecording,
    });
    let points: Vec<GeoPoint> = (0..4).map(|i| destination(TEE, 45.0 * i as f64, 5.0)).collect();
    for point in &points {
        fx.tap_at(*point);
    }
    assert_eq!(fx.session.shots().len(), 4);

    // Tap neben Schlag 2 (innerhalb des Pick-Radius) → Kürzung auf [S0, S1]
    let near_third = destination(points[2], 2.0, 90.0);
    assert_eq!(fx.tap_at(near_third), GestureOutcome::Handled);

    assert_eq!(fx.session.shots().len(), 2);
    assert_eq!(fx.session.shots()[1].location, points[1]);
    assert_eq!(fx.session.chain().len(), 1);
    assert_eq!(fx.session.chain_labels().len(), 1);
    assert!(matches!(
        fx.controller.command_log().last(),
        Some(SessionCommand::SelectShot { index: 2 })
    ));
}

#[test]
fn test_tap_on_first_marker_clears_all_overlays() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::SetMode {
        mode: InteractionMode::ShotRecording,
    });
    for i in 0..3 {
        fx.tap_at(destination(TEE, 60.0 * i as f64, 5.0));
    }
    fx.command(SessionCommand::ProjectClub { carry_m: 120.0 });

    fx.tap_at(TEE);

    assert!(fx.session.shots().is_empty());
    assert_eq!(fx.session.overlay_count(), 0);
}

#[test]
fn test_eleventh_recording_tap_is_rejected() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::SetMode {
        mode: InteractionMode::ShotRecording,
    });
    for i in 0..10 {
        assert_eq!(
            fx.tap_at(destination(TEE, 18.0 * i as f64, 4.0)),
            GestureOutcome::Handled
        );
    }

    let outcome = fx.tap_at(destination(TEE, 195.0, 4.0));

    assert_eq!(outcome, GestureOutcome::Ignored);
    assert_eq!(fx.session.shots().len(), 10);
}

#[test]
fn test_long_press_places_pin_and_tap_removes_it() {
    let mut fx = Fixture::new();
    let pin = destination(TEE, 70.0, 30.0);
    let screen = fx.host.project(pin);

    let outcome = fx.gesture(GestureEvent::LongPress {
        screen,
        phase: GesturePhase::Began,
    });
    assert_eq!(outcome, GestureOutcome::Handled);
    assert_eq!(fx.session.pins().count(), 1);

    // Late-Phasen des Long-Press lösen nichts aus
    let ended = fx.gesture(GestureEvent::LongPress {
        screen,
        phase: GesturePhase::Ended,
    });
    assert_eq!(ended, GestureOutcome::Ignored);
    assert_eq!(fx.session.pins().count(), 1);

    assert_eq!(fx.tap_at(pin), GestureOutcome::Handled);
    assert_eq!(fx.session.pins().count(), 0);
}

#[test]
fn test_repeated_long_press_on_one_spot_keeps_pins_pickable() {
    let mut fx = Fixture::new();
    let screen = Vec2::new(400.0, 300.0);

    for _ in 0..40 {
        let outcome = fx.gesture(GestureEvent::LongPress {
            screen,
            phase: GesturePhase::Began,
        });
        assert_eq!(outcome, GestureOutcome::Handled);
    }
    assert_eq!(fx.session.pins().count(), 40);

    // Tap entfernt genau einen der übereinanderliegenden Pins
    assert_eq!(fx.gesture(GestureEvent::Tap { screen }), GestureOutcome::Handled);
    assert_eq!(fx.session.pins().count(), 39);
}

#[test]
fn test_projection_drag_works_across_the_antimeridian() {
    let (_publisher, reader) = location_channel();
    let tee = GeoPoint::new(-16.8, 179.9995);
    let green = destination(tee, 300.0, 90.0);
    let mut session = HoleSession::new(
        Hole::new(1, 4, tee, green),
        HoleKey::new("taveuni", 1),
        TrackerOptions::default(),
        reader,
    );
    let mut host = LocalMapHost::new(destination(tee, 150.0, 90.0), Vec2::new(800.0, 800.0), 0.5);
    let mut controller = GestureController::new();
    controller.handle_command(
        &mut session,
        &mut host,
        SessionCommand::ProjectClub { carry_m: 150.0 },
    );
    let end = projection(&session).end();
    assert!(end.longitude < 0.0);

    let grab = host.project(end);
    assert_relative_eq!(grab.x, 400.0, epsilon = 1.0);
    let outcome = controller.handle_gesture(
        &mut session,
        &mut host,
        GestureEvent::Pan {
            screen: grab,
            phase: GesturePhase::Began,
        },
    );
    assert_eq!(outcome, GestureOutcome::Handled);

    let target = host.project(destination(tee, 100.0, 60.0));
    controller.handle_gesture(
        &mut session,
        &mut host,
        GestureEvent::Pan {
            screen: target,
            phase: GesturePhase::Changed,
        },
    );
    assert_relative_eq!(projection(&session).bearing(), 60.0, epsilon = 0.1);
    assert!(host
        .invalidated()
        .iter()
        .any(|region| region.contains(end)));
}

#[test]
fn test_measurement_mode_replaces_previous_measurement() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::SetMode {
        mode: InteractionMode::DistanceMeasurement,
    });

    fx.tap_at(destination(TEE, 90.0, 0.0));
    let first = fx.session.measurement().map(|e| e.id);
    fx.tap_at(destination(TEE, 130.0, 10.0));
    let second = fx.session.measurement().map(|e| e.id);

    assert!(first.is_some());
    assert_ne!(first, second);
    assert_eq!(fx.session.overlay_count(), 1);
}

#[test]
fn test_anchor_drag_rotates_projection_without_changing_length() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::ProjectClub { carry_m: 150.0 });
    let before = projection(&fx.session);
    assert_relative_eq!(before.bearing(), bearing(TEE, GREEN), epsilon = 1e-6);

    // Griff 10 m neben dem Anker: innerhalb des 15-m-Streukreises
    let grab = destination(before.end(), 10.0, 270.0);
    assert_eq!(fx.pan(grab, GesturePhase::Began), GestureOutcome::Handled);
    assert!(matches!(
        fx.controller.state(),
        GestureState::DraggingOverlayAnchor { .. }
    ));

    fx.host.take_invalidated();
    let target = destination(TEE, 80.0, 45.0);
    assert_eq!(fx.pan(target, GesturePhase::Changed), GestureOutcome::Handled);
    let invalidated = fx.host.take_invalidated();
    assert_eq!(invalidated.len(), 1);
    assert!(invalidated[0].contains(before.end()));

    assert_eq!(fx.pan(target, GesturePhase::Ended), GestureOutcome::Handled);
    assert_eq!(fx.controller.state(), GestureState::Idle);
    assert_eq!(fx.host.take_invalidated().len(), 1);

    let after = projection(&fx.session);
    assert_relative_eq!(distance(after.start(), after.end()), 150.0, epsilon = 1e-6);
    assert_relative_eq!(after.bearing(), 45.0, epsilon = 0.1);
}

#[test]
fn test_pan_outside_dispersion_radius_passes_through() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::ProjectClub { carry_m: 150.0 });
    let end = projection(&fx.session).end();

    let outside = destination(end, 20.0, 90.0);
    assert_eq!(fx.pan(outside, GesturePhase::Began), GestureOutcome::PassThrough);
    assert_eq!(fx.pan(outside, GesturePhase::Changed), GestureOutcome::PassThrough);
    assert_eq!(fx.controller.state(), GestureState::Idle);
    assert_eq!(projection(&fx.session).end(), end);
}

#[test]
fn test_pan_without_projection_passes_through() {
    let mut fx = Fixture::new();
    assert_eq!(fx.pan(GREEN, GesturePhase::Began), GestureOutcome::PassThrough);
}

#[test]
fn test_cancelled_drag_keeps_last_update() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::ProjectClub { carry_m: 150.0 });
    let end = projection(&fx.session).end();
    fx.pan(end, GesturePhase::Began);
    let target = destination(TEE, 60.0, 300.0);
    fx.pan(target, GesturePhase::Changed);

    assert_eq!(fx.pan(target, GesturePhase::Cancelled), GestureOutcome::Handled);
    assert_eq!(fx.controller.state(), GestureState::Idle);
    assert_relative_eq!(projection(&fx.session).bearing(), 300.0, epsilon = 0.1);
}

#[test]
fn test_projection_starts_from_last_recorded_shot() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::SetMode {
        mode: InteractionMode::ShotRecording,
    });
    let second = destination(TEE, 140.0, 8.0);
    fx.tap_at(TEE);
    fx.tap_at(second);

    fx.command(SessionCommand::ProjectClub { carry_m: 50.0 });

    let straight = projection(&fx.session);
    assert_eq!(straight.start(), second);
    assert_relative_eq!(straight.bearing(), bearing(second, GREEN), epsilon = 1e-6);
}

#[test]
fn test_change_hole_discards_overlays_and_gesture_state() {
    let mut fx = Fixture::new();
    fx.command(SessionCommand::ProjectClub { carry_m: 150.0 });
    let end = projection(&fx.session).end();
    fx.pan(end, GesturePhase::Began);

    let next = Hole::new(2, 3, GREEN, destination(GREEN, 140.0, 60.0));
    fx.session
        .change_hole(next, HoleKey::new("2026-10-17", 2), Vec::new());
    fx.controller.reset();

    assert_eq!(fx.controller.state(), GestureState::Idle);
    assert_eq!(fx.session.overlay_count(), 0);
    assert!(fx.controller.command_log().is_empty());
}
