//! Baut die `OverlayScene` eines Frames aus einer Loch-Session.

use super::{MapHost, OverlayRenderer};
use crate::app::HoleSession;
use crate::shared::OverlayScene;

/// Erzeugt alle Primitives eines Frames.
///
/// Reihenfolge: Overlays (Kette, Messung, Projektion), danach Marker,
/// Pins und Labels, damit Annotationen immer oben liegen.
pub fn build_scene(session: &HoleSession, host: &dyn MapHost) -> OverlayScene {
    let renderer = OverlayRenderer::new(session.options());
    let mut scene = OverlayScene::default();

    for entry in session.overlays() {
        scene.extend(renderer.render(&entry.overlay, host));
    }
    scene.extend(renderer.render_annotations(
        &session.annotations(),
        session.chain_labels(),
        host,
    ));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geodesy::destination;
    use crate::core::{location_channel, GeoPoint, Hole, HoleKey};
    use crate::render::LocalMapHost;
    use crate::shared::{DrawPrimitive, TrackerOptions};
    use glam::Vec2;

    const TEE: GeoPoint = GeoPoint::new(-37.8402, 145.0999);
    const GREEN: GeoPoint = GeoPoint::new(-37.8384, 145.1001);

    #[test]
    fn empty_session_has_empty_scene() {
        let (_publisher, reader) = location_channel();
        let session = HoleSession::new(
            Hole::new(1, 4, TEE, GREEN),
            HoleKey::new("r", 1),
            TrackerOptions::default(),
            reader,
        );
        let host = LocalMapHost::from_region_and_camera(
            &session.region(),
            &session.camera(),
            Vec2::new(600.0, 900.0),
        );

        assert!(build_scene(&session, &host).is_empty());
    }

    #[test]
    fn recorded_shots_produce_chain_markers_and_labels() {
        let (_publisher, reader) = location_channel();
        let mut session = HoleSession::new(
            Hole::new(1, 4, TEE, GREEN),
            HoleKey::new("r", 1),
            TrackerOptions::default(),
            reader,
        );
        session.record_shot(TEE);
        session.record_shot(destination(TEE, 90.0, 8.0));
        let host = LocalMapHost::from_region_and_camera(
            &session.region(),
            &session.camera(),
            Vec2::new(600.0, 900.0),
        );

        let scene = build_scene(&session, &host);

        let polylines = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Polyline { .. }))
            .count();
        let markers = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Marker { .. }))
            .count();
        assert_eq!(polylines, 1);
        assert_eq!(markers, 2);
        assert!(scene.labels().contains(&"90m"));
        assert!(matches!(
            scene.primitives.last(),
            Some(DrawPrimitive::Label { .. })
        ));
    }
}
