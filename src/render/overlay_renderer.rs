//! Overlay → Zeichen-Primitives in Screen-Koordinaten, plus Hit-Test.

use glam::Vec2;

use super::MapHost;
use crate::app::overlays::{
    CurvedShotOverlay, DistanceLabel, DistanceMeasurementOverlay, ShotOverlay,
    StraightShotOverlay,
};
use crate::core::{Annotation, AnnotationKind, GeoPoint};
use crate::shared::{DrawPrimitive, TrackerOptions};

/// Untergrenze der Zoom-Skala für die Linienstärke.
const MIN_ZOOM_SCALE: f64 = 1e-3;

/// Rechnet eine Strecke in Metern an einer Position in Screen-Pixel um.
pub fn meters_to_pixels(meters: f64, at: GeoPoint, host: &dyn MapHost) -> f32 {
    let mpp = host.meters_per_pixel(at.latitude);
    if mpp <= 0.0 {
        return 0.0;
    }
    (meters / mpp) as f32
}

/// Prüft, ob ein Screen-Punkt den verschiebbaren Anker eines Overlays trifft.
///
/// Trifft genau dann, wenn der Abstand zum projizierten Anker höchstens dem
/// Streukreis-Radius in Pixeln entspricht. Overlays ohne Anker (oder kein
/// Overlay) treffen nie.
pub fn hit_test(overlay: Option<&ShotOverlay>, screen: Vec2, host: &dyn MapHost) -> bool {
    let Some(anchor) = overlay.and_then(ShotOverlay::draggable_anchor) else {
        return false;
    };
    let center = host.project(anchor.point);
    let radius = meters_to_pixels(anchor.radius_m, anchor.point, host);
    center.distance(screen) <= radius
}

/// Zeichnet Overlays und Annotationen mit den Farben/Größen aus den Optionen.
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    options: TrackerOptions,
}

impl OverlayRenderer {
    pub fn new(options: &TrackerOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }

    /// Linienstärke: `basis / sqrt(zoom_scale)`.
    pub fn line_width(&self, host: &dyn MapHost) -> f32 {
        let scale = host.zoom_scale().max(MIN_ZOOM_SCALE);
        (self.options.line_width_px as f64 / scale.sqrt()) as f32
    }

    /// Zeichnet ein Overlay. Außerhalb des sichtbaren Bereichs: leer.
    pub fn render(&self, overlay: &ShotOverlay, host: &dyn MapHost) -> Vec<DrawPrimitive> {
        if !overlay.bounding_region().intersects(&host.visible_bounds()) {
            return Vec::new();
        }
        match overlay {
            ShotOverlay::Straight(o) => self.render_straight(o, host),
            ShotOverlay::Curved(o) => self.render_curved(o, host),
            ShotOverlay::Measurement(o) => self.render_measurement(o, host),
        }
    }

    fn render_straight(&self, overlay: &StraightShotOverlay, host: &dyn MapHost) -> Vec<DrawPrimitive> {
        let width = self.line_width(host);
        let end = host.project(overlay.end());
        vec![
            DrawPrimitive::Line {
                from: host.project(overlay.start()),
                to: end,
                width,
                color: self.options.straight_shot_color,
            },
            DrawPrimitive::Circle {
                center: end,
                radius: meters_to_pixels(overlay.dispersion_radius(), overlay.end(), host),
                width,
                color: self.options.dispersion_color,
            },
        ]
    }

    fn render_curved(&self, overlay: &CurvedShotOverlay, host: &dyn MapHost) -> Vec<DrawPrimitive> {
        let points = overlay
            .sample(self.options.curve_samples.max(1))
            .into_iter()
            .map(|p| host.project(p))
            .collect();
        vec![DrawPrimitive::Polyline {
            points,
            width: self.line_width(host),
            color: self.options.curved_shot_color,
        }]
    }

    fn render_measurement(
        &self,
        overlay: &DistanceMeasurementOverlay,
        host: &dyn MapHost,
    ) -> Vec<DrawPrimitive> {
        let width = self.line_width(host);
        let color = self.options.measurement_color;
        let mut primitives = Vec::with_capacity(5);

        for leg in overlay.legs() {
            if let Some([from, to]) = leg.line {
                primitives.push(DrawPrimitive::Line {
                    from: host.project(from),
                    to: host.project(to),
                    width,
                    color,
                });
            }
        }

        primitives.push(DrawPrimitive::Circle {
            center: host.project(overlay.probe()),
            radius: meters_to_pixels(overlay.hub_radius_m(), overlay.probe(), host),
            width,
            color,
        });

        for leg in overlay.legs() {
            primitives.push(self.label(leg.label_point, format!("{}m", leg.label_meters()), host));
        }
        primitives
    }

    /// Zeichnet Schlag-Marker, Mess-Pins und Distanz-Labels der Kurvenkette.
    pub fn render_annotations(
        &self,
        annotations: &[Annotation],
        chain_labels: &[DistanceLabel],
        host: &dyn MapHost,
    ) -> Vec<DrawPrimitive> {
        let visible = host.visible_bounds();
        let mut primitives = Vec::new();

        for annotation in annotations.iter().filter(|a| visible.contains(a.location)) {
            let color = match annotation.kind {
                AnnotationKind::ShotMarker { .. } => self.options.marker_color,
                AnnotationKind::MeasurementPin => self.options.pin_color,
            };
            primitives.push(DrawPrimitive::Marker {
                center: host.project(annotation.location),
                radius: self.options.marker_radius_px,
                color,
            });
            if let AnnotationKind::ShotMarker { index } = annotation.kind {
                primitives.push(self.label(annotation.location, (index + 1).to_string(), host));
            }
        }

        for label in chain_labels.iter().filter(|l| visible.contains(l.point)) {
            primitives.push(self.label(label.point, label.text(), host));
        }
        primitives
    }

    fn label(&self, at: GeoPoint, text: String, host: &dyn MapHost) -> DrawPrimitive {
        DrawPrimitive::Label {
            position: host.project(at),
            text,
            size: self.options.label_font_size,
            color: self.options.label_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geodesy::destination;
    use crate::render::LocalMapHost;
    use approx::assert_relative_eq;

    const TEE: GeoPoint = GeoPoint::new(-37.8402, 145.0999);
    const GREEN: GeoPoint = GeoPoint::new(-37.8384, 145.1001);

    fn host() -> LocalMapHost {
        LocalMapHost::new(destination(TEE, 100.0, 5.0), Vec2::new(800.0, 800.0), 0.5)
    }

    fn straight() -> ShotOverlay {
        ShotOverlay::Straight(StraightShotOverlay::toward(TEE, GREEN, 150.0, 0.1))
    }

    #[test]
    fn straight_renders_line_and_dispersion_circle() {
        let renderer = OverlayRenderer::new(&TrackerOptions::default());
        let primitives = renderer.render(&straight(), &host());

        assert_eq!(primitives.len(), 2);
        match &primitives[1] {
            DrawPrimitive::Circle { radius, .. } => assert_relative_eq!(*radius, 30.0, epsilon = 1e-3),
            other => panic!("Kreis erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn line_width_shrinks_with_zoom() {
        let renderer = OverlayRenderer::new(&TrackerOptions::default());
        let mut host = host();
        let base = renderer.line_width(&host);
        host.zoom_by(4.0);
        assert_relative_eq!(renderer.line_width(&host), base / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn curved_renders_sampled_polyline() {
        let options = TrackerOptions::default();
        let renderer = OverlayRenderer::new(&options);
        let curved = ShotOverlay::Curved(CurvedShotOverlay::new(
            TEE,
            destination(TEE, 120.0, 10.0),
            GREEN,
            0.15,
        ));

        let primitives = renderer.render(&curved, &host());
        match primitives.as_slice() {
            [DrawPrimitive::Polyline { points, .. }] => {
                assert_eq!(points.len(), options.curve_samples + 1)
            }
            other => panic!("Polyline erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn measurement_renders_two_lines_hub_and_rounded_labels() {
        let renderer = OverlayRenderer::new(&TrackerOptions::default());
        let probe = destination(TEE, 120.4, 0.0);
        let measurement =
            ShotOverlay::Measurement(DistanceMeasurementOverlay::new(probe, TEE, GREEN, 8.0));

        let primitives = renderer.render(&measurement, &host());
        let lines = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .count();
        let circles = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Circle { .. }))
            .count();
        let labels: Vec<&str> = primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(lines, 2);
        assert_eq!(circles, 1);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], "120m");
        assert!(labels.iter().all(|l| l.ends_with('m')));
    }

    #[test]
    fn invisible_overlay_renders_nothing() {
        let renderer = OverlayRenderer::new(&TrackerOptions::default());
        let far_away = LocalMapHost::new(GeoPoint::new(48.0, 11.0), Vec2::new(800.0, 800.0), 0.5);
        assert!(renderer.render(&straight(), &far_away).is_empty());
    }

    #[test]
    fn hit_test_uses_dispersion_radius_in_pixels() {
        let host = host();
        let overlay = straight();
        let anchor = overlay.draggable_anchor().expect("Anker erwartet");
        let center = host.project(anchor.point);

        // 15 m Streukreis bei 0.5 m/px = 30 px
        assert!(hit_test(Some(&overlay), center, &host));
        assert!(hit_test(Some(&overlay), center + Vec2::new(29.0, 0.0), &host));
        assert!(!hit_test(Some(&overlay), center + Vec2::new(31.0, 0.0), &host));
    }

    #[test]
    fn hit_test_misses_without_anchor() {
        let host = host();
        let curved = ShotOverlay::Curved(CurvedShotOverlay::new(TEE, GREEN, GREEN, 0.15));
        let screen = host.project(GREEN);

        assert!(!hit_test(Some(&curved), screen, &host));
        assert!(!hit_test(None, screen, &host));
    }

    #[test]
    fn annotations_render_markers_pins_and_labels() {
        let renderer = OverlayRenderer::new(&TrackerOptions::default());
        let annotations = [
            Annotation {
                id: crate::core::AnnotationId(1),
                kind: AnnotationKind::ShotMarker { index: 0 },
                location: TEE,
            },
            Annotation {
                id: crate::core::AnnotationId(2),
                kind: AnnotationKind::MeasurementPin,
                location: destination(TEE, 40.0, 0.0),
            },
        ];
        let labels = [DistanceLabel {
            point: destination(TEE, 20.0, 0.0),
            meters: 41.2,
        }];

        let primitives = renderer.render_annotations(&annotations, &labels, &host());
        let markers = primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Marker { .. }))
            .count();

        assert_eq!(markers, 2);
        assert!(primitives.iter().any(
            |p| matches!(p, DrawPrimitive::Label { text, .. } if text == "41m")
        ));
    }
}
