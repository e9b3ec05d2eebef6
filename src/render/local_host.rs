//! Eigenständiger Karten-Host auf Basis eines lokalen Meter-Bezugssystems.
//!
//! Wird vom Desktop-Viewer und von Tests genutzt. Die Kamera hat ein
//! Zentrum (lokale Meter), eine Blickrichtung (Kompass-Grad, zeigt nach
//! oben) und einen Zoom relativ zur Start-Auflösung.

use glam::{DVec2, Vec2};

use super::MapHost;
use crate::core::geodesy::METERS_PER_DEGREE_LAT;
use crate::core::{GeoBounds, GeoPoint, HoleCamera, LocalFrame, MapRegion};

/// Kartenansicht ohne Plattform-Widget.
#[derive(Debug, Clone)]
pub struct LocalMapHost {
    frame: LocalFrame,
    /// Kamerazentrum in lokalen Metern
    center: DVec2,
    /// Kompass-Richtung, die auf dem Bildschirm nach oben zeigt
    heading_deg: f64,
    /// Meter pro Pixel bei Zoom 1.0
    base_meters_per_pixel: f64,
    zoom: f64,
    viewport_size: Vec2,
    invalidated: Vec<GeoBounds>,
}

impl LocalMapHost {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 50.0;

    /// Erstellt einen Host zentriert auf `center`, Norden oben.
    pub fn new(center: GeoPoint, viewport_size: Vec2, meters_per_pixel: f64) -> Self {
        Self {
            frame: LocalFrame::new(center),
            center: DVec2::ZERO,
            heading_deg: 0.0,
            base_meters_per_pixel: meters_per_pixel.max(1e-6),
            zoom: 1.0,
            viewport_size: viewport_size.max(Vec2::ONE),
            invalidated: Vec::new(),
        }
    }

    /// Erstellt den Start-Host eines Lochs aus Region und Kamera.
    ///
    /// Die Kamera liefert Blickrichtung (Tee → Grün zeigt nach oben) und die
    /// sichtbare Höhe über Grund. Der Region-Span (Grad Breite) legt die
    /// Mindestbreite quer zum Fairway fest. Der gröbere der beiden Maßstäbe
    /// gewinnt, damit beide vollständig im Viewport liegen.
    pub fn from_region_and_camera(
        region: &MapRegion,
        camera: &HoleCamera,
        viewport_size: Vec2,
    ) -> Self {
        let viewport_size = viewport_size.max(Vec2::ONE);
        let camera_mpp = camera.distance_from_ground.max(1.0) / viewport_size.y as f64;
        let region_mpp = region.span * METERS_PER_DEGREE_LAT / viewport_size.x as f64;
        let mut host = Self::new(region.center, viewport_size, camera_mpp.max(region_mpp));
        host.heading_deg = camera.heading;
        host
    }

    pub fn heading(&self) -> f64 {
        self.heading_deg
    }

    pub fn set_heading(&mut self, heading_deg: f64) {
        self.heading_deg = heading_deg.rem_euclid(360.0);
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    /// Setzt die Viewport-Größe (Zentrum bleibt erhalten).
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size.max(Vec2::ONE);
    }

    /// Aktuelles Kamerazentrum.
    pub fn center(&self) -> GeoPoint {
        self.frame.to_geo(self.center)
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Karte folgt dem Finger).
    pub fn pan_by_pixels(&mut self, delta: Vec2) {
        let mpp = self.current_meters_per_pixel();
        let (right, up) = self.screen_axes();
        self.center -= right * (delta.x as f64 * mpp) - up * (delta.y as f64 * mpp);
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Alle seit dem letzten Abholen angeforderten Bereiche.
    pub fn invalidated(&self) -> &[GeoBounds] {
        &self.invalidated
    }

    /// Holt die angeforderten Bereiche ab und leert die Liste.
    pub fn take_invalidated(&mut self) -> Vec<GeoBounds> {
        std::mem::take(&mut self.invalidated)
    }

    fn current_meters_per_pixel(&self) -> f64 {
        self.base_meters_per_pixel / self.zoom
    }

    /// Lokale Einheitsvektoren für Bildschirm-rechts und Bildschirm-oben.
    fn screen_axes(&self) -> (DVec2, DVec2) {
        let (sin, cos) = self.heading_deg.to_radians().sin_cos();
        (DVec2::new(cos, -sin), DVec2::new(sin, cos))
    }
}

impl MapHost for LocalMapHost {
    fn project(&self, point: GeoPoint) -> Vec2 {
        let offset = self.frame.to_local(point) - self.center;
        let (right, up) = self.screen_axes();
        let mpp = self.current_meters_per_pixel();
        let half = self.viewport_size * 0.5;
        Vec2::new(
            half.x + (offset.dot(right) / mpp) as f32,
            half.y - (offset.dot(up) / mpp) as f32,
        )
    }

    fn unproject(&self, screen: Vec2) -> GeoPoint {
        let half = self.viewport_size * 0.5;
        let mpp = self.current_meters_per_pixel();
        let along_right = (screen.x - half.x) as f64 * mpp;
        let along_up = -(screen.y - half.y) as f64 * mpp;
        let (right, up) = self.screen_axes();
        self.frame
            .to_geo(self.center + right * along_right + up * along_up)
    }

    fn meters_per_pixel(&self, _latitude: f64) -> f64 {
        self.current_meters_per_pixel()
    }

    fn zoom_scale(&self) -> f64 {
        self.zoom
    }

    fn visible_bounds(&self) -> GeoBounds {
        let size = self.viewport_size;
        let corners = [
            Vec2::ZERO,
            Vec2::new(size.x, 0.0),
            size,
            Vec2::new(0.0, size.y),
        ];
        GeoBounds::from_points(corners.into_iter().map(|c| self.unproject(c)))
            .unwrap_or_else(|| GeoBounds::around(self.center()))
    }

    fn invalidate(&mut self, region: GeoBounds) {
        self.invalidated.push(region);
    }
}
