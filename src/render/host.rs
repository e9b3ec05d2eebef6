//! Schnittstelle zum Karten-Widget der Plattform.

use glam::Vec2;

use crate::core::{GeoBounds, GeoPoint};

/// Karten-Host: Projektion, Zoom und Invalidierung.
///
/// Renderer und Gesten-Controller kennen nur diesen Trait, nie das
/// konkrete Karten-Widget. Screen-Koordinaten sind Pixel relativ zur
/// linken oberen Ecke der Kartenansicht.
pub trait MapHost {
    /// Geo-Punkt → Screen-Pixel.
    fn project(&self, point: GeoPoint) -> Vec2;

    /// Screen-Pixel → Geo-Punkt.
    fn unproject(&self, screen: Vec2) -> GeoPoint;

    /// Meter pro Pixel auf der gegebenen Breite.
    fn meters_per_pixel(&self, latitude: f64) -> f64;

    /// Aktuelle Zoom-Skala (1.0 = Standard, größer = näher).
    fn zoom_scale(&self) -> f64;

    /// Aktuell sichtbarer Kartenausschnitt.
    fn visible_bounds(&self) -> GeoBounds;

    /// Fordert ein Neuzeichnen des Bereichs an.
    fn invalidate(&mut self, region: GeoBounds);
}
