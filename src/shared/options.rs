//! Zentrale Konfiguration für den Golf Shot Tracker.
//!
//! `TrackerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Schläge ─────────────────────────────────────────────────────────

/// Maximale Anzahl erfasster Schläge pro Loch.
pub const MAX_SHOTS_PER_HOLE: usize = 10;
/// Streukreis-Radius als Anteil der Schlagdistanz.
pub const DISPERSION_FACTOR: f64 = 0.1;
/// Seitlicher Versatz des Bézier-Steuerpunkts als Anteil der Sehnenlänge.
pub const CURVE_OFFSET_FRACTION: f64 = 0.15;
/// Abtastpunkte pro gekrümmtem Schlagpfad.
pub const CURVE_SAMPLES: usize = 24;

// ── Messung ─────────────────────────────────────────────────────────

/// Radius des Mess-Hubs in Metern (Linien enden am Kreisrand).
pub const MEASUREMENT_HUB_RADIUS_M: f64 = 8.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius für Tap auf Punkt-Annotationen in Screen-Pixeln.
pub const ANNOTATION_PICK_RADIUS_PX: f32 = 14.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Basis-Linienstärke in Pixeln bei Zoom-Skala 1.0.
pub const LINE_WIDTH_PX: f32 = 3.0;
/// Radius der Schlag-Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 6.0;
/// Schriftgröße der Distanz-Labels.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Farbe der geraden Schlag-Projektion (RGBA: Weiß).
pub const STRAIGHT_SHOT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des Streukreises (RGBA: Gelb).
pub const DISPERSION_COLOR: [f32; 4] = [1.0, 0.85, 0.0, 0.9];
/// Farbe der gekrümmten Schlagpfade (RGBA: Cyan).
pub const CURVED_SHOT_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe der Distanz-Messung (RGBA: Orange).
pub const MEASUREMENT_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Farbe der Schlag-Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe der Mess-Pins (RGBA: Magenta).
pub const PIN_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der Distanz-Labels (RGBA: Weiß).
pub const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `golf_shot_tracker.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerOptions {
    // ── Schläge ─────────────────────────────────────────────────
    /// Maximale Anzahl Schläge pro Loch (weitere Taps werden abgelehnt)
    pub max_shots_per_hole: usize,
    /// Streukreis-Anteil der Schlagdistanz
    pub dispersion_factor: f64,
    /// Bézier-Versatz als Anteil der Sehnenlänge
    pub curve_offset_fraction: f64,
    /// Abtastpunkte pro Kurve
    pub curve_samples: usize,

    // ── Messung ─────────────────────────────────────────────────
    /// Hub-Radius der Distanz-Messung in Metern
    pub measurement_hub_radius_m: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Annotationen in Screen-Pixeln
    pub annotation_pick_radius_px: f32,

    // ── Rendering ───────────────────────────────────────────────
    pub line_width_px: f32,
    pub marker_radius_px: f32,
    pub label_font_size: f32,
    pub straight_shot_color: [f32; 4],
    pub dispersion_color: [f32; 4],
    pub curved_shot_color: [f32; 4],
    pub measurement_color: [f32; 4],
    pub marker_color: [f32; 4],
    pub pin_color: [f32; 4],
    #[serde(default = "default_label_color")]
    pub label_color: [f32; 4],
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            max_shots_per_hole: MAX_SHOTS_PER_HOLE,
            dispersion_factor: DISPERSION_FACTOR,
            curve_offset_fraction: CURVE_OFFSET_FRACTION,
            curve_samples: CURVE_SAMPLES,

            measurement_hub_radius_m: MEASUREMENT_HUB_RADIUS_M,

            annotation_pick_radius_px: ANNOTATION_PICK_RADIUS_PX,

            line_width_px: LINE_WIDTH_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            label_font_size: LABEL_FONT_SIZE,
            straight_shot_color: STRAIGHT_SHOT_COLOR,
            dispersion_color: DISPERSION_COLOR,
            curved_shot_color: CURVED_SHOT_COLOR,
            measurement_color: MEASUREMENT_COLOR,
            marker_color: MARKER_COLOR,
            pin_color: PIN_COLOR,
            label_color: LABEL_COLOR,
        }
    }
}

/// Serde-Default für `label_color` (Abwärtskompatibilität älterer TOML-Dateien).
fn default_label_color() -> [f32; 4] {
    LABEL_COLOR
}

impl TrackerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::beside_binary("golf_shot_tracker.toml")
    }

    /// Ermittelt den Pfad zur Schlag-Datei neben der Binary.
    pub fn shots_path() -> std::path::PathBuf {
        Self::beside_binary("golf_shot_tracker_shots.json")
    }

    fn beside_binary(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("golf_shot_tracker"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }
}
