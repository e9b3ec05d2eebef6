//! Loch-Session: Schläge, Overlays und Annotationen eines Lochs.
//!
//! Die Session besitzt alle Overlays exklusiv. Beim Lochwechsel wird sie
//! komplett verworfen bzw. über `change_hole` zurückgesetzt; es gibt keine
//! laufende Arbeit, die abgebrochen werden müsste.

use indexmap::IndexMap;

use super::InteractionMode;
use crate::app::events::SessionCommand;
use crate::app::overlays::{
    CurvedShotOverlay, DistanceLabel, DistanceMeasurementOverlay, OverlayEntry, OverlayId,
    ShotOverlay, StraightShotOverlay,
};
use crate::core::geodesy::distance;
use crate::core::{
    fit_region, set_camera, Annotation, AnnotationId, AnnotationIndex, AnnotationKind, GeoBounds,
    GeoPoint, Hole, HoleCamera, HoleKey, LocationReader, MapRegion, Shot, ShotStore,
};
use crate::shared::TrackerOptions;

/// Rand um Punkt-Annotationen bei der Invalidierung (Meter).
const ANNOTATION_MARGIN_M: f64 = 5.0;

/// Auswirkung eines Commands auf die Darstellung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommandEffect {
    /// Neu zu zeichnender Bereich (alt ∪ neu); `None` = nichts verändert
    pub dirty_region: Option<GeoBounds>,
}

impl CommandEffect {
    fn unchanged() -> Self {
        Self { dirty_region: None }
    }

    fn region(bounds: GeoBounds) -> Self {
        Self {
            dirty_region: Some(bounds),
        }
    }

    fn regions(bounds: impl IntoIterator<Item = GeoBounds>) -> Self {
        Self {
            dirty_region: bounds.into_iter().reduce(|a, b| a.union(&b)),
        }
    }

    /// True wenn der Command etwas verändert hat.
    pub fn changed(&self) -> bool {
        self.dirty_region.is_some()
    }
}

/// Zustand der Kartenansicht eines einzelnen Lochs.
pub struct HoleSession {
    hole: Hole,
    key: HoleKey,
    options: TrackerOptions,
    location: LocationReader,
    mode: InteractionMode,
    shots: Vec<Shot>,
    /// Marker-ID pro Schlag (parallel zu `shots`)
    shot_marker_ids: Vec<AnnotationId>,
    /// Kurvensegment i verbindet Schlag i mit Schlag i + 1
    chain: Vec<OverlayEntry>,
    /// Distanz-Label i gehört zu Kurvensegment i
    chain_labels: Vec<DistanceLabel>,
    pins: IndexMap<AnnotationId, GeoPoint>,
    projection: Option<OverlayEntry>,
    measurement: Option<OverlayEntry>,
    annotation_index: AnnotationIndex,
    next_overlay_id: u64,
    next_annotation_id: u64,
    dirty: bool,
}

impl HoleSession {
    /// Erstellt eine leere Session für ein Loch.
    pub fn new(hole: Hole, key: HoleKey, options: TrackerOptions, location: LocationReader) -> Self {
        Self {
            annotation_index: AnnotationIndex::empty(hole.tee),
            hole,
            key,
            options,
            location,
            mode: InteractionMode::default(),
            shots: Vec::new(),
            shot_marker_ids: Vec::new(),
            chain: Vec::new(),
            chain_labels: Vec::new(),
            pins: IndexMap::new(),
            projection: None,
            measurement: None,
            next_overlay_id: 1,
            next_annotation_id: 1,
            dirty: false,
        }
    }

    /// Erstellt eine Session und übernimmt bereits gespeicherte Schläge.
    ///
    /// Schläge werden nach Zeitstempel sortiert und am Schlag-Limit gekappt.
    pub fn with_shots(
        hole: Hole,
        key: HoleKey,
        options: TrackerOptions,
        location: LocationReader,
        shots: Vec<Shot>,
    ) -> Self {
        let mut session = Self::new(hole, key, options, location);
        session.replace_shots(shots);
        session
    }

    /// Wechselt das Loch: alle Overlays, Pins und Schläge werden verworfen.
    pub fn change_hole(&mut self, hole: Hole, key: HoleKey, shots: Vec<Shot>) {
        log::info!("Wechsel zu Loch {} ({})", hole.number, key);
        self.hole = hole;
        self.key = key;
        self.pins.clear();
        self.projection = None;
        self.measurement = None;
        self.replace_shots(shots);
        self.dirty = false;
    }

    fn replace_shots(&mut self, mut shots: Vec<Shot>) {
        shots.sort_by_key(|s| s.timestamp);
        if shots.len() > self.options.max_shots_per_hole {
            log::warn!(
                "{} gespeicherte Schläge für {}, kappe auf {}",
                shots.len(),
                self.key,
                self.options.max_shots_per_hole
            );
            shots.truncate(self.options.max_shots_per_hole);
        }

        self.shots.clear();
        self.shot_marker_ids.clear();
        self.chain.clear();
        self.chain_labels.clear();
        for shot in shots {
            self.push_shot(shot);
        }
        self.rebuild_annotation_index();
    }

    // ── Lesezugriff ─────────────────────────────────────────────

    pub fn hole(&self) -> &Hole {
        &self.hole
    }

    pub fn key(&self) -> &HoleKey {
        &self.key
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn location(&self) -> &LocationReader {
        &self.location
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Kurvensegmente zwischen aufeinanderfolgenden Schlägen.
    pub fn chain(&self) -> &[OverlayEntry] {
        &self.chain
    }

    /// Distanz-Labels der Kurvensegmente.
    pub fn chain_labels(&self) -> &[DistanceLabel] {
        &self.chain_labels
    }

    pub fn projection(&self) -> Option<&OverlayEntry> {
        self.projection.as_ref()
    }

    pub fn measurement(&self) -> Option<&OverlayEntry> {
        self.measurement.as_ref()
    }

    /// Alle Overlays in Zeichenreihenfolge (Pfade, Messung, Projektion).
    pub fn overlays(&self) -> impl Iterator<Item = &OverlayEntry> {
        self.chain
            .iter()
            .chain(self.measurement.iter())
            .chain(self.projection.iter())
    }

    /// Anzahl aller Overlays.
    pub fn overlay_count(&self) -> usize {
        self.overlays().count()
    }

    /// Sucht ein Overlay über sein Handle.
    pub fn overlay(&self, id: OverlayId) -> Option<&ShotOverlay> {
        self.overlays().find(|e| e.id == id).map(|e| &e.overlay)
    }

    /// Overlay, dessen Anker aktuell gezogen werden kann.
    pub fn active_overlay(&self) -> Option<&OverlayEntry> {
        self.projection.as_ref()
    }

    /// Alle Punkt-Annotationen (Schlag-Marker, dann Pins).
    pub fn annotations(&self) -> Vec<Annotation> {
        let markers = self
            .shots
            .iter()
            .zip(&self.shot_marker_ids)
            .enumerate()
            .map(|(index, (shot, id))| Annotation {
                id: *id,
                kind: AnnotationKind::ShotMarker { index },
                location: shot.location,
            });
        let pins = self.pins.iter().map(|(id, point)| Annotation {
            id: *id,
            kind: AnnotationKind::MeasurementPin,
            location: *point,
        });
        markers.chain(pins).collect()
    }

    /// Nächste Annotation innerhalb von `radius_m` um `point`.
    pub fn pick_annotation(&self, point: GeoPoint, radius_m: f64) -> Option<Annotation> {
        self.annotation_index
            .pick(point, radius_m)
            .map(|m| m.annotation)
    }

    /// Kartenbereich des Lochs (bei jedem Aufruf neu berechnet).
    pub fn region(&self) -> MapRegion {
        fit_region(self.hole.tee, self.hole.green)
    }

    /// Kamera des Lochs (bei jedem Aufruf neu berechnet).
    pub fn camera(&self) -> HoleCamera {
        set_camera(self.hole.tee, self.hole.green)
    }

    /// Anzahl erfasster Schläge.
    pub fn stroke_count(&self) -> usize {
        self.shots.len()
    }

    /// Anzahl Schläge, die als Putt zählen.
    pub fn putt_count(&self) -> usize {
        self.shots.iter().filter(|s| s.is_putt()).count()
    }

    /// True wenn seit dem letzten Laden/Speichern Schläge geändert wurden.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Commands ────────────────────────────────────────────────

    /// Führt einen Command aus und meldet den betroffenen Bereich.
    pub fn apply(&mut self, command: SessionCommand) -> CommandEffect {
        match command {
            SessionCommand::PlacePin { point } => {
                self.place_pin(point);
                CommandEffect::region(annotation_bounds(point))
            }
            SessionCommand::RemovePin { id } => match self.remove_pin(id) {
                Some(point) => CommandEffect::region(annotation_bounds(point)),
                None => CommandEffect::unchanged(),
            },
            SessionCommand::SelectShot { index } => self.select_shot(index),
            SessionCommand::RecordShot { point } => self.record_shot(point),
            SessionCommand::MeasureTo { point } => self.measure_to(point),
            SessionCommand::DragProjection { overlay, point } => {
                self.drag_projection(overlay, point)
            }
            SessionCommand::ProjectClub { carry_m } => self.project_club(carry_m).1,
            SessionCommand::ClearProjection => {
                CommandEffect::regions(self.projection.take().map(|e| e.overlay.bounding_region()))
            }
            SessionCommand::ClearMeasurement => CommandEffect::regions(
                self.measurement.take().map(|e| e.overlay.bounding_region()),
            ),
            SessionCommand::SetMode { mode } => {
                self.set_mode(mode);
                CommandEffect::unchanged()
            }
        }
    }

    /// Wechselt den Interaktions-Modus.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            log::debug!("Modus: {:?} → {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Setzt einen Mess-Pin und gibt seine ID zurück.
    pub fn place_pin(&mut self, point: GeoPoint) -> AnnotationId {
        let id = self.allocate_annotation_id();
        self.pins.insert(id, point);
        self.rebuild_annotation_index();
        id
    }

    /// Entfernt einen Mess-Pin. Gibt dessen Position zurück, falls vorhanden.
    pub fn remove_pin(&mut self, id: AnnotationId) -> Option<GeoPoint> {
        let removed = self.pins.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_annotation_index();
        }
        removed
    }

    /// Mess-Pins in Einfüge-Reihenfolge.
    pub fn pins(&self) -> impl Iterator<Item = (AnnotationId, GeoPoint)> + '_ {
        self.pins.iter().map(|(id, p)| (*id, *p))
    }

    /// Erfasst einen Schlag am Punkt und verlängert die Kurvenkette.
    ///
    /// Am Schlag-Limit wird der Schlag abgelehnt (kein Fehler, keine Änderung).
    pub fn record_shot(&mut self, point: GeoPoint) -> CommandEffect {
        if self.shots.len() >= self.options.max_shots_per_hole {
            log::info!(
                "Schlag-Limit {} für {} erreicht, Schlag verworfen",
                self.options.max_shots_per_hole,
                self.key
            );
            return CommandEffect::unchanged();
        }

        let shot = Shot::new(point, Some(distance(point, self.hole.green)));
        let mut regions = vec![annotation_bounds(point)];
        if let Some(segment) = self.push_shot(shot) {
            regions.push(segment);
        }
        self.rebuild_annotation_index();
        self.dirty = true;
        log::debug!("Schlag {} erfasst für {}", self.shots.len(), self.key);
        CommandEffect::regions(regions)
    }

    /// Hängt einen Schlag an; liefert den Bereich des neuen Kurvensegments.
    fn push_shot(&mut self, shot: Shot) -> Option<GeoBounds> {
        let segment = self.shots.last().map(|previous| {
            CurvedShotOverlay::new(
                previous.location,
                shot.location,
                self.hole.green,
                self.options.curve_offset_fraction,
            )
        });

        let marker_id = self.allocate_annotation_id();
        self.shots.push(shot);
        self.shot_marker_ids.push(marker_id);

        let segment = segment?;
        let id = self.allocate_overlay_id();
        self.chain_labels.push(DistanceLabel {
            point: segment.point_at(0.5),
            meters: segment.chord_length(),
        });
        let overlay = ShotOverlay::Curved(segment);
        self.chain.push(OverlayEntry { id, overlay });
        Some(overlay.bounding_region())
    }

    /// Wählt Schlag `index` aus und kürzt destruktiv (nicht rückgängig machbar).
    ///
    /// - `index > 0`: Schläge ab `index` sowie Kurven/Labels ab `index - 1` entfallen
    /// - `index == 0`: alle Schläge und alle Overlays des Lochs entfallen
    /// - ungültiger Index: keine Änderung
    pub fn select_shot(&mut self, index: usize) -> CommandEffect {
        if index >= self.shots.len() {
            log::debug!(
                "Schlag-Index {} außerhalb von 0..{}, ignoriert",
                index,
                self.shots.len()
            );
            return CommandEffect::unchanged();
        }

        let before = self.content_bounds();
        if index == 0 {
            self.shots.clear();
            self.shot_marker_ids.clear();
            self.chain.clear();
            self.chain_labels.clear();
            self.projection = None;
            self.measurement = None;
        } else {
            self.shots.truncate(index);
            self.shot_marker_ids.truncate(index);
            self.chain.truncate(index - 1);
            self.chain_labels.truncate(index - 1);
        }
        self.rebuild_annotation_index();
        self.dirty = true;
        log::info!(
            "Schläge ab Index {} gelöscht für {} ({} verbleiben)",
            index,
            self.key,
            self.shots.len()
        );
        CommandEffect::regions(before)
    }

    /// Startpunkt einer Schläger-Projektion: letzter Schlag, sonst Standort, sonst Tee.
    pub fn projection_origin(&self) -> GeoPoint {
        self.shots
            .last()
            .map(|s| s.location)
            .or_else(|| self.location.current())
            .unwrap_or(self.hole.tee)
    }

    /// Startet eine neue Schläger-Projektion Richtung Grün (ersetzt eine vorherige).
    pub fn project_club(&mut self, carry_m: f64) -> (OverlayId, CommandEffect) {
        let overlay = StraightShotOverlay::toward(
            self.projection_origin(),
            self.hole.green,
            carry_m,
            self.options.dispersion_factor,
        );
        let id = self.allocate_overlay_id();
        let entry = OverlayEntry {
            id,
            overlay: ShotOverlay::Straight(overlay),
        };
        let old = self.projection.replace(entry).map(|e| e.overlay.bounding_region());
        log::debug!("Projektion {:.0} m gestartet ({:?})", carry_m, id);
        let regions = old.into_iter().chain([entry.overlay.bounding_region()]);
        (id, CommandEffect::regions(regions))
    }

    /// Zieht den Anker der Projektion `overlay` auf `point`.
    pub fn drag_projection(&mut self, overlay: OverlayId, point: GeoPoint) -> CommandEffect {
        let Some(entry) = self.projection.as_mut().filter(|e| e.id == overlay) else {
            return CommandEffect::unchanged();
        };
        let old = entry.overlay.bounding_region();
        if !entry.overlay.update(point) {
            return CommandEffect::unchanged();
        }
        CommandEffect::region(old.union(&entry.overlay.bounding_region()))
    }

    /// Erster Anker der Distanzmessung: Standort, sonst Tee.
    pub fn measurement_origin(&self) -> GeoPoint {
        self.location.current().unwrap_or(self.hole.tee)
    }

    /// Baut die Distanzmessung zum Punkt neu auf (ersetzt eine vorherige).
    pub fn measure_to(&mut self, point: GeoPoint) -> CommandEffect {
        let overlay = ShotOverlay::Measurement(DistanceMeasurementOverlay::new(
            point,
            self.measurement_origin(),
            self.hole.green,
            self.options.measurement_hub_radius_m,
        ));
        let id = self.allocate_overlay_id();
        let old = self
            .measurement
            .replace(OverlayEntry { id, overlay })
            .map(|e| e.overlay.bounding_region());
        CommandEffect::regions(old.into_iter().chain([overlay.bounding_region()]))
    }

    // ── Persistenz ──────────────────────────────────────────────

    /// Speichert die Schlagliste (expliziter Save).
    pub fn save(&mut self, store: &mut dyn ShotStore) -> anyhow::Result<()> {
        store.save_shots(&self.key, &self.shots)?;
        self.dirty = false;
        Ok(())
    }

    /// Lädt die Schlagliste neu; Overlays der Kette werden neu aufgebaut.
    pub fn reload(&mut self, store: &dyn ShotStore) -> anyhow::Result<()> {
        let shots = store.load_shots(&self.key)?;
        self.replace_shots(shots);
        self.dirty = false;
        Ok(())
    }

    // ── Intern ──────────────────────────────────────────────────

    fn allocate_overlay_id(&mut self) -> OverlayId {
        let id = OverlayId(self.next_overlay_id);
        self.next_overlay_id += 1;
        id
    }

    fn allocate_annotation_id(&mut self) -> AnnotationId {
        let id = AnnotationId(self.next_annotation_id);
        self.next_annotation_id += 1;
        id
    }

    fn rebuild_annotation_index(&mut self) {
        self.annotation_index = AnnotationIndex::from_annotations(self.hole.tee, self.annotations());
    }

    /// Bereich über allen Overlays und Schlag-Markern.
    fn content_bounds(&self) -> Option<GeoBounds> {
        self.overlays()
            .map(|e| e.overlay.bounding_region())
            .chain(self.shots.iter().map(|s| annotation_bounds(s.location)))
            .reduce(|a, b| a.union(&b))
    }
}

fn annotation_bounds(point: GeoPoint) -> GeoBounds {
    GeoBounds::around(point).expanded_by_meters(ANNOTATION_MARGIN_M)
}
