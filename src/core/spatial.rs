//! Spatial-Index (KD-Tree) für Tap-Treffer auf Punkt-Annotationen.

use std::collections::HashMap;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::geodesy::LocalFrame;
use super::{Annotation, AnnotationKind, GeoPoint};

/// Ergebnis einer Distanzabfrage gegen den Annotation-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationMatch {
    /// Gefundene Annotation
    pub annotation: Annotation,
    /// Distanz zum Suchpunkt in Metern
    pub distance_m: f64,
}

/// Read-only Spatial-Index über allen Annotationen eines Lochs.
///
/// Positionen liegen in lokalen Metern um den Frame-Ursprung (Tee),
/// damit Pick-Radien direkt in Metern angegeben werden können.
/// Jede Position steht genau einmal im Baum; mehrere Annotationen auf
/// demselben Punkt teilen sich einen Eintrag.
#[derive(Debug, Clone)]
pub struct AnnotationIndex {
    tree: KdTree<f64, 2>,
    /// Annotation-Slots je Baum-Eintrag (Item-ID = Index)
    slots: Vec<Vec<usize>>,
    annotations: Vec<Annotation>,
    frame: LocalFrame,
}

impl AnnotationIndex {
    /// Erstellt einen leeren Index.
    pub fn empty(origin: GeoPoint) -> Self {
        Self::from_annotations(origin, Vec::new())
    }

    /// Baut einen neuen Index aus den übergebenen Annotationen.
    pub fn from_annotations(origin: GeoPoint, annotations: Vec<Annotation>) -> Self {
        let frame = LocalFrame::new(origin);
        let mut positions: Vec<[f64; 2]> = Vec::new();
        let mut slots: Vec<Vec<usize>> = Vec::new();
        let mut by_position: HashMap<[u64; 2], usize> = HashMap::new();

        for (slot, annotation) in annotations.iter().enumerate() {
            let local = frame.to_local(annotation.location);
            let key = [local.x.to_bits(), local.y.to_bits()];
            let entry = *by_position.entry(key).or_insert_with(|| {
                positions.push([local.x, local.y]);
                slots.push(Vec::new());
                positions.len() - 1
            });
            slots[entry].push(slot);
        }

        if positions.len() < annotations.len() {
            log::debug!(
                "{} Annotationen auf {} Positionen zusammengefasst",
                annotations.len(),
                positions.len()
            );
        }

        Self {
            tree: (&positions).into(),
            slots,
            annotations,
            frame,
        }
    }

    /// Anzahl indexierter Annotationen.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// `true`, wenn keine Annotationen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotation für einen Tap innerhalb von `radius_m` Metern.
    ///
    /// Schlag-Marker haben Vorrang vor Mess-Pins, danach entscheidet die Distanz.
    pub fn pick(&self, query: GeoPoint, radius_m: f64) -> Option<AnnotationMatch> {
        let matches = self.within_radius(query, radius_m);
        matches
            .iter()
            .find(|m| matches!(m.annotation.kind, AnnotationKind::ShotMarker { .. }))
            .or_else(|| matches.first())
            .copied()
    }

    /// Alle Annotationen innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: GeoPoint, radius_m: f64) -> Vec<AnnotationMatch> {
        if self.is_empty() || radius_m.is_sign_negative() {
            return Vec::new();
        }

        let q: DVec2 = self.frame.to_local(query);
        let mut results = Vec::new();
        for entry in self
            .tree
            .within::<SquaredEuclidean>(&[q.x, q.y], radius_m * radius_m)
        {
            let Some(slots) = self.slots.get(entry.item as usize) else {
                continue;
            };
            let distance_m = entry.distance.sqrt();
            results.extend(slots.iter().filter_map(|&slot| {
                let annotation = *self.annotations.get(slot)?;
                Some(AnnotationMatch {
                    annotation,
                    distance_m,
                })
            }));
        }

        results.sort_by(|a, b| {
            a.distance_m
                .total_cmp(&b.distance_m)
                .then(a.annotation.id.cmp(&b.annotation.id))
        });
        results
    }
}
