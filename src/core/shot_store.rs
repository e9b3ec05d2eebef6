//! Persistenz der Schlaglisten pro (Runde, Loch).
//!
//! Das Backend ist für die Karten-Logik ein undurchsichtiges Array von
//! Schlägen, das angehängt und gekürzt wird. Felder müssen exakt
//! erhalten bleiben (Pin-Distanz, Zeitstempel, Koordinaten).

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::{HoleKey, Shot};

/// Lese-/Schreib-Vertrag des Schlag-Backends.
pub trait ShotStore {
    /// Lädt die geordnete Schlagliste; unbekannte Schlüssel liefern eine leere Liste.
    fn load_shots(&self, key: &HoleKey) -> anyhow::Result<Vec<Shot>>;
    /// Ersetzt die gespeicherte Schlagliste vollständig.
    fn save_shots(&mut self, key: &HoleKey, shots: &[Shot]) -> anyhow::Result<()>;
}

/// Flüchtiger Store (Tests, Offline-Betrieb).
#[derive(Debug, Default, Clone)]
pub struct MemoryShotStore {
    entries: HashMap<HoleKey, Vec<Shot>>,
}

impl MemoryShotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShotStore for MemoryShotStore {
    fn load_shots(&self, key: &HoleKey) -> anyhow::Result<Vec<Shot>> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn save_shots(&mut self, key: &HoleKey, shots: &[Shot]) -> anyhow::Result<()> {
        self.entries.insert(key.clone(), shots.to_vec());
        Ok(())
    }
}

/// JSON-Datei-Store: eine Datei mit allen Runden, Schlüssel `runde/loch`.
#[derive(Debug, Clone)]
pub struct JsonShotStore {
    path: PathBuf,
}

impl JsonShotStore {
    /// Erstellt einen Store für die angegebene Datei (muss noch nicht existieren).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pfad der Store-Datei.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> anyhow::Result<BTreeMap<String, Vec<Shot>>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ShotStore for JsonShotStore {
    fn load_shots(&self, key: &HoleKey) -> anyhow::Result<Vec<Shot>> {
        let mut all = self.read_all()?;
        let mut shots = all.remove(&key.to_string()).unwrap_or_default();
        shots.sort_by_key(|s| s.timestamp);
        log::debug!("{} Schläge geladen für {}", shots.len(), key);
        Ok(shots)
    }

    fn save_shots(&mut self, key: &HoleKey, shots: &[Shot]) -> anyhow::Result<()> {
        let mut all = self.read_all()?;
        if shots.is_empty() {
            all.remove(&key.to_string());
        } else {
            all.insert(key.to_string(), shots.to_vec());
        }
        let content = serde_json::to_string_pretty(&all)?;
        std::fs::write(&self.path, content)?;
        log::info!(
            "{} Schläge gespeichert für {} nach: {}",
            shots.len(),
            key,
            self.path.display()
        );
        Ok(())
    }
}
