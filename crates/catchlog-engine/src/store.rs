use anyhow::{Context, Result};
use catchlog_types::{CatchRecord, NewCatch};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Authoritative owner of the catch collection.
///
/// The whole collection lives in one JSON file: an array of records in
/// insertion order. Every append rewrites the file synchronously before
/// returning, so the in-memory list and the file never diverge across
/// operations. Loaded data is not re-validated; a malformed file is a hard
/// error for the caller to surface.
#[derive(Debug)]
pub struct CatchStore {
    path: PathBuf,
    records: Vec<CatchRecord>,
}

impl CatchStore {
    /// Open the store backed by `path`. A missing file yields an empty
    /// store; an unreadable or unparseable file is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let records = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read catch log {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("malformed catch log {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(Self { path, records })
    }

    /// Append a validated catch: assign id and timestamp from the current
    /// instant, keep insertion order, and persist the whole collection
    /// before returning the stored record.
    pub fn append(&mut self, new_catch: NewCatch) -> Result<&CatchRecord> {
        let record = new_catch.into_record(Utc::now());
        self.records.push(record);
        self.persist()?;
        Ok(self.records.last().unwrap())
    }

    /// The ordered collection. Dependents derive their projections from
    /// this in full; there is no incremental diffing.
    pub fn records(&self) -> &[CatchRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create data dir {}", parent.display()))?;
        }
        let content = serde_json::to_string(&self.records)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write catch log {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchlog_types::FishType;
    use tempfile::TempDir;

    fn new_catch(fish_type: FishType, size: f64) -> NewCatch {
        NewCatch {
            fish_type,
            size,
            lure: "Jig".to_string(),
            location: "Green Bay".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = CatchStore::load(dir.path().join("catches.json")).unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_append_then_reload_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catches.json");

        let mut store = CatchStore::load(&path).unwrap();
        store.append(new_catch(FishType::Pike, 30.0)).unwrap();
        store
            .append(new_catch(FishType::LargemouthBass, 18.5))
            .unwrap();
        let before: Vec<_> = store.records().to_vec();

        let reloaded = CatchStore::load(&path).unwrap();
        assert_eq!(reloaded.records(), before.as_slice());
    }

    #[test]
    fn test_empty_store_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catches.json");

        // An untouched store never writes; reloading still yields empty.
        let store = CatchStore::load(&path).unwrap();
        drop(store);
        let reloaded = CatchStore::load(&path).unwrap();
        assert!(reloaded.records().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order_across_many() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catches.json");

        let mut store = CatchStore::load(&path).unwrap();
        for i in 1..=25 {
            store
                .append(new_catch(FishType::RockBass, i as f64))
                .unwrap();
        }

        let reloaded = CatchStore::load(&path).unwrap();
        assert_eq!(reloaded.records().len(), 25);
        let sizes: Vec<f64> = reloaded.records().iter().map(|r| r.size).collect();
        let expected: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        assert_eq!(sizes, expected);
    }

    #[test]
    fn test_malformed_file_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catches.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = CatchStore::load(&path).unwrap_err();
        assert!(err.to_string().contains("malformed catch log"));
    }
}
