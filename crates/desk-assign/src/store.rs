//! Workload snapshot persistence

use crate::domain::WorkloadSnapshot;
use crate::error::Result;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Persistence capability for per-agent workloads carried between runs.
///
/// `load` never fails: missing or corrupt state is treated as no prior
/// state. `save` replaces the stored snapshot in full. Serializing access
/// across a whole run is the caller's job (see `DispatchService`).
pub trait WorkloadStore: Send + Sync {
    /// Last persisted snapshot, or an empty one when none is readable.
    fn load(&self) -> WorkloadSnapshot;

    /// Overwrite the stored snapshot.
    fn save(&self, snapshot: &WorkloadSnapshot) -> Result<()>;
}

/// JSON-file-backed store
pub struct FileWorkloadStore {
    path: PathBuf,
}

impl FileWorkloadStore {
    /// Store backed by the given file path. The file is created on first
    /// save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkloadStore for FileWorkloadStore {
    fn load(&self) -> WorkloadSnapshot {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return WorkloadSnapshot::default(),
        };
        match serde_json::from_str(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable workload snapshot"
                );
                WorkloadSnapshot::default()
            }
        }
    }

    fn save(&self, snapshot: &WorkloadSnapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store for tests and store-less deployments
#[derive(Default)]
pub struct MemoryWorkloadStore {
    inner: Mutex<WorkloadSnapshot>,
}

impl MemoryWorkloadStore {
    /// New empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkloadStore for MemoryWorkloadStore {
    fn load(&self) -> WorkloadSnapshot {
        self.inner.lock().clone()
    }

    fn save(&self, snapshot: &WorkloadSnapshot) -> Result<()> {
        *self.inner.lock() = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkloadEntry;

    fn snapshot() -> WorkloadSnapshot {
        WorkloadSnapshot {
            agents: vec![
                WorkloadEntry {
                    agent_id: "a1".into(),
                    name: "Priya".into(),
                    current_load: 3,
                },
                WorkloadEntry {
                    agent_id: "a2".into(),
                    name: "Marcus".into(),
                    current_load: 0,
                },
            ],
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryWorkloadStore::new();
        store.save(&snapshot()).unwrap();
        assert_eq!(store.load(), snapshot());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWorkloadStore::new(dir.path().join("agent_state.json"));

        store.save(&snapshot()).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.loads(), snapshot().loads());
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWorkloadStore::new(dir.path().join("nope.json"));
        assert_eq!(store.load(), WorkloadSnapshot::default());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent_state.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileWorkloadStore::new(path);
        assert_eq!(store.load(), WorkloadSnapshot::default());
    }

    #[test]
    fn test_save_is_full_replace() {
        let store = MemoryWorkloadStore::new();
        store.save(&snapshot()).unwrap();

        let smaller = WorkloadSnapshot {
            agents: vec![WorkloadEntry {
                agent_id: "a3".into(),
                name: "Lena".into(),
                current_load: 1,
            }],
        };
        store.save(&smaller).unwrap();
        assert_eq!(store.load(), smaller);
    }
}
