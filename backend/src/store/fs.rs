use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use common::model::checklist::ChecklistInstance;
use log::{debug, warn};

use super::{check_filename, ChecklistStore, StoreError, CHECKLIST_EXTENSION};
use crate::json::to_pretty_json;

/// Flat directory of JSON documents. No locking: concurrent saves of the same
/// name race and the last write wins.
#[derive(Debug, Clone)]
pub struct FsChecklistStore {
    dir: PathBuf,
}

impl FsChecklistStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        check_filename(filename)?;
        fs::read(self.dir.join(filename)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(filename.to_string()),
            _ => StoreError::Io(e),
        })
    }
}

impl ChecklistStore for FsChecklistStore {
    fn save(&self, instance: &ChecklistInstance, filename: &str) -> Result<PathBuf, StoreError> {
        check_filename(filename)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(filename);
        if path.exists() {
            warn!("Overwriting existing checklist {}", path.display());
        }
        fs::write(&path, to_pretty_json(instance)?)?;

        let path = fs::canonicalize(&path)?;
        debug!("Checklist written to {}", path.display());
        Ok(path)
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(CHECKLIST_EXTENSION) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn load(&self, filename: &str) -> Result<ChecklistInstance, StoreError> {
        let bytes = self.read(filename)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn load_raw(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        self.read(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::checklist::{ChecklistItemResponse, GeneralInfo, ItemStatus, Shift};
    use tempfile::tempdir;

    fn instance() -> ChecklistInstance {
        let mut instance = ChecklistInstance {
            general_info: GeneralInfo {
                equipment: "930E-5".to_string(),
                fleet: "CAM-12".to_string(),
                inspection_date: "2025-07-15".to_string(),
                hour_meter: 48_250,
                start_time: "07:00:00".to_string(),
                end_time: "09:30:00".to_string(),
                personnel: "João\nMaria".to_string(),
                shift: Shift::Night,
            },
            category: "930E-5".to_string(),
            periodicity: "Cada 250H".to_string(),
            filled_at: "2025-07-15T09:31:02.123456".to_string(),
            items: Default::default(),
        };
        instance.items.insert(
            "A.01".to_string(),
            ChecklistItemResponse {
                description: "Inspecionar pneus".to_string(),
                status: ItemStatus::Ok,
                technician: "Maria".to_string(),
                field_notes: String::new(),
                original_observation: "nan".to_string(),
            },
        );
        instance.items.insert(
            "A.02".to_string(),
            ChecklistItemResponse {
                description: "Verificar nível de óleo".to_string(),
                status: ItemStatus::NotOk,
                technician: "João".to_string(),
                field_notes: "Nível baixo".to_string(),
                original_observation: String::new(),
            },
        );
        instance
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path().join("salvos"));
        let original = instance();

        let path = store.save(&original, "checklist_a.json").unwrap();

        assert!(path.is_absolute());
        assert!(path.ends_with("salvos/checklist_a.json"));
        assert_eq!(store.load("checklist_a.json").unwrap(), original);
    }

    #[test]
    fn raw_bytes_are_the_stored_document() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path());
        store.save(&instance(), "checklist_b.json").unwrap();

        let raw = store.load_raw("checklist_b.json").unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(text.starts_with("{\n    \"informacoes_gerais\": {\n        \"equipamento\""));
        assert!(text.contains("\"turno\": \"Noite\""));
        assert!(text.find("\"A.01\"").unwrap() < text.find("\"A.02\"").unwrap());
    }

    #[test]
    fn list_only_reports_json_files() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path());
        store.save(&instance(), "checklist_c.json").unwrap();
        fs::write(dir.path().join("notas.txt"), "x").unwrap();

        assert_eq!(store.list().unwrap(), vec!["checklist_c.json".to_string()]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path().join("ainda-nao-existe"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn same_name_overwrites() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path());
        let mut second = instance();
        second.general_info.hour_meter = 48_500;

        store.save(&instance(), "checklist_d.json").unwrap();
        store.save(&second, "checklist_d.json").unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.load("checklist_d.json").unwrap().general_info.hour_meter, 48_500);
    }

    #[test]
    fn load_errors() {
        let dir = tempdir().unwrap();
        let store = FsChecklistStore::new(dir.path());
        fs::write(dir.path().join("corrompido.json"), "{ nao e json").unwrap();

        assert!(matches!(store.load("ausente.json"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.load("corrompido.json"), Err(StoreError::Json(_))));
        assert!(matches!(store.load("../fora.json"), Err(StoreError::InvalidFilename(_))));
    }
}
