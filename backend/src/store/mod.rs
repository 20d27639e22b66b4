//! Persistence of filled-in checklists.
//!
//! Every saved inspection is one JSON document named after its category,
//! periodicity, fleet and save time. The `ChecklistStore` trait is the only thing
//! handlers depend on; `FsChecklistStore` keeps the documents in a flat directory.

mod fs;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use common::model::checklist::ChecklistInstance;

pub use fs::FsChecklistStore;

pub const CHECKLIST_EXTENSION: &str = ".json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("checklist '{0}' not found")]
    NotFound(String),
    #[error("invalid checklist file name '{0}'")]
    InvalidFilename(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid checklist document: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait ChecklistStore: Send + Sync {
    /// Writes `instance` under `filename`, replacing any document with the same name,
    /// and returns the absolute path written.
    fn save(&self, instance: &ChecklistInstance, filename: &str) -> Result<PathBuf, StoreError>;

    /// Names of the stored documents, in directory order.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    fn load(&self, filename: &str) -> Result<ChecklistInstance, StoreError>;

    /// The stored bytes of a document, unmodified.
    fn load_raw(&self, filename: &str) -> Result<Vec<u8>, StoreError>;
}

/// `checklist_{category}_{periodicity}_{fleet}_{YYYYMMDD_HHMMSS}.json`
///
/// Path separators inside the components are replaced with `-` so the name stays
/// inside the store directory.
pub fn checklist_filename(instance: &ChecklistInstance, saved_at: NaiveDateTime) -> String {
    format!(
        "checklist_{}_{}_{}_{}{}",
        filename_component(&instance.category),
        filename_component(&instance.periodicity),
        filename_component(&instance.general_info.fleet),
        saved_at.format("%Y%m%d_%H%M%S"),
        CHECKLIST_EXTENSION
    )
}

fn filename_component(value: &str) -> String {
    value.replace(['/', '\\'], "-")
}

/// Accepts only bare file names, so a request can never address files outside the store.
pub(crate) fn check_filename(filename: &str) -> Result<(), StoreError> {
    let bare = !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0']);
    if bare {
        Ok(())
    } else {
        Err(StoreError::InvalidFilename(filename.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::model::checklist::GeneralInfo;

    fn instance(category: &str, fleet: &str) -> ChecklistInstance {
        ChecklistInstance {
            general_info: GeneralInfo { fleet: fleet.to_string(), ..GeneralInfo::default() },
            category: category.to_string(),
            periodicity: "Cada 250H".to_string(),
            filled_at: String::new(),
            items: Default::default(),
        }
    }

    fn saved_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 15)
            .and_then(|d| d.and_hms_opt(10, 20, 30))
            .unwrap()
    }

    #[test]
    fn builds_name_from_instance_and_time() {
        assert_eq!(
            checklist_filename(&instance("930E-5", "CAM-12"), saved_at()),
            "checklist_930E-5_Cada 250H_CAM-12_20250715_102030.json"
        );
    }

    #[test]
    fn separators_in_components_are_replaced() {
        let name = checklist_filename(&instance("Freios/Rodas", "..\\12"), saved_at());
        assert_eq!(name, "checklist_Freios-Rodas_Cada 250H_..-12_20250715_102030.json");
        assert!(check_filename(&name).is_ok());
    }

    #[test]
    fn rejects_paths() {
        for bad in ["", ".", "..", "../etc/passwd", "a/b.json", "a\\b.json"] {
            assert!(matches!(check_filename(bad), Err(StoreError::InvalidFilename(_))), "{bad}");
        }
    }
}
