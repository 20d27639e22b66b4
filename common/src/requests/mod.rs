use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::checklist::{GeneralInfo, ItemStatus};

/// Technician input for a single item before the checklist is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub status: ItemStatus,
    pub technician: String,
    pub field_notes: String,
}

/// Body of `POST /api/checklists/save`.
///
/// The fill timestamp is assigned by the server when the instance is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitChecklistRequest {
    pub general_info: GeneralInfo,
    pub category: String,
    pub periodicity: String,
    /// Drafts keyed by item code, in the order the items were shown.
    pub responses: IndexMap<String, ItemDraft>,
}

/// Reply to a successful save: the generated file name and where it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedChecklist {
    pub filename: String,
    pub path: String,
}
