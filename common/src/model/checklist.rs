//! A filled-in inspection checklist, as persisted by the store.
//!
//! JSON keys keep the Portuguese names used by the saved files in the field
//! (`informacoes_gerais`, `itens`, `tecnico`, ...), so existing documents keep loading.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::template::ChecklistItemDef;
use crate::model::truncate_chars;
use crate::requests::{ItemDraft, SubmitChecklistRequest};

/// Outcome recorded by the technician for one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "Não Verificado")]
    Unverified,
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Não OK")]
    NotOk,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Unverified,
        ItemStatus::Ok,
        ItemStatus::NotOk,
        ItemStatus::NotApplicable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Unverified => "Não Verificado",
            ItemStatus::Ok => "OK",
            ItemStatus::NotOk => "Não OK",
            ItemStatus::NotApplicable => "N/A",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    #[serde(rename = "Manhã")]
    Morning,
    #[serde(rename = "Tarde")]
    Afternoon,
    #[serde(rename = "Noite")]
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Manhã",
            Shift::Afternoon => "Tarde",
            Shift::Night => "Noite",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shift| shift.label() == label)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inspection-level metadata, collected once per checklist outside the item blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(rename = "equipamento")]
    pub equipment: String,
    #[serde(rename = "frota")]
    pub fleet: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "data_inspecao")]
    pub inspection_date: String,
    #[serde(rename = "horimetro")]
    pub hour_meter: u64,
    /// `HH:MM:SS`
    #[serde(rename = "horario_inicio")]
    pub start_time: String,
    #[serde(rename = "horario_termino")]
    pub end_time: String,
    #[serde(rename = "responsaveis")]
    pub personnel: String,
    #[serde(rename = "turno")]
    pub shift: Shift,
}

impl Default for GeneralInfo {
    fn default() -> Self {
        Self {
            equipment: "930E-5".to_string(),
            fleet: String::new(),
            inspection_date: String::new(),
            hour_meter: 0,
            start_time: "00:00:00".to_string(),
            end_time: "00:00:00".to_string(),
            personnel: String::new(),
            shift: Shift::default(),
        }
    }
}

impl GeneralInfo {
    /// Defaults for a new inspection started on `date` at `time`: both the start and
    /// the end time begin at `time`.
    pub fn starting_at(date: impl Into<String>, time: impl Into<String>) -> Self {
        let time = time.into();
        Self {
            inspection_date: date.into(),
            start_time: time.clone(),
            end_time: time,
            ..Self::default()
        }
    }

    /// Stored key and display value of every field, in serialization order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("equipamento", self.equipment.clone()),
            ("frota", self.fleet.clone()),
            ("data_inspecao", self.inspection_date.clone()),
            ("horimetro", self.hour_meter.to_string()),
            ("horario_inicio", self.start_time.clone()),
            ("horario_termino", self.end_time.clone()),
            ("responsaveis", self.personnel.clone()),
            ("turno", self.shift.label().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItemResponse {
    pub description: String,
    pub status: ItemStatus,
    #[serde(rename = "tecnico")]
    pub technician: String,
    #[serde(rename = "observacoes_campo")]
    pub field_notes: String,
    #[serde(
        rename = "observation_original",
        default,
        deserialize_with = "super::null_as_empty"
    )]
    pub original_observation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistInstance {
    #[serde(rename = "informacoes_gerais")]
    pub general_info: GeneralInfo,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "periodicidade")]
    pub periodicity: String,
    /// ISO-8601 local timestamp of the submit, e.g. `2025-07-15T10:20:30.123456`.
    #[serde(rename = "data_preenchimento")]
    pub filled_at: String,
    #[serde(rename = "itens")]
    pub items: IndexMap<String, ChecklistItemResponse>,
}

impl ChecklistInstance {
    /// Builds the instance for a submitted form.
    ///
    /// Responses are keyed by the codes of `items` in template order; drafts for codes
    /// the template does not list are dropped and missing drafts stay unverified.
    pub fn from_submission(
        request: &SubmitChecklistRequest,
        items: &[ChecklistItemDef],
        filled_at: String,
    ) -> Self {
        let responses = items
            .iter()
            .map(|def| {
                let draft = request.responses.get(&def.code).cloned().unwrap_or_default();
                (def.code.clone(), ChecklistItemResponse::from_draft(def, draft))
            })
            .collect();

        Self {
            general_info: request.general_info.clone(),
            category: request.category.clone(),
            periodicity: request.periodicity.clone(),
            filled_at,
            items: responses,
        }
    }

    /// Fill timestamp without sub-second or zone suffix (`YYYY-MM-DDTHH:MM:SS`).
    pub fn filled_at_display(&self) -> &str {
        truncate_chars(&self.filled_at, 19)
    }
}

impl ChecklistItemResponse {
    fn from_draft(def: &ChecklistItemDef, draft: ItemDraft) -> Self {
        Self {
            description: def.description.clone(),
            status: draft.status,
            technician: draft.technician,
            field_notes: draft.field_notes,
            original_observation: def.observation.clone(),
        }
    }
}
