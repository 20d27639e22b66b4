//! Inspection form session.
//!
//! The UI sends one `FormEvent` per user interaction and re-renders from the
//! session afterwards. The session never talks to the network itself: a valid
//! `Submit` returns `FormEffect::Send` with the request to post, and the caller
//! reports the outcome back with `SubmitSucceeded` / `SubmitFailed`.

mod validation;

use indexmap::IndexMap;

use crate::model::checklist::{GeneralInfo, ItemStatus};
use crate::model::template::{ChecklistItemDef, ChecklistTemplate};
use crate::requests::{ItemDraft, SavedChecklist, SubmitChecklistRequest};

pub use validation::{validate_general_info, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Category or periodicity not chosen yet (or the category has none).
    Selecting,
    /// A checklist is on screen and accepting input.
    Filling,
    /// The last submit was stored under this name.
    Saved(SavedChecklist),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SelectCategory(String),
    SelectPeriodicity(String),
    SetGeneralInfo(GeneralInfo),
    SetStatus { code: String, status: ItemStatus },
    SetTechnician { code: String, value: String },
    SetFieldNotes { code: String, value: String },
    Submit,
    SubmitSucceeded(SavedChecklist),
    SubmitFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    None,
    /// Post this request to the store endpoint.
    Send(SubmitChecklistRequest),
    /// Required inspection fields are blank; nothing must be persisted.
    Rejected(ValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    general_info: GeneralInfo,
    category: Option<String>,
    periodicity: Option<String>,
    drafts: IndexMap<String, ItemDraft>,
    state: FormState,
    last_error: Option<String>,
}

impl FormSession {
    /// Starts with the first category and its first periodicity preselected.
    pub fn new(template: &ChecklistTemplate, general_info: GeneralInfo) -> Self {
        let mut session = Self {
            general_info,
            category: None,
            periodicity: None,
            drafts: IndexMap::new(),
            state: FormState::Selecting,
            last_error: None,
        };
        if let Some(category) = template.categories().next() {
            session.select_category(template, category.to_string());
        }
        session
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn general_info(&self) -> &GeneralInfo {
        &self.general_info
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn periodicity(&self) -> Option<&str> {
        self.periodicity.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn draft(&self, code: &str) -> Option<&ItemDraft> {
        self.drafts.get(code)
    }

    /// Options for the dependent periodicity selector; empty when no category applies.
    pub fn periodicity_options<'t>(&self, template: &'t ChecklistTemplate) -> Vec<&'t str> {
        self.category
            .as_deref()
            .map(|category| template.periodicities(category))
            .unwrap_or_default()
    }

    /// Items of the current selection, in template order.
    pub fn visible_items<'t>(&self, template: &'t ChecklistTemplate) -> &'t [ChecklistItemDef] {
        match (self.category.as_deref(), self.periodicity.as_deref()) {
            (Some(category), Some(periodicity)) => {
                template.items(category, periodicity).unwrap_or(&[])
            }
            _ => &[],
        }
    }

    pub fn apply(&mut self, template: &ChecklistTemplate, event: FormEvent) -> FormEffect {
        match event {
            FormEvent::SelectCategory(category) => {
                self.select_category(template, category);
                FormEffect::None
            }
            FormEvent::SelectPeriodicity(periodicity) => {
                self.periodicity = Some(periodicity);
                self.reset_drafts(template);
                FormEffect::None
            }
            FormEvent::SetGeneralInfo(info) => {
                self.general_info = info;
                FormEffect::None
            }
            FormEvent::SetStatus { code, status } => {
                self.edit_draft(&code, |draft| draft.status = status);
                FormEffect::None
            }
            FormEvent::SetTechnician { code, value } => {
                self.edit_draft(&code, |draft| draft.technician = value);
                FormEffect::None
            }
            FormEvent::SetFieldNotes { code, value } => {
                self.edit_draft(&code, |draft| draft.field_notes = value);
                FormEffect::None
            }
            FormEvent::Submit => self.submit(),
            FormEvent::SubmitSucceeded(saved) => {
                self.last_error = None;
                self.state = FormState::Saved(saved);
                FormEffect::None
            }
            FormEvent::SubmitFailed(message) => {
                self.last_error = Some(message);
                FormEffect::None
            }
        }
    }

    fn select_category(&mut self, template: &ChecklistTemplate, category: String) {
        self.periodicity = template
            .periodicities(&category)
            .first()
            .map(|p| p.to_string());
        self.category = Some(category);
        self.reset_drafts(template);
    }

    fn reset_drafts(&mut self, template: &ChecklistTemplate) {
        let items = self.visible_items(template);
        self.drafts = items
            .iter()
            .map(|item| (item.code.clone(), ItemDraft::default()))
            .collect();
        self.last_error = None;
        self.state = if items.is_empty() {
            FormState::Selecting
        } else {
            FormState::Filling
        };
    }

    fn edit_draft(&mut self, code: &str, edit: impl FnOnce(&mut ItemDraft)) {
        if let Some(draft) = self.drafts.get_mut(code) {
            edit(draft);
            if matches!(self.state, FormState::Saved(_)) {
                self.state = FormState::Filling;
            }
        }
    }

    fn submit(&mut self) -> FormEffect {
        let (Some(category), Some(periodicity)) = (&self.category, &self.periodicity) else {
            return FormEffect::None;
        };
        if self.state == FormState::Selecting {
            return FormEffect::None;
        }
        if let Err(err) = validate_general_info(&self.general_info) {
            self.last_error = Some(err.to_string());
            return FormEffect::Rejected(err);
        }

        self.last_error = None;
        FormEffect::Send(SubmitChecklistRequest {
            general_info: self.general_info.clone(),
            category: category.clone(),
            periodicity: periodicity.clone(),
            responses: self.drafts.clone(),
        })
    }
}
