use common::form::FormSession;
use common::model::checklist::GeneralInfo;
use common::model::template::ChecklistTemplate;

use crate::components::helpers::{current_time, today};

pub struct ChecklistForm {
    pub session: FormSession,
    /// A save request is in flight; further submits are ignored until it settles.
    pub submitting: bool,
}

impl ChecklistForm {
    pub fn new(template: &ChecklistTemplate) -> Self {
        let general_info = GeneralInfo::starting_at(today(), current_time());
        Self {
            session: FormSession::new(template, general_info),
            submitting: false,
        }
    }
}
