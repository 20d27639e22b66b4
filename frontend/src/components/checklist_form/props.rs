use std::rc::Rc;

use common::model::template::ChecklistTemplate;
use common::requests::SavedChecklist;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChecklistFormProps {
    /// Template fetched once by the app; shared, never modified.
    pub template: Rc<ChecklistTemplate>,
    /// Emitted after the backend stored a checklist, so the viewer can reload its list.
    #[prop_or_default]
    pub on_saved: Callback<SavedChecklist>,
}
