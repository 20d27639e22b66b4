use common::model::checklist::ChecklistInstance;

#[derive(Default)]
pub struct SavedChecklists {
    /// File names as listed by the store.
    pub files: Vec<String>,
    pub selected: Option<String>,
    /// Parsed contents of `selected`, once loaded.
    pub checklist: Option<ChecklistInstance>,
    pub error: Option<String>,
    pub pdf_error: Option<String>,
    pub downloading: bool,
}

impl SavedChecklists {
    pub fn new() -> Self {
        Self::default()
    }
}
