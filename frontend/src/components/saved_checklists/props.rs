use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SavedChecklistsProps {
    /// Bumped by the app after every successful save; a change reloads the file list.
    #[prop_or_default]
    pub refresh: u32,
}
