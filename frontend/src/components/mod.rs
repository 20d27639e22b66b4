pub mod checklist_form;
pub mod helpers;
pub mod saved_checklists;
