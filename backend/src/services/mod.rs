pub mod checklists;
pub mod templates;
