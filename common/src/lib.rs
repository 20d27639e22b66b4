//! Types shared between the checklist backend and the browser frontend.
//!
//! - `model`: the template extracted from the maintenance plan and the filled-in
//!   checklist instances persisted by the store.
//! - `requests`: payloads exchanged over the `/api/checklists` endpoints.
//! - `form`: the inspection form session (selection, per-item drafts, submit
//!   validation) driven by discrete events from the UI.

pub mod form;
pub mod model;
pub mod requests;
