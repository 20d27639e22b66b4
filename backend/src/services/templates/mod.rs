//! # Template Service Module
//!
//! Serves the checklist template extracted from the maintenance plan. The template
//! is read once at startup by `loader::load_template` and shared read-only with
//! every worker as `web::Data<ChecklistTemplate>`; changes to the file need a restart.
//!
//! ## Routes
//! - `GET /api/templates`: the whole template (category -> periodicity -> items).
//! - `GET /api/templates/{category}`: periodicity labels of one category, an empty
//!   list when the category is unknown.

mod get;
mod loader;

use actix_web::web::{get, scope};
use actix_web::Scope;

pub use loader::{load_template, TemplateError};

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/{category}", get().to(get::periodicities))
}
