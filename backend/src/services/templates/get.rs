//! # Template Retrieval Service
//!
//! Handlers for `GET /api/templates` and `GET /api/templates/{category}`. Both read the
//! template held in application data and never touch the filesystem.

use actix_web::{web, HttpResponse, Responder};
use common::model::template::ChecklistTemplate;

/// Returns the whole template as JSON, categories and periodicities in sheet order.
pub async fn process(template: web::Data<ChecklistTemplate>) -> impl Responder {
    HttpResponse::Ok().json(template.get_ref())
}

/// Returns the periodicity labels of `category`.
///
/// Unknown categories answer `200 OK` with an empty list so the dependent selector
/// in the form can render an empty option set.
pub async fn periodicities(
    category: web::Path<String>,
    template: web::Data<ChecklistTemplate>,
) -> impl Responder {
    HttpResponse::Ok().json(template.periodicities(&category))
}
