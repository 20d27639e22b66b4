use actix_web::{web, HttpResponse, Responder};

use super::store_error_response;
use crate::store::ChecklistStore;

pub async fn process(
    filename: web::Path<String>,
    store: web::Data<dyn ChecklistStore>,
) -> impl Responder {
    match store.load(&filename) {
        Ok(instance) => HttpResponse::Ok().json(instance),
        Err(e) => store_error_response(&e),
    }
}
