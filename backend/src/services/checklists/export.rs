use actix_web::{web, HttpResponse, Responder};

use super::{attachment, store_error_response};
use crate::store::ChecklistStore;

/// Sends the stored document byte for byte, named as it is on disk.
pub async fn process(
    filename: web::Path<String>,
    store: web::Data<dyn ChecklistStore>,
) -> impl Responder {
    match store.load_raw(&filename) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header(attachment(&filename))
            .body(bytes),
        Err(e) => store_error_response(&e),
    }
}
