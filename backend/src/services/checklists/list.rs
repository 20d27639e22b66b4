use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::store::ChecklistStore;

/// Handler for `GET /api/checklists`. A store directory that does not exist yet
/// lists as empty.
pub async fn process(store: web::Data<dyn ChecklistStore>) -> impl Responder {
    match store.list() {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(e) => {
            error!("Failed to list saved checklists: {}", e);
            HttpResponse::ServiceUnavailable()
                .body(format!("Erro ao listar checklists salvos: {}", e))
        }
    }
}
