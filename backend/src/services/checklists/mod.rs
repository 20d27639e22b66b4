//! # Checklist Service Module
//!
//! HTTP API over the `ChecklistStore`: submitting a filled-in checklist and browsing
//! the saved ones. Handlers receive the store as `web::Data<dyn ChecklistStore>`, so
//! they never depend on where documents actually live.
//!
//! ## Routes
//! - `GET /api/checklists`: names of the saved documents.
//! - `POST /api/checklists/save`: validates and stores a `SubmitChecklistRequest`,
//!   answering with the generated file name and path.
//! - `GET /api/checklists/{filename}`: one saved checklist, parsed.
//! - `GET /api/checklists/{filename}/json`: the stored bytes, as a download.
//! - `GET /api/checklists/{filename}/pdf`: a printable summary, as a download.
//!   Rendering failures answer `503` and leave the other routes usable.

mod export;
mod get;
mod list;
pub mod pdf;
mod save;

use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};
use log::error;

use crate::store::StoreError;

pub use save::{save_checklist, SaveError};

const API_PATH: &str = "/api/checklists";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{filename}", get().to(get::process))
        .route("/{filename}/json", get().to(export::process))
        .route("/{filename}/pdf", get().to(pdf::process))
}

/// Maps a store failure on a read path to the response sent to the browser.
fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => HttpResponse::NotFound().body(err.to_string()),
        StoreError::InvalidFilename(_) => HttpResponse::BadRequest().body(err.to_string()),
        StoreError::Json(_) => HttpResponse::UnprocessableEntity()
            .body(format!("Checklist salvo está corrompido: {}", err)),
        StoreError::Io(_) => {
            error!("Checklist store failure: {}", err);
            HttpResponse::ServiceUnavailable().body(format!("Erro ao ler checklist: {}", err))
        }
    }
}

/// `Content-Disposition: attachment` with an ASCII fallback name and the UTF-8 name.
fn attachment(filename: &str) -> ContentDisposition {
    let ascii: String = filename
        .chars()
        .map(|c| if (c.is_ascii_graphic() && c != '"') || c == ' ' { c } else { '_' })
        .collect();

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![
            DispositionParam::Filename(ascii),
            DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_string()),
                language_tag: None,
                value: filename.as_bytes().to_vec(),
            }),
        ],
    }
}
