use common::model::checklist::ChecklistInstance;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SavedChecklists;
use crate::components::helpers::{download_bytes, encode_segment, show_toast};

pub fn update(
    component: &mut SavedChecklists,
    ctx: &Context<SavedChecklists>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/api/checklists").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<Vec<String>>().await {
                        Ok(files) => link.send_message(Msg::Listed(files)),
                        Err(err) => link.send_message(Msg::ListFailed(err.to_string())),
                    },
                    Ok(resp) => link.send_message(Msg::ListFailed(
                        resp.text().await.unwrap_or_default(),
                    )),
                    Err(err) => link.send_message(Msg::ListFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Listed(files) => {
            component.error = None;
            let keep = component
                .selected
                .as_ref()
                .filter(|selected| files.contains(selected))
                .cloned();
            component.files = files;
            match keep.or_else(|| component.files.first().cloned()) {
                Some(filename) => ctx.link().send_message(Msg::Select(filename)),
                None => {
                    component.selected = None;
                    component.checklist = None;
                }
            }
            true
        }
        Msg::ListFailed(message) => {
            gloo_console::error!(format!("listing saved checklists failed: {}", message));
            component.error = Some(format!("Erro ao listar checklists salvos: {}", message));
            true
        }
        Msg::Select(filename) => {
            component.selected = Some(filename.clone());
            component.pdf_error = None;
            load_checklist(ctx.link().clone(), filename);
            true
        }
        Msg::Opened(filename, checklist) => {
            // Ignore a late answer for a file that is no longer selected.
            if component.selected.as_deref() == Some(filename.as_str()) {
                component.checklist = Some(checklist);
                component.error = None;
            }
            true
        }
        Msg::OpenFailed(message) => {
            component.checklist = None;
            component.error = Some(message);
            true
        }
        Msg::DownloadJson => {
            start_download(component, ctx, "json", "application/json");
            true
        }
        Msg::DownloadPdf => {
            component.pdf_error = None;
            start_download(component, ctx, "pdf", "application/pdf");
            true
        }
        Msg::PdfFailed(message) => {
            component.downloading = false;
            component.pdf_error = Some(message);
            true
        }
        Msg::DownloadFinished => {
            component.downloading = false;
            true
        }
    }
}

fn load_checklist(link: Scope<SavedChecklists>, filename: String) {
    spawn_local(async move {
        let url = format!("/api/checklists/{}", encode_segment(&filename));
        match Request::get(&url).send().await {
            Ok(resp) if resp.ok() => match resp.json::<ChecklistInstance>().await {
                Ok(checklist) => link.send_message(Msg::Opened(filename, checklist)),
                Err(err) => link.send_message(Msg::OpenFailed(format!(
                    "Checklist {} ilegível: {}",
                    filename, err
                ))),
            },
            Ok(resp) => link.send_message(Msg::OpenFailed(resp.text().await.unwrap_or_default())),
            Err(err) => link.send_message(Msg::OpenFailed(err.to_string())),
        }
    });
}

/// Fetches `/api/checklists/{selected}/{format}` and saves the body as a file.
///
/// The download name is the selected file name with its extension swapped for `format`.
fn start_download(
    component: &mut SavedChecklists,
    ctx: &Context<SavedChecklists>,
    format: &'static str,
    mime: &'static str,
) {
    let Some(filename) = component.selected.clone() else {
        return;
    };
    if component.downloading {
        return;
    }
    component.downloading = true;

    let link = ctx.link().clone();
    spawn_local(async move {
        let url = format!("/api/checklists/{}/{}", encode_segment(&filename), format);
        let stem = filename.strip_suffix(".json").unwrap_or(&filename);
        let target = format!("{}.{}", stem, format);

        match Request::get(&url).send().await {
            Ok(resp) if resp.ok() => match resp.binary().await {
                Ok(bytes) => {
                    if let Err(err) = download_bytes(&bytes, &target, mime) {
                        gloo_console::error!(err);
                        show_toast("Não foi possível iniciar o download.");
                    }
                    link.send_message(Msg::DownloadFinished);
                }
                Err(err) => fail(&link, format, err.to_string()),
            },
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                fail(&link, format, body);
            }
            Err(err) => fail(&link, format, err.to_string()),
        }
    });
}

fn fail(link: &Scope<SavedChecklists>, format: &str, message: String) {
    if format == "pdf" {
        link.send_message(Msg::PdfFailed(message));
    } else {
        show_toast(&format!("Erro ao baixar checklist: {}", message));
        link.send_message(Msg::DownloadFinished);
    }
}
