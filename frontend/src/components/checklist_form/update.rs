//! Update function for the inspection form.
//!
//! Every user interaction becomes a `FormEvent` applied to the session. The only
//! side effect is the save request, sent when the session answers `Send`; its
//! outcome comes back as `SaveSucceeded` / `SaveFailed`.

use common::form::{FormEffect, FormEvent};
use common::model::checklist::{GeneralInfo, Shift};
use common::requests::{SavedChecklist, SubmitChecklistRequest};
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::{InfoField, Msg};
use super::state::ChecklistForm;
use crate::components::helpers::show_toast;

pub fn update(component: &mut ChecklistForm, ctx: &Context<ChecklistForm>, msg: Msg) -> bool {
    let template = ctx.props().template.clone();

    match msg {
        Msg::Form(event) => match component.session.apply(&template, event) {
            FormEffect::None => true,
            FormEffect::Rejected(err) => {
                show_toast(&err.to_string());
                true
            }
            FormEffect::Send(request) => {
                if component.submitting {
                    return false;
                }
                component.submitting = true;
                send_checklist(ctx.link().clone(), request);
                true
            }
        },
        Msg::EditInfo(field, value) => {
            let info = edited_info(component.session.general_info(), field, &value);
            component
                .session
                .apply(&template, FormEvent::SetGeneralInfo(info));
            true
        }
        Msg::SaveSucceeded(saved) => {
            component.submitting = false;
            show_toast(&format!(
                "Checklist salvo com sucesso!\nArquivo salvo: {}",
                saved.filename
            ));
            ctx.props().on_saved.emit(saved.clone());
            component
                .session
                .apply(&template, FormEvent::SubmitSucceeded(saved));
            true
        }
        Msg::SaveFailed(message) => {
            component.submitting = false;
            gloo_console::error!(format!("checklist save failed: {}", message));
            show_toast(&message);
            component
                .session
                .apply(&template, FormEvent::SubmitFailed(message));
            true
        }
    }
}

fn send_checklist(link: Scope<ChecklistForm>, request: SubmitChecklistRequest) {
    spawn_local(async move {
        let response = match Request::post("/api/checklists/save").json(&request) {
            Ok(req) => req.send().await,
            Err(err) => Err(err),
        };

        match response {
            Ok(resp) if resp.ok() => match resp.json::<SavedChecklist>().await {
                Ok(saved) => link.send_message(Msg::SaveSucceeded(saved)),
                Err(err) => link.send_message(Msg::SaveFailed(format!(
                    "Resposta inválida do servidor: {}",
                    err
                ))),
            },
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                link.send_message(Msg::SaveFailed(if body.is_empty() {
                    format!("Erro ao salvar checklist (HTTP {})", resp.status())
                } else {
                    body
                }));
            }
            Err(err) => {
                link.send_message(Msg::SaveFailed(format!("Erro ao salvar checklist: {}", err)))
            }
        }
    });
}

/// Copy of `info` with one sidebar field replaced.
///
/// Unparseable hour-meter input and unknown shift labels keep the previous value;
/// `HH:MM` times from the browser are completed with seconds.
fn edited_info(info: &GeneralInfo, field: InfoField, value: &str) -> GeneralInfo {
    let mut info = info.clone();
    match field {
        InfoField::Equipment => info.equipment = value.to_string(),
        InfoField::Fleet => info.fleet = value.to_string(),
        InfoField::InspectionDate => info.inspection_date = value.to_string(),
        InfoField::HourMeter => {
            if value.trim().is_empty() {
                info.hour_meter = 0;
            } else if let Ok(hours) = value.trim().parse() {
                info.hour_meter = hours;
            }
        }
        InfoField::StartTime => info.start_time = with_seconds(value),
        InfoField::EndTime => info.end_time = with_seconds(value),
        InfoField::Personnel => info.personnel = value.to_string(),
        InfoField::Shift => {
            if let Some(shift) = Shift::from_label(value) {
                info.shift = shift;
            }
        }
    }
    info
}

fn with_seconds(time: &str) -> String {
    if time.len() == 5 {
        format!("{}:00", time)
    } else {
        time.to_string()
    }
}
