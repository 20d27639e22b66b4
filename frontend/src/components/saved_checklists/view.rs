use common::model::checklist::ChecklistInstance;
use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SavedChecklists;
use crate::components::helpers::select_value;

pub fn view(component: &SavedChecklists, ctx: &Context<SavedChecklists>) -> Html {
    let link = ctx.link();

    html! {
        <section class="saved-checklists">
            <h2>{ "Checklists Salvos" }</h2>
            if let Some(error) = &component.error {
                <p class="error">{ error }</p>
            }
            if component.files.is_empty() {
                <p class="info">{ "Nenhum checklist salvo encontrado." }</p>
            } else {
                { build_selector(component, link) }
                if let Some(checklist) = &component.checklist {
                    { build_general_info(checklist) }
                    { build_items(checklist) }
                    { build_downloads(component, link) }
                }
            }
        </section>
    }
}

fn build_selector(component: &SavedChecklists, link: &Scope<SavedChecklists>) -> Html {
    let selected = component.selected.as_deref().unwrap_or_default();
    html! {
        <label class="field">
            <span>{ "Selecione um checklist salvo" }</span>
            <select onchange={link.callback(|e: Event| Msg::Select(select_value(&e)))}>
                { for component.files.iter().map(|f| html! {
                    <option value={f.clone()} selected={f == selected}>{ f }</option>
                }) }
            </select>
        </label>
    }
}

fn build_general_info(checklist: &ChecklistInstance) -> Html {
    let info = &checklist.general_info;
    html! {
        <div class="general-info">
            <h3>{ "Informações Gerais" }</h3>
            <div class="columns">
                <div>
                    { labeled("Equipamento", &info.equipment) }
                    { labeled("Frota", &info.fleet) }
                    { labeled("Data", &info.inspection_date) }
                </div>
                <div>
                    { labeled("Horímetro", &info.hour_meter.to_formatted_string(&Locale::pt)) }
                    { labeled("Turno", info.shift.label()) }
                    { labeled("Categoria", &checklist.category) }
                </div>
                <div>
                    { labeled("Periodicidade", &checklist.periodicity) }
                    { labeled("Responsáveis", &info.personnel) }
                    { labeled("Preenchido em", checklist.filled_at_display()) }
                </div>
            </div>
        </div>
    }
}

fn build_items(checklist: &ChecklistInstance) -> Html {
    html! {
        <div class="items">
            <h3>{ "Itens Verificados" }</h3>
            { for checklist.items.iter().map(|(code, item)| html! {
                <details key={code.clone()}>
                    <summary>{ format!("{} - {}", code, item.status) }</summary>
                    { labeled("Descrição", &item.description) }
                    { labeled("Status", item.status.label()) }
                    { labeled("Técnico", &item.technician) }
                    if !item.field_notes.is_empty() {
                        { labeled("Observações de Campo", &item.field_notes) }
                    }
                </details>
            }) }
        </div>
    }
}

fn build_downloads(component: &SavedChecklists, link: &Scope<SavedChecklists>) -> Html {
    html! {
        <div class="downloads">
            <button disabled={component.downloading} onclick={link.callback(|_| Msg::DownloadJson)}>
                { "Baixar Checklist (JSON)" }
            </button>
            <button disabled={component.downloading} onclick={link.callback(|_| Msg::DownloadPdf)}>
                { "Baixar Checklist (PDF)" }
            </button>
            if let Some(error) = &component.pdf_error {
                <p class="error">{ error }</p>
            }
        </div>
    }
}

fn labeled(label: &str, value: &str) -> Html {
    html! {
        <p><strong>{ format!("{}: ", label) }</strong>{ value.to_string() }</p>
    }
}
