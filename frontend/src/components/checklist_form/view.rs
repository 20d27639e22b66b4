//! View rendering for the inspection form.
//!
//! Layout: a sidebar with the inspection data (required fields marked with `*`),
//! the two dependent selectors on top of the main pane, then one card per item of
//! the selected checklist and the save button.

use common::form::{FormEvent, FormSession, FormState};
use common::model::checklist::{GeneralInfo, ItemStatus, Shift};
use common::model::observation_text;
use common::model::template::{ChecklistItemDef, ChecklistTemplate};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{InfoField, Msg};
use super::state::ChecklistForm;
use crate::components::helpers::{input_value, select_value, textarea_value};

pub fn view(component: &ChecklistForm, ctx: &Context<ChecklistForm>) -> Html {
    let link = ctx.link();
    let template = &ctx.props().template;
    let session = &component.session;

    html! {
        <div class="checklist-layout">
            { build_sidebar(session.general_info(), link) }
            <main class="checklist-main">
                { build_selectors(session, template, link) }
                { build_checklist(component, template, link) }
            </main>
        </div>
    }
}

fn build_sidebar(info: &GeneralInfo, link: &Scope<ChecklistForm>) -> Html {
    html! {
        <aside class="sidebar">
            <h2>{ "Informações da Inspeção" }</h2>
            { text_input("Equipamento", "text", &info.equipment, InfoField::Equipment, link) }
            { text_input("Frota *", "text", &info.fleet, InfoField::Fleet, link) }
            { text_input("Data da Inspeção", "date", &info.inspection_date, InfoField::InspectionDate, link) }
            { text_input("Horímetro", "number", &info.hour_meter.to_string(), InfoField::HourMeter, link) }

            <h3>{ "Horários" }</h3>
            { text_input("Horário de Início", "time", &info.start_time, InfoField::StartTime, link) }
            { text_input("Horário de Término", "time", &info.end_time, InfoField::EndTime, link) }

            <h3>{ "Responsáveis" }</h3>
            <label class="field">
                <span>{ "Responsáveis *" }</span>
                <textarea
                    rows="4"
                    value={info.personnel.clone()}
                    onchange={link.callback(|e: Event| Msg::EditInfo(InfoField::Personnel, textarea_value(&e)))}
                />
            </label>
            <label class="field">
                <span>{ "Turno" }</span>
                <select onchange={link.callback(|e: Event| Msg::EditInfo(InfoField::Shift, select_value(&e)))}>
                    { for Shift::ALL.iter().map(|shift| html! {
                        <option value={shift.label()} selected={*shift == info.shift}>{ shift.label() }</option>
                    }) }
                </select>
            </label>
        </aside>
    }
}

fn text_input(
    label: &'static str,
    kind: &'static str,
    value: &str,
    field: InfoField,
    link: &Scope<ChecklistForm>,
) -> Html {
    let step = matches!(field, InfoField::StartTime | InfoField::EndTime | InfoField::HourMeter)
        .then_some("1");
    let min = (field == InfoField::HourMeter).then_some("0");

    html! {
        <label class="field">
            <span>{ label }</span>
            <input
                type={kind}
                step={step}
                min={min}
                value={value.to_string()}
                onchange={link.callback(move |e: Event| Msg::EditInfo(field, input_value(&e)))}
            />
        </label>
    }
}

fn build_selectors(
    session: &FormSession,
    template: &ChecklistTemplate,
    link: &Scope<ChecklistForm>,
) -> Html {
    let category = session.category().unwrap_or_default();
    let periodicity = session.periodicity().unwrap_or_default();

    html! {
        <div class="selectors">
            <label class="field">
                <span>{ "Selecione a Categoria" }</span>
                <select onchange={link.callback(|e: Event| Msg::Form(FormEvent::SelectCategory(select_value(&e))))}>
                    { for template.categories().map(|c| html! {
                        <option key={c.to_string()} value={c.to_string()} selected={c == category}>{ c }</option>
                    }) }
                </select>
            </label>
            <label class="field">
                <span>{ "Selecione a Periodicidade" }</span>
                // Keyed on the category so a switch rebuilds the options and their selection.
                <select
                    key={category.to_string()}
                    onchange={link.callback(|e: Event| Msg::Form(FormEvent::SelectPeriodicity(select_value(&e))))}
                >
                    { for session.periodicity_options(template).into_iter().map(|p| html! {
                        <option key={p.to_string()} value={p.to_string()} selected={p == periodicity}>{ p }</option>
                    }) }
                </select>
            </label>
        </div>
    }
}

fn build_checklist(
    component: &ChecklistForm,
    template: &ChecklistTemplate,
    link: &Scope<ChecklistForm>,
) -> Html {
    let session = &component.session;
    let items = session.visible_items(template);

    if *session.state() == FormState::Selecting {
        return html! {
            <p class="info">{ "Selecione uma categoria e uma periodicidade com itens para preencher." }</p>
        };
    }

    html! {
        <section class="checklist">
            <h2>
                { format!(
                    "Checklist: {} - {}",
                    session.category().unwrap_or_default(),
                    session.periodicity().unwrap_or_default()
                ) }
            </h2>
            { for items.iter().map(|item| build_item(session, item, link)) }

            if let Some(error) = session.last_error() {
                <p class="error">{ error }</p>
            }
            if let FormState::Saved(saved) = session.state() {
                <p class="success">{ "Checklist salvo com sucesso!" }</p>
                <p class="info">{ format!("Arquivo salvo: {}", saved.filename) }</p>
            }

            <button
                class="primary"
                disabled={component.submitting}
                onclick={link.callback(|_| Msg::Form(FormEvent::Submit))}
            >
                { if component.submitting { "Salvando..." } else { "Salvar Checklist" } }
            </button>
        </section>
    }
}

fn build_item(session: &FormSession, item: &ChecklistItemDef, link: &Scope<ChecklistForm>) -> Html {
    let draft = session.draft(&item.code).cloned().unwrap_or_default();
    let code = item.code.clone();

    let on_status = {
        let code = code.clone();
        link.callback(move |e: Event| {
            let status = ItemStatus::from_label(&select_value(&e)).unwrap_or_default();
            Msg::Form(FormEvent::SetStatus { code: code.clone(), status })
        })
    };
    let on_technician = {
        let code = code.clone();
        link.callback(move |e: Event| {
            Msg::Form(FormEvent::SetTechnician { code: code.clone(), value: input_value(&e) })
        })
    };
    let on_notes = link.callback(move |e: Event| {
        Msg::Form(FormEvent::SetFieldNotes { code: code.clone(), value: textarea_value(&e) })
    });

    html! {
        <div class="item-card" key={item.code.clone()}>
            <h3>{ format!("Item {}", item.code) }</h3>
            <p><strong>{ "Descrição: " }</strong>{ &item.description }</p>
            if let Some(observation) = observation_text(&item.observation) {
                <p class="info"><strong>{ "Observações: " }</strong>{ observation }</p>
            }
            <div class="item-inputs">
                <label class="field">
                    <span>{ "Status" }</span>
                    <select onchange={on_status}>
                        { for ItemStatus::ALL.iter().map(|status| html! {
                            <option value={status.label()} selected={*status == draft.status}>{ status.label() }</option>
                        }) }
                    </select>
                </label>
                <label class="field">
                    <span>{ "Técnico" }</span>
                    <input type="text" value={draft.technician.clone()} onchange={on_technician} />
                </label>
                <label class="field wide">
                    <span>{ "Observações de Campo" }</span>
                    <textarea rows="2" value={draft.field_notes.clone()} onchange={on_notes} />
                </label>
            </div>
        </div>
    }
}
