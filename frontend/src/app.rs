use std::rc::Rc;

use common::model::template::ChecklistTemplate;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::components::checklist_form::ChecklistForm;
use crate::components::helpers::show_toast;
use crate::components::saved_checklists::SavedChecklists;

pub enum Msg {
    TemplateLoaded(ChecklistTemplate),
    TemplateFailed(String),
    ChecklistSaved,
}

/// Root component: fetches the template once and hosts the form and the viewer.
pub struct App {
    template: Option<Rc<ChecklistTemplate>>,
    error: Option<String>,
    saved_count: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match Request::get("/api/templates").send().await {
                Ok(resp) if resp.ok() => match resp.json::<ChecklistTemplate>().await {
                    Ok(template) => link.send_message(Msg::TemplateLoaded(template)),
                    Err(err) => link.send_message(Msg::TemplateFailed(err.to_string())),
                },
                Ok(resp) => link.send_message(Msg::TemplateFailed(format!("HTTP {}", resp.status()))),
                Err(err) => link.send_message(Msg::TemplateFailed(err.to_string())),
            }
        });

        Self {
            template: None,
            error: None,
            saved_count: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TemplateLoaded(template) => {
                if template.is_empty() {
                    show_toast("Nenhum checklist encontrado no modelo.");
                }
                self.template = Some(Rc::new(template));
            }
            Msg::TemplateFailed(message) => {
                gloo_console::error!(format!("template request failed: {}", message));
                self.error = Some(format!("Erro ao carregar checklists: {}", message));
            }
            Msg::ChecklistSaved => self.saved_count += 1,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_saved = ctx.link().callback(|_| Msg::ChecklistSaved);

        html! {
            <div class="app">
                <header>
                    <h1>{ "Sistema de Checklist - Manutenção Preventiva" }</h1>
                    <p><strong>{ "Equipamento: 930E-5 - Mina de Salobo" }</strong></p>
                </header>
                {
                    match (&self.template, &self.error) {
                        (Some(template), _) => html! {
                            <ChecklistForm template={template.clone()} {on_saved} />
                        },
                        (None, Some(error)) => html! { <p class="error">{ error }</p> },
                        (None, None) => html! { <p class="info">{ "Carregando checklists..." }</p> },
                    }
                }
                <hr />
                <SavedChecklists refresh={self.saved_count} />
                <footer>
                    <p><strong>{ "Sistema de Checklist - Manutenção Preventiva | Desenvolvido para uso em campo" }</strong></p>
                </footer>
            </div>
        }
    }
}
