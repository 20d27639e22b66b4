//! Inspection form: sidebar with the inspection data, category and periodicity
//! selectors, and one block per checklist item.
//!
//! All form rules live in `common::form::FormSession`; this component only turns
//! DOM events into `FormEvent`s, posts the request the session hands back, and
//! reports the outcome to the user.

use std::rc::Rc;

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{InfoField, Msg};
pub use props::ChecklistFormProps;
pub use state::ChecklistForm;

impl Component for ChecklistForm {
    type Message = Msg;
    type Properties = ChecklistFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ChecklistForm::new(&ctx.props().template)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if !Rc::ptr_eq(&ctx.props().template, &old_props.template) {
            *self = ChecklistForm::new(&ctx.props().template);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
