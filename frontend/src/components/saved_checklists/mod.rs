//! Viewer for saved checklists: pick a stored file, read its inspection data and
//! item results, and download it as the original JSON or as a generated PDF.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SavedChecklistsProps;
pub use state::SavedChecklists;

impl Component for SavedChecklists {
    type Message = Msg;
    type Properties = SavedChecklistsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Refresh);
        SavedChecklists::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().refresh != old_props.refresh {
            ctx.link().send_message(Msg::Refresh);
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
