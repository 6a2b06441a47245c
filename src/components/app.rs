use super::{balance_display::BalanceDisplay, mining_simulator::MiningSimulator};
use crate::config::WidgetConfig;
use std::rc::Rc;
use yew::prelude::*;

// Config is read from the page once and shared with both widgets through context
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| WidgetConfig::load_from_document());

    html! {
        <ContextProvider<Rc<WidgetConfig>> context={config}>
            <div id="root" style="display:flex; flex-wrap:wrap; gap:12px; padding:12px;">
                <BalanceDisplay />
                <MiningSimulator />
            </div>
        </ContextProvider<Rc<WidgetConfig>>>
    }
}
