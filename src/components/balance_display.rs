use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::model::{TickerAction, TickerState};
use crate::util::format_amount;

#[function_component]
pub fn BalanceDisplay() -> Html {
    let config = use_context::<Rc<WidgetConfig>>().unwrap_or_default();
    let state = {
        let ticker_cfg = config.ticker.clone();
        use_reducer(move || TickerState::new(ticker_cfg))
    };

    // Runs for the lifetime of the component; dropping the handle cancels it
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.config.tick_interval_ms, move |&ms| {
            let handle = Interval::new(ms, move || dispatcher.dispatch(TickerAction::Tick));
            move || drop(handle)
        });
    }

    let cfg = &state.config;
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:4px;">
            <span style="font-size:12px; opacity:0.7;">{"Simulated balance"}</span>
            <span id="balance" style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">
                { format_amount(state.ticker.balance, cfg.decimals, &cfg.suffix) }
            </span>
        </div>
    }
}
