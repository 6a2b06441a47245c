use gloo_timers::callback::Interval;
use std::rc::Rc;
use tracing::{debug, info};
use yew::prelude::*;

use super::progress_bar::ProgressBar;
use crate::config::WidgetConfig;
use crate::model::{MiningAction, MiningState};
use crate::util::format_amount;

#[function_component]
pub fn MiningSimulator() -> Html {
    let config = use_context::<Rc<WidgetConfig>>().unwrap_or_default();
    let state = {
        let mining_cfg = config.mining.clone();
        use_reducer(move || MiningState::new(mining_cfg))
    };
    let session = &state.session;

    // The step interval only exists while a session is running. When the reducer
    // reaches 100% the running flag flips and the cleanup drops the interval.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((session.running, state.config.step_interval_ms), move |&(running, ms)| {
            let handle = running.then(|| {
                Interval::new(ms, move || {
                    dispatcher.dispatch(MiningAction::Tick { roll: js_sys::Math::random() })
                })
            });
            move || drop(handle)
        });
    }

    {
        let completed = session.sessions_completed;
        let reward = session.last_reward;
        let total = session.mined_total;
        use_effect_with(completed, move |&completed| {
            if completed > 0 {
                info!(session = completed, reward = ?reward, total, "mining session complete");
            }
            || ()
        });
    }

    let on_start = {
        let dispatcher = state.dispatcher();
        let running = session.running;
        Callback::from(move |_: MouseEvent| {
            if running {
                debug!("start ignored, session already running");
                return;
            }
            info!("mining session started");
            dispatcher.dispatch(MiningAction::Start);
        })
    };

    let suffix = config.ticker.suffix.as_str();
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; min-width:260px;">
            <button id="start-mining" onclick={on_start} disabled={session.running}>{"Start mining"}</button>
            <ProgressBar progress={session.progress} />
            <div id="status" style="font-size:14px;">{ session.status.label() }</div>
            <div id="mined-output" style="font-size:14px; font-variant-numeric:tabular-nums;">
                { format!("Total mined: {}", format_amount(session.mined_total, 4, suffix)) }
            </div>
            {
                if let Some(reward) = session.last_reward {
                    html! { <div style="font-size:11px; opacity:0.7;">{ format!("Last session: +{}", format_amount(reward, 4, suffix)) }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
