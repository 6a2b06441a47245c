use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    /// 0..=100
    pub progress: u8,
}

#[function_component]
pub fn ProgressBar(props: &ProgressBarProps) -> Html {
    let width = props.progress.min(100);
    html! {
        <div style="width:100%; height:14px; background:#161b22; border:1px solid #30363d; border-radius:7px; overflow:hidden;">
            <div id="progress-bar" style={format!("width:{}%; height:100%; background:#2ea043; transition:width 120ms linear;", width)}></div>
        </div>
    }
}
