mod components;
mod config;
mod error;
mod model;
mod state;
mod util;

use components::app::App;

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
}

fn main() {
    init_logging();
    tracing::info!("mounting widgets");
    yew::Renderer::<App>::new().render();
}
