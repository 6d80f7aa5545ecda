mod api;
mod config;
mod dashboard;
mod env_variable_utils;
mod logging;
mod models;
mod utils;

use crate::config::CONFIG;
use crate::dashboard::DashboardPage;
use crate::env_variable_utils::is_debug_mode;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! { <DashboardPage /> }
}

fn main() {
    logging::init(is_debug_mode());

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        CONFIG.app_name,
        CONFIG.api_base,
        CONFIG.debug
    );

    yew::Renderer::<App>::new().render();
}
