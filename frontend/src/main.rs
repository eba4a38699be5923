mod api;
mod components;
mod config;
mod error;
mod flows;
mod navigator;
mod scheduler;
mod services;
mod session;
#[cfg(test)]
mod testing;

use yew::prelude::*;

use crate::components::auth_page::AuthPage;
use crate::components::dashboard::DashboardPage;
use crate::config::ClientConfig;
use crate::navigator::{BrowserNavigator, Page};
use crate::services::Services;

#[function_component(App)]
fn app() -> Html {
    let config = ClientConfig::from_env();
    let page = BrowserNavigator::new(config.clone()).current_page();
    let services = use_memo((), move |_| Services::browser(config));
    log::info!("Rendering {} page", page);

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            {
                match page {
                    Page::Auth => html! { <AuthPage /> },
                    Page::Dashboard => html! { <DashboardPage /> },
                }
            }
        </ContextProvider<Services>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
