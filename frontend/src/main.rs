use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::Dashboard;
use config::AppConfig;
use hooks::{AlertProvider, SessionProvider};
use services::{ApiClient, Logger};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        let config = AppConfig::from_build_env();
        Logger::init(config.log_level);
        log::info!("Donation dashboard starting against {}", config.api_base_url);
        config
    });
    let api_client = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <SessionProvider credentials={config.credentials.clone()}>
                <AlertProvider>
                    <Dashboard api_client={(*api_client).clone()} />
                </AlertProvider>
            </SessionProvider>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
