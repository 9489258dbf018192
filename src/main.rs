use dioxus::prelude::*;

use busca_cep_menu::config::AppConfig;
use busca_cep_menu::pages::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MENU_CSS: Asset = asset!("/assets/menu.css");

fn main() {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        tracing::warn!("{}; using default settings", err);
    }

    tracing::info!("Starting busca-cep menu");
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(config: &AppConfig) {
    use busca_cep_menu::config::LogFormat;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // dioxus::launch may install its own logger later; keep whichever got there first
    let registry = tracing_subscriber::registry().with(filter);
    let _ = match config.log_format {
        LogFormat::Full => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };
}

// Web builds log through the console logger installed by dioxus::launch
#[cfg(target_arch = "wasm32")]
fn init_logging(_config: &AppConfig) {}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MENU_CSS }

        Router::<Route> {}
    }
}
