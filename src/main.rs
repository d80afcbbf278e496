use dioxus::{
    logger::tracing::{Level, error, info},
    prelude::*,
};

use pharma_news::{App, config::AppConfig};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    let config = match AppConfig::from_build_env() {
        Ok(c) => c,
        Err(e) => {
            error!("invalid build configuration, using defaults: {e:?}");
            AppConfig::default()
        }
    };
    info!("analysis backend at {}", config.api_url);

    LaunchBuilder::new().with_context(config).launch(App)
}
