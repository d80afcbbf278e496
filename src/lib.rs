use dioxus::prelude::*;

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
mod ui;
pub mod view;

use ui::home::Home;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Pharma News Analyzer" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Home {}
    }
}
