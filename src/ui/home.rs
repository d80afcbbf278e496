//! The analyzer page.
//!
//! Holds the page [`Session`] in a signal, turns form submissions into
//! tickets and spawns the outbound call for each one. Results and errors are
//! rendered straight from the session on every change.

use std::rc::Rc;

use dioxus::{logger::tracing::debug, prelude::*};

use crate::{
    client::AnalysisClient,
    config::AppConfig,
    session::{Session, dispatch},
    ui::{drug_form::DrugForm, drug_panel::DrugPanel},
    view::panels,
};

#[component]
pub fn Home() -> Element {
    let mut session = use_signal(Session::default);
    let api = use_hook(|| {
        let config = consume_context::<AppConfig>();
        Rc::new(AnalysisClient::new(&config))
    });

    let on_submit = move |_: ()| {
        let ticket = match session.with_mut(|s| s.submit()) {
            Ok(t) => t,
            Err(e) => {
                debug!("rejected input: {e}");
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            let completion = dispatch(api.as_ref(), ticket).await;
            session.with_mut(|s| s.complete(completion));
        });
    };

    let loading = session.read().is_loading();
    let error = session.read().error().map(str::to_string);
    let input = session.read().input.clone();
    let views = panels(session.read().results());

    rsx! {
        div { class: "container",
            div { class: "card",
                h1 { class: "page-title", "Pharma News Analyzer" }
                DrugForm {
                    value: input,
                    loading,
                    on_input: move |s: String| {
                        session.with_mut(|st| st.input = s);
                    },
                    on_submit,
                }
                if let Some(error_msg) = error {
                    div { class: "alert", role: "alert", "{error_msg}" }
                }
            }
            for (i , panel) in views.into_iter().enumerate() {
                DrugPanel { key: "{i}", panel }
            }
        }
    }
}
