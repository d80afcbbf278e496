// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

#[component]
pub fn DrugForm(
    value: String,
    loading: bool,
    on_input: Callback<String, ()>,
    on_submit: Callback<(), ()>,
) -> Element {
    let set_text = move |e: Event<FormData>| {
        if loading {
            return;
        }
        on_input(e.value());
    };
    let submit = move |_e: Event<MouseData>| {
        if loading {
            return;
        }
        on_submit(());
    };
    let disabled = if loading { Some(true) } else { None };
    rsx! {
        div { class: "drug-form",
            label { class: "drug-form-field",
                span { "Enter drug names (comma-separated)" }
                input {
                    r#type: "text",
                    placeholder: "Example: Jardiance, Ozempic",
                    disabled,
                    oninput: set_text,
                    value,
                }
            }
            button { class: "analyze-button", disabled, onclick: submit,
                if loading {
                    div { class: "spinner", role: "progressbar" }
                } else {
                    "Analyze"
                }
            }
        }
    }
}
