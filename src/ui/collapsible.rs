use dioxus::prelude::*;

const EXPAND_ICON: Asset = asset!("/assets/expand.svg");
const COLLAPSE_ICON: Asset = asset!("/assets/collapse.svg");

/// A titled panel whose body is hidden until the header is clicked.
#[component]
pub fn Collapsible(title: String, c: bool, children: Element) -> Element {
    let mut collapsed = use_signal(|| c);
    let state_class = if collapsed() { "collapsed" } else { "expanded" };
    let aria_expanded = if collapsed() { "false" } else { "true" };
    rsx! {
        div { class: "panel {state_class}",
            button {
                class: "panel-header",
                aria_expanded,
                onclick: move |_e| {
                    collapsed.toggle();
                },
                h2 { class: "panel-title", "{title}" }
                if collapsed() {
                    img { src: EXPAND_ICON }
                } else {
                    img { src: COLLAPSE_ICON }
                }
            }
            if !collapsed() {
                div { class: "panel-body", {children} }
            }
        }
    }
}
