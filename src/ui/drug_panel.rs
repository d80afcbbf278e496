use dioxus::prelude::*;

use crate::{
    ui::collapsible::Collapsible,
    view::{CategoryBlock, PanelView, TextBlock},
};

/// One analyzed molecule, collapsed until opened.
#[component]
pub fn DrugPanel(panel: PanelView) -> Element {
    let PanelView {
        title,
        sections,
        categories,
    } = panel;
    rsx! {
        Collapsible { title, c: true,
            for section in sections {
                Section { block: section }
            }
            h3 { class: "news-heading", "News Categories" }
            div { class: "news-grid",
                for category in categories {
                    CategorySection { block: category }
                }
            }
        }
    }
}

#[component]
fn Section(block: TextBlock) -> Element {
    rsx! {
        div { class: "section",
            h4 { "{block.title}" }
            p { class: "literal", "{block.content}" }
        }
    }
}

#[component]
fn CategorySection(block: CategoryBlock) -> Element {
    let color = block.category.color();
    let title = block.title();
    rsx! {
        div {
            class: "category",
            // `{color}10` is the same hue at low alpha
            style: "border-left: 4px solid {color}; background-color: {color}10;",
            h4 { style: "color: {color};", "{title}" }
            p { class: "literal muted", "{block.content}" }
        }
    }
}
