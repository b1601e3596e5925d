//! Theme toggle with light/dark/auto buttons.

use crate::theme_store::ThemeStore;
use dioxus::prelude::*;
use rideviz_core::theme::Theme;

fn button_style(active: bool) -> String {
    let weight = if active { "bold" } else { "normal" };
    format!(
        "padding: 4px 10px; cursor: pointer; font-weight: {};",
        weight
    )
}

/// Three-way theme selector backed by the shared ThemeStore.
#[component]
pub fn ThemeToggle() -> Element {
    let mut store = use_context::<ThemeStore>();
    let current = store.theme();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 4px; align-items: center;",
            span {
                style: "font-weight: bold; margin-right: 4px;",
                "Motīvs: "
            }
            button {
                style: button_style(current == Theme::Light),
                onclick: move |_| store.set_light(),
                "Gaišs"
            }
            button {
                style: button_style(current == Theme::Dark),
                onclick: move |_| store.set_dark(),
                "Tumšs"
            }
            button {
                style: button_style(current == Theme::System),
                onclick: move |_| store.set_auto(),
                "Auto"
            }
        }
    }
}
