use dioxus::prelude::*;

#[component]
pub fn Channels() -> Element {
    rsx! {
        div { id: "channels-page", class: "page",
            h1 { "Channels" }
            p { "Channels being monitored for sentiment." }
        }
    }
}
