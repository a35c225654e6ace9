use dioxus::prelude::*;

#[component]
pub fn Twitter() -> Element {
    rsx! {
        div { id: "twitter-page", class: "page",
            h1 { "Twitter sentiment" }
            p { "Live sentiment for the terms you track." }
        }
    }
}
