use dioxus::prelude::*;

#[component]
pub fn Chatbot() -> Element {
    rsx! {
        div { id: "chatbot-page", class: "page",
            h1 { "Chatbot" }
            p { "Conversational assistant over your sentiment data." }
        }
    }
}
