use crate::Route;
use crate::session::Session;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Signal<Session>>();
    let greeting = match session.read().username() {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome. Sign in to pin your own watchlists.".to_string(),
    };

    rsx! {
        div { id: "dashboard-page", class: "page",
            h1 { "Dashboard" }
            p { "{greeting}" }
            div { class: "card-grid",
                Link { class: "card", to: Route::Chatbot {},
                    h2 { "Chatbot" }
                    p { "Ask questions about tracked sentiment." }
                }
                Link { class: "card", to: Route::Channels {},
                    h2 { "Channels" }
                    p { "Manage the channels being monitored." }
                }
                Link { class: "card", to: Route::Twitter {},
                    h2 { "Twitter" }
                    p { "Live sentiment for tracked terms." }
                }
            }
        }
    }
}
