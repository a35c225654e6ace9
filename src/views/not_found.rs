use crate::Route;
use dioxus::prelude::*;

// catch-all for paths outside the route table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let attempted = format!("/{}", segments.join("/"));

    rsx! {
        div { id: "not-found-page", class: "page",
            h1 { "Page not found" }
            p { "No route matches {attempted}." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
