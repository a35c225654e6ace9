use crate::Route;
use dioxus::prelude::*;

/// Public landing page. The navigation bar stays hidden here, so the page
/// carries its own links into the application.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { id: "landing-page", class: "page hero",
            h1 { "SentiMent" }
            p { class: "tagline", "Track what your audience feels, as it happens." }
            div { class: "hero-actions",
                Link { class: "cta-button", to: Route::Auth {}, "Sign in" }
                Link { class: "cta-link", to: Route::Dashboard {}, "Explore the dashboard" }
            }
        }
    }
}
