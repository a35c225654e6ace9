use crate::Route;
use crate::session::Session;
use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    let session = use_context::<Signal<Session>>();

    rsx! {
        div { id: "profile-page", class: "page",
            h1 { "Profile" }
            match &*session.read() {
                Session::Authenticated(profile) => rsx! {
                    p {
                        strong { "Username:" }
                        " {profile.username}"
                    }
                    p {
                        strong { "Signed in:" }
                        " {profile.signed_in_at}"
                    }
                },
                Session::Anonymous => rsx! {
                    p { "You are not signed in." }
                    Link { to: Route::Auth {}, "Go to sign in" }
                },
            }
        }
    }
}
