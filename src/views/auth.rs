use crate::Route;
use crate::session::{Session, sign_in};
use dioxus::prelude::*;

// take a username from the form, open a session and move on to the dashboard
#[component]
pub fn Auth() -> Element {
    let mut username = use_signal(|| "".to_string());
    let mut error = use_signal(|| None::<String>);
    let mut session = use_context::<Signal<Session>>();
    let nav = navigator();

    rsx! {
        div { id: "auth-page", class: "page",
            h1 { "Sign in" }
            form {
                label { r#for: "fusername", "Username:" }
                input {
                    r#type: "text",
                    id: "form-username",
                    r#name: "fusername",
                    placeholder: "Your username",
                    value: "{username}",
                    oninput: move |event| username.set(event.value()),
                }
                button {
                    id: "submit",
                    r#type: "submit",
                    onclick: move |_| async move {
                        match sign_in(username.to_string()).await {
                            Ok(active) => {
                                session.set(active);
                                nav.push(Route::Dashboard {});
                            }
                            Err(e) => error.set(Some(format!("Sign in failed: {e}"))),
                        }
                    },
                    "Sign in"
                }
            }
            if let Some(message) = error() {
                p { class: "error-message", "{message}" }
            }
        }
    }
}
