use crate::Route;
use crate::session::Session;
use dioxus::prelude::*;

/// True when the current route shows no navigation chrome at all.
/// Only the landing page hides the bar; the session state never does.
fn hides_chrome(route: &Route) -> bool {
    matches!(route, Route::Landing {})
}

/// Active styling follows exact route equality, no prefix matching.
fn nav_link_class(route: &Route, target: &Route) -> &'static str {
    if route == target { "nav-link active" } else { "nav-link" }
}

/// Layout component wrapping every routed page. On the landing page it
/// contributes nothing but the outlet; everywhere else it renders the brand
/// link, the Dashboard/Profile links with exact-match active styling, and the
/// profile and logout icon buttons.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();
    let mut session = use_context::<Signal<Session>>();

    if hides_chrome(&route) {
        return rsx! {
            Outlet::<Route> {}
        };
    }

    rsx! {
        nav { id: "navbar",
            div { class: "nav-left",
                Link { class: "brand", to: Route::Dashboard {},
                    span { class: "brand-mark", "📊" }
                    span { class: "brand-name", "SentiMent" }
                }
                Link {
                    class: nav_link_class(&route, &Route::Dashboard {}),
                    to: Route::Dashboard {},
                    "Dashboard"
                }
                Link {
                    class: nav_link_class(&route, &Route::Profile {}),
                    to: Route::Profile {},
                    "Profile"
                }
            }
            div { class: "nav-right",
                button {
                    class: "icon-button",
                    title: "Profile",
                    onclick: move |_| {
                        nav.push(Route::Profile {});
                    },
                    "👤"
                }
                button {
                    class: "icon-button",
                    title: "Log out",
                    // Session goes anonymous before the navigation command.
                    onclick: move |_| async move {
                        if let Err(e) = crate::session::sign_out().await {
                            log::error!("Sign out failed: {e}");
                        }
                        session.set(Session::Anonymous);
                        nav.push(Route::Landing {});
                    },
                    "🚪"
                }
            }
        }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_is_hidden_only_on_the_landing_route() {
        assert!(hides_chrome(&Route::Landing {}));
        assert!(!hides_chrome(&Route::Auth {}));
        assert!(!hides_chrome(&Route::Dashboard {}));
        assert!(!hides_chrome(&Route::Profile {}));
        assert!(!hides_chrome(&Route::Chatbot {}));
        assert!(!hides_chrome(&Route::Channels {}));
        assert!(!hides_chrome(&Route::Twitter {}));
        assert!(!hides_chrome(&Route::NotFound { segments: vec![] }));
    }

    #[test]
    fn active_class_follows_exact_route_equality() {
        let dashboard = Route::Dashboard {};
        let profile = Route::Profile {};
        assert_eq!(nav_link_class(&dashboard, &dashboard), "nav-link active");
        assert_eq!(nav_link_class(&profile, &dashboard), "nav-link");
        assert_eq!(nav_link_class(&profile, &profile), "nav-link active");
        assert_eq!(nav_link_class(&dashboard, &profile), "nav-link");
    }

    #[test]
    fn dashboard_and_profile_are_never_both_active() {
        let routes = [
            Route::Auth {},
            Route::Dashboard {},
            Route::Profile {},
            Route::Chatbot {},
            Route::Channels {},
            Route::Twitter {},
        ];
        for route in &routes {
            let dashboard = nav_link_class(route, &Route::Dashboard {});
            let profile = nav_link_class(route, &Route::Profile {});
            assert!(!(dashboard.contains("active") && profile.contains("active")));
        }
    }
}
