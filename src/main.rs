mod session;
mod views;

use dioxus::prelude::*;

use crate::session::Session;
use crate::views::{
    Auth, Channels, Chatbot, Dashboard, Landing, Navbar, NotFound, Profile, Twitter,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application route table. Every page sits under the [`Navbar`] layout,
/// which also renders the routed outlet.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Landing {},

    #[route("/auth")]
    Auth {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/profile")]
    Profile {},

    #[route("/chatbot")]
    Chatbot {},

    #[route("/channels")]
    Channels {},

    #[route("/twitter")]
    Twitter {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn App() -> Element {
    let mut session = use_context_provider(|| Signal::new(Session::Anonymous));

    // Hydrate the session signal from the server once, on first render.
    use_future(move || async move {
        if let Ok(current) = crate::session::fetch_session().await {
            session.set(current);
        }
    });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Only honored together with a non-zero --port.
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    ip: String,
    /// 0 means "use the address dioxus-cli-config resolves".
    #[arg(long, default_value_t = 0)]
    port: u16,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();
    let addr: std::net::SocketAddr = if args.port == 0 {
        if args.ip != "127.0.0.1" {
            log::warn!(
                "--ip {} is ignored without --port, using the dioxus-cli-config address",
                args.ip
            );
        }
        dioxus_cli_config::fullstack_address_or_localhost()
    } else {
        format!("{}:{}", args.ip, args.port).parse()?
    };

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::default(), App);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Serving SentiMent at http://{addr}");
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
