use dioxus::prelude::*;

use views::{DeleteAccount, Login, VerifyEmail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/verify-email?:token")]
    VerifyEmail { token: String },
    #[route("/delete-account?:token")]
    DeleteAccount { token: String },
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    init_server();

    dioxus::launch(App);
}

/// Logging and configuration are settled before the first request is served.
#[cfg(feature = "server")]
fn init_server() {
    use std::sync::Arc;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may already have installed its own subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match api::state::AppState::from_env() {
        Ok(state) => api::state::AppState::set_global(Arc::new(state)),
        Err(err) => {
            tracing::error!("startup: {err:#}");
            std::process::exit(1);
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
