use dioxus::prelude::*;
use std::env;

use views::{Home, Profile, Saved, SchemeDetail, Schemes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/schemes?:category")]
    Schemes { category: Option<String> },
    #[route("/schemes/:id")]
    SchemeDetail { id: i64 },
    #[route("/saved")]
    Saved {},
    #[route("/profile")]
    Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    init_server_logging();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_server_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let db = env::var("SCHEMES_DB").unwrap_or_else(|_| ".dev/schemes.db (default)".to_string());

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("startup: SCHEMES_DB={db}");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::I18nProvider {
            ui::SessionProvider {
                ui::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// A web-specific Router around the shared navigation
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "portal_nav",
            div { class: "portal_nav_inner",
                a { class: "brand", href: "/",
                    span { class: "brand_mark", "🏛️" }
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                div { class: "nav_links",
                    Link { class: "nav_link", to: Route::Home {}, {ui::t(lang, "nav.home")} }
                    Link {
                        class: "nav_link",
                        to: Route::Schemes { category: None },
                        {ui::t(lang, "nav.schemes")}
                    }
                    Link { class: "nav_link", to: Route::Saved {}, {ui::t(lang, "nav.saved")} }
                    Link { class: "nav_link", to: Route::Profile {}, {ui::t(lang, "nav.profile")} }
                    LanguageSwitcher {}
                }
            }
        }
        div { class: "portal_container route_view", Outlet::<Route> {} }
        ui::ChatWidget {}
    }
}

#[component]
fn LanguageSwitcher() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        select {
            class: "lang_select",
            "aria-label": ui::t(lang, "lang.label"),
            value: "{lang.code()}",
            onchange: move |e| {
                if let Some(next) = ui::Lang::from_code(&e.value()) {
                    ui::set_lang(next);
                }
            },
            option { value: "en", "English" }
            option { value: "hi", "हिंदी" }
            option { value: "mr", "मराठी" }
        }
    }
}
