use api::types::{Scheme, SchemeCategory};
use dioxus::prelude::*;

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

#[component]
pub fn Dashboard() -> Element {
    let lang = crate::use_lang()();
    let profile = crate::use_session().profile;

    // Without a profile the rail falls back to the first few schemes.
    let recommended = use_resource(move || async move {
        match profile() {
            Some(p) => api::recommend_schemes(p).await,
            None => api::list_schemes(None, None, None).await.map(|mut all| {
                all.truncate(6);
                all
            }),
        }
    });
    let newest = use_resource(|| async move { api::new_schemes().await });
    let deadlines = use_resource(|| async move { api::deadline_schemes().await });

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        div { class: "page",
            div { class: "hero",
                h1 { {crate::t(lang, "home.tagline")} }
                if let Some(p) = profile() {
                    if !p.name.is_empty() {
                        p { class: "hero_user", "👤 {p.name}" }
                    }
                }
            }

            section {
                h2 { {crate::t(lang, "home.browse_category")} }
                div { class: "category_grid",
                    for category in SchemeCategory::ALL {
                        a {
                            class: "category_tile",
                            href: "/schemes?category={category.as_db()}",
                            span { class: "scheme_icon", {crate::category_icon(category)} }
                            span { {crate::t(lang, crate::category_key(category))} }
                        }
                    }
                }
            }

            section {
                h2 { {crate::t(lang, "home.recommended")} }
                if profile().is_none() {
                    p { class: "hint",
                        a { href: "/profile", {crate::t(lang, "home.setup_profile")} }
                    }
                }
                SchemeGrid { schemes: recommended }
            }

            section {
                h2 { {crate::t(lang, "home.new_schemes")} }
                SchemeGrid { schemes: newest }
            }

            section {
                h2 { {crate::t(lang, "home.deadlines")} }
                SchemeGrid { schemes: deadlines }
            }
        }
    }
}

/// Translation key for the hint shown in place of an empty grid.
fn empty_state_key<T>(items: &[T]) -> Option<&'static str> {
    items.is_empty().then_some("schemes.none")
}

/// Shared loading / error / empty handling for a fetched list of schemes.
#[component]
pub(crate) fn SchemeGrid(schemes: Resource<Result<Vec<Scheme>, ServerFnError>>) -> Element {
    let lang = crate::use_lang()();

    match schemes() {
        None => rsx! {
            div { class: "card_grid",
                for _ in 0..3 {
                    div { class: "card skeleton",
                        h3 { {crate::t(lang, "common.loading")} }
                        p { class: "summary", "…" }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "error", {format!("{} {err}", crate::t(lang, "common.error_prefix"))} }
        },
        Some(Ok(items)) => rsx! {
            if let Some(key) = empty_state_key(&items) {
                p { class: "hint", {crate::t(lang, key)} }
            }
            div { class: "card_grid",
                for scheme in items {
                    crate::SchemeCard { key: "{scheme.id}", scheme }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{t, Lang};

    #[test]
    fn empty_grid_maps_to_localized_hint() {
        let key = empty_state_key::<Scheme>(&[]).unwrap();
        assert_eq!(key, "schemes.none");
        // Each language has its own hint text, not the English fallback.
        assert_ne!(t(Lang::Hi, key), t(Lang::En, key));
        assert_ne!(t(Lang::Mr, key), t(Lang::En, key));
    }

    #[test]
    fn non_empty_grid_has_no_hint() {
        assert!(empty_state_key(&[1, 2]).is_none());
    }
}
