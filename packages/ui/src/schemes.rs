use api::types::{IncomeRange, SchemeCategory};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Filterable catalog listing. `category` preselects the category filter
/// when arriving from a dashboard tile.
#[component]
pub fn SchemeListPage(category: Option<String>) -> Element {
    let lang = crate::use_lang()();

    let mut category_filter =
        use_signal(move || category.clone().unwrap_or_else(|| "all".to_string()));
    let mut income_filter = use_signal(|| "all".to_string());
    let mut sort_by = use_signal(|| "eligibility".to_string());
    let mut search_input = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut generation = use_signal(|| 0_u64);

    let schemes = use_resource(move || async move {
        api::list_schemes(Some(category_filter()), Some(search()), Some(income_filter())).await
    });

    let search_ph = crate::t(lang, "schemes.search_ph");

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "schemes.title")} }
            }

            div { class: "filter_bar",
                input {
                    class: "search_input",
                    value: "{search_input}",
                    placeholder: "{search_ph}",
                    oninput: move |e| {
                        search_input.set(e.value());
                        // Debounce: only the newest pending edit fires a query.
                        let my_generation = generation() + 1;
                        generation.set(my_generation);
                        spawn(async move {
                            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                            if generation() == my_generation {
                                search.set(search_input());
                            }
                        });
                    },
                }

                label { {crate::t(lang, "schemes.category")} }
                select {
                    value: "{category_filter}",
                    onchange: move |e| category_filter.set(e.value()),
                    option { value: "all", {crate::t(lang, "category.all")} }
                    for category in SchemeCategory::ALL {
                        option { value: "{category.as_db()}", {crate::t(lang, crate::category_key(category))} }
                    }
                }

                label { {crate::t(lang, "schemes.income")} }
                select {
                    value: "{income_filter}",
                    onchange: move |e| income_filter.set(e.value()),
                    option { value: "all", {crate::t(lang, "category.all")} }
                    for income in IncomeRange::ALL.into_iter().skip(1) {
                        option { value: "{income.as_db()}", "{income.as_db()}" }
                    }
                }

                // TODO: wire the sort preference into the catalog query.
                label { {crate::t(lang, "schemes.sort")} }
                select {
                    value: "{sort_by}",
                    onchange: move |e| sort_by.set(e.value()),
                    option { value: "eligibility", {crate::t(lang, "schemes.sort.eligibility")} }
                    option { value: "deadline", {crate::t(lang, "schemes.sort.deadline")} }
                    option { value: "benefits", {crate::t(lang, "schemes.sort.benefits")} }
                }
            }

            crate::dashboard::SchemeGrid { schemes }
        }
    }
}
