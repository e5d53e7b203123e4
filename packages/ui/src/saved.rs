use dioxus::prelude::*;

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

/// Saved schemes plus deadline reminders for the current browser session.
#[component]
pub fn SavedSchemesPage() -> Element {
    let lang = crate::use_lang()();
    let code = lang.code();
    let session_id = crate::use_session().session_id;
    let toasts = crate::use_toasts();

    let mut saved = use_resource(move || async move {
        match session_id() {
            Some(sid) => api::list_saved_schemes(sid).await,
            None => Ok(Vec::new()),
        }
    });
    let reminders = use_resource(move || async move {
        match session_id() {
            Some(sid) => api::list_reminders(sid).await,
            None => Ok(Vec::new()),
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "saved.title")} }
            }

            match saved() {
                None => rsx! { p { class: "hint", {crate::t(lang, "common.loading")} } },
                Some(Err(err)) => rsx! {
                    p { class: "error", {format!("{} {err}", crate::t(lang, "common.error_prefix"))} }
                },
                Some(Ok(items)) => rsx! {
                    if items.is_empty() {
                        p { class: "hint", {crate::t(lang, "saved.empty")} }
                    }
                    div { class: "saved_list",
                        for scheme in items {
                            div { class: "card saved_row", key: "{scheme.id}",
                                a { class: "saved_name", href: "/schemes/{scheme.id}",
                                    span { class: "scheme_icon", {crate::category_icon(scheme.category)} }
                                    " {scheme.name(code)}"
                                }
                                button {
                                    class: "btn small",
                                    onclick: {
                                        let toasts = toasts.clone();
                                        let scheme_id = scheme.id;
                                        move |_| {
                                            let toasts = toasts.clone();
                                            let Some(sid) = session_id() else { return };
                                            spawn(async move {
                                                match api::unsave_scheme(sid, scheme_id).await {
                                                    Ok(_) => saved.restart(),
                                                    Err(e) => toasts.error(
                                                        crate::t(lang, "common.error_prefix"),
                                                        Some(e.to_string()),
                                                    ),
                                                }
                                            });
                                        }
                                    },
                                    {crate::t(lang, "saved.remove")}
                                }
                            }
                        }
                    }
                }
            }

            section {
                h2 { {crate::t(lang, "reminders.title")} }
                match reminders() {
                    None => rsx! { p { class: "hint", {crate::t(lang, "common.loading")} } },
                    Some(Err(err)) => rsx! {
                        p { class: "error", {format!("{} {err}", crate::t(lang, "common.error_prefix"))} }
                    },
                    Some(Ok(items)) => rsx! {
                        if items.is_empty() {
                            p { class: "hint", {crate::t(lang, "reminders.empty")} }
                        }
                        ul { class: "reminder_list",
                            for reminder in items {
                                li { key: "{reminder.scheme_id}-{reminder.reminder_date}",
                                    a { href: "/schemes/{reminder.scheme_id}", "{reminder.name}" }
                                    span { class: "deadline",
                                        {api::types::format_deadline(&reminder.reminder_date)
                                            .unwrap_or_else(|| reminder.reminder_date.clone())}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
