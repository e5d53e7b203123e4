use api::types::EligibilityResult;
use dioxus::prelude::*;

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

/// Split a comma-separated field (documents) into list items.
fn comma_items(text: &str) -> Vec<String> {
    text.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Split an application walkthrough into steps, dropping any `1.`-style
/// numbering since the list renders its own.
fn apply_steps(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
            let rest = rest.strip_prefix('.').unwrap_or(line);
            rest.trim_start().to_string()
        })
        .collect()
}

/// Badge translation key and CSS class for an eligibility outcome. A failed
/// check with recorded reasons renders as partial so users see what to fix.
fn eligibility_badge(result: &EligibilityResult) -> (&'static str, &'static str) {
    if result.eligible {
        ("eligibility.eligible", "badge badge_eligible")
    } else if !result.reasons.is_empty() {
        ("eligibility.partial", "badge badge_partial")
    } else {
        ("eligibility.not_eligible", "badge badge_not_eligible")
    }
}

#[component]
pub fn SchemeDetailPage(id: i64) -> Element {
    let lang = crate::use_lang()();
    let code = lang.code();
    let session = crate::use_session();
    let toasts = crate::use_toasts();

    let scheme = use_resource(move || async move { api::get_scheme(id).await });

    let session_id = session.session_id;
    let mut saved = use_signal(|| false);
    // Reflect an earlier save once the session token is known.
    let _saved_probe = use_resource(move || async move {
        if let Some(sid) = session_id() {
            if let Ok(schemes) = api::list_saved_schemes(sid).await {
                saved.set(schemes.iter().any(|s| s.id == id));
            }
        }
    });

    let mut eligibility = use_signal(|| None::<EligibilityResult>);
    let mut reminder_date = use_signal(String::new);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        div { class: "page",
            match scheme() {
                None => rsx! { p { class: "hint", {crate::t(lang, "common.loading")} } },
                Some(Err(err)) => rsx! {
                    p { class: "error", {format!("{} {err}", crate::t(lang, "common.error_prefix"))} }
                },
                Some(Ok(None)) => rsx! {
                    p { class: "hint", {crate::t(lang, "detail.not_found")} }
                    a { class: "btn", href: "/schemes", {crate::t(lang, "common.back")} }
                },
                Some(Ok(Some(s))) => {
                    let name = s.name(code).to_string();
                    let description = s.description(code).to_string();
                    let benefits = s.benefits(code).to_string();
                    let criteria = s.eligibility(code).to_string();
                    let documents = comma_items(s.documents(code));
                    let steps = apply_steps(s.how_to_apply(code));
                    let deadline = s.deadline_display();
                    let link = s.official_link.clone();
                    let profile = session.profile;

                    rsx! {
                        div { class: "page_header",
                            h1 {
                                span { class: "scheme_icon", {crate::category_icon(s.category)} }
                                " {name}"
                            }
                            a { class: "btn", href: "/schemes", {crate::t(lang, "common.back")} }
                        }

                        div { class: "card_meta",
                            span { class: "tag", {crate::t(lang, crate::category_key(s.category))} }
                            if let Some(deadline) = deadline {
                                span { class: "deadline", {format!("{}: {deadline}", crate::t(lang, "card.deadline"))} }
                            }
                        }

                        p { class: "summary", "{description}" }

                        section {
                            h2 { {crate::t(lang, "detail.benefits")} }
                            p { "{benefits}" }
                        }
                        section {
                            h2 { {crate::t(lang, "detail.eligibility")} }
                            p { "{criteria}" }
                        }
                        section {
                            h2 { {crate::t(lang, "detail.documents")} }
                            ul {
                                for doc in documents {
                                    li { "{doc}" }
                                }
                            }
                        }
                        section {
                            h2 { {crate::t(lang, "detail.how_to_apply")} }
                            ol {
                                for step in steps {
                                    li { "{step}" }
                                }
                            }
                        }

                        div { class: "action_row",
                            a { class: "btn primary", href: "{link}", target: "_blank",
                                {crate::t(lang, "detail.official_site")}
                            }
                            button {
                                class: "btn",
                                disabled: saved(),
                                onclick: {
                                    let toasts = toasts.clone();
                                    move |_| {
                                        let toasts = toasts.clone();
                                        let Some(sid) = session_id() else { return };
                                        spawn(async move {
                                            match api::save_scheme(sid, id).await {
                                                Ok(_) => {
                                                    saved.set(true);
                                                    toasts.success(crate::t(lang, "detail.saved"), None);
                                                }
                                                Err(e) => toasts.error(
                                                    crate::t(lang, "common.error_prefix"),
                                                    Some(e.to_string()),
                                                ),
                                            }
                                        });
                                    }
                                },
                                if saved() {
                                    {crate::t(lang, "detail.saved")}
                                } else {
                                    {crate::t(lang, "detail.save")}
                                }
                            }
                            button {
                                class: "btn",
                                onclick: {
                                    let toasts = toasts.clone();
                                    move |_| {
                                        let toasts = toasts.clone();
                                        let Some(p) = profile() else {
                                            toasts.info(crate::t(lang, "eligibility.need_profile"), None);
                                            navigator().push("/profile");
                                            return;
                                        };
                                        spawn(async move {
                                            match api::check_eligibility(id, p).await {
                                                Ok(result) => eligibility.set(Some(result)),
                                                Err(e) => toasts.error(
                                                    crate::t(lang, "common.error_prefix"),
                                                    Some(e.to_string()),
                                                ),
                                            }
                                        });
                                    }
                                },
                                {crate::t(lang, "eligibility.check")}
                            }
                        }

                        if let Some(result) = eligibility() {
                            {
                                let (key, class) = eligibility_badge(&result);
                                rsx! {
                                    div { class: "eligibility_result",
                                        span { class: "{class}", {crate::t(lang, key)} }
                                        if !result.reasons.is_empty() {
                                            p { class: "hint", {result.reasons.join(", ")} }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "reminder_form",
                            h2 { {crate::t(lang, "reminders.title")} }
                            input {
                                r#type: "date",
                                value: "{reminder_date}",
                                oninput: move |e| reminder_date.set(e.value()),
                            }
                            button {
                                class: "btn",
                                onclick: {
                                    let toasts = toasts.clone();
                                    move |_| {
                                        let toasts = toasts.clone();
                                        let date = reminder_date();
                                        if date.is_empty() {
                                            return;
                                        }
                                        let Some(sid) = session_id() else { return };
                                        spawn(async move {
                                            match api::add_reminder(sid, id, date).await {
                                                Ok(()) => toasts.success(crate::t(lang, "reminders.added"), None),
                                                Err(e) => toasts.error(
                                                    crate::t(lang, "common.error_prefix"),
                                                    Some(e.to_string()),
                                                ),
                                            }
                                        });
                                    }
                                },
                                {crate::t(lang, "reminders.add")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_items_trims_and_drops_empties() {
        assert_eq!(
            comma_items("Aadhaar Card, Bank Account, "),
            vec!["Aadhaar Card", "Bank Account"],
        );
        assert!(comma_items("").is_empty());
    }

    #[test]
    fn apply_steps_strip_numbering() {
        let steps = apply_steps("1. Visit bank\n2. Fill form\n\nGet loan");
        assert_eq!(steps, vec!["Visit bank", "Fill form", "Get loan"]);
    }

    #[test]
    fn badge_mapping() {
        let eligible = EligibilityResult {
            eligible: true,
            reasons: vec![],
        };
        assert_eq!(eligibility_badge(&eligible).0, "eligibility.eligible");

        let partial = EligibilityResult {
            eligible: false,
            reasons: vec!["Minimum age required: 18".into()],
        };
        assert_eq!(eligibility_badge(&partial).0, "eligibility.partial");

        let rejected = EligibilityResult {
            eligible: false,
            reasons: vec![],
        };
        assert_eq!(eligibility_badge(&rejected).0, "eligibility.not_eligible");
    }
}
