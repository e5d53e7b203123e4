use api::types::{Gender, IncomeRange, SchemeCategory, UserProfile};
use dioxus::prelude::*;

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

#[component]
pub fn ProfileSetupPage() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let profile = crate::use_session().profile;

    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut income = use_signal(|| "All".to_string());
    let mut gender = use_signal(|| "All".to_string());

    // Prefill once the stored profile has loaded.
    use_effect(move || {
        if let Some(p) = profile() {
            name.set(p.name.clone());
            age.set(if p.age > 0 { p.age.to_string() } else { String::new() });
            category.set(p.category.map(|c| c.as_db().to_string()).unwrap_or_default());
            income.set(p.income_range.as_db().to_string());
            gender.set(p.gender.as_db().to_string());
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        div { class: "page narrow",
            div { class: "page_header",
                h1 { {crate::t(lang, "profile.title")} }
            }

            div { class: "panel",
                label { {crate::t(lang, "profile.name")} }
                input {
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }

                label { {crate::t(lang, "profile.age")} }
                input {
                    r#type: "number",
                    min: 0,
                    max: 120,
                    value: "{age}",
                    oninput: move |e| age.set(e.value()),
                }

                label { {crate::t(lang, "schemes.category")} }
                select {
                    value: "{category}",
                    onchange: move |e| category.set(e.value()),
                    option { value: "", "—" }
                    for c in SchemeCategory::ALL {
                        option { value: "{c.as_db()}", {crate::t(lang, crate::category_key(c))} }
                    }
                }

                label { {crate::t(lang, "schemes.income")} }
                select {
                    value: "{income}",
                    onchange: move |e| income.set(e.value()),
                    for band in IncomeRange::ALL {
                        option { value: "{band.as_db()}", "{band.as_db()}" }
                    }
                }

                label { {crate::t(lang, "profile.gender")} }
                select {
                    value: "{gender}",
                    onchange: move |e| gender.set(e.value()),
                    option { value: "All", {crate::t(lang, "gender.all")} }
                    option { value: "Female", {crate::t(lang, "gender.female")} }
                    option { value: "Male", {crate::t(lang, "gender.male")} }
                }

                button {
                    class: "btn primary",
                    onclick: {
                        let toasts = toasts.clone();
                        move |_| {
                            let next = UserProfile {
                                name: name(),
                                category: SchemeCategory::from_db(&category()),
                                age: age().parse().unwrap_or(0),
                                income_range: IncomeRange::from_db(&income())
                                    .unwrap_or(IncomeRange::All),
                                gender: Gender::from_db(&gender()).unwrap_or(Gender::All),
                            };
                            crate::save_profile(next);
                            toasts.success(crate::t(lang, "profile.saved"), None);
                            navigator().push("/");
                        }
                    },
                    {crate::t(lang, "profile.save")}
                }
            }
        }
    }
}
