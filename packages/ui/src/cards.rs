use api::types::{Scheme, SchemeCategory};
use dioxus::prelude::*;

/// Emoji shown on category tiles and scheme cards.
pub fn category_icon(category: SchemeCategory) -> &'static str {
    match category {
        SchemeCategory::Student => "🎓",
        SchemeCategory::Farmer => "🌾",
        SchemeCategory::Women => "👩",
        SchemeCategory::Housing => "🏠",
        SchemeCategory::Health => "🏥",
        SchemeCategory::Employment => "💼",
        SchemeCategory::Other => "📋",
    }
}

/// Translation key for a category label.
pub fn category_key(category: SchemeCategory) -> &'static str {
    match category {
        SchemeCategory::Student => "category.student",
        SchemeCategory::Farmer => "category.farmer",
        SchemeCategory::Women => "category.women",
        SchemeCategory::Housing => "category.housing",
        SchemeCategory::Health => "category.health",
        SchemeCategory::Employment => "category.employment",
        SchemeCategory::Other => "category.other",
    }
}

pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

#[component]
pub fn SchemeCard(scheme: Scheme) -> Element {
    let lang = crate::use_lang()();
    let code = lang.code();
    let name = scheme.name(code).to_string();
    let description = truncate(scheme.description(code), 120);
    let deadline = scheme.deadline_display();

    rsx! {
        a { class: "card scheme_card", href: "/schemes/{scheme.id}",
            div { class: "card_top",
                span { class: "scheme_icon", {category_icon(scheme.category)} }
                h3 { "{name}" }
            }
            p { class: "summary", "{description}" }
            div { class: "card_meta",
                span { class: "tag", {crate::t(lang, category_key(scheme.category))} }
                if let Some(deadline) = deadline {
                    span { class: "deadline", {format!("{}: {deadline}", crate::t(lang, "card.deadline"))} }
                }
            }
            span { class: "btn small", {crate::t(lang, "card.view_details")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_on_char_boundary() {
        // Devanagari text must not be split mid-codepoint.
        let text = "किसानों के लिए फसल बीमा योजना";
        let cut = truncate(text, 10);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 11);
    }

    #[test]
    fn every_category_has_icon_and_key() {
        for category in SchemeCategory::ALL {
            assert!(!category_icon(category).is_empty());
            assert!(category_key(category).starts_with("category."));
        }
    }
}
