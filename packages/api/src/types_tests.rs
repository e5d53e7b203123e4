#![cfg(test)]

use crate::types::{
    format_deadline, Gender, IncomeRange, Scheme, SchemeCategory, UserProfile,
};

fn scheme() -> Scheme {
    Scheme {
        id: 1,
        category: SchemeCategory::Farmer,
        name: "PM Kisan".into(),
        name_hi: Some("पीएम किसान".into()),
        name_mr: None,
        description: "Income support".into(),
        description_hi: Some("  ".into()),
        description_mr: Some("उत्पन्न मदत".into()),
        benefits: String::new(),
        benefits_hi: None,
        benefits_mr: None,
        eligibility: String::new(),
        eligibility_hi: None,
        eligibility_mr: None,
        documents: String::new(),
        documents_hi: None,
        documents_mr: None,
        how_to_apply: String::new(),
        how_to_apply_hi: None,
        how_to_apply_mr: None,
        official_link: String::new(),
        deadline: Some("2024-12-31".into()),
        min_age: Some(18),
        max_age: Some(80),
        gender: Gender::All,
        income_range: IncomeRange::All,
    }
}

#[test]
fn category_db_round_trip() {
    for category in SchemeCategory::ALL {
        assert_eq!(SchemeCategory::from_db(category.as_db()), Some(category));
    }
    assert_eq!(SchemeCategory::from_db("pensions"), None);
}

#[test]
fn income_db_round_trip() {
    for income in IncomeRange::ALL {
        assert_eq!(IncomeRange::from_db(income.as_db()), Some(income));
    }
}

#[test]
fn income_serde_uses_display_strings() {
    let json = serde_json::to_value(IncomeRange::Below2HalfLakh).unwrap();
    assert_eq!(json, serde_json::json!("Below 2.5 Lakh"));

    let parsed: IncomeRange = serde_json::from_value(serde_json::json!("Below 18 Lakh")).unwrap();
    assert_eq!(parsed, IncomeRange::Below18Lakh);
}

#[test]
fn profile_fields_default_when_missing() {
    // Stored localStorage profiles from older versions may omit fields.
    let profile: UserProfile = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.category, None);
    assert_eq!(profile.age, 0);
    assert_eq!(profile.gender, Gender::All);
    assert_eq!(profile.income_range, IncomeRange::All);
}

#[test]
fn localized_text_falls_back_to_english() {
    let s = scheme();
    assert_eq!(s.name("hi"), "पीएम किसान");
    // No Marathi name recorded
    assert_eq!(s.name("mr"), "PM Kisan");
    // Whitespace-only translations count as absent
    assert_eq!(s.description("hi"), "Income support");
    assert_eq!(s.description("mr"), "उत्पन्न मदत");
    assert_eq!(s.name("en"), "PM Kisan");
}

#[test]
fn deadline_formats_for_display() {
    assert_eq!(format_deadline("2024-12-31").as_deref(), Some("31 Dec 2024"));
    assert_eq!(format_deadline("2025-03-05").as_deref(), Some("5 Mar 2025"));
    assert_eq!(format_deadline("soon"), None);
    assert_eq!(scheme().deadline_display().as_deref(), Some("31 Dec 2024"));
}
