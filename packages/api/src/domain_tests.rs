#![cfg(all(test, feature = "server"))]

use crate::store;
use crate::types::{Gender, IncomeRange, SchemeCategory, UserProfile};

#[tokio::test]
async fn seeding_populates_catalog() {
    let pool = crate::test_support::seeded_pool().await;
    let all = store::list_schemes(&pool, None, None, None).await.unwrap();
    assert_eq!(all.len(), 14);

    // Every dashboard category has at least one scheme.
    for category in SchemeCategory::ALL {
        assert!(
            all.iter().any(|s| s.category == category),
            "no seeded scheme for {category:?}",
        );
    }
}

#[tokio::test]
async fn category_filter_and_all_sentinel() {
    let pool = crate::test_support::seeded_pool().await;

    let farmers = store::list_schemes(&pool, Some("farmer"), None, None)
        .await
        .unwrap();
    assert!(!farmers.is_empty());
    assert!(farmers.iter().all(|s| s.category == SchemeCategory::Farmer));

    let everything = store::list_schemes(&pool, Some("all"), None, None)
        .await
        .unwrap();
    assert_eq!(everything.len(), 14);
}

#[tokio::test]
async fn search_matches_name_and_description() {
    let pool = crate::test_support::seeded_pool().await;

    // SQLite LIKE is case-insensitive for ASCII.
    let kisan = store::list_schemes(&pool, None, Some("KISAN"), None)
        .await
        .unwrap();
    assert!(kisan.iter().any(|s| s.name.contains("PM Kisan")));

    // "insurance" only appears in description text.
    let insurance = store::list_schemes(&pool, None, Some("insurance"), None)
        .await
        .unwrap();
    assert!(!insurance.is_empty());

    let nothing = store::list_schemes(&pool, None, Some("zzzz"), None)
        .await
        .unwrap();
    assert!(nothing.is_empty());
}

#[tokio::test]
async fn income_filter_keeps_open_schemes() {
    let pool = crate::test_support::seeded_pool().await;

    let below8 = store::list_schemes(&pool, None, None, Some("Below 8 Lakh"))
        .await
        .unwrap();
    // Matching band plus every scheme open to all incomes.
    assert!(below8
        .iter()
        .any(|s| s.name == "National Scholarship Portal"));
    assert!(below8.iter().any(|s| s.name.contains("PM Kisan")));
    // Other capped bands are excluded.
    assert!(!below8.iter().any(|s| s.name == "PM YASASVI Scholarship"));
}

#[tokio::test]
async fn recommendations_stay_in_profile_category() {
    let pool = crate::test_support::seeded_pool().await;
    let profile = UserProfile {
        name: "Asha".into(),
        category: Some(SchemeCategory::Student),
        age: 25,
        income_range: IncomeRange::All,
        gender: Gender::Female,
    };

    // Student has only two seeded schemes; the rail must not pad itself
    // with age-compatible schemes from other categories.
    let ranked = store::recommended_schemes(&pool, &profile).await.unwrap();
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|s| s.category == SchemeCategory::Student));

    // Without a category preference the whole catalog competes.
    let open_profile = UserProfile {
        category: None,
        ..profile
    };
    let ranked = store::recommended_schemes(&pool, &open_profile)
        .await
        .unwrap();
    assert_eq!(ranked.len(), 6);
}

#[tokio::test]
async fn get_scheme_by_id() {
    let pool = crate::test_support::seeded_pool().await;

    let first = store::get_scheme(&pool, 1).await.unwrap();
    assert!(first.is_some());
    assert!(store::get_scheme(&pool, 9999).await.unwrap().is_none());
}

#[tokio::test]
async fn new_and_deadline_listings() {
    let pool = crate::test_support::seeded_pool().await;

    let newest = store::new_schemes(&pool, 10).await.unwrap();
    assert_eq!(newest.len(), 10);
    // Later inserts come first.
    assert!(newest.first().unwrap().id > newest.last().unwrap().id);

    let deadlines = store::deadline_schemes(&pool, 10).await.unwrap();
    assert_eq!(deadlines.len(), 10);
    let dates: Vec<_> = deadlines
        .iter()
        .map(|s| s.deadline.clone().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(dates.first().map(String::as_str), Some("2024-10-31"));
}

#[tokio::test]
async fn save_is_idempotent_per_session() {
    let pool = crate::test_support::seeded_pool().await;
    let session = "user_test1";

    assert!(store::save_scheme(&pool, session, 1).await.unwrap());
    // Second save of the same scheme is a no-op.
    assert!(!store::save_scheme(&pool, session, 1).await.unwrap());
    assert!(store::save_scheme(&pool, session, 2).await.unwrap());

    let saved = store::saved_schemes(&pool, session).await.unwrap();
    assert_eq!(saved.len(), 2);

    // Another session sees nothing.
    let other = store::saved_schemes(&pool, "user_test2").await.unwrap();
    assert!(other.is_empty());
}

#[tokio::test]
async fn unsave_removes_only_once() {
    let pool = crate::test_support::seeded_pool().await;
    let session = "user_test1";

    store::save_scheme(&pool, session, 3).await.unwrap();
    assert!(store::unsave_scheme(&pool, session, 3).await.unwrap());
    assert!(!store::unsave_scheme(&pool, session, 3).await.unwrap());
    assert!(store::saved_schemes(&pool, session).await.unwrap().is_empty());
}

#[tokio::test]
async fn save_unknown_scheme_fails() {
    let pool = crate::test_support::seeded_pool().await;
    assert!(store::save_scheme(&pool, "user_test1", 9999).await.is_err());
    assert!(store::add_reminder(&pool, "user_test1", 9999, "2025-01-01")
        .await
        .is_err());
}

#[tokio::test]
async fn reminders_sort_by_date_and_join_names() {
    let pool = crate::test_support::seeded_pool().await;
    let session = "user_test1";

    store::add_reminder(&pool, session, 2, "2025-06-01")
        .await
        .unwrap();
    store::add_reminder(&pool, session, 1, "2025-01-15")
        .await
        .unwrap();

    let reminders = store::reminders(&pool, session).await.unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].reminder_date, "2025-01-15");
    assert_eq!(reminders[0].scheme_id, 1);
    assert!(!reminders[0].name.is_empty());
    assert!(reminders[0].deadline.is_some());

    assert!(store::reminders(&pool, "user_test2")
        .await
        .unwrap()
        .is_empty());
}
