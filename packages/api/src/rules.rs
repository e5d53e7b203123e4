//! Rule evaluation for eligibility checks and profile-based recommendations.
//!
//! These are pure functions over [`Scheme`] and [`UserProfile`] so they can
//! be tested without a database; the server functions fetch rows and call in
//! here.

use crate::types::{EligibilityResult, Gender, IncomeRange, Scheme, UserProfile};

/// Evaluate a profile against one scheme's rule fields.
///
/// Every failed rule contributes a human-readable reason; `eligible` is true
/// only when no rule failed. A `min_age`/`max_age` of zero means the bound is
/// not set.
pub fn check_eligibility(scheme: &Scheme, profile: &UserProfile) -> EligibilityResult {
    let mut reasons = Vec::new();
    let age = i64::from(profile.age);

    if let Some(min_age) = scheme.min_age.filter(|&m| m > 0) {
        if age < min_age {
            reasons.push(format!("Minimum age required: {min_age}"));
        }
    }

    if let Some(max_age) = scheme.max_age.filter(|&m| m > 0) {
        if age > max_age {
            reasons.push(format!("Maximum age allowed: {max_age}"));
        }
    }

    if scheme.gender != Gender::All && profile.gender != scheme.gender {
        reasons.push(format!(
            "This scheme is for {} only",
            scheme.gender.as_db()
        ));
    }

    if scheme.income_range != IncomeRange::All {
        // The scheme caps income; a user band above the cap (or unbounded)
        // does not qualify.
        let cap = scheme.income_range.limit_inr().unwrap_or(0);
        let exceeds = match profile.income_range.limit_inr() {
            None => true,
            Some(user_limit) => user_limit > cap,
        };
        if exceeds {
            reasons.push(format!("Income should be {}", scheme.income_range.as_db()));
        }
    }

    EligibilityResult {
        eligible: reasons.is_empty(),
        reasons,
    }
}

/// Relevance score of a scheme for a profile. Zero means "do not recommend".
pub fn recommendation_score(scheme: &Scheme, profile: &UserProfile) -> i64 {
    let mut score = 0;

    if profile.category == Some(scheme.category) {
        score += 10;
    }

    let age = i64::from(profile.age);
    if let Some(min_age) = scheme.min_age.filter(|&m| m > 0) {
        if age >= min_age && scheme.max_age.filter(|&m| m > 0).is_none_or(|m| age <= m) {
            score += 5;
        }
    }

    if scheme.income_range == IncomeRange::All || profile.income_range == IncomeRange::Below3Lakh {
        score += 3;
    }

    score
}

/// Rank schemes for a profile: drop zero scores, highest score first
/// (stable), keep the top six.
pub fn recommend(mut schemes: Vec<Scheme>, profile: &UserProfile) -> Vec<Scheme> {
    schemes.retain(|s| recommendation_score(s, profile) > 0);
    schemes.sort_by_key(|s| -recommendation_score(s, profile));
    schemes.truncate(6);
    schemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SchemeCategory;

    fn scheme(min_age: Option<i64>, max_age: Option<i64>, gender: Gender, income: IncomeRange) -> Scheme {
        Scheme {
            id: 1,
            category: SchemeCategory::Student,
            name: "Test Scholarship".into(),
            name_hi: None,
            name_mr: None,
            description: String::new(),
            description_hi: None,
            description_mr: None,
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
            deadline: None,
            min_age,
            max_age,
            gender,
            income_range: income,
        }
    }

    fn profile(age: u32, gender: Gender, income: IncomeRange) -> UserProfile {
        UserProfile {
            name: "Asha".into(),
            category: Some(SchemeCategory::Student),
            age,
            income_range: income,
            gender,
        }
    }

    #[test]
    fn all_rules_pass() {
        let s = scheme(Some(18), Some(60), Gender::All, IncomeRange::Below8Lakh);
        let p = profile(25, Gender::Female, IncomeRange::Below3Lakh);
        let result = check_eligibility(&s, &p);
        assert!(result.eligible);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn too_young_and_too_old() {
        let s = scheme(Some(18), Some(60), Gender::All, IncomeRange::All);
        let young = check_eligibility(&s, &profile(12, Gender::All, IncomeRange::All));
        assert!(!young.eligible);
        assert_eq!(young.reasons, vec!["Minimum age required: 18"]);

        let old = check_eligibility(&s, &profile(70, Gender::All, IncomeRange::All));
        assert!(!old.eligible);
        assert_eq!(old.reasons, vec!["Maximum age allowed: 60"]);
    }

    #[test]
    fn zero_age_bound_means_unset() {
        let s = scheme(Some(0), Some(0), Gender::All, IncomeRange::All);
        let result = check_eligibility(&s, &profile(99, Gender::All, IncomeRange::All));
        assert!(result.eligible);
    }

    #[test]
    fn gender_restriction() {
        let s = scheme(None, None, Gender::Female, IncomeRange::All);
        let result = check_eligibility(&s, &profile(30, Gender::Male, IncomeRange::All));
        assert!(!result.eligible);
        assert_eq!(result.reasons, vec!["This scheme is for Female only"]);
    }

    #[test]
    fn income_above_cap_fails() {
        let s = scheme(None, None, Gender::All, IncomeRange::Below3Lakh);
        // Band above the cap
        let result = check_eligibility(&s, &profile(30, Gender::All, IncomeRange::Below8Lakh));
        assert!(!result.eligible);
        assert_eq!(result.reasons, vec!["Income should be Below 3 Lakh"]);

        // Unbounded income counts as above every cap
        let result = check_eligibility(&s, &profile(30, Gender::All, IncomeRange::All));
        assert!(!result.eligible);

        // Within the cap
        let result =
            check_eligibility(&s, &profile(30, Gender::All, IncomeRange::Below2HalfLakh));
        assert!(result.eligible);
    }

    #[test]
    fn multiple_failures_collect_all_reasons() {
        let s = scheme(Some(18), None, Gender::Female, IncomeRange::Below3Lakh);
        let result = check_eligibility(&s, &profile(10, Gender::Male, IncomeRange::All));
        assert!(!result.eligible);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn score_prefers_category_match() {
        let p = profile(25, Gender::All, IncomeRange::All);
        let matching = scheme(Some(18), Some(60), Gender::All, IncomeRange::All);
        // category Student matches the profile: 10 + age 5 + income-all 3
        assert_eq!(recommendation_score(&matching, &p), 18);

        let mut off_category = matching.clone();
        off_category.category = SchemeCategory::Farmer;
        assert_eq!(recommendation_score(&off_category, &p), 8);
    }

    #[test]
    fn recommend_filters_sorts_and_caps() {
        // The candidate pool arrives already restricted to the profile's
        // category, so ranking only weighs age and income fit.
        let p = profile(25, Gender::All, IncomeRange::All);
        let mut pool = Vec::new();
        for i in 0..10 {
            let mut s = scheme(Some(18), Some(60), Gender::All, IncomeRange::All);
            s.id = i;
            if i % 2 == 0 {
                // No age bounds, so no age bonus: score 13 instead of 18.
                s.min_age = None;
                s.max_age = None;
            }
            pool.push(s);
        }
        // A scheme that scores zero drops out entirely.
        let mut zero = scheme(Some(0), None, Gender::All, IncomeRange::Below3Lakh);
        zero.id = 100;
        zero.category = SchemeCategory::Farmer;
        pool.push(zero);

        let ranked = recommend(pool, &p);
        assert_eq!(ranked.len(), 6);
        // Age-matching schemes (odd ids) outrank the unbounded ones, and the
        // sort is stable within a score.
        let ids: Vec<i64> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 7, 9, 0]);
        assert!(ranked.iter().all(|s| s.id != 100));
    }
}
