//! Eligibility and recommendation endpoints. The rule logic itself lives in
//! [`crate::rules`]; these functions only fetch rows and delegate.

use crate::types::{EligibilityResult, Scheme, UserProfile};
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::debug;

/// Evaluate the profile against one scheme's rules.
#[post("/api/eligibility/check")]
pub async fn check_eligibility(
    scheme_id: i64,
    profile: UserProfile,
) -> Result<EligibilityResult, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (scheme_id, profile);
        Err(ServerFnError::new("check_eligibility is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!("eligibility.check: scheme_id={}", scheme_id);
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        let scheme = crate::store::get_scheme(pool, scheme_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .ok_or_else(|| ServerFnError::new("scheme not found"))?;
        Ok(crate::rules::check_eligibility(&scheme, &profile))
    }
}

/// Up to six schemes ranked by relevance, drawn from the profile's category
/// when one is set.
#[post("/api/recommendations")]
pub async fn recommend_schemes(profile: UserProfile) -> Result<Vec<Scheme>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = profile;
        Err(ServerFnError::new("recommend_schemes is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!(
            "eligibility.recommend: category={:?} age={}",
            profile.category, profile.age
        );
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::recommended_schemes(pool, &profile)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}
