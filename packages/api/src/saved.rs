//! Saved-scheme endpoints, keyed by the client-generated session token.

use crate::types::Scheme;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, info};

/// Save a scheme for this session. Returns false when it was already saved.
#[post("/api/saved/save")]
pub async fn save_scheme(session_id: String, scheme_id: i64) -> Result<bool, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (session_id, scheme_id);
        Err(ServerFnError::new("save_scheme is server-only"))
    }

    #[cfg(feature = "server")]
    {
        info!("saved.save: scheme_id={}", scheme_id);
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::save_scheme(pool, &session_id, scheme_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// Remove a saved scheme. Returns false when it was not saved.
#[post("/api/saved/remove")]
pub async fn unsave_scheme(session_id: String, scheme_id: i64) -> Result<bool, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (session_id, scheme_id);
        Err(ServerFnError::new("unsave_scheme is server-only"))
    }

    #[cfg(feature = "server")]
    {
        info!("saved.remove: scheme_id={}", scheme_id);
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::unsave_scheme(pool, &session_id, scheme_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// All schemes this session has saved, most recent first.
#[get("/api/saved")]
pub async fn list_saved_schemes(session_id: String) -> Result<Vec<Scheme>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = session_id;
        Err(ServerFnError::new("list_saved_schemes is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!("saved.list");
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::saved_schemes(pool, &session_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}
