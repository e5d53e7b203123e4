//! Read-only scheme catalog endpoints.

use crate::types::Scheme;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::debug;

/// List schemes, optionally filtered. `category` / `income` accept `"all"`
/// to mean no filter; `search` matches against name and description.
#[get("/api/schemes")]
pub async fn list_schemes(
    category: Option<String>,
    search: Option<String>,
    income: Option<String>,
) -> Result<Vec<Scheme>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (category, search, income);
        Err(ServerFnError::new("list_schemes is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!(
            "schemes.list: category={:?} search={:?} income={:?}",
            category, search, income
        );
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::list_schemes(
            pool,
            category.as_deref(),
            search.as_deref(),
            income.as_deref(),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// One scheme by id, `None` when it does not exist.
#[get("/api/scheme")]
pub async fn get_scheme(id: i64) -> Result<Option<Scheme>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Err(ServerFnError::new("get_scheme is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!("schemes.get: id={}", id);
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::get_scheme(pool, id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// The ten most recently added schemes.
#[get("/api/schemes/new")]
pub async fn new_schemes() -> Result<Vec<Scheme>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("new_schemes is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::new_schemes(pool, 10)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// Up to ten schemes with the nearest deadlines.
#[get("/api/schemes/deadlines")]
pub async fn deadline_schemes() -> Result<Vec<Scheme>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("deadline_schemes is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::deadline_schemes(pool, 10)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}
