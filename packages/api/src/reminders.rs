//! Deadline reminder endpoints, keyed by the client-generated session token.

use crate::types::Reminder;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, info};

/// Record a reminder date for a scheme.
#[post("/api/reminders/add")]
pub async fn add_reminder(
    session_id: String,
    scheme_id: i64,
    reminder_date: String,
) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (session_id, scheme_id, reminder_date);
        Err(ServerFnError::new("add_reminder is server-only"))
    }

    #[cfg(feature = "server")]
    {
        info!(
            "reminders.add: scheme_id={} date={}",
            scheme_id, reminder_date
        );
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::add_reminder(pool, &session_id, scheme_id, &reminder_date)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

/// This session's reminders with scheme names, earliest date first.
#[get("/api/reminders")]
pub async fn list_reminders(session_id: String) -> Result<Vec<Reminder>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = session_id;
        Err(ServerFnError::new("list_reminders is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!("reminders.list");
        let pool = crate::db::pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        crate::store::reminders(pool, &session_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}
