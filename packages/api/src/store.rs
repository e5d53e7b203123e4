//! Data access over the SQLite pool. Server-only.
//!
//! Server functions own the HTTP surface; everything that touches SQL lives
//! here so it can run against an in-memory database in tests.

use crate::types::{Gender, IncomeRange, Reminder, Scheme, SchemeCategory, UserProfile};
use anyhow::{anyhow, Context, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, QueryBuilder, Row, Sqlite};

fn scheme_from_row(row: &SqliteRow) -> Result<Scheme> {
    let category: String = row.try_get("category")?;
    let gender: String = row.try_get("gender")?;
    let income_range: String = row.try_get("income_range")?;

    Ok(Scheme {
        id: row.try_get("id")?,
        category: SchemeCategory::from_db(&category)
            .ok_or_else(|| anyhow!("unknown scheme category {category:?}"))?,
        name: row.try_get("name")?,
        name_hi: row.try_get("name_hi")?,
        name_mr: row.try_get("name_mr")?,
        description: row.try_get("description")?,
        description_hi: row.try_get("description_hi")?,
        description_mr: row.try_get("description_mr")?,
        benefits: row.try_get("benefits")?,
        benefits_hi: row.try_get("benefits_hi")?,
        benefits_mr: row.try_get("benefits_mr")?,
        eligibility: row.try_get("eligibility")?,
        eligibility_hi: row.try_get("eligibility_hi")?,
        eligibility_mr: row.try_get("eligibility_mr")?,
        documents: row.try_get("documents")?,
        documents_hi: row.try_get("documents_hi")?,
        documents_mr: row.try_get("documents_mr")?,
        how_to_apply: row.try_get("how_to_apply")?,
        how_to_apply_hi: row.try_get("how_to_apply_hi")?,
        how_to_apply_mr: row.try_get("how_to_apply_mr")?,
        official_link: row.try_get("official_link")?,
        deadline: row.try_get("deadline")?,
        min_age: row.try_get("min_age")?,
        max_age: row.try_get("max_age")?,
        gender: Gender::from_db(&gender)
            .ok_or_else(|| anyhow!("unknown scheme gender {gender:?}"))?,
        income_range: IncomeRange::from_db(&income_range)
            .ok_or_else(|| anyhow!("unknown income range {income_range:?}"))?,
    })
}

fn collect_schemes(rows: Vec<SqliteRow>) -> Result<Vec<Scheme>> {
    rows.iter().map(scheme_from_row).collect()
}

/// Catalog listing with optional filters. `category` / `income` values of
/// `"all"` (any case) mean no filter; `search` matches name or description.
pub async fn list_schemes(
    pool: &Pool<Sqlite>,
    category: Option<&str>,
    search: Option<&str>,
    income: Option<&str>,
) -> Result<Vec<Scheme>> {
    let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM schemes WHERE 1=1");

    if let Some(category) = category.filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all")) {
        query.push(" AND category = ").push_bind(category.to_string());
    }

    if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
        let pattern = format!("%{search}%");
        query
            .push(" AND (name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR description LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(income) = income.filter(|i| !i.is_empty() && !i.eq_ignore_ascii_case("all")) {
        // Schemes open to every income band always match.
        query
            .push(" AND (income_range = ")
            .push_bind(income.to_string())
            .push(" OR income_range = 'All')");
    }

    query.push(" ORDER BY id");

    let rows = query
        .build()
        .fetch_all(pool)
        .await
        .context("listing schemes")?;
    collect_schemes(rows)
}

/// Schemes ranked for a profile. When the profile names a category only that
/// category competes; without one the whole catalog does.
pub async fn recommended_schemes(
    pool: &Pool<Sqlite>,
    profile: &UserProfile,
) -> Result<Vec<Scheme>> {
    let category = profile.category.map(|c| c.as_db());
    let candidates = list_schemes(pool, category, None, None).await?;
    Ok(crate::rules::recommend(candidates, profile))
}

/// Most recently added schemes, newest first.
pub async fn new_schemes(pool: &Pool<Sqlite>, limit: i64) -> Result<Vec<Scheme>> {
    let rows = sqlx::query("SELECT * FROM schemes ORDER BY created_at DESC, id DESC LIMIT ?")
        .bind(limit)
        .fetch_all(pool)
        .await
        .context("listing new schemes")?;
    collect_schemes(rows)
}

/// Schemes with a deadline, soonest first.
pub async fn deadline_schemes(pool: &Pool<Sqlite>, limit: i64) -> Result<Vec<Scheme>> {
    let rows = sqlx::query(
        "SELECT * FROM schemes WHERE deadline IS NOT NULL AND deadline != '' \
         ORDER BY deadline ASC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .context("listing deadline schemes")?;
    collect_schemes(rows)
}

pub async fn get_scheme(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Scheme>> {
    let row = sqlx::query("SELECT * FROM schemes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("fetching scheme")?;
    row.as_ref().map(scheme_from_row).transpose()
}

/// Save a scheme for a session. Returns false when it was already saved.
pub async fn save_scheme(pool: &Pool<Sqlite>, session: &str, scheme_id: i64) -> Result<bool> {
    if get_scheme(pool, scheme_id).await?.is_none() {
        return Err(anyhow!("scheme {scheme_id} not found"));
    }
    let result = sqlx::query(
        "INSERT OR IGNORE INTO saved_schemes (user_session, scheme_id) VALUES (?, ?)",
    )
    .bind(session)
    .bind(scheme_id)
    .execute(pool)
    .await
    .context("saving scheme")?;
    Ok(result.rows_affected() > 0)
}

/// Remove a saved scheme. Returns false when it was not saved.
pub async fn unsave_scheme(pool: &Pool<Sqlite>, session: &str, scheme_id: i64) -> Result<bool> {
    let result =
        sqlx::query("DELETE FROM saved_schemes WHERE user_session = ? AND scheme_id = ?")
            .bind(session)
            .bind(scheme_id)
            .execute(pool)
            .await
            .context("removing saved scheme")?;
    Ok(result.rows_affected() > 0)
}

/// All schemes saved by a session, most recently saved first.
pub async fn saved_schemes(pool: &Pool<Sqlite>, session: &str) -> Result<Vec<Scheme>> {
    let rows = sqlx::query(
        "SELECT s.* FROM schemes s \
         JOIN saved_schemes sv ON sv.scheme_id = s.id \
         WHERE sv.user_session = ? \
         ORDER BY sv.saved_at DESC, sv.id DESC",
    )
    .bind(session)
    .fetch_all(pool)
    .await
    .context("listing saved schemes")?;
    collect_schemes(rows)
}

pub async fn add_reminder(
    pool: &Pool<Sqlite>,
    session: &str,
    scheme_id: i64,
    reminder_date: &str,
) -> Result<()> {
    if get_scheme(pool, scheme_id).await?.is_none() {
        return Err(anyhow!("scheme {scheme_id} not found"));
    }
    sqlx::query("INSERT INTO reminders (user_session, scheme_id, reminder_date) VALUES (?, ?, ?)")
        .bind(session)
        .bind(scheme_id)
        .bind(reminder_date)
        .execute(pool)
        .await
        .context("adding reminder")?;
    Ok(())
}

/// Reminders for a session joined with their schemes, earliest date first.
pub async fn reminders(pool: &Pool<Sqlite>, session: &str) -> Result<Vec<Reminder>> {
    let rows = sqlx::query(
        "SELECT r.scheme_id, s.name, s.deadline, r.reminder_date \
         FROM reminders r \
         JOIN schemes s ON s.id = r.scheme_id \
         WHERE r.user_session = ? \
         ORDER BY r.reminder_date ASC, r.id ASC",
    )
    .bind(session)
    .fetch_all(pool)
    .await
    .context("listing reminders")?;

    rows.iter()
        .map(|row| {
            Ok(Reminder {
                scheme_id: row.try_get("scheme_id")?,
                name: row.try_get("name")?,
                deadline: row.try_get("deadline")?,
                reminder_date: row.try_get("reminder_date")?,
            })
        })
        .collect()
}
