use sqlx::PgPool;

use super::types::EventSession;
use crate::db::Backend;

const SESSION_COLUMNS: &str = "id, event_name, company_name, wifi_ssid, wifi_password, \
                               api_credit_url, lab_title, slide_deck";

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<EventSession>, sqlx::Error> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1"
    );
    sqlx::query_as::<_, EventSession>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<EventSession>, sqlx::Error> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM sessions ORDER BY created_at ASC"
    );
    sqlx::query_as::<_, EventSession>(&sql)
        .fetch_all(pool)
        .await
}

/// Session by id; an unconfigured backend has no sessions.
pub async fn load_by_id(backend: &Backend, id: &str) -> Result<Option<EventSession>, sqlx::Error> {
    match backend.pool() {
        Some(pool) => find_by_id(pool, id).await,
        None => Ok(None),
    }
}

/// Session list for the admin page, defaulting to empty like the presenter list.
pub async fn load_all(backend: &Backend) -> Vec<EventSession> {
    let Some(pool) = backend.pool() else {
        return vec![];
    };
    match find_all(pool).await {
        Ok(sessions) => sessions,
        Err(e) => {
            log::warn!("Session query failed, showing empty list: {e}");
            vec![]
        }
    }
}
