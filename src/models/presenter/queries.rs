use sqlx::PgPool;

use super::types::Presenter;
use crate::db::Backend;

const PRESENTER_COLUMNS: &str =
    "p.id, p.full_name, p.title, p.organization, p.photo_url, p.created_at::text AS created_at";

/// All presenters, oldest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Presenter>, sqlx::Error> {
    let sql = format!(
        "SELECT {PRESENTER_COLUMNS} FROM presenters p ORDER BY p.created_at ASC"
    );
    sqlx::query_as::<_, Presenter>(&sql)
        .fetch_all(pool)
        .await
}

/// Presenters linked to a session, in their configured order.
pub async fn find_for_session(pool: &PgPool, session_id: &str) -> Result<Vec<Presenter>, sqlx::Error> {
    let sql = format!(
        "SELECT {PRESENTER_COLUMNS} \
         FROM presenters p \
         JOIN session_presenters sp ON sp.presenter_id = p.id \
         WHERE sp.session_id = $1 \
         ORDER BY sp.position ASC, p.created_at ASC"
    );
    sqlx::query_as::<_, Presenter>(&sql)
        .bind(session_id)
        .fetch_all(pool)
        .await
}

/// Presenter list for the admin page. Without a backend, or when the query fails,
/// the page simply shows no presenters.
pub async fn load_all(backend: &Backend) -> Vec<Presenter> {
    let Some(pool) = backend.pool() else {
        return vec![];
    };
    match find_all(pool).await {
        Ok(presenters) => presenters,
        Err(e) => {
            log::warn!("Presenter query failed, showing empty list: {e}");
            vec![]
        }
    }
}

/// Presenters for a session; an unconfigured backend yields none.
pub async fn load_for_session(backend: &Backend, session_id: &str) -> Result<Vec<Presenter>, sqlx::Error> {
    match backend.pool() {
        Some(pool) => find_for_session(pool, session_id).await,
        None => Ok(vec![]),
    }
}
