use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Database handle shared with handlers. `None` when no `DATABASE_URL` is configured;
/// loaders treat that as "no data" rather than an error.
#[derive(Clone, Default)]
pub struct Backend {
    pool: Option<PgPool>,
}

impl Backend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    pub fn unconfigured() -> Self {
        Self { pool: None }
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }
}

/// Build the backend from config. Connections are opened lazily on first query.
pub fn init_backend(config: &Config) -> Result<Backend, sqlx::Error> {
    let Some(url) = config.database_url.as_deref() else {
        log::warn!("DATABASE_URL not set, running without a database backend");
        return Ok(Backend::unconfigured());
    };
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy(url)?;
    log::info!("Database pool configured (max {} connections)", config.db_max_connections);
    Ok(Backend::new(pool))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}
