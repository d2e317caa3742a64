//! Shared test infrastructure.
//!
//! # Setup
//! - `app_data()` - Data handles for building the app with `test::init_service`
//! - `test_decks()` - Small in-memory deck registry
//! - `migrated_backend()` - Backend over a `#[sqlx::test]` pool with the schema applied

#![allow(dead_code)]

use actix_web::web;
use sqlx::PgPool;

use podium::config::Config;
use podium::db::{self, Backend};
use podium::models::deck::{Deck, DeckRegistry};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_DECK_SLUG: &str = "intro-lab";
pub const TEST_DECK_TEMPLATE: &str =
    "<title>{{ event_name }}</title><h1>{{lab_title}}</h1>{{speakers}}<p>{{ wifi_ssid }} / {{ wifi_password }}</p>";

// ============================================================================
// APP SETUP
// ============================================================================

pub fn test_decks() -> DeckRegistry {
    DeckRegistry::from_decks(vec![Deck {
        slug: TEST_DECK_SLUG.to_string(),
        title: "Intro Lab".to_string(),
        lab: Some("lab-01".to_string()),
        template: TEST_DECK_TEMPLATE.to_string(),
    }])
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "APP_NAME" => Some("TestConf".to_string()),
        _ => None,
    })
}

/// Data handles in the order the app registers them.
pub fn app_data(backend: Backend) -> (web::Data<Backend>, web::Data<DeckRegistry>, web::Data<Config>) {
    (
        web::Data::new(backend),
        web::Data::new(test_decks()),
        web::Data::new(test_config()),
    )
}

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Apply the schema to a per-test pool from `#[sqlx::test]` and wrap it.
pub async fn migrated_backend(pool: PgPool) -> Backend {
    db::run_migrations(&pool).await.expect("Failed to run migrations");
    Backend::new(pool)
}

pub async fn insert_presenter(
    backend: &Backend,
    full_name: &str,
    title: Option<&str>,
    photo_url: Option<&str>,
    created_at: &str,
) -> String {
    let pool = backend.pool().expect("configured backend");
    sqlx::query_scalar(
        "INSERT INTO presenters (full_name, title, photo_url, created_at) \
         VALUES ($1, $2, $3, $4::timestamptz) RETURNING id",
    )
    .bind(full_name)
    .bind(title)
    .bind(photo_url)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("insert presenter")
}

pub async fn insert_session(backend: &Backend, event_name: Option<&str>, slide_deck: Option<&str>) -> String {
    let pool = backend.pool().expect("configured backend");
    sqlx::query_scalar(
        "INSERT INTO sessions (event_name, slide_deck) VALUES ($1, $2) RETURNING id",
    )
    .bind(event_name)
    .bind(slide_deck)
    .fetch_one(pool)
    .await
    .expect("insert session")
}

pub async fn link_presenter(backend: &Backend, session_id: &str, presenter_id: &str, position: i32) {
    let pool = backend.pool().expect("configured backend");
    sqlx::query("INSERT INTO session_presenters (session_id, presenter_id, position) VALUES ($1, $2, $3)")
        .bind(session_id)
        .bind(presenter_id)
        .bind(position)
        .execute(pool)
        .await
        .expect("link presenter");
}
