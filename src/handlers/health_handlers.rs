use actix_web::{web, HttpResponse};

use crate::db::Backend;
use crate::models::deck::DeckRegistry;

pub async fn health(backend: web::Data<Backend>, decks: web::Data<DeckRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "database": backend.is_configured(),
        "decks": decks.len(),
    }))
}
