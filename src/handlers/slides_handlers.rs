use actix_web::{web, HttpResponse};

use crate::db::Backend;
use crate::errors::AppError;
use crate::models::deck::DeckRegistry;
use crate::models::slides;

/// Render the session's deck with its placeholders filled in.
pub async fn show(
    backend: web::Data<Backend>,
    decks: web::Data<DeckRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let page = slides::load(&backend, &decks, &session_id).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.render()))
}

/// The loaded session, deck descriptor and placeholder map as JSON.
pub async fn show_json(
    backend: web::Data<Backend>,
    decks: web::Data<DeckRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    match slides::load(&backend, &decks, &session_id).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string(),
        }))),
        Err(e) => Err(e),
    }
}
