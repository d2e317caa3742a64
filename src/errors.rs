use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use std::fmt;

use crate::templates_structs::NotFoundTemplate;

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Template(askama::Error),
    SessionNotFound,
    DeckNotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::SessionNotFound => write!(f, "Session not found"),
            AppError::DeckNotFound => write!(f, "No slide deck configured for this session"),
        }
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::SessionNotFound | AppError::DeckNotFound)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        if !self.is_not_found() {
            log::error!("{self}");
            return HttpResponse::InternalServerError().body("Internal Server Error");
        }
        let page = NotFoundTemplate { message: self.to_string() };
        match page.render() {
            Ok(html) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html),
            Err(e) => {
                log::error!("Failed to render 404 page: {e}");
                HttpResponse::NotFound().body(self.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama template into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let html = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
