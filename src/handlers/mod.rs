pub mod health_handlers;
pub mod presenter_handlers;
pub mod session_handlers;
pub mod slides_handlers;

use actix_web::{HttpResponse, web};

use crate::errors::AppError;

/// Register all application routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/admin/presenters"))
                .finish()
        }))
        .route("/health", web::get().to(health_handlers::health))
        // Admin
        .route("/admin/presenters", web::get().to(presenter_handlers::list))
        .route("/admin/sessions", web::get().to(session_handlers::list))
        // Slides
        .route("/session/{id}/slides", web::get().to(slides_handlers::show))
        .route("/api/sessions/{id}/slides", web::get().to(slides_handlers::show_json));
}

/// Fallback for unknown routes (register as `default_service`).
pub async fn not_found() -> HttpResponse {
    let page = crate::templates_structs::NotFoundTemplate { message: "Page not found".to_string() };
    match askama::Template::render(&page) {
        Ok(html) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("{}", AppError::Template(e));
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
