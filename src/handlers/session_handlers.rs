use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::db::Backend;
use crate::errors::{AppError, render};
use crate::models::deck::DeckRegistry;
use crate::models::event_session::{self, SessionListItem};
use crate::templates_structs::{PageContext, SessionListTemplate};

/// Admin list of sessions, flagging deck slugs that don't resolve.
pub async fn list(
    backend: web::Data<Backend>,
    decks: web::Data<DeckRegistry>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let sessions = event_session::load_all(&backend)
        .await
        .into_iter()
        .map(|session| {
            let deck_available = session.deck_slug().is_some_and(|slug| decks.find(slug).is_some());
            SessionListItem { session, deck_available }
        })
        .collect();

    let tmpl = SessionListTemplate {
        ctx: PageContext::new(&config.app_name, "/admin/sessions", backend.is_configured()),
        sessions,
    };
    render(tmpl)
}
