use serde::Serialize;

use super::speakers::{build_speakers_html, escape_field};
use crate::db::Backend;
use crate::errors::AppError;
use crate::models::deck::{Deck, DeckRegistry, Placeholders};
use crate::models::event_session::{self, EventSession};
use crate::models::presenter::{self, Presenter};

/// Everything a slide page needs: the session, its deck, and the values to inject.
#[derive(Debug, Clone, Serialize)]
pub struct SlidesPage {
    pub session: EventSession,
    pub deck: Deck,
    pub placeholders: Placeholders,
}

impl SlidesPage {
    pub fn render(&self) -> String {
        self.deck.render(&self.placeholders)
    }
}

/// Placeholder values for a session. Absent fields become empty strings.
pub fn build_placeholders(session: &EventSession, presenters: &[Presenter]) -> Result<Placeholders, AppError> {
    let field = |value: &Option<String>| escape_field(value.as_deref());

    let mut map = Placeholders::new();
    map.insert("speakers".into(), build_speakers_html(presenters)?);
    map.insert("event_name".into(), field(&session.event_name));
    map.insert("company_name".into(), field(&session.company_name));
    map.insert("wifi_ssid".into(), field(&session.wifi_ssid));
    map.insert("wifi_password".into(), field(&session.wifi_password));
    map.insert("api_credit_url".into(), field(&session.api_credit_url));
    map.insert("lab_title".into(), field(&session.lab_title));
    Ok(map)
}

/// Resolve fetched data into a slide page.
///
/// A missing session wins over everything else, including a failed presenter
/// query; a missing deck wins over presenter errors.
pub fn assemble(
    session: Result<Option<EventSession>, sqlx::Error>,
    presenters: Result<Vec<Presenter>, sqlx::Error>,
    decks: &DeckRegistry,
) -> Result<SlidesPage, AppError> {
    let session = session?.ok_or(AppError::SessionNotFound)?;
    let deck = session
        .deck_slug()
        .and_then(|slug| decks.find(slug))
        .cloned()
        .ok_or(AppError::DeckNotFound)?;
    let presenters = presenters?;
    let placeholders = build_placeholders(&session, &presenters)?;
    Ok(SlidesPage { session, deck, placeholders })
}

/// Fetch the session and its presenters concurrently, then resolve the deck.
pub async fn load(backend: &Backend, decks: &DeckRegistry, session_id: &str) -> Result<SlidesPage, AppError> {
    let (session, presenters) = tokio::join!(
        event_session::load_by_id(backend, session_id),
        presenter::load_for_session(backend, session_id),
    );
    assemble(session, presenters, decks)
}
