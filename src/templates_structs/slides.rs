use askama::Template;

use crate::models::presenter::Presenter;

/// Speaker cards injected into decks as the `speakers` placeholder.
#[derive(Template)]
#[template(path = "slides/speakers.html")]
pub struct SpeakerCardsTemplate<'a> {
    pub presenters: &'a [Presenter],
}
