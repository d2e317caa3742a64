use askama::Template;

use crate::models::presenter::Presenter;
use crate::templates_structs::SpeakerCardsTemplate;

/// HTML-escape an optional text field; absent becomes the empty string.
pub fn escape_field(value: Option<&str>) -> String {
    value
        .map(|v| {
            askama::filters::escape(v, askama::filters::Html)
                .map(|safe| safe.to_string())
                .unwrap_or_default()
        })
        .unwrap_or_default()
}

/// Speakers fragment for the `speakers` placeholder. Empty when there are no presenters.
/// Each card carries the photo (or initial avatar), name, then title and organization when set.
pub fn build_speakers_html(presenters: &[Presenter]) -> Result<String, askama::Error> {
    if presenters.is_empty() {
        return Ok(String::new());
    }
    SpeakerCardsTemplate { presenters }.render()
}
