use serde::Serialize;

/// An event timeslot carrying branding and connectivity metadata.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
pub struct EventSession {
    pub id: String,
    pub event_name: Option<String>,
    pub company_name: Option<String>,
    pub wifi_ssid: Option<String>,
    pub wifi_password: Option<String>,
    pub api_credit_url: Option<String>,
    pub lab_title: Option<String>,
    pub slide_deck: Option<String>,
}

impl EventSession {
    /// Deck slug, ignoring empty strings.
    pub fn deck_slug(&self) -> Option<&str> {
        self.slide_deck.as_deref().filter(|slug| !slug.trim().is_empty())
    }
}

/// Row for the admin session list.
#[derive(Debug, Clone)]
pub struct SessionListItem {
    pub session: EventSession,
    pub deck_available: bool,
}
