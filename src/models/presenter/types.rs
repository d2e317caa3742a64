use serde::Serialize;

/// A speaker record with display metadata.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Presenter {
    pub id: String,
    pub full_name: String,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: String,
}

impl Presenter {
    /// Uppercased first character of the name, or `?` for an empty name.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Photo URL, ignoring empty strings.
    pub fn photo(&self) -> Option<&str> {
        self.photo_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn organization_text(&self) -> Option<&str> {
        self.organization.as_deref().filter(|o| !o.is_empty())
    }
}
