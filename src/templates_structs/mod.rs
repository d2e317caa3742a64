// Template context structures for Askama templates, organized by area.

mod admin;
mod errors;
mod slides;

pub use self::admin::{PresenterListTemplate, SessionListTemplate};
pub use self::errors::NotFoundTemplate;
pub use self::slides::SpeakerCardsTemplate;

/// Common context shared by admin pages.
/// Templates access these as `ctx.app_name`, `ctx.current_path`.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
    pub backend_configured: bool,
}

impl PageContext {
    pub fn new(app_name: &str, current_path: &str, backend_configured: bool) -> Self {
        Self {
            app_name: app_name.to_string(),
            current_path: current_path.to_string(),
            backend_configured,
        }
    }

    /// Whether a nav link points at the current page.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}
