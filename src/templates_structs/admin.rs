use askama::Template;

use crate::models::event_session::SessionListItem;
use crate::models::presenter::Presenter;
use super::PageContext;

#[derive(Template)]
#[template(path = "admin/presenters.html")]
pub struct PresenterListTemplate {
    pub ctx: PageContext,
    pub presenters: Vec<Presenter>,
}

#[derive(Template)]
#[template(path = "admin/sessions.html")]
pub struct SessionListTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<SessionListItem>,
}
