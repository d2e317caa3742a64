pub mod deck;
pub mod event_session;
pub mod presenter;
pub mod slides;
