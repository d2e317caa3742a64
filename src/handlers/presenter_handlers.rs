use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::db::Backend;
use crate::errors::{AppError, render};
use crate::models::presenter;
use crate::templates_structs::{PageContext, PresenterListTemplate};

/// Admin list of all presenters, oldest first. No pagination.
pub async fn list(
    backend: web::Data<Backend>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let presenters = presenter::load_all(&backend).await;

    let tmpl = PresenterListTemplate {
        ctx: PageContext::new(&config.app_name, "/admin/presenters", backend.is_configured()),
        presenters,
    };
    render(tmpl)
}
