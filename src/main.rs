use actix_web::{App, HttpServer, middleware, web};

use podium::config::Config;
use podium::db;
use podium::handlers;
use podium::models::deck::DeckRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let backend = db::init_backend(&config).expect("Invalid DATABASE_URL");
    if let Some(pool) = backend.pool() {
        if config.run_migrations {
            db::run_migrations(pool).await.expect("Failed to run migrations");
        }
    }

    let decks = DeckRegistry::load_dir(&config.decks_dir).expect("Failed to load slide decks");

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    let backend = web::Data::new(backend);
    let decks = web::Data::new(decks);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(backend.clone())
            .app_data(decks.clone())
            .app_data(config.clone())
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
