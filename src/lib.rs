pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::discount_service::DiscountService;
use application::scenic_service::ScenicService;
use application::ticket_service::TicketService;
use infrastructure::discount_repo::DieselDiscountRepository;
use infrastructure::scenic_repo::DieselScenicRepository;
use infrastructure::ticket_repo::DieselTicketRepository;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let venues = web::Data::new(ScenicService::new(DieselScenicRepository::new(pool.clone())));
    let tickets = web::Data::new(TicketService::new(DieselTicketRepository::new(pool.clone())));
    let discounts = web::Data::new(DiscountService::new(DieselDiscountRepository::new(pool)));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(venues.clone())
            .app_data(tickets.clone())
            .app_data(discounts.clone())
            .wrap(Logger::default())
            .configure(
                handlers::configure::<
                    DieselScenicRepository,
                    DieselTicketRepository,
                    DieselDiscountRepository,
                >,
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", handlers::ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
