pub mod application;
pub mod db;
pub mod docs;
pub mod domain;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod infrastructure;
pub mod schema;
pub mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};
use docs::ApiDoc;
use domain::errors::DomainError;
pub use state::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Internal(format!("migration failed: {e}")))?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Registers every route on `cfg`. Shared by the server and the in-process tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use handlers::{auth, configuration, designs};

    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(auth::sign_up))
            .route("/login", web::post().to(auth::login))
            .route("/admin/login", web::post().to(auth::admin_login))
            .route("/logout", web::post().to(auth::logout))
            .route("/session", web::get().to(auth::current_session)),
    )
    .service(
        web::scope("/configuration")
            .route("", web::get().to(configuration::get_configuration))
            .route("", web::patch().to(configuration::update_configuration))
            .route("/toggle", web::post().to(configuration::toggle_option))
            .route("/reset", web::post().to(configuration::reset_configuration))
            .route("/steps", web::get().to(configuration::list_steps))
            .route("/quote", web::get().to(configuration::quote))
            .route("/submit", web::post().to(configuration::submit_configuration)),
    )
    .service(
        // Literal segments must be registered before "/{id}".
        web::scope("/designs")
            .route("", web::get().to(designs::list_designs))
            .route("/stats", web::get().to(designs::design_stats))
            .route("/customers", web::get().to(designs::list_customers))
            .route("/export", web::get().to(designs::export_designs))
            .route("/{id}", web::get().to(designs::get_design))
            .route("/{id}", web::delete().to(designs::delete_design))
            .route("/{id}/status", web::patch().to(designs::update_design_status)),
    )
    .route(
        "/customers/{id}/designs",
        web::get().to(designs::customer_designs),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
