use std::env;
use std::sync::Arc;

use actix_web::web;
use car_configurator::infrastructure::sqlite_slots::DieselSlotStorage;
use car_configurator::{build_server, create_pool, run_migrations, AppState};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "car_configurator.db".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("PORT: {e}")))?;

    let pool = create_pool(&database_url).map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    let storage = Arc::new(DieselSlotStorage::new(pool));
    let state = AppState::new(storage).map_err(std::io::Error::other)?;

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(web::Data::new(state), &host, port)?.await
}
