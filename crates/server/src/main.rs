mod config;
mod doc;
mod dtos;
mod error;
mod router;
mod routes;
mod state;
mod utils;

use config::Config;
use database::db::create_connection;
use error::AppError;
use log::info;
use migration::{Migrator, MigratorTrait};
use state::AppState;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    let app = router::router(AppState::new(db.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database connection closed");

    Ok(())
}
