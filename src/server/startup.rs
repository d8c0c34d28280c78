use sea_orm::DatabaseConnection;
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    service::seed::{load_seed_file, SeedService},
};

/// Installs the global `tracing` subscriber.
///
/// Log levels come from `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date. Both SQLite and
/// Postgres URLs are accepted.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Seeds colleges and courses from `SEED_FILE` when it is configured.
///
/// # Returns
/// - `Ok(())` - Seeding ran, was skipped, or no seed file is configured
/// - `Err(AppError::ConfigErr)` - Seed file unreadable or malformed
/// - `Err(AppError::DbErr)` - Database error while checking or clearing existing data
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(path) = config.seed_file.as_deref() else {
        return Ok(());
    };

    let entries = load_seed_file(path)?;
    SeedService::new(db).seed(entries, config.seed_force).await?;

    Ok(())
}

/// Resolves once Ctrl-C or, on Unix, SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
