mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, middleware::auth::TokenVerifier, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_database(&db, &config).await?;

    let app = router::router(AppState::new(
        db.clone(),
        TokenVerifier::new(&config.jwt_secret),
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
