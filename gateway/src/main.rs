use axum::{extract::Request, ServiceExt};
use dotenvy::dotenv;
use starwars_core::{app, connect, ensure_schema, AppState, Settings};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let settings = Settings::from_env();
    let db = connect(&settings).await?;
    ensure_schema(&db).await?;

    let app = app(AppState::new(db));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("listening on http://{}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;
    Ok(())
}
