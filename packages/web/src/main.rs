use anyhow::Context;
use api::{AppState, PgStore};
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use settings::Settings;

mod settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "web=info,api=info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new().context("failed to load settings")?;

    let pool = api::db::connect(&settings.database.url(), settings.database.max_connections)
        .await
        .context("failed to connect to database")?;
    api::db::migrate(&pool)
        .await
        .context("failed to run migrations")?;

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("failed to prepare session table")?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            settings.session.expiry_days,
        )));

    if !settings.security.csrf {
        tracing::warn!("CSRF protection is disabled");
    }
    let state = AppState::new(PgStore::new(pool)).with_csrf(settings.security.csrf);
    let app = api::routes::router(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
