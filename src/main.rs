use std::sync::Arc;

use anyhow::Result;
use tohyo_core::application::{ports::time::Clock, services::ApplicationServices};
use tohyo_core::config::AppConfig;
use tohyo_core::domain::{choice::ChoiceRepository, question::QuestionReadRepository};
use tohyo_core::infrastructure::{
    database,
    repositories::{SqliteChoiceRepository, SqliteQuestionReadRepository},
    time::SystemClock,
};
use tohyo_core::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let question_repo: Arc<dyn QuestionReadRepository> =
        Arc::new(SqliteQuestionReadRepository::new(Arc::clone(&pool)));
    let choice_repo: Arc<dyn ChoiceRepository> =
        Arc::new(SqliteChoiceRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(question_repo, choice_repo, clock));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
