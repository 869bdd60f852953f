use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unischedule::api::router;
use unischedule::config::AppConfig;
use unischedule::services::ScheduleTicker;
use unischedule::shutdown::shutdown_signal;
use unischedule::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "unischedule=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    let state = AppState::seeded();

    let ticker = if config.schedule_ping_secs > 0 {
        let ticker = ScheduleTicker::new(state.channel.clone(), state.shell.clone(), config.schedule_ping_secs);
        Some(tokio::spawn(ticker.start()))
    } else {
        info!("schedule ticker disabled");
        None
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(ticker) = ticker {
        ticker.abort();
    }

    Ok(())
}
