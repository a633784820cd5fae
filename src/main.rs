use roomie_find::config::Settings;
use roomie_find::models::{ErrorResponse, ViewEvent};
use roomie_find::routes::App;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Write one JSON document per line
async fn emit<T: Serialize>(out: &mut tokio::io::Stdout, value: &T) -> std::io::Result<()> {
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    out.write_all(&line).await?;
    out.flush().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        Settings::default()
    });

    // Initialize logging; logs go to stderr so stdout carries only snapshots
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting {} view host...", settings.app.name);
    info!(
        "Simulated latency: login {}ms, registration {}ms",
        settings.latency.login_ms, settings.latency.register_ms
    );

    let state = settings.app_state().map_err(|e| {
        error!("Failed to build view state: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    let mut app = App::new(state);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    emit(&mut stdout, &app.snapshot()).await?;

    // One event at a time, each handled to completion
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: ViewEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                warn!("Invalid event {:?}: {}", line, e);
                emit(&mut stdout, &ErrorResponse {
                    error: "invalid_event".to_string(),
                    message: format!("Invalid event: {}", e),
                })
                .await?;
                continue;
            }
        };

        match app.dispatch(event).await {
            Ok(()) => emit(&mut stdout, &app.snapshot()).await?,
            Err(e) => {
                error!("Event rejected on {}: {}", app.route(), e);
                emit(&mut stdout, &ErrorResponse {
                    error: e.kind().to_string(),
                    message: e.to_string(),
                })
                .await?;
            }
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}
