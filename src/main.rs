use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

use overrun_dashboard::charts::DashboardView;
use overrun_dashboard::config::Settings;
use overrun_dashboard::domain::ProjectInput;
use overrun_dashboard::logging;
use overrun_dashboard::services::{MemoryNotifier, Notification, PredictionClient};
use overrun_dashboard::Dashboard;

#[derive(Serialize)]
struct Output {
    view: DashboardView,
    notifications: Vec<Notification>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        prediction_api_url = %settings.prediction_api_url,
        "Starting overrun dashboard"
    );

    // Create prediction service client
    let client = PredictionClient::new(
        &settings.prediction_api_url,
        settings.prediction_timeout_seconds,
    )?;

    match client.health_check().await {
        Ok(()) => tracing::info!("Prediction service is healthy"),
        Err(e) => tracing::warn!(error = %e, "Prediction service health check failed - will retry on first request"),
    }

    // Project parameters arrive as JSON on stdin
    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("Failed to read project input from stdin")?;
    let input: ProjectInput =
        serde_json::from_str(&raw).context("Project input is not valid JSON")?;

    let notifier = Arc::new(MemoryNotifier::new());
    let dashboard = Dashboard::new(client, Arc::clone(&notifier));

    dashboard.submit(input).await?;

    let output = Output {
        view: DashboardView::from_state(&dashboard.state()),
        notifications: notifier.sent(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
