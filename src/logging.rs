use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default log levels based on environment
        match env {
            Environment::Dev => "overrun_dashboard=debug,reqwest=info,info".into(),
            Environment::Staging => "overrun_dashboard=debug,warn".into(),
            Environment::Prod => "overrun_dashboard=info,warn".into(),
        }
    });

    // Stdout carries the rendered dashboard, so logs go to stderr
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    if env.is_prod() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    }

    tracing::info!("Logging initialized for {:?} environment", env);
}
