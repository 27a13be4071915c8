//! Bibliotheca - interactive library lending tracker

use anyhow::Context;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use bibliotheca::{
    config::{AppConfig, LoggingConfig},
    repository::JsonFileStorage,
    shell::Shell,
    DataOrigin, Library,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&config.logging)?;

    tracing::info!("Starting Bibliotheca v{}", env!("CARGO_PKG_VERSION"));

    let storage = JsonFileStorage::new(&config.storage.path);
    let mut library = Library::open(storage).with_context(|| {
        format!(
            "Failed to load library data from {}",
            config.storage.path.display()
        )
    })?;

    if library.origin() == DataOrigin::Fresh {
        println!(
            "Data file {} does not exist yet. It will be created when data is saved.",
            config.storage.path.display()
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut library, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}

/// Log to stderr, or to `logging.file` when set, since stdout belongs to the menu
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bibliotheca={}", logging.level).into());

    let (writer, guard) = match &logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(io::stderr), None),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(logging.file.is_none());
    let fmt_layer = match logging.format.as_str() {
        "json" => fmt_layer.json().boxed(),
        _ => fmt_layer.boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    Ok(guard)
}
