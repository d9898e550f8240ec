use crate::dir::AnonixDirectory;
use std::{fs::File, sync::Arc};
use tracing_subscriber::{filter, fmt::writer::BoxMakeWriter, prelude::*};

pub const GUI_LOG_FILE_NAME: &str = "anonix-gui.log";

const IGNORED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

fn is_ignored(target: &str) -> bool {
    IGNORED_TARGETS.iter().any(|t| target.starts_with(t))
}

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &AnonixDirectory,
) -> Result<(), LoggerError> {
    let file = File::create(datadir.log_file())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Rejects spans and events of noisy dependencies on *both* layers.
                .with_filter(filter::filter_fn(|metadata| !is_ignored(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}
