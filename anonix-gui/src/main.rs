#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use anonix_ui::{component::text, font, theme};

use anonix_gui::{
    args::{parse_args, split_args},
    config::{resolve_api_url, resolve_log_level, Config, API_URL_ENV, LOG_LEVEL_ENV},
    dir::AnonixDirectory,
    gui::{self, GUI},
    logger::setup_logger,
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let (datadir, cli_api_url) = split_args(&args);
    let datadir = match datadir {
        Some(d) => d,
        None => AnonixDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config_file = datadir.config_file();
    let config = Config::load(&config_file)?;
    let log_level = resolve_log_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref(), &config)?;
    let api_url = resolve_api_url(
        cli_api_url.as_deref(),
        std::env::var(API_URL_ENV).ok().as_deref(),
        &config,
    )?;

    setup_logger(log_level, &datadir)?;
    setup_panic_hook();
    tracing::info!("Anonix console v{} using gateway {}", VERSION, api_url);
    if !config_file.exists() {
        tracing::info!(
            "No configuration file at {}, using defaults",
            config_file.display()
        );
    }

    let (state, task) = GUI::new(gui::Config {
        connect: gui::http_connect(api_url),
        toast_timeout: config.toast_timeout(),
    })?;

    let settings = Settings {
        id: Some("Anonix".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 1200.0,
            height: 800.0,
        },
        min_size: Some(Size {
            width: 900.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Anonix".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || (state, task))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
