mod app;
mod config;
mod device_info;
mod enabler;
mod error;
mod event;
mod locale;
mod preference;
mod radio;
mod theme;
mod ui;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::{fs::File, path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    app::AppState,
    config::IconSet,
    event::run,
    locale::EnglishLocalizer,
    radio::{SimOptions, SimulatedRadio},
};

/// A keyboard-driven TUI for toggling a WiMAX radio
#[derive(Parser, Debug)]
#[command(
    name = "wimaxui",
    about = "A keyboard-driven TUI for toggling a WiMAX radio and inspecting its device information.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Use ASCII icons (no Nerd Fonts required)
    #[arg(long)]
    ascii: bool,

    /// Write debug logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with the radio already on
    #[arg(long = "start-enabled")]
    start_enabled: bool,

    /// Make the radio refuse every on/off request
    #[arg(long = "reject-requests")]
    reject_requests: bool,

    /// Make every on/off transition end in an error
    #[arg(long = "fail-transitions")]
    fail_transitions: bool,

    /// Report no device information
    #[arg(long = "no-device-info")]
    no_device_info: bool,

    /// Network the radio joins once it is on
    #[arg(long, value_name = "NAME", default_value = config::DEFAULT_NETWORK_NAME)]
    network: String,

    /// Start with airplane mode on
    #[arg(long)]
    airplane: bool,
}

impl Args {
    fn sim_options(&self) -> SimOptions {
        let defaults = SimOptions::default();
        SimOptions {
            start_enabled: self.start_enabled,
            reject_requests: self.reject_requests,
            fail_transitions: self.fail_transitions,
            device_info: if self.no_device_info {
                None
            } else {
                defaults.device_info
            },
            network_name: Some(self.network.clone()).filter(|n| !n.is_empty()),
            ..defaults
        }
    }
}

/// Log to a file when asked; the terminal belongs to the TUI
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    init_logging(args.log_file.as_ref())?;
    info!(?args, "WimaxUI starting");

    let icons = if args.ascii {
        IconSet::Ascii
    } else {
        IconSet::Nerd
    };
    let radio = SimulatedRadio::new(args.sim_options());
    let mut state = AppState::new(radio, Arc::new(EnglishLocalizer), args.airplane, icons);

    let terminal = ratatui::init();
    enable_raw_mode()?;
    let result = run(terminal, &mut state).await;
    disable_raw_mode()?;

    ratatui::restore();
    result
}
