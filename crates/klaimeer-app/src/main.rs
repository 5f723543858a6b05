mod app_state;
mod cli;

use std::io::Write;

use klaimeer_common::{ConfigError, KlaimeerError};
use klaimeer_config::{KlaimeerConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "klaimeer=info";

/// Pick the log filter: CLI flag, then `[logging]` from the config file,
/// then the default.
fn log_directive(cli_level: Option<&str>, logging: Option<LoggingConfig>) -> String {
    cli_level
        .map(str::to_owned)
        .or_else(|| logging.map(|logging| logging.directive()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string())
}

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log directive {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Load config from the CLI override or the platform default path.
///
/// An explicit `--config` that cannot be loaded is an error. A broken
/// platform default falls back to built-in defaults with a warning.
fn load_config(args: &cli::Args) -> klaimeer_common::Result<KlaimeerConfig> {
    match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            Ok(klaimeer_config::load_config_from(path)?)
        }
        None => Ok(klaimeer_config::load_config().unwrap_or_else(|e: ConfigError| {
            tracing::warn!("Config load failed, using defaults: {e}");
            KlaimeerConfig::default()
        })),
    }
}

fn run(args: cli::Args) -> klaimeer_common::Result<()> {
    let mut config = load_config(&args)?;
    if let Some(seed) = args.seed {
        config.globe.points.seed = Some(seed);
    }
    tracing::info!(
        globe = config.globe.enabled,
        counters = config.counters.entries.len(),
        "Config loaded"
    );

    if args.print_config {
        let json = klaimeer_config::config_to_json(&config);
        writeln!(std::io::stdout().lock(), "{json}")?;
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(|e| KlaimeerError::Window(e.to_string()))?;
    let mut app = app_state::KlaimeerApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| KlaimeerError::Window(e.to_string()))?;

    match app.take_startup_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    let args = cli::parse();

    // Only `[logging]` is read up front; the full load runs once the
    // subscriber is installed so its messages are kept.
    let logging = klaimeer_config::peek_logging(args.config.as_deref());
    init_logging(&log_directive(args.log_level.as_deref(), logging));

    tracing::info!("Klaimeer v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
