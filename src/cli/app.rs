// ABOUTME: Main application orchestration for the tplbridge CLI
// ABOUTME: Coordinates argument intake, logging, rendering, and the stdout error contract

use anyhow::Result;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use super::args::ParseOutcome;
use super::{commands, Args, Config};
use crate::output;

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create application with configuration from default locations.
    ///
    /// A config file that fails to load must not take the render contract
    /// down with it: the caller only ever sees rendered text or the
    /// sentinel line, so the failure is reported on stderr and defaults
    /// are used.
    pub fn from_env() -> Self {
        let config = match Config::load(None) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: failed to load configuration: {:#}; using defaults", e);
                Config::default()
            }
        };
        Self::new(config)
    }

    /// Initialize logging based on configuration.
    ///
    /// Diagnostics go to stderr only: stdout belongs to the calling process,
    /// which expects nothing there but the rendered text or the sentinel
    /// line.
    pub fn init_logging(&self) {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.logging.level));

        let result = match self.config.logging.format.as_str() {
            "compact" => tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
        };

        if result.is_ok() {
            debug!("Logging initialized with level: {}", self.config.logging.level);
        }
    }

    /// Run one render invocation.
    ///
    /// This is the outermost failure boundary: every error from argument
    /// validation onward is converted into the sentinel line on stdout, and
    /// the process exits zero either way. The caller detects failure by
    /// scanning stdout, never by exit status.
    pub fn run(&self) -> Result<()> {
        self.init_logging();
        debug!("Starting tplbridge v{}", env!("CARGO_PKG_VERSION"));

        let args = match Args::parse_args() {
            ParseOutcome::Run(args) => args,
            ParseOutcome::Informational(text) => {
                print!("{}", text);
                return Ok(());
            }
            ParseOutcome::Invalid(description) => {
                error!("Argument error: {}", description);
                output::write_failure(&description);
                return Ok(());
            }
        };

        match commands::render(&args.basedir, &args.template, &args.data_file) {
            Ok(text) => output::write_rendered(&text),
            Err(e) => {
                error!("Render failed: {:#}", e);
                output::write_failure(&format!("{:#}", e));
            }
        }

        Ok(())
    }
}
