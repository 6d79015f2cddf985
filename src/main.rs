//! Puka Cuckoo - Main entrypoint.
//!
//! Loads configuration, initializes the logging system and runs the requested
//! subcommand: executing a command script against a fresh table, validating
//! the configuration, or writing a default configuration file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use puka_cuckoo_lib::config::{ConfigLoader, ConfigResult, LogConfig, PukaConfig, ENV_PREFIX};
use puka_cuckoo_lib::error::{
    ErrorContext, ErrorReporter, PukaError, PukaResult, TracingErrorReporter,
};
use puka_cuckoo_lib::script::{parse_script, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Puka Cuckoo.
#[derive(Parser, Debug)]
#[clap(name = "Puka Cuckoo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a command script against a fresh table
    Run {
        /// Path to the script, one command per line
        #[clap(value_parser)]
        script: PathBuf,

        /// Print one JSON object per command instead of text
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that script output on stdout stays machine-readable.
fn init_logging(log: &LogConfig) -> PukaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| PukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run_script(config: &PukaConfig, script: &Path, json: bool) -> PukaResult<()> {
    let source = std::fs::read_to_string(script)?;
    let commands = parse_script(&source)?;
    let mut session = Session::from_config(&config.table)?;

    info!(
        script = %script.display(),
        commands = commands.len(),
        capacity = session.table().capacity(),
        "Running script"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for command in &commands {
        let outcome = session.execute(command);
        if json {
            writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
        } else {
            writeln!(out, "{outcome}")?;
        }
    }

    let table = session.table();
    info!(
        size = table.size(),
        stash_len = table.stash_len(),
        undo_depth = table.undo_depth(),
        "Script finished"
    );
    Ok(())
}

fn execute(command: Command, loaded: ConfigResult<PukaConfig>) -> PukaResult<()> {
    match command {
        Command::Run { script, json } => {
            let config = loaded?;
            run_script(&config, &script, json)
        }
        Command::Validate => {
            info!("Validating configuration");
            let config = loaded?;
            info!(
                capacity = config.table.capacity,
                hash_functions = config.table.hash_functions,
                "Configuration validated successfully"
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = PukaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| PukaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match execute(args.command, loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            TracingErrorReporter.report(&ErrorContext::new(error, "puka_cuckoo"));
            ExitCode::FAILURE
        }
    }
}
