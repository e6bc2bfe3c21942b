//! envsure CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envsure::cli::Cli;
use envsure::requirements::required_keys;
use envsure::runner::SetupRunner;
use envsure::ui::{create_ui, is_ci, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable;
/// default is INFO.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envsure=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    let env_path = std::env::current_dir()
        .map(|dir| dir.join(".env"))
        .unwrap_or_else(|_| ".env".into());

    let mut ui = create_ui(!is_ci(), OutputMode::Normal);
    let runner = SetupRunner::new(env_path, required_keys());

    match runner.run(ui.as_mut()) {
        Ok(outcome) => {
            tracing::debug!("Setup finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
