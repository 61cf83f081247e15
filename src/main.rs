use clap::Parser;
use std::process::ExitCode;

use greenleaf::cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (structured logging)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greenleaf=info,warn".into()),
        )
        .with_target(false)
        .init();

    run(cli)
}
