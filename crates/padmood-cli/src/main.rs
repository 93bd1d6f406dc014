//! padmood CLI entry point.
//!
//! Binary name: `padmood`
//!
//! Parses CLI arguments, sets up tracing, loads the decay configuration, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,padmood=debug",
        _ => "trace",
    };

    padmood_observe::tracing_setup::init_tracing(cli.otel, filter)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;

    padmood_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let output = cli.output_mode();
    let state = AppState::init(cli.data_dir).await;

    match cli.command {
        Commands::Decay { input, at } => {
            cli::mood::decay(&state, &input.state, at, output).await?;
        }

        Commands::Inject { input } => {
            cli::mood::inject(&input.state, output).await?;
        }

        Commands::Refresh { input, at } => {
            cli::mood::refresh(&state, &input.state, at, output).await?;
        }

        Commands::Baseline => {
            cli::mood::baseline(output)?;
        }

        Commands::Config => {
            cli::config::show_config(&state, output)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "padmood", &mut std::io::stdout());
        }
    }

    Ok(())
}
