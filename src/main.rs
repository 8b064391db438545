use std::time::Duration;

use clap::Parser;
use survey_engine::cli::commands::{cmd_questions, cmd_submit};
use survey_engine::cli::config::{Cli, Commands, build_backend, load_config};
use survey_engine::run_session;
use survey_engine::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let backend = build_backend(&cli, &config)?;

    match cli.command {
        Commands::Run => {
            run_session(backend, &tracer)?;
        }
        Commands::Submit {
            ref draft,
            ref output,
            fetch_timeout,
        } => {
            let finalized = cmd_submit(
                draft,
                output.as_deref(),
                Duration::from_secs(fetch_timeout),
                backend,
                &tracer,
                cli.verbose,
            )?;
            if !finalized {
                std::process::exit(1);
            }
        }
        Commands::Questions { ref topic } => {
            cmd_questions(topic, backend)?;
        }
    }

    Ok(())
}
