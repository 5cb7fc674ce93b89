use bdwild::cli::{run_command, Cli, Commands, Outcome};
use bdwild_core::config::Config;
use clap::Parser;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("bdwild-debug.log");
        let file = std::fs::OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "bdwild debug log started");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config not loaded, using defaults");
        Config::defaults()
    });
    let catalog = bdwild::load_catalog(cli.data.as_deref(), &config)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            bdwild_tui::run(catalog, config)?;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let mut out = std::io::stdout().lock();
            match run_command(&command, &catalog, &config, &mut out)? {
                Outcome::Done => Ok(ExitCode::SUCCESS),
                Outcome::NotFound => Ok(ExitCode::FAILURE),
            }
        }
    }
}
