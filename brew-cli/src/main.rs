use anyhow::Context;
use brew_cli::{AppConfig, CliArgs};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = AppConfig::load().context("Failed to load config")?;
    config.apply_args(&args);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Config: {:?}", config);

    match brew_cli::run(&args, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("brew failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
