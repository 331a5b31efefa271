use clap::Parser;
use huginn::cli::{Cli, Commands};
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    miette::set_panic_hook();

    let config = args.detector_config()?;

    match args.action {
        Commands::Encode(opts) => opts.encode(&config)?,
        Commands::Decode(opts) => opts.decode(&config)?,
        Commands::Classes(opts) => opts.classes(&config),
    }

    Ok(())
}
