use anyhow::Result;
use bridge_cli::logging::init_logging;
use bridge_cli::{Config, Renderer, Shell};
use clap::Parser;
use std::io;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        stdin.lock(),
        stdout.lock(),
        Renderer::from_config(&config),
        config.trace,
    );
    let session = shell.run(config.position, config.dealer)?;
    tracing::info!(hands = session.history().len(), "session ended");
    Ok(())
}
