use bridge_core::io::parse_position;
use bridge_core::Position;
use clap::Parser;
use crossterm::tty::IsTty;
use tracing::Level;

/// Suggests calls for your seat in a contract bridge auction.
#[derive(Parser, Debug, Clone)]
#[command(name = "bridge-assistant", author, version, about, long_about = None)]
pub struct Config {
    /// Your seat (n/e/s/w); asked for when missing
    #[arg(long, env = "BRIDGE_POSITION", value_parser = parse_position)]
    pub position: Option<Position>,

    /// Who bids first on the first hand; rotates clockwise afterwards
    #[arg(long, env = "BRIDGE_DEALER", value_parser = parse_position)]
    pub dealer: Option<Position>,

    /// Print each piece of advice as one JSON line
    #[arg(long)]
    pub json: bool,

    /// Plain text output
    #[arg(long)]
    pub no_color: bool,

    /// Show every rule consulted before the advice
    #[arg(long)]
    pub trace: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "BRIDGE_LOG", default_value = "warn")]
    pub log_level: Level,
}

impl Config {
    /// Colors only on a terminal, and never when `NO_COLOR` is set.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty()
    }
}
