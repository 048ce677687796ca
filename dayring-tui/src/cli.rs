use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dayring")]
#[command(about = "Terminal day clock with ring gauges and focus sessions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the clock (default)
    Run,
    /// Run with an in-memory focus endpoint instead of a real one
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
