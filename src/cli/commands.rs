use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ttdo", about = concat!("ttdo v", env!("CARGO_PKG_VERSION"), " - a daily task outline for the terminal"), version)]
pub struct Cli {
    /// List name (default: today's date, e.g. 10-16-2026)
    pub name: Option<String>,

    /// Directory for relative list names
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/ttdo/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enter adds the item and starts the next one
    #[arg(long, conflicts_with = "single")]
    pub rapid: bool,

    /// Enter adds the item and returns to the list
    #[arg(long)]
    pub single: bool,

    /// Print the list as plain text and exit
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file (filter with TTDO_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
