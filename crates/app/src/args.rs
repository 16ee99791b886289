pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cms")]
#[command(about = "Manage a directory of markdown and text documents from the browser")]
pub struct Args {
    /// Path to the cms config directory (defaults to ~/.cms)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
