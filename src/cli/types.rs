use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "A minimal Markdown static site generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to ./_config.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the site once
    #[command(alias = "b")]
    Build,

    /// Build the site, then rebuild whenever source files change
    #[command(alias = "w")]
    Watch,

    /// Serve a local preview of the site (reserved, not implemented)
    #[command(alias = "s")]
    Serve {
        /// Host to listen on
        #[arg(short = 'H', long, value_name = "HOST", default_value = "localhost")]
        host: String,

        /// Port to listen on
        #[arg(short, long, value_name = "PORT", default_value_t = 8080)]
        port: u16,
    },
}
