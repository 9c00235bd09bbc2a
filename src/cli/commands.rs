//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "macrotag")]
#[command(about = "Parse and render inline tag macros", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file declaring tag types (default: macrotag.toml, searched upwards)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by MACROTAG_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a macro and print its type, value, and attributes
    Parse {
        /// Raw macro without delimiters (e.g., "image: cat.png alt: A cat")
        raw: String,

        /// Context data passed to the tag (key=value, repeatable)
        #[arg(short, long, value_name = "KEY=VALUE")]
        data: Vec<String>,
    },

    /// Render a macro with its tag type's handler
    Render {
        /// Raw macro without delimiters (e.g., "image: cat.png alt: A cat")
        raw: String,

        /// Context data passed to the tag (key=value, repeatable)
        #[arg(short, long, value_name = "KEY=VALUE")]
        data: Vec<String>,
    },

    /// List registered tag types
    Types,
}
