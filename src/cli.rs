use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipforge")]
#[command(author, version, about = "Dataset clip acquisition and transcoding pipeline")]
pub struct Cli {
    /// Path to a catalog file (built-in catalog if omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root directory finished assets are placed under
    #[arg(short, long, global = true, default_value = ".")]
    pub output_root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalogued dataset items
    List,

    /// Run one item's pipeline
    Run {
        /// Item name, as shown by `list`
        #[arg(required = true)]
        item: String,

        /// Keep the scratch directory for inspection
        #[arg(long)]
        keep_scratch: bool,
    },

    /// Run every catalogued item in sequence and report a tally
    RunAll,

    /// Check that required external tools are available
    CheckTools,

    /// Validate a catalog file
    Validate {
        /// Catalog file to validate (uses --config if not specified)
        config: Option<PathBuf>,
    },
}
