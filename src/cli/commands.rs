//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snapjot")]
#[command(about = "Local photo-note journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new photo journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Capture a photo and store it with a caption
    Capture {
        /// Caption for the new entry (may be omitted)
        #[arg(value_name = "CAPTION")]
        caption: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Show at most N entries
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: String,

        /// Write the decoded photo to this file
        #[arg(long, value_name = "FILE")]
        photo_out: Option<PathBuf>,
    },

    /// Remove an entry by id
    Remove {
        /// Entry id
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
