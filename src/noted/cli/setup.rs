use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noted", bin_name = "noted", version)]
#[command(about = "Keep short notes in a local file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes file to use (overrides NOTED_FILE and the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        title: String,

        /// Body of the note (remaining words are joined with spaces)
        #[arg(num_args = 0..)]
        body: Vec<String>,
    },

    /// Show all notes
    #[command(alias = "ls")]
    List {
        /// One line per note
        #[arg(short, long)]
        compact: bool,
    },

    /// Show one note
    #[command(alias = "v")]
    View {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Show notes created or last edited on a day
    Find {
        /// Day in YYYY-MM-DD format
        date: String,
    },

    /// Edit a note; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Run the interactive menu (the default)
    Menu,
}
