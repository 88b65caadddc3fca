//! TreeKV CLI
//!
//! Runs one store operation against a snapshot file: load, execute,
//! save after a successful mutation, print the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use treekv::{Command, Config, Output, Store};

/// TreeKV CLI
#[derive(Parser, Debug)]
#[command(name = "treekv-cli")]
#[command(about = "CLI for the TreeKV key-value store")]
#[command(version)]
struct Args {
    /// Snapshot file to load at start and save to after mutations
    #[arg(short, long, default_value = "./data.bin")]
    data_file: PathBuf,

    /// Do not save after a successful insert/delete/update
    #[arg(long)]
    no_save: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a key-value pair
    Insert {
        /// The key to insert
        key: String,

        /// The value to insert
        value: String,
    },

    /// Delete a key
    Delete {
        /// The key to delete
        key: String,
    },

    /// Update the value of an existing key
    Update {
        /// The key to update
        key: String,

        /// The new value
        value: String,
    },

    /// Search for a key
    Search {
        /// The key to look up
        key: String,
    },

    /// Print all pairs in key order
    GetAll,

    /// Reload from a snapshot file (defaults to --data-file)
    Load {
        /// Snapshot to read
        path: Option<PathBuf>,
    },

    /// Write the snapshot to --data-file
    Save,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Insert { key, value } => Command::Insert {
                key: key.into_bytes(),
                value: value.into_bytes(),
            },
            Commands::Delete { key } => Command::Delete {
                key: key.into_bytes(),
            },
            Commands::Update { key, value } => Command::Update {
                key: key.into_bytes(),
                value: value.into_bytes(),
            },
            Commands::Search { key } => Command::Search {
                key: key.into_bytes(),
            },
            Commands::GetAll => Command::GetAll,
            Commands::Load { path } => Command::Load { path },
            Commands::Save => Command::Save,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,treekv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("TreeKV CLI v{}", treekv::VERSION);
    tracing::debug!("Data file: {}", args.data_file.display());

    let config = Config::builder()
        .data_path(&args.data_file)
        .load_on_open(true)
        .build();

    let mut store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let command = Command::from(args.command);
    let is_mutation = command.is_mutation();
    let result = store.execute(command);

    if let Some(Output::Entries(entries)) = &result.value {
        println!("All Key-Value Pairs:");
        for (key, value) in entries {
            println!(
                "{}: {}",
                String::from_utf8_lossy(key),
                String::from_utf8_lossy(value)
            );
        }
    }
    println!("{}", result.message);

    if !result.success {
        return ExitCode::FAILURE;
    }

    if is_mutation && !args.no_save {
        let saved = store.save();
        if !saved.success {
            tracing::error!("{}", saved.message);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
