//! Rune Trie - command-line entrypoint.
//!
//! Loads a JSON document of entries into a trie and answers prefix queries
//! against it. Also validates and generates configuration files.

use clap::{Parser, Subcommand};
use rune_trie_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use rune_trie_lib::entries::{display_value, load_entries};
use rune_trie_lib::error::{RuneTrieError, RuneTrieResult};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Rune Trie.
#[derive(Parser, Debug)]
#[clap(name = "rune_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every stored entry on the path to a key and the longest match
    Match {
        /// JSON object mapping keys to values
        #[clap(short, long, value_parser)]
        entries: PathBuf,

        /// Key to look up
        key: String,
    },

    /// Print every stored entry, optionally only those under a prefix
    Dump {
        /// JSON object mapping keys to values
        #[clap(short, long, value_parser)]
        entries: PathBuf,

        /// Only print keys starting with this prefix
        #[clap(short, long)]
        prefix: Option<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> RuneTrieResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| RuneTrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> RuneTrieResult<()> {
    let args = Args::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    // Configuration errors are reported before logging exists, under defaults.
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    init_logging(&config.log)?;

    match args.command {
        Command::Match { entries, key } => {
            let trie = load_entries(&entries, config.trie)?;
            trie.walk_path(&key, |prefix, value| {
                println!("{prefix:?}\t{}", display_value(value));
                Ok::<(), RuneTrieError>(())
            })?;
            match trie.longest_prefix_match(&key) {
                Some((prefix, value)) => {
                    info!(key = %key, prefix = %prefix, "longest prefix match");
                    println!("longest\t{prefix:?}\t{}", display_value(value));
                }
                None => {
                    info!(key = %key, "no stored prefix");
                    process::exit(2);
                }
            }
            Ok(())
        }
        Command::Dump { entries, prefix } => {
            let trie = load_entries(&entries, config.trie)?;
            let mut lines = Vec::new();
            trie.walk_prefix(prefix.as_deref().unwrap_or(""), |key, value| {
                lines.push(format!("{key:?}\t{}", display_value(value)));
                Ok::<(), RuneTrieError>(())
            })?;
            // Walk order is unspecified; sort for stable output.
            lines.sort();
            for line in &lines {
                println!("{line}");
            }
            info!(count = lines.len(), "entries dumped");
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AppConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| RuneTrieError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
