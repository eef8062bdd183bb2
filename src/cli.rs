//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **edit** (default): interactive tag list in the terminal
//! - **add**: commit values non-interactively and print the result
//! - **config**: show the resolved configuration or its path
//!
//! Every command prints the final values as a JSON array on stdout, so the
//! output can be fed back with `--value`.
//!
//! # Examples
//!
//! ```bash
//! # Free-form list seeded from earlier output
//! taglist --value '["a@example.com"]'
//!
//! # Closed vocabulary with one pre-selected entry, at most two picks
//! taglist --vocab 'red*,green,blue' --max 2
//!
//! # Scripted use
//! taglist add --vocab 'red,green' red purple
//! ```

use crate::config::TaglistConfig;
use crate::seed::Seed;
use crate::taglist::TagListConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Interactive multi-value tag input
#[derive(Parser, Debug)]
#[command(name = "taglist", version, about, long_about = None)]
pub struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Edit a tag list interactively (default)
    #[command(visible_alias = "e")]
    Edit {
        #[command(flatten)]
        seed: SeedArgs,
    },
    /// Add values without the interactive UI
    #[command(visible_alias = "a")]
    Add {
        #[command(flatten)]
        seed: SeedArgs,
        /// Values to commit, in order
        values: Vec<String>,
    },
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the resolved configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

/// Seed data and behavior flags shared by `edit` and `add`
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Closed vocabulary, comma separated; suffix an entry with '*' to pre-select it
    #[arg(long, value_name = "LIST", conflicts_with = "value")]
    pub vocab: Option<String>,

    /// Initial free-form values as a JSON array of strings
    #[arg(long, value_name = "JSON")]
    pub value: Option<String>,

    /// Allow the same value more than once
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Maximum number of items (0 = unbounded)
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Allow reordering items (Alt+Left/Right on a selected item)
    #[arg(long)]
    pub sortable: bool,

    /// Title shown on the input widget
    #[arg(long)]
    pub prompt: Option<String>,
}

impl SeedArgs {
    /// Merge the flags over the configured defaults
    #[must_use]
    pub fn list_config(&self, config: &TaglistConfig) -> TagListConfig {
        let defaults = config.list;
        TagListConfig {
            allow_duplicates: self.allow_duplicates || defaults.allow_duplicates,
            max_items: self.max.unwrap_or(defaults.max_items),
            reorder_enabled: self.sortable || defaults.reorder_enabled,
        }
    }

    /// Seed data: `--vocab`, then `--value`, then the configured vocabulary
    #[must_use]
    pub fn seed(&self, config: &TaglistConfig) -> Seed {
        if let Some(vocab) = &self.vocab {
            Seed::from_vocabulary_spec(vocab)
        } else if let Some(raw) = &self.value {
            Seed::from_serialized(raw)
        } else if !config.vocabulary.is_empty() {
            Seed::Vocabulary(config.vocabulary.clone())
        } else {
            Seed::default()
        }
    }

    /// Widget title
    #[must_use]
    pub fn prompt(&self, config: &TaglistConfig) -> String {
        self.prompt.clone().unwrap_or_else(|| config.prompt.clone())
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to `edit` with the top-level seed flags
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Edit {
            seed: self.seed.clone(),
        })
    }
}
