//! Taglist CLI application entry point
//!
//! Runs an interactive tag list in the terminal, or commits values
//! non-interactively, and prints the final values as a JSON array.
//!
//! # Usage
//!
//! ```bash
//! # Free-form values (Enter commits, Backspace on empty removes the last)
//! taglist
//!
//! # Closed vocabulary, pre-selecting "red"
//! taglist --vocab 'red*,green,blue'
//!
//! # Non-interactive
//! taglist add --value '["a"]' b c
//! ```
//!
//! # Configuration
//!
//! Defaults are read from `~/.config/taglist/config.toml` on Linux.

use colored::Colorize;
use std::process::ExitCode;
use taglist::{
    TaglistError,
    cli::{Cli, Commands, ConfigCommands, SeedArgs},
    config::{TaglistConfig, ThemeName},
    logging::{LogConfig, LogTarget, init_logging},
    taglist::{CommitResult, TagList},
    ui::{StatusPresenter, StdoutPresenter, ratatui_adapter::{TagListApp, Theme}},
};

type Result<T> = std::result::Result<T, TaglistError>;

fn load_config(cli: &Cli) -> Result<TaglistConfig> {
    let config = match &cli.config {
        Some(path) => TaglistConfig::load_from(path)?,
        None => TaglistConfig::load()?,
    };
    Ok(config)
}

fn print_values(values: &[String]) -> Result<()> {
    println!("{}", serde_json::to_string(values)?);
    Ok(())
}

/// Run the interactive editor; returns whether the user finished normally
fn run_edit(seed: &SeedArgs, config: &TaglistConfig) -> Result<bool> {
    let list = TagList::new(seed.list_config(config), seed.seed(config), StatusPresenter::new());
    let theme = match config.theme {
        ThemeName::Dark => Theme::dark(),
        ThemeName::Light => Theme::light(),
    };

    let app = TagListApp::new(seed.prompt(config)).with_theme(theme);
    match app.run(list)? {
        Some(values) => {
            print_values(&values)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn run_add(seed: &SeedArgs, values: &[String], config: &TaglistConfig, quiet: bool) -> Result<()> {
    let mut list = TagList::new(
        seed.list_config(config),
        seed.seed(config),
        StdoutPresenter::new(quiet),
    );

    for result in list.add_values(values.to_vec()).iter().zip(values) {
        if let (CommitResult::Rejected(reason), value) = result
            && !quiet
        {
            eprintln!("{} {value}: {reason}", "✗".yellow());
        }
    }
    print_values(&list.values())
}

fn run_config(command: ConfigCommands, cli: &Cli, config: &TaglistConfig) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => TaglistConfig::config_path()?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<bool> {
    let command = cli.get_command();

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Edit { .. }) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_target(target))?;

    let config = load_config(cli)?;
    let quiet = cli.quiet || config.quiet;
    tracing::debug!(?command, "starting");

    match &command {
        Commands::Edit { seed } => run_edit(seed, &config),
        Commands::Add { seed, values } => run_add(seed, values, &config, quiet).map(|()| true),
        Commands::Config(sub) => run_config(*sub, cli, &config).map(|()| true),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(130),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
