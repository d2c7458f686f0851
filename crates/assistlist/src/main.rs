//! `assistlist` - CLI for the educational-assistance list
//!
//! Runs the interactive editor by default; `render` writes the printable
//! document and `config` inspects the resolved configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use clap::Parser;

use assistlist::cli::{Cli, Command, ConfigCommand};
use assistlist::{init_logging, render, Config, Editor, FieldLists, RenderOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command.unwrap_or(Command::Edit) {
        Command::Edit => handle_edit(&config),
        Command::Render => handle_render(&config),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_edit(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.store();
    let entries = store.load()?;

    let stdin = io::stdin();
    let mut editor = Editor::new(stdin.lock(), io::stdout(), FieldLists::default(), entries);
    editor.run(&store)?;
    Ok(())
}

fn handle_render(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match render(&config.store.path, config.document_path())? {
        RenderOutcome::NoEntries => {
            println!("No entries found. Run `assistlist edit` first.");
        }
        RenderOutcome::Written { entries, .. } => {
            println!(
                "Saved DOCX with {entries} entries: {}",
                config.document_path().display()
            );
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Path:               {}", config.store.path.display());
                println!("  Backup path:        {}", config.store.backup_path.display());
                println!();
                println!("[Document]");
                println!("  Path:               {}", config.document.path.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
