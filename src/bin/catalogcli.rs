use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use libris::catalog::Catalog;
use libris::config::CliConfig;
use libris::{db_error, db_warn};
use libris::debugger::{Component, set_debug_level};
use libris::shell::{self, Reply};

fn main() -> Result<()> {
    let config = CliConfig::from_env();
    set_debug_level(config.debug_level);

    let mut catalog = if config.load_sample {
        Catalog::with_sample_books()
    } else {
        Catalog::new()
    };

    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &config.history {
        if let Err(e) = rl.load_history(path) {
            db_warn!(Component::Shell, "no history loaded from {}: {}", path.display(), e);
        }
    }

    println!("Libris catalog ({} books)", catalog.len());
    println!("Type 'help' for commands. Ctrl+D to exit");

    loop {
        let line = match rl.readline("libris> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                db_error!(Component::Shell, "reading input failed: {}", e);
                return Err(e.into());
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        rl.add_history_entry(input)?;

        let result = shell::parse(input).and_then(|cmd| shell::execute(&mut catalog, cmd));

        match result {
            Ok(Reply::Quit) => break,
            Ok(Reply::Message(msg)) => println!("{msg}"),
            Ok(Reply::Records(records)) => {
                if records.is_empty() {
                    println!("No matching book found.");
                }
                for record in records {
                    println!("{record}");
                }
            }
            Err(error) => println!("{error}"),
        }
    }

    if let Some(path) = &config.history {
        if let Err(e) = rl.save_history(path) {
            db_error!(Component::Shell, "could not save history to {}: {}", path.display(), e);
        }
    }

    Ok(())
}
