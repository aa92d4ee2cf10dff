//! Interactive session over a single store.
//!
//! Every other command starts from a freshly seeded store and forgets its
//! changes on exit. `shell` keeps one store for all commands read from
//! stdin, one command per line, until EOF or `exit`. `config` commands take
//! effect for the rest of the session.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::debug;

use super::{CommandResult, Session};
use crate::{dispatch, Cli, Commands};

pub fn run(session: &Session) -> CommandResult {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };
        match words.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => break,
            Some(_) => {}
        }

        let cli = match Cli::try_parse_from(std::iter::once("freshkeep".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // Also covers --help output.
                let _ = e.print();
                continue;
            }
        };
        if matches!(cli.command, Commands::Shell) {
            eprintln!("error: already in a shell");
            continue;
        }
        let changes_config = matches!(cli.command, Commands::Config { .. });
        if let Err(e) = dispatch(cli.command, session) {
            eprintln!("error: {e}");
        }
        if changes_config {
            if let Err(e) = session.reload_config() {
                eprintln!("error: {e}");
            }
        }

        let events = session.store().write(|s| s.drain_events())?;
        for event in events {
            debug!(?event, "store changed");
        }
    }
    Ok(())
}

/// Split a line on whitespace, keeping single- or double-quoted runs together.
pub(crate) fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
