//! Interactive session: every line is one command against the same store.

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use tracing::debug;

use crate::app::App;
use crate::cli::parser::ShellLine;
use crate::dispatch;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};

pub fn run(app: &mut App) -> AppResult<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        info("fleetwatch session started. Type 'help' for commands, 'exit' to quit.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("fleetwatch> ");
            io::stdout().flush().ok();
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words = match shell_words::split(&line) {
            Ok(words) => words,
            Err(e) => {
                error(e);
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => continue,
            Some(w) if w.starts_with('#') => continue,
            Some("exit") | Some("quit") => break,
            Some(_) => {}
        }

        debug!(line = %line, "session command");
        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => {
                if let Err(e) = dispatch(&parsed.command, app) {
                    error(e);
                }
            }
            Err(e) => {
                // help/usage output and parse errors both land here
                e.print().ok();
            }
        }
    }

    Ok(())
}
