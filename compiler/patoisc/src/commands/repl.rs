//! The interactive read-evaluate loop.
//!
//! Each line runs as a complete program against one process-scoped
//! global scope created at startup, so declarations persist across
//! inputs. Stage errors are reported and the loop continues with the
//! next input; an empty line, end of input, or an input containing the
//! `exit` keyword terminates the process with a non-zero status.

use crate::pipeline::run_source;
use crate::rewrite::rewrite;
use patois_eval::global_scope;
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">> ";

/// Start the REPL. Only ever returns by exiting the process.
pub fn start_repl() -> ! {
    let scope = global_scope();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{PROMPT}");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            // End of input counts as the empty line.
            Ok(0) | Err(_) => std::process::exit(1),
            Ok(_) => {}
        }
        if should_exit(&line) {
            std::process::exit(1);
        }

        match run_source(&line, &scope) {
            Ok(value) => println!("{value}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }
}

/// An empty line or any input containing the `exit` keyword (after
/// rewriting, so the slang `bounce` works too) ends the session.
fn should_exit(line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }
    rewrite(line)
        .split(|ch: char| !(ch.is_ascii_alphabetic() || ch == '_'))
        .any(|word| word == "exit")
}
