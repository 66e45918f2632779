//! CLI commands, one module per command.

mod repl;
mod run;

pub use repl::start_repl;
pub use run::run_file;

/// Read a source file or report the failure and exit.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            std::process::exit(1);
        }
    }
}
