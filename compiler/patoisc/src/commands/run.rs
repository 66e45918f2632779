//! The `run` command: rewrite, lex, parse, and evaluate a source file.

use super::read_file;
use crate::pipeline::run_source;
use patois_eval::{global_scope, Value};
use std::ffi::OsStr;
use std::path::Path;

/// The Patois source file extension.
pub const SOURCE_EXTENSION: &str = "pat";

/// Run a Patois source file.
///
/// Files without the `.pat` extension are silently ignored — no error is
/// raised and nothing runs. On any stage error the message goes to
/// stderr and the process exits non-zero; otherwise the program's final
/// value is printed unless it is null.
pub fn run_file(path: &str) {
    if Path::new(path).extension().and_then(OsStr::to_str) != Some(SOURCE_EXTENSION) {
        return;
    }
    let content = read_file(path);
    let scope = global_scope();
    match run_source(&content, &scope) {
        Ok(Value::Null) => {}
        Ok(value) => println!("{value}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
