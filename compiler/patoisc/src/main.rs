//! Patois CLI.
//!
//! With no arguments (or `repl`) the interactive loop starts; with a
//! file path (or `run <path>`) the file runs once through the pipeline.

use patoisc::commands::{run_file, start_repl};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("repl") => start_repl(),
        Some("help" | "--help" | "-h") => print_usage(),
        Some("run") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: patois run <file.pat>");
                std::process::exit(1);
            };
            run_file(path);
        }
        Some(path) => run_file(path),
    }
}

fn print_usage() {
    println!("Patois - a slang-flavoured scripting language");
    println!();
    println!("Usage:");
    println!("  patois                 Start the interactive REPL");
    println!("  patois repl            Start the interactive REPL");
    println!("  patois run <file.pat>  Run a source file");
    println!("  patois <file.pat>      Run a source file");
    println!();
    println!("Files without the .pat extension are ignored by run mode.");
}
