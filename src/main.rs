use std::path::PathBuf;

use clap::Parser;
use log::error;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use schemeling::Session;

/// A small Scheme-flavored Lisp REPL.
#[derive(Parser)]
struct Cli {
    /// Read and evaluate each line of this file before starting the REPL,
    /// instead of reading from stdin.
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = Session::new();

    match cli.script {
        Some(path) => run_file(&mut session, &path),
        None => run_repl(&mut session),
    }
}

fn run_file(session: &mut Session, path: &PathBuf) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("couldn't read {}: {err}", path.display());
            std::process::exit(1);
        }
    };
    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match session.run(line) {
            Ok(result) => println!("{result}"),
            Err(err) => {
                error!("{err}");
                eprintln!("{err}");
            }
        }
    }
}

fn run_repl(session: &mut Session) {
    let mut editor = DefaultEditor::new().expect("failed to start line editor");
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                match session.run(&line) {
                    Ok(result) => println!("{result}"),
                    Err(err) => {
                        error!("{err}");
                        eprintln!("{err}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!("readline error: {err}");
                break;
            }
        }
    }
}
