use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use calc::{interpreter::session::Session, util::format::format_outcome};
use clap::Parser;
use log::warn;

/// calc evaluates arithmetic expressions and variable assignments, one per
/// line, printing each result with five decimal places.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads lines from a file instead of standard input.
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Suppresses the `>> ` prompt in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// Expressions to evaluate in order, sharing one set of variables.
    expressions: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut session = Session::new();

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   path.display());
                         std::process::exit(1);
                     });
        for line in script.lines() {
            run_line(&mut session, line);
        }
    } else if !args.expressions.is_empty() {
        for expr in &args.expressions {
            run_line(&mut session, expr);
        }
    } else {
        repl(&mut session, !args.quiet);
    }
}

/// Evaluates one line and prints its outcome. Blank lines print nothing.
fn run_line(session: &mut Session, line: &str) {
    if let Some(outcome) = session.eval_line(line).transpose() {
        println!("{}", format_outcome(&outcome));
    }
}

/// Reads lines from standard input until it is exhausted or unreadable.
fn repl(session: &mut Session, prompt: bool) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if prompt {
        print_prompt(&mut stdout);
    }
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stopped reading input: {e}");
                break;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        run_line(session, &line);
        if prompt {
            print_prompt(&mut stdout);
        }
    }
}

fn print_prompt(stdout: &mut io::Stdout) {
    print!(">> ");
    if let Err(e) = stdout.flush() {
        warn!("failed to flush prompt: {e}");
    }
}
