use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use minima::{evaluate, get_result, interpreter::value::environment::Env, parse};

/// minima is a small, dynamically-typed expression language with
/// first-class functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minima to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// printable value of a minima script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script to run, or a path when --file is given. Omit it to start
    /// the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt.
///
/// One environment lives for the whole session, so bindings persist from
/// line to line. Each line is parsed on its own; when it parses cleanly it
/// is evaluated and the resulting value is printed in its inspect form.
/// Runtime errors are printed and the session continues.
fn repl() {
    let environment = Env::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            for error in &errors {
                eprintln!("{error}");
            }
            continue;
        }

        match evaluate(&program, &environment) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("ERROR: {e}"),
        }
    }
}
