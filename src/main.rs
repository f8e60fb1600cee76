//! # minibasic
//!
//! Terminal driver: loads a program file, pumps the runtime, prints its
//! output, and answers its input requests from stdin.

use ansi_term::Style;
use clap::Parser;
use minibasic::lang::Error;
use minibasic::mach::{Event, Runtime};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A line-oriented BASIC dialect.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run.
    program: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let source = match fs::read_to_string(&args.program) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: {}", args.program, error);
            return ExitCode::FAILURE;
        }
    };
    let mut runtime = match Runtime::from_source(&source) {
        Ok(runtime) => runtime,
        Err(error) => {
            report(&error);
            return ExitCode::FAILURE;
        }
    };
    match pump(&mut runtime, &interrupted) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(error)) => {
            report(&error);
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn pump(runtime: &mut Runtime, interrupted: &Arc<AtomicBool>) -> io::Result<Option<Error>> {
    let mut stdout = io::stdout();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            interrupted.store(false, Ordering::SeqCst);
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Print(text) => {
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Event::Input(prompt) => {
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                let mut line = String::new();
                if io::stdin().read_line(&mut line)? == 0 {
                    runtime.end_of_input();
                } else {
                    runtime.enter(line.trim_end_matches(&['\r', '\n'][..]));
                }
            }
            Event::Errored(error) => return Ok(Some(error)),
            Event::Stopped => return Ok(None),
        }
    }
}

fn report(error: &Error) {
    eprintln!("?{}", Style::new().bold().paint(error.to_string()));
}
