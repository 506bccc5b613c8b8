//! intcode - Run Intcode programs and search amplifier phase settings
//!
//! # Usage
//!
//! ```bash
//! # Run a program with inputs, print outputs
//! intcode run program.txt 1
//!
//! # Best linear-chain signal over phases 0-4
//! intcode amp program.txt
//!
//! # Best feedback-loop signal over phases 5-9, one thread per amplifier
//! intcode amp --feedback --threaded program.txt
//!
//! # Custom phase pool
//! intcode amp --phases 0,1,2 program.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Program fault (bad opcode, starved input, ...)
//! - 2: Invalid arguments or IO error

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use intcode::{
    best_signal_with, load_path, parse_program, Interpreter, IntcodeError, NetworkConfig, Scheduler,
    Topology, Word,
};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let outcome = match args.first().map(String::as_str) {
        Some("run") => cmd_run(&args[1..]),
        Some("amp") => cmd_amp(&args[1..]),
        Some("-h" | "--help") => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Some(other) => {
            eprintln!("Unknown command: {}\n", other);
            print_help();
            return ExitCode::from(2);
        }
        None => {
            print_help();
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e.chain().any(|cause| is_program_fault(cause)) {
                ExitCode::FAILURE
            } else {
                ExitCode::from(2)
            }
        }
    }
}

fn is_program_fault(cause: &(dyn std::error::Error + 'static)) -> bool {
    matches!(
        cause.downcast_ref::<IntcodeError>(),
        Some(e) if !matches!(e, IntcodeError::Io(_) | IntcodeError::Parse { .. })
    )
}

fn cmd_run(args: &[String]) -> Result<()> {
    let Some((path, inputs)) = args.split_first() else {
        bail!("run: no program file specified");
    };
    let program = load_path(path).with_context(|| format!("loading {}", path))?;
    let inputs = inputs
        .iter()
        .map(|s| s.trim().parse::<Word>().with_context(|| format!("invalid input {:?}", s)))
        .collect::<Result<Vec<_>>>()?;

    let outputs = Interpreter::new(&program, inputs).run_to_halt()?;
    let joined: Vec<String> = outputs.iter().map(ToString::to_string).collect();
    println!("{}", joined.join(","));
    Ok(())
}

fn cmd_amp(args: &[String]) -> Result<()> {
    let mut config = NetworkConfig::linear();
    let mut phases = None;
    let mut path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" | "--feedback" => config.topology = Topology::Feedback,
            "-t" | "--threaded" => config.scheduler = Scheduler::Threaded,
            "-p" | "--phases" => {
                let list = iter.next().context("--phases needs a value")?;
                phases = Some(parse_program(list).with_context(|| format!("invalid phases {:?}", list))?);
            }
            _ if arg.starts_with('-') => bail!("unknown option: {}", arg),
            _ => path = Some(arg),
        }
    }

    let path = path.context("amp: no program file specified")?;
    let program = load_path(path).with_context(|| format!("loading {}", path))?;
    let phases = phases.unwrap_or_else(|| {
        if config.is_feedback() {
            (5..=9).collect()
        } else {
            (0..=4).collect()
        }
    });

    let best = best_signal_with(&program, &phases, &config)?;
    let order: Vec<String> = best.phases.iter().map(ToString::to_string).collect();
    println!("{} (phases {})", best.signal, order.join(","));
    Ok(())
}

fn print_help() {
    eprintln!("intcode - Intcode VM runner");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    intcode run <program> [input ...]");
    eprintln!("    intcode amp [--feedback] [--threaded] [--phases a,b,c] <program>");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -f, --feedback    Wire the last amplifier back into the first (default phases 5-9)");
    eprintln!("    -t, --threaded    Run each amplifier on its own thread");
    eprintln!("    -p, --phases      Comma-separated phase pool (default 0-4)");
    eprintln!("    -h, --help        Show this help");
}
