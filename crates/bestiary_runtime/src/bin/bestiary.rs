//! Bestiary grammar explorer entry point.

use bestiary_runtime::{Repl, init_tracing};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("bestiary {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.trace);

    let mut repl = Repl::new()?;

    for file in &config.files {
        repl.eval_file(file)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mBestiary\x1b[0m - Stat block grammar explorer

\x1b[1mUSAGE:\x1b[0m
    bestiary [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files of explorer commands to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run files and exit (no REPL)
    --trace            Log grammar tracing to stderr (ignores RUST_LOG)

\x1b[1mEXAMPLES:\x1b[0m
    bestiary                      Start the explorer
    bestiary -b goblin.txt        Parse every line of goblin.txt and exit
    bestiary --trace              Start with grammar tracing

\x1b[1mREPL COMMANDS:\x1b[0m
    :action TEXT                  Parse an action
    :feature NAME | DESCRIPTION   Parse a feature
    :movement, :ac, :hp, :type    Parse an auxiliary stat line
    :dice TEXT                    Find dice expressions
    :help, :quit
    Ctrl+D                        Exit"
    );
}
