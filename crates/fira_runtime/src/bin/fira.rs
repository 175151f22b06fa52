//! Fira CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use fira_runtime::Repl;
use fira_store::{persist, Lexicon};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    db_path: Option<PathBuf>,
    reset: bool,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
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

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--reset" => config.reset = true,
            "--db" => {
                i += 1;
                if i >= args.len() {
                    return Err("--db requires a path".into());
                }
                config.db_path = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
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
        println!("fira {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // A missing snapshot file starts an empty lexicon; --reset ignores
    // any existing snapshot.
    let lexicon = match (&config.db_path, config.reset) {
        (Some(path), false) if path.exists() => persist::load_from_file(path)?,
        _ => Lexicon::new(),
    };

    let mut repl = Repl::new()?.with_lexicon(lexicon);
    if let Some(path) = &config.db_path {
        repl = repl.with_snapshot_path(path);
    }

    // Run any specified files first; an EXIT inside one ends the session.
    for file in &config.files {
        if repl.run_file(file)? {
            repl.save_snapshot()?;
            return Ok(());
        }
    }

    if config.batch_mode {
        repl.save_snapshot()?;
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
        "\x1b[1mFira\x1b[0m - FiraScript vocabulary interpreter

\x1b[1mUSAGE:\x1b[0m
    fira [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    .fira scripts to execute before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -b, --batch      Execute files and exit (no REPL)
    --db <path>      Lexicon snapshot to load at startup and save on exit
    --reset          Start with an empty lexicon, ignoring the snapshot

\x1b[1mEXAMPLES:\x1b[0m
    fira                          Start an interactive session
    fira --db fira.db             Persist the lexicon across sessions
    fira -b vocabulary.fira       Execute a script and exit
    fira roots.fira words.fira    Execute scripts, then start the REPL"
    );
}
