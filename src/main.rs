use std::{
    fs,
    io::{self, BufRead},
};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use glyphic::{
    config::{Config, DEFAULT_MAX_DEPTH},
    error::Error,
    eval_line,
    interpreter::evaluator::core::Engine,
    run_script,
};
use log::{error, info};

/// glyphic evaluates APL-style array expressions.
///
/// Without a script it reads statements from standard input, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells glyphic to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last line of a
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Deepest nesting of parentheses and function operands the parser
    /// accepts.
    #[arg(long, env = "GLYPHIC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Logging verbosity.
    #[arg(long, env = "GLYPHIC_LOG_LEVEL", value_enum, default_value = "warn")]
    log_level: LogLevel,

    contents: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(args.log_level.into())
        .init();

    info!("glyphic v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::new(args.max_depth, args.pipe_mode);

    let Some(contents) = args.contents else {
        repl(config);
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

    if let Err(e) = run(&script, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(script: &str, config: Config) -> Result<(), Error> {
    let mut engine = Engine::with_config(config);
    let result = run_script(&mut engine, script)?;
    if config.auto_print
       && let Some((line, value)) = result
    {
        println!("{}", value.formatted(line)?);
    }
    Ok(())
}

/// Reads statements from standard input until it closes. Errors are reported
/// and the session continues with its variables intact.
fn repl(config: Config) {
    let mut engine = Engine::with_config(config);
    let stdin = io::stdin();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line_number = index + 1;
        let source = match line {
            Ok(source) => source,
            Err(e) => {
                error!("Failed to read from standard input: {e}");
                break;
            },
        };

        match eval_line(&mut engine, &source, line_number) {
            Ok(Some(value)) => match value.formatted(line_number) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("{e}"),
            },
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
