//! Command-line interface for ennet
//! Expands abbreviations given as arguments, or one per line from stdin.
//!
//! Usage:
//!   ennet `<abbreviation>`... [--format `<format>`] [--config `<path>`]
//!   ennet --list-formats
//!   echo 'ul>li*3' | ennet
//!
//! Settings come from the built-in defaults, then `./ennet.toml` if it exists,
//! then `--config`, then `--format`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use ennet::ennet::config::{EnnetConfig, Loader};
use ennet::ennet::formats::FormatRegistry;
use ennet::ennet::{process, ProcessingError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when present, below `--config`
const LOCAL_CONFIG: &str = "ennet.toml";

fn main() {
    let matches = Command::new("ennet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand Emmet-like abbreviations into markup")
        .arg(
            Arg::new("abbreviation")
                .help("Abbreviations to expand (reads stdin lines when omitted)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'markup', 'treeviz', 'json')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./ennet.toml"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    if let Err(e) = handle_expand_command(&matches, &config, &registry) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<EnnetConfig, ProcessingError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// Logs go to stderr so they never mix with expansions on stdout
fn init_logging(config: &EnnetConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn handle_expand_command(
    matches: &ArgMatches,
    config: &EnnetConfig,
    registry: &FormatRegistry,
) -> Result<(), ProcessingError> {
    let sources: Vec<String> = match matches.get_many::<String>("abbreviation") {
        Some(values) => values.cloned().collect(),
        None => read_stdin_lines()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for source in &sources {
        let output = match process(source, &config.output.format, registry) {
            Ok(output) => output,
            Err(e) => {
                // Earlier expansions stay on stdout
                out.flush()?;
                return Err(e);
            }
        };
        out.write_all(output.as_bytes())?;
        if config.output.trailing_newline && !output.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>, ProcessingError> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
    }
}
