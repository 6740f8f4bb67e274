//! Command-line interface for papier
//! This binary is used to inspect and check papier files.
//!
//! Usage:
//!   papier inspect `<path>` [--format `<format>`] [--label-width `<n>`]  - Print tokens or the tree
//!   papier check `<path>`                                            - Report structural errors
//!   papier formats                                                 - List all available formats
//!
//! Settings come from the built-in defaults, then `papier.toml` in the working directory
//! if present, then `--config <file>`, then command-line flags.

use clap::{value_parser, Arg, ArgMatches, Command};
use papier::papier::config::{Loader, PapierConfig, LOCAL_CONFIG_FILE};
use papier::papier::logging::init_logging;
use papier::papier::parsing::build;
use papier::papier::processor::{available_formats, process_file, ProcessingSpec};
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("papier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting papier files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the tokens or the document tree of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the papier file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-treeviz', 'token-simple')"),
                )
                .arg(
                    Arg::new("label-width")
                        .long("label-width")
                        .value_parser(value_parser!(usize))
                        .help("Longest treeviz label before truncation"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a file and report structural errors")
                .arg(
                    Arg::new("path")
                        .help("Path to the papier file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("formats").about("List all available formats"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(Some(&config.logging.filter));

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches, &config),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("formats", _)) => {
            handle_formats_command();
            ExitCode::SUCCESS
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<PapierConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(inspect) = matches.subcommand_matches("inspect") {
        if let Some(format) = inspect.get_one::<String>("format") {
            loader = loader.set_override("inspect.format", format.as_str())?;
        }
        if let Some(&width) = inspect.get_one::<usize>("label-width") {
            loader = loader.set_override("inspect.label_width", width as i64)?;
        }
    }
    loader.build()
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches, config: &PapierConfig) -> ExitCode {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let spec = match ProcessingSpec::from_string(&config.inspect.format) {
        Ok(spec) => spec.with_label_width(config.inspect.label_width),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Available formats: {}", available_formats().join(", "));
            return ExitCode::FAILURE;
        }
    };

    match process_file(path, &spec) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> ExitCode {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match build(&source) {
        Ok(doc) => {
            let (text, sub_documents) = doc.count_by_type();
            println!(
                "{}: ok ({} text blocks, {} sub-documents)",
                path, text, sub_documents
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}:{}: {}", path, e.position(), e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
