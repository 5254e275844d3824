//! jpar command-line tool for validating, formatting, and transcoding JSON
//! documents.
//!
//! Usage: jpar [OPTIONS] [FILE|DIR]
//!
//! Options:
//!   -t, --to <FORMAT>      Output format (json, compact, yaml, toml, debug)
//!   -o, --output <FILE>    Write output to specified file
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   --max-depth <N>        Maximum nesting depth
//!   -v, --verbose          Log parser activity to stderr
//!   -h, --help             Print help
//!   -V, --version          Print version

use libjpar::{encode, parse_with_options, Format, ParseOptions, Value};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;
use tracing::{debug, Level};

mod transcode;

/// Output format selected with -t.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Compact,
    Yaml,
    Toml,
    Debug,
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s {
        "json" => Some(OutputFormat::Json),
        "compact" => Some(OutputFormat::Compact),
        "yaml" | "yml" => Some(OutputFormat::Yaml),
        "toml" => Some(OutputFormat::Toml),
        "debug" => Some(OutputFormat::Debug),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut output_format = OutputFormat::Json;
    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut verbose = false;
    let mut options = ParseOptions::default();
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jpar {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-t" | "--to" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -t requires a format argument");
                    process::exit(1);
                }
                output_format = match parse_format(&args[i]) {
                    Some(format) => format,
                    None => {
                        eprintln!("Error: Unknown format: {}", args[i]);
                        process::exit(1);
                    }
                };
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "--max-depth" => {
                i += 1;
                let depth = args.get(i).and_then(|s| s.parse::<usize>().ok());
                match depth {
                    Some(depth) => options = options.with_max_depth(depth),
                    None => {
                        eprintln!("Error: --max-depth requires a non-negative integer");
                        process::exit(1);
                    }
                }
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            "-" => {
                // Explicit stdin
                // input_path stays None, which means stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            path => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(path);
            }
        }
        i += 1;
    }

    init_logging(verbose);

    if let Some(path) = input_path {
        if Path::new(path).is_dir() {
            if output_file.is_some() {
                eprintln!("Error: --output cannot be used with directory input");
                process::exit(1);
            }
            process_directory(path, output_format, check_only, &options);
            return;
        }
    }

    let input: Vec<u8> = match input_path {
        Some(path) => match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let exit_code = process_input(
        &input,
        input_path,
        output_format,
        output_file,
        check_only,
        &options,
    );
    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn process_directory(
    dir_path: &str,
    output_format: OutputFormat,
    check_only: bool,
    options: &ParseOptions,
) {
    let entries = match fs::read_dir(dir_path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir_path, e);
            process::exit(1);
        }
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "json").unwrap_or(false))
        .collect();
    paths.sort();
    debug!(dir = dir_path, files = paths.len(), "processing directory");

    let mut had_errors = false;
    for path in paths {
        let path_str = path.to_string_lossy();
        let input = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading {}: {}", path_str, e);
                had_errors = true;
                continue;
            }
        };

        let exit_code = process_input(
            &input,
            Some(&path_str),
            output_format,
            None,
            check_only,
            options,
        );
        if exit_code != 0 {
            had_errors = true;
        }
    }

    process::exit(if had_errors { 1 } else { 0 });
}

fn process_input(
    input: &[u8],
    input_file: Option<&str>,
    output_format: OutputFormat,
    output_file: Option<&str>,
    check_only: bool,
    options: &ParseOptions,
) -> i32 {
    let value = match parse_with_options(input, options) {
        Ok(v) => v,
        Err(e) => {
            if let Some(path) = input_file {
                eprintln!("{}: {}", path, e);
            } else {
                eprintln!("Parse error: {}", e);
            }
            return 1;
        }
    };

    if check_only {
        match input_file {
            Some(path) => println!("{}: ok", path),
            None => println!("ok"),
        }
        return 0;
    }

    match render(&value, output_format) {
        Ok(output) => {
            write_text_output(&output, output_file);
            0
        }
        Err(e) => {
            eprintln!("Error: Cannot convert to {:?}: {}", output_format, e);
            1
        }
    }
}

fn render(value: &Value, output_format: OutputFormat) -> Result<String, String> {
    match output_format {
        OutputFormat::Json => Ok(encode(value, Format::JsonPretty)),
        OutputFormat::Compact => Ok(encode(value, Format::Json)),
        OutputFormat::Yaml => transcode::yaml::encode(value),
        OutputFormat::Toml => transcode::toml::encode(value),
        OutputFormat::Debug => Ok(format!("{:#?}", value)),
    }
}

fn write_text_output(output: &str, output_file: Option<&str>) {
    if let Some(path) = output_file {
        if let Err(e) = fs::write(path, output) {
            eprintln!("Error writing {}: {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", output);
        // Ensure output ends with newline
        if !output.ends_with('\n') {
            println!();
        }
    }
}

fn print_help() {
    println!(
        "jpar - JSON command-line tool

USAGE:
    jpar [OPTIONS] [FILE|DIR]

ARGS:
    [FILE|DIR]    Input file or directory (reads from stdin if not provided)
                  When a directory is given, processes all .json files in it

OPTIONS:
    -t, --to <FORMAT>      Output format [default: json]
                           Supported: json, compact, yaml, toml, debug

    -o, --output <FILE>    Write output to specified file (not valid with directory input)

    --check                Check if input is valid (exit 0 if valid, 1 if invalid)

    --max-depth <N>        Maximum nesting depth of arrays and objects [default: {}]

    -v, --verbose          Log parser activity to stderr

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Pretty-print a document
    jpar config.json

    # Validate every document in a directory
    jpar --check testdata/

    # Convert to YAML
    jpar -t yaml config.json",
        libjpar::DEFAULT_MAX_DEPTH
    );
}
