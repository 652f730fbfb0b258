/// interestring - learn more about strings
///
/// The main entry point for the annotator. It parses command-line arguments,
/// reads the strings to annotate and prints one annotated row per line.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use colored::Colorize;
use log::{debug, LevelFilter};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use interestring::app::run_annotator;
use interestring::config::{self, Config};
use interestring::utils::file_utils::InputSource;
use interestring::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "interestring",
    version,
    about = "Learn more about strings",
    long_about = "Annotates strings output with context useful during malware triage:
- Known DLLs and Win32 APIs
- Registry keys used for persistence
- Domains and IP addresses
- printf-style format strings

EXAMPLES:
    floss malware.exe | interestring -a
    interestring strings.txt
    interestring CreateRemoteThread"
)]
struct Args {
    /// A term or file to annotate (or pipe it in via stdin)
    strings_input: Option<String>,

    /// Only show annotated output
    #[arg(short = 'a', long = "annotated", action = ArgAction::SetTrue)]
    annotated: bool,

    /// Width of the string column (default: 50)
    #[arg(long = "col-width")]
    col_width: Option<usize>,

    /// Truncate strings longer than the column width
    #[arg(long = "truncate", action = ArgAction::SetTrue)]
    truncate: bool,

    /// Public suffix list to use instead of the bundled IANA list
    #[arg(long = "tld-file")]
    tld_file: Option<PathBuf>,

    /// Number of parallel workers (0=all cores, default: 1)
    #[arg(long = "jobs")]
    jobs: Option<usize>,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Log file path (default: stderr)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() {
    let args = Args::parse();

    // Nothing to read: no argument and nobody piping into us
    if args.strings_input.is_none() && io::stdin().is_terminal() {
        let _ = Args::command().print_help();
        process::exit(1);
    }

    setup_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "[!] Error:".red(), e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = merge_config(args)?;
    debug!("Effective configuration: {:?}", config);

    let source = InputSource::from_argument(args.strings_input.as_deref());
    let output = run_annotator(&source, &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for row in output.rows(config.truncate) {
        writeln!(handle, "{}", row)?;
    }

    if let Some(json_path) = &args.json {
        output_formatter::export_results_json(&output.results, json_path)?;
    }
    if let Some(csv_path) = &args.csv {
        output_formatter::create_csv_report(&output.results, csv_path)?;
    }

    Ok(())
}

/// Set up logging to stderr or a file
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("{} cannot open log file {}: {}", "[!]".yellow(), log_file.display(), e),
        }
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.init();
}

/// Load the configuration file, if any, and apply command line overrides
fn merge_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_config(Path::new(path))?,
        None => config::default_config(),
    };

    if args.annotated {
        config.annotated_only = true;
    }
    if args.truncate {
        config.truncate = true;
    }
    if let Some(col_width) = args.col_width {
        config.col_width = col_width;
    }
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }
    if args.tld_file.is_some() {
        config.tld_file = args.tld_file.clone();
    }

    Ok(config)
}
