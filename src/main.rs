//! coldiff - compare one column's values between two CSV files

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};

use coldiff::config::{
    Config, OutputFormat, DEFAULT_HEADER, DEFAULT_ORIGINAL, DEFAULT_UPDATED,
};
use coldiff::diff::DiffEngine;
use coldiff::logging;
use coldiff::output::{render_to_stdout, TerminalOutput};
use coldiff::parser::Delimiter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Auto,
    Always,
    Never,
}

impl CliColor {
    fn resolve(self) -> ColorChoice {
        match self {
            CliColor::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            CliColor::Auto | CliColor::Never => ColorChoice::Never,
            CliColor::Always => ColorChoice::Always,
        }
    }
}

/// Compare one column's distinct values between an original and an updated CSV file
#[derive(Parser, Debug)]
#[command(name = "coldiff")]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
struct Cli {
    /// Full or relative path to the original/older file
    #[arg(short, long, default_value = DEFAULT_ORIGINAL)]
    orig: String,

    /// Full or relative path to the updated/newer file
    #[arg(short, long, default_value = DEFAULT_UPDATED)]
    updated: String,

    /// Name of target header column in both original and updated files
    #[arg(short = 'h', long, default_value = DEFAULT_HEADER)]
    header: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Field delimiter (single character or "tab"); inferred from the extension by default
    #[arg(short, long)]
    delimiter: Option<Delimiter>,

    /// When to color terminal output
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColor,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    logging::init(logging::level_for(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::new(cli.orig, cli.updated, cli.header)
        .with_output_format(cli.format.into())
        .with_color_choice(cli.color.resolve());
    if let Some(delimiter) = cli.delimiter {
        config = config.with_delimiter(delimiter);
    }

    // Reject missing inputs before printing anything or touching the filesystem
    config.validate()?;

    let terminal = TerminalOutput::new();
    let is_terminal = config.output_format == OutputFormat::Terminal;
    let stdout = StandardStream::stdout(config.color_choice);

    if is_terminal {
        terminal.write_banner(
            &mut stdout.lock(),
            &config.original,
            &config.updated,
            &config.header,
        )?;
    }

    let report = DiffEngine::new(config.clone())
        .run()
        .with_context(|| {
            format!(
                "Failed to compare {} and {} on header {}",
                config.original, config.updated, config.header
            )
        })?;

    render_to_stdout(&report, config.output_format, config.color_choice)?;

    if is_terminal {
        terminal.write_success(&mut stdout.lock())?;
    }

    Ok(())
}
