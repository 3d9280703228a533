mod check;
mod compare;
mod config;
mod filter;
mod output;
mod parse;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::ReqverConfig;
use console::style;
use env_logger::{Builder, Env};
use output::Format;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "reqver")]
#[command(about = "Parse, compare and match semantic versions against requirements")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to reqver.toml, then text)
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a version and print its components
    Parse(parse::ParseArgs),

    /// Compare two versions (prints lt, eq or gt)
    Compare(compare::CompareArgs),

    /// Check whether a version satisfies a requirement (exit code 1 if not)
    #[command(name = "match")]
    Match(check::MatchArgs),

    /// Print the versions that satisfy a requirement
    Filter(filter::FilterArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),
}

fn init_logger(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = ReqverConfig::load_from_cwd()?.unwrap_or_default();
    let format = config.format(args.format);

    match args.command {
        Commands::Parse(parse_args) => parse::execute(parse_args, format),
        Commands::Compare(compare_args) => compare::execute(compare_args, format),
        Commands::Match(match_args) => {
            let allow_pre = config.allow_pre(match_args.allow_pre_flag());
            check::execute(match_args, format, allow_pre)
        }
        Commands::Filter(filter_args) => {
            let allow_pre = config.allow_pre(filter_args.allow_pre_flag());
            filter::execute(filter_args, format, allow_pre)
        }
        Commands::Sort(sort_args) => sort::execute(sort_args, format),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
