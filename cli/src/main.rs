use clap::Parser;
use route_check_common::util::config::Config;
use route_check_common::util::{check, logger};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = "route_check.toml";

/// Writes PASS or FAIL next to a router log depending on its net summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Router log to check. The verdict goes to this path with `.log` removed.
    #[arg(value_name = "LOG", allow_hyphen_values = true)]
    log: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the verdict here instead of next to the log.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    // Pipelines pass extra arguments; only the log path is used.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<OsString>,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;

    if !args.extra.is_empty() {
        log::debug!("Ignoring {} extra argument(s)", args.extra.len());
    }

    let report = check::inspect(&args.log, &config);
    if report.is_complete() {
        println!("{}", report.summary);
    }
    check::record(&args.log, args.output.as_deref(), &config, report)?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG));
    if path.exists() {
        log::info!("Loading configuration from {:?}", path);
        return Config::load(path);
    }

    if explicit.is_some() {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            path
        );
    } else {
        log::debug!("No {} in working directory, using defaults", DEFAULT_CONFIG);
    }
    Ok(Config::default())
}
