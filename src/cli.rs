use crate::{
    config::Config,
    csv, extract,
    util::{ensure_dir, ensure_parent},
    xlsx,
};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Printed on stdout when the positional arguments are missing or extra.
pub const USAGE: &str = "Usage: ssm-report <input_md> <output_csv> <output_xlsx>";

#[derive(Parser, Debug)]
#[command(name = "ssm-report")]
#[command(about = "SSM instance-health report parser (markdown -> CSV + styled XLSX)")]
pub struct Args {
    /// Markdown report to parse.
    pub input_md: PathBuf,

    /// Destination for the CSV table.
    pub output_csv: PathBuf,

    /// Destination for the XLSX workbook.
    pub output_xlsx: PathBuf,

    /// Path to config TOML. If omitted, uses ./ssm-report.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let _guard = init_logging(&args, &cfg)?;
    run(&cfg, &args)
}

fn load_config(user: Option<&Path>) -> Result<Config> {
    if let Some(p) = user {
        return Config::load(p);
    }
    let default = PathBuf::from("ssm-report.toml");
    if default.exists() {
        Config::load(&default)
    } else {
        Ok(Config::default())
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(true).boxed()
    };

    let (file_layer, guard) = if let Some(path) = log_file_path(cfg) {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn log_file_path(cfg: &Config) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }
    if cfg.logging.file_path.is_empty() {
        Some(PathBuf::from("ssm-report.log"))
    } else {
        Some(PathBuf::from(&cfg.logging.file_path))
    }
}

fn run(cfg: &Config, args: &Args) -> Result<()> {
    let content = std::fs::read_to_string(&args.input_md)
        .with_context(|| format!("reading report: {}", args.input_md.display()))?;

    let records = extract::parse_report(&content);
    info!("parsed {} instance record(s)", records.len());

    ensure_parent(&args.output_csv)?;
    let csv_file = File::create(&args.output_csv)
        .with_context(|| format!("creating CSV: {}", args.output_csv.display()))?;
    csv::write_table(BufWriter::new(csv_file), &records)
        .with_context(|| format!("writing CSV: {}", args.output_csv.display()))?;

    ensure_parent(&args.output_xlsx)?;
    xlsx::write_workbook(&cfg.output, &args.output_xlsx, &records)?;

    if cfg.output.print_summary {
        println!("Successfully created CSV: {}", args.output_csv.display());
        println!("Successfully created Excel: {}", args.output_xlsx.display());
    }

    Ok(())
}
