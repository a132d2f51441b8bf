use crate::{
    constants::*,
    core::matrix::DuplicatePolicy,
    utils::util::Result,
};
use anyhow::anyhow;
use chrono::Datelike;
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or_default();
    if git_describe.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name="svdist",
          author="Tom Mokveld <tmokveld@pacificbiosciences.com>",
          version=&**FULL_VERSION,
          about="Structural variant collation and cross-sample event clustering",
          long_about = None,
          after_help = format!("Copyright (C) 2004-{}     Pacific Biosciences of California, Inc.
          This program comes with ABSOLUTELY NO WARRANTY; it is intended for
          Research Use Only and not for use in diagnostic procedures.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append one sample's calls from all callers to the shared per-sample table
    Collate(CollateArgs),
    /// Cluster calls across samples into events and write the distance matrix
    Cluster(ClusterArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Collate(_) => "collate",
            Command::Cluster(_) => "cluster",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct CollateArgs {
    /// Directory holding the per-caller output subdirectories
    #[arg(value_name = "DIR", value_parser = check_dir_exists)]
    pub dir: PathBuf,

    /// Sample identifier, used to locate caller outputs
    #[arg(value_name = "SAMPLE")]
    pub sample: String,

    /// Reference identifier recorded in the sample header
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Append to this table instead of <DIR>/<SAMPLE>.txt
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        value_parser = check_prefix_path
    )]
    pub output: Option<PathBuf>,
}

impl CollateArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("{}.txt", self.sample)))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct ClusterArgs {
    /// Directory holding all_data.txt; distmat.csv is written here
    #[arg(value_name = "DIR", value_parser = check_dir_exists)]
    pub dir: PathBuf,

    /// Read these tables, in order, instead of <DIR>/all_data.txt
    #[arg(
        long = "table",
        value_name = "TABLE",
        num_args = 1..,
        value_parser = check_file_exists
    )]
    pub tables: Option<Vec<PathBuf>>,

    /// Write the matrix to this file instead of <DIR>/distmat.csv
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        value_parser = check_prefix_path
    )]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: ClusterOptions,
}

impl ClusterArgs {
    pub fn table_paths(&self) -> Vec<PathBuf> {
        match &self.tables {
            Some(tables) => tables.clone(),
            None => vec![self.dir.join(ALL_DATA_FILE)],
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.dir.join(DISTMAT_FILE))
    }
}

#[derive(Args, Debug, Clone)]
pub struct ClusterOptions {
    /// Half-width of the window within which a call joins an existing event
    #[arg(
        help_heading("Advanced"),
        long,
        default_value_t = DEFAULT_WINDOW,
        value_parser = window_in_range
    )]
    pub window: i64,

    /// How several calls from one sample in the same event fill the matrix cell
    #[arg(
        help_heading("Advanced"),
        long,
        value_enum,
        default_value_t = DEFAULT_DUPLICATE_POLICY
    )]
    pub duplicate_policy: DuplicatePolicy,
}

impl ClusterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, updates: impl FnOnce(&mut Self)) -> Self {
        updates(&mut self);
        self
    }
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            duplicate_policy: DEFAULT_DUPLICATE_POLICY,
        }
    }
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// Sets up the logger with a specific verbosity level that is determined
/// by the number of occurrences of the `-v` or `--verbose` flag in the command-line arguments.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn window_in_range(s: &str) -> anyhow::Result<i64> {
    let window: i64 = s
        .parse::<i64>()
        .map_err(|_| anyhow!("`{}` is not a valid window size", s))?;
    if window < 1 {
        return Err(anyhow!("Window must be >= 1"));
    }
    Ok(window)
}

fn check_dir_exists(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        return Err(anyhow!("Directory does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_file_exists(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_prefix_path(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

/// Checks that the inputs of a cluster run exist before any work starts.
pub fn validate_cluster_inputs(args: &ClusterArgs) -> Result<()> {
    for path in args.table_paths() {
        crate::utils::util::try_exists(&path)?;
    }
    Ok(())
}
