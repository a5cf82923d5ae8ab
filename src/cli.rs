use crate::utils::Result;
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser, Debug)]
#[command(name="maf-describe",
          version=&**FULL_VERSION,
          about="Summarize tumor allele concordance in MAF files",
          long_about = None,
          after_help = format!("Copyright (C) {}
This program comes with ABSOLUTELY NO WARRANTY; it is intended for
Research Use Only and not for use in diagnostic procedures.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
#[command(group(ArgGroup::new("input").required(true).multiple(false).args(["filename", "maf_path", "maf_dir"])))]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[clap(help = "A MAF file")]
    #[clap(value_name = "FILENAME")]
    #[arg(value_parser = check_file_exists)]
    pub filename: Option<PathBuf>,

    #[clap(long = "maf")]
    #[clap(help = "Path to a MAF file (plain or gzipped)")]
    #[clap(value_name = "MAF")]
    #[arg(value_parser = check_file_exists)]
    pub maf_path: Option<PathBuf>,

    #[clap(long = "maf-dir")]
    #[clap(help = "Directory whose entries containing '.maf' in their name are aggregated")]
    #[clap(value_name = "DIR")]
    #[arg(value_parser = check_dir_exists)]
    pub maf_dir: Option<PathBuf>,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

/// Where the rows come from, once clap has enforced that exactly one input was given.
#[derive(Debug, PartialEq)]
pub enum MafInput {
    File(PathBuf),
    Dir(PathBuf),
}

impl Cli {
    pub fn input(&self) -> Result<MafInput> {
        match (&self.filename, &self.maf_path, &self.maf_dir) {
            (Some(path), None, None) | (None, Some(path), None) => {
                Ok(MafInput::File(path.clone()))
            }
            (None, None, Some(dir)) => Ok(MafInput::Dir(dir.clone())),
            _ => Err("Specify exactly one of FILENAME, --maf or --maf-dir".to_string()),
        }
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
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
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_dir_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        Err(format!("Directory does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}
