use std::fs::File;
use std::path::PathBuf;

use billsplit::core::config::{self, CliOverrides};
use billsplit::tui;
use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "billsplit", about = "Split bills with friends from the terminal")]
struct Args {
    /// Config file to use instead of ~/.billsplit/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty friend list
    #[arg(long)]
    no_seed: bool,

    /// Where to write the log
    #[arg(long, default_value = "billsplit.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        Default::default()
    });
    let resolved = config::resolve(&file_config, &CliOverrides { no_seed: args.no_seed });

    log::info!("Billsplit starting up with {} friends", resolved.friends.len());

    tui::run(resolved)
}
