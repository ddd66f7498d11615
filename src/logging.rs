// Mon Jan 26 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn format_level(level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", Self::format_level(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(level: LevelFilter) {
    let logger = Box::new(StderrLogger { level });
    log::set_boxed_logger(logger).ok();
    log::set_max_level(level);
}

pub fn level_from_verbosity(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// RUST_LOG takes precedence when set; otherwise the colored stderr logger.
pub fn init(verbose: bool, quiet: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }
    init_logger(level_from_verbosity(verbose, quiet));
}
