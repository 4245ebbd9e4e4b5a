use clap::{builder::PossibleValue, Parser, ValueEnum};
use log::{debug, error};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::ffi::OsString;
use std::fs::File;
use std::ops::Deref;
use std::panic;
use std::path::{Path, PathBuf};
use std::process;

use greeter::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct LevelFilterArg(LevelFilter);

impl ValueEnum for LevelFilterArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(LevelFilter::Off),
            Self(LevelFilter::Error),
            Self(LevelFilter::Warn),
            Self(LevelFilter::Info),
            Self(LevelFilter::Debug),
            Self(LevelFilter::Trace),
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self.0 {
            LevelFilter::Off => Some(PossibleValue::new("OFF")),
            LevelFilter::Error => Some(PossibleValue::new("ERROR")),
            LevelFilter::Warn => Some(PossibleValue::new("WARN")),
            LevelFilter::Info => Some(PossibleValue::new("INFO")),
            LevelFilter::Debug => Some(PossibleValue::new("DEBUG")),
            LevelFilter::Trace => Some(PossibleValue::new("TRACE")),
        }
    }
}

#[derive(Parser)]
#[command(
    version,
    max_term_width = 100,
    about = "Print greetings for a fixed list of names"
)]
struct Opt {
    /// Extra arguments. Accepted for compatibility, they do not change the output.
    #[arg(value_name = "NAME", trailing_var_arg = true, allow_hyphen_values = true)]
    names: Vec<OsString>,
    /// Set the file where to log (or stderr or stdout). Defaults to 'stderr'.
    #[arg(long, value_name = "LOG", default_value = "stderr")]
    log: PathBuf,
    /// Set the log level.
    #[arg(long, value_name = "LEVEL", default_value = "ERROR", value_enum)]
    log_level: LevelFilterArg,
}

fn init_logger(log: &Path, level: LevelFilter) {
    if log == Path::new("stdout") {
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stdout,
            ColorChoice::Auto,
        );
    } else if log == Path::new("stderr") {
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
    } else if let Ok(file) = File::create(log) {
        let _ = WriteLogger::init(level, Config::default(), file);
    } else {
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
        error!(
            "Unable to create log file: {}. Switch to stderr",
            log.display()
        );
    }
}

fn main() {
    let opt = Opt::parse();

    init_logger(&opt.log, opt.log_level.0);

    panic::set_hook(Box::new(|panic_info| {
        let (filename, line) = panic_info
            .location()
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or(("<unknown>", 0));
        let cause = panic_info
            .payload()
            .downcast_ref::<String>()
            .map(String::deref);
        let cause = cause.unwrap_or_else(|| {
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .unwrap_or("<cause unknown>")
        });
        error!("A panic occurred at {}:{}: {}", filename, line, cause);
    }));

    if !opt.names.is_empty() {
        debug!("Ignoring {} positional argument(s)", opt.names.len());
    }

    if let Err(e) = output_stdout() {
        error!("Unable to write greetings: {}", e);
        process::exit(1);
    }
}
