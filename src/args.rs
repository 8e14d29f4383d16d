use clap::Parser;
use log::LevelFilter;

/// Creates the desktop shortcut for the Investment Email Pipeline GUI
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ArgsClap {
    /// Debug level please use one of following: info, debug, warn, error, trace
    #[clap(short, long, value_enum, default_value = "info")]
    pub level: ErrorLevel,
}

#[allow(non_camel_case_types)]
#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum ErrorLevel {
    info,
    debug,
    warn,
    error,
    trace,
}

impl std::fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ErrorLevel {
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            ErrorLevel::info => LevelFilter::Info,
            ErrorLevel::debug => LevelFilter::Debug,
            ErrorLevel::warn => LevelFilter::Warn,
            ErrorLevel::error => LevelFilter::Error,
            ErrorLevel::trace => LevelFilter::Trace,
        }
    }
}
