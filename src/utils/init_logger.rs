use std::fs::File;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "pipelnk.log";

pub fn init_logger(level: LevelFilter) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    // The file logger always records at debug so the log stays useful
    // when the console runs at the default level.
    match File::create(LOG_FILENAME) {
        Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file)),
        Err(err) => eprintln!("Logger error {:?}", err),
    }

    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("Logger error {:?}", err);
    }
}
