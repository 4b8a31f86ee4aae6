use log::{LevelFilter, SetLoggerError};
use simplelog::{Color, ColorChoice, Config, ConfigBuilder, Level, TermLogger, TerminalMode};

/// Sends records from the `upoly` crates at level `l` and above to
/// stderr. Fails if a global logger is already installed.
pub fn init_logger(l: LevelFilter) -> Result<(), SetLoggerError> {
    TermLogger::init(l, config(), TerminalMode::Stderr, ColorChoice::Auto)
}

fn config() -> Config {
    ConfigBuilder::new()
        .add_filter_allow_str("upoly")
        .set_time_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .set_level_color(Level::Warn, Some(Color::Yellow))
        .build()
}
