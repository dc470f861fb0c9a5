use crate::constants::verbosity;
use log::LevelFilter;

/// Map `-v` counts to the appropriate log level.
pub fn level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

pub fn init_logger(verbose: u8) {
    env_logger::Builder::new().filter_level(level_from_verbose(verbose)).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(level_from_verbose(verbosity::TRACE + 4), LevelFilter::Trace);
    }
}
