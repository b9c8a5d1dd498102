//! Logging setup shared by the binaries.

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Search summaries and periodic progress
    Normal,
    /// Start and end of every search with its statistics
    Verbose,
    /// Every goal as it is reached
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

/// Install a compact subscriber writing to stderr. Does nothing if a global
/// subscriber is already set.
pub fn init_logging(verbosity: Verbosity, colour: bool) {
    let level: tracing::Level = verbosity.into();
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(Level::from(Verbosity::Silent), Level::ERROR);
        assert_eq!(Level::from(Verbosity::Normal), Level::INFO);
        assert_eq!(Level::from(Verbosity::Verbose), Level::DEBUG);
        assert_eq!(Level::from(Verbosity::Debug), Level::TRACE);
    }

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging(Verbosity::Silent, false);
        init_logging(Verbosity::Debug, true);
    }
}
