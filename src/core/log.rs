/// These are each allowed to be dead code in case the code base happens to not have any at that
/// level at the moment.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum LogLevel {
    #[allow(dead_code)]
    Error,
    #[allow(dead_code)]
    Warn,
    #[allow(dead_code)]
    Info,
    #[allow(dead_code)]
    Debug,
    #[allow(dead_code)]
    Trace,
}

impl LogLevel {
    fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Accept a closure to avoid calling the construction of the formatted strings until necessary
/// (i.e. we know that the installed subscriber asks for this level).
pub fn log<F: FnOnce() -> String>(level: LogLevel, message_fn: F) {
    if level.as_tracing() > tracing::level_filters::LevelFilter::current() {
        return;
    }

    let message = message_fn();
    // `tracing::event!` needs a constant level, hence one arm per level.
    match level {
        LogLevel::Error => tracing::error!(target: "lazy_range", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "lazy_range", "{message}"),
        LogLevel::Info => tracing::info!(target: "lazy_range", "{message}"),
        LogLevel::Debug => tracing::debug!(target: "lazy_range", "{message}"),
        LogLevel::Trace => tracing::trace!(target: "lazy_range", "{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_onto_tracing() {
        assert_eq!(LogLevel::Error.as_tracing(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Trace.as_tracing(), tracing::Level::TRACE);
        assert!(LogLevel::Debug > LogLevel::Info);
    }
}
