//! Logging initialization
//!
//! Library code emits `tracing` events; the binary installs the subscriber
//! once at startup. Events go to stderr so stdout only carries the report.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Map `-v`/`-q` flags to a level: errors only, info by default, then debug and trace
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set. Later calls are no-ops.
pub fn init(level: LevelFilter) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("coldiff={}", level)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), LevelFilter::INFO);
        assert_eq!(level_for(1, false), LevelFilter::DEBUG);
        assert_eq!(level_for(5, false), LevelFilter::TRACE);
        assert_eq!(level_for(2, true), LevelFilter::ERROR);
    }

    #[test]
    fn test_init_idempotent() {
        init(LevelFilter::OFF);
        init(LevelFilter::OFF);
    }
}
