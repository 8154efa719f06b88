//! Console logging setup shared by the binaries.
//!
//! `RUST_LOG` wins when set; otherwise the verbosity count picks the
//! level for the folio crates and everything else stays at `warn`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn filter_for_verbosity(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,folio={level},folio_core={level},folio_cli={level}")
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(filter_for_verbosity(0).contains("folio_core=warn"));
        assert!(filter_for_verbosity(2).contains("folio_core=debug"));
        assert!(filter_for_verbosity(9).contains("folio_cli=trace"));
    }

    #[test]
    fn test_directives_parse() {
        for v in 0..4 {
            assert!(EnvFilter::try_new(filter_for_verbosity(v)).is_ok());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
