//! Logging setup shared by domkit binaries.
//!
//! Everything logs through `tracing`. [`init`] installs a subscriber that writes formatted
//! events to stderr, filtered by a [`Verbosity`] unless `DOMKIT_LOG` is set, in which case that
//! variable is parsed as an `EnvFilter` directive string instead.

use std::env;
use tracing_subscriber::{prelude::*, util::TryInitError, EnvFilter, Layer};

/// Overrides the filter derived from [`Verbosity`].
pub const LOG_ENV: &str = "DOMKIT_LOG";

/// How much to log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Errors from everything, info from the domkit binary.
    #[default]
    Normal,
    /// Debug output from domkit.
    Verbose,
    /// Every mutation domkit makes.
    Trace,
}

impl Verbosity {
    /// Pick a verbosity from the usual pair of command line flags. `trace` wins over `verbose`.
    pub fn from_flags(verbose: bool, trace: bool) -> Self {
        match (verbose, trace) {
            (_, true) => Verbosity::Trace,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    /// The filter directives for this verbosity.
    pub fn directives(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "error,domkit=info",
            Verbosity::Verbose => {
                "warn,domkit=debug,domkit_core=debug,domkit_native_dom=debug,domkit_ssr=debug,domkit_exercises=debug"
            }
            Verbosity::Trace => {
                "warn,domkit=trace,domkit_core=trace,domkit_native_dom=trace,domkit_ssr=trace,domkit_exercises=trace"
            }
        }
    }
}

/// Build the filter, preferring [`LOG_ENV`] when it is set.
pub fn filter(verbosity: Verbosity) -> EnvFilter {
    if env::var(LOG_ENV).is_ok() {
        return EnvFilter::from_env(LOG_ENV);
    }
    EnvFilter::new(verbosity.directives())
}

/// Install the global subscriber.
///
/// Fails if a global subscriber was already installed.
pub fn init(verbosity: Verbosity) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= Verbosity::Verbose)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_filter(filter(verbosity));

    tracing_subscriber::registry().with(fmt_layer).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_flag_wins() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn directives_parse() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Trace,
        ] {
            assert!(
                EnvFilter::try_new(verbosity.directives()).is_ok(),
                "{verbosity:?}"
            );
        }
    }

    #[test]
    fn verbose_covers_every_domkit_crate() {
        assert_eq!(Verbosity::Normal.directives(), "error,domkit=info");
        for krate in [
            "domkit=",
            "domkit_core=",
            "domkit_native_dom=",
            "domkit_ssr=",
            "domkit_exercises=",
        ] {
            assert!(Verbosity::Verbose.directives().contains(krate), "{krate}");
            assert!(Verbosity::Trace.directives().contains(krate), "{krate}");
        }
    }

    #[test]
    fn second_init_fails() {
        let _ = init(Verbosity::Quiet);
        assert!(init(Verbosity::Quiet).is_err());
    }
}
