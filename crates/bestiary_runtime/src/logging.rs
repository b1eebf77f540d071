//! Tracing setup for the `bestiary` binary.

use std::env;

use tracing_subscriber::EnvFilter;

const VERBOSE_DIRECTIVES: &str =
    "bestiary_combinator=trace,bestiary_grammar=trace,bestiary_runtime=trace";

/// Installs a stderr subscriber.
///
/// With `verbose` set, the Bestiary crates log at `trace`, which includes
/// the combinator `log` events, whatever `RUST_LOG` says. Otherwise
/// `RUST_LOG` is honoured, defaulting to `warn`. Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_tracing(verbose: bool) {
    let directives = filter_directives(verbose, env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn filter_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVES.to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}
