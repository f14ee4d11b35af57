//! Log output to stderr (stdout carries schemas and results)

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

const VERBOSE_FILTER: &str = "warn,sqlchat_core=debug,sqlchat_sqlite=debug,\
                              sqlchat_postgres=debug,sqlchat_mysql=debug,sqlchat_cli=debug";

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug events for
/// the sqlchat crates.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // keep whichever subscriber was installed first
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_env_filter(filter)
        .try_init();
}
