//! Logging utilities

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the log filter: `RUST_LOG` if set, `info` otherwise
///
/// `sqlx` logs every statement at `info`, which drowns out the request
/// logs, so it is capped at `warn` unless `RUST_LOG` mentions it.
fn env_filter() -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let mentions_sqlx = std::env::var("RUST_LOG").is_ok_and(|value| value.contains("sqlx"));
    if mentions_sqlx {
        return filter;
    }

    match "sqlx=warn".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Set up logging with [`tracing`]
pub fn setup_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
        .init();
}
