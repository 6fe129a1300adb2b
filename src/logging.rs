use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::{trace, warn};

use crate::config::DEFAULT_LOG_FILTER;

/// Installs the global subscriber. Events go to stderr so they don't tear
/// the board drawn on stdout.
pub fn init_tracing(filter: &str) {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (
            EnvFilter::try_new(DEFAULT_LOG_FILTER)
                .expect("hard-coded env filter should be valid"),
            Some(err),
        ),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    if let Some(err) = rejected {
        warn!(filter, %err, "invalid log filter, using {DEFAULT_LOG_FILTER}");
    }

    trace!("finished");
}
