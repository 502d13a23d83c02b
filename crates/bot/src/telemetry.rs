use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str =
    "homework_bot=debug,homework_engine=debug,homework_notifier=debug,homework_common=info";

/// Whether a `LOG_FORMAT` value selects JSON output.
pub fn wants_json(log_format: Option<&str>) -> bool {
    log_format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

/// Install the global subscriber. `RUST_LOG` and `LOG_FORMAT` are read from
/// the process environment, so `.env` must already be loaded.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let log_format = std::env::var("LOG_FORMAT").ok();

    if wants_json(log_format.as_deref()) {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
