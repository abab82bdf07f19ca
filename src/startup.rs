use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Timeout applied to every Clash of Clans API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info` for every target.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for the Clash of Clans API.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with request timeout and user agent set
/// - `Err(reqwest::Error)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
