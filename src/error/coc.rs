use thiserror::Error;

/// Failures talking to the Clash of Clans API.
#[derive(Error, Debug)]
pub enum CocError {
    /// The API answered with a non-success status code.
    ///
    /// 403 usually means the token is not allowed for this IP address, 404 an
    /// unknown tag and 503 maintenance.
    #[error("Clash of Clans API returned {status} for {endpoint}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request path without the base URL
        endpoint: String,
    },

    /// The clan's war log is not public.
    #[error("The clan's war log is private")]
    PrivateWarLog,

    /// The response body is not the expected resource.
    #[error("Malformed Clash of Clans payload: {0}")]
    MalformedPayload(String),
}
