use thiserror::Error;

/// Errors returned by the Foursquare client and normalizer.
#[derive(Debug, Error)]
pub enum FoursquareError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("foursquare api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("json deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A successfully fetched place is missing a required field.
    #[error("malformed payload: missing field '{0}'")]
    MissingField(&'static str),

    /// A payload field is present but violates a record invariant.
    #[error("malformed payload: {0}")]
    Invalid(String),

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },

    /// The API key cannot be carried in an `Authorization` header.
    #[error("invalid API key: {0}")]
    InvalidKey(String),
}
