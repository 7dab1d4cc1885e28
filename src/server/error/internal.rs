use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A request body for the Aztra API could not be encoded.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to serialize request body for {path}: {source}")]
    SerializeBody {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
