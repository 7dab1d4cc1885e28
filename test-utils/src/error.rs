use thiserror::Error;

/// Errors raised while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// The mock Aztra API could not bind a local port.
    #[error("Failed to start mock API: {0}")]
    Bind(#[from] std::io::Error),
}
