use api_client::error::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Instrument not found in portfolio")]
    InstrumentNotFound(String),

    #[error("Insufficient quantity to sell")]
    InsufficientQuantity { requested: u64, available: u64 },

    #[error("Invalid trade: {0}")]
    InvalidTrade(String),

    #[error("{0}")]
    Api(#[from] ApiError),
}

impl ExecutorError {
    /// The explanation the trade service gave for refusing the trade.
    ///
    /// `None` means the request never got a verdict (transport or decoding failure), in
    /// which case callers fall back to a generic message.
    pub fn reason(&self) -> Option<String> {
        match self {
            ExecutorError::Api(api_error) => api_error.service_message().map(str::to_string),
            other => Some(other.to_string()),
        }
    }
}
