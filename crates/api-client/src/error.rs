use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to send the HTTP request: {0}")]
    RequestBuild(#[from] reqwest::Error),

    /// The service refused the request and explained why.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("The API answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// The reason given by the service, if the failure came from the service itself.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}
