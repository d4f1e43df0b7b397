use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Message suitable for inline display next to a form.
    /// Transport problems collapse into one generic, retry-suggesting line.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) | AppError::Timeout(_) => {
                "Network error. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_collapses_transport_failures() {
        let network = AppError::Network("connection refused".to_string());
        let timeout = AppError::Timeout("request timed out".to_string());
        assert_eq!(network.user_message(), "Network error. Please try again.");
        assert_eq!(timeout.user_message(), "Network error. Please try again.");
    }

    #[test]
    fn user_message_keeps_http_detail() {
        let error = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(error.user_message(), "Request failed (500): boom");
    }
}
