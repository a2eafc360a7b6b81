use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid selection: no entry at index {index} ({count} registered)")]
    InvalidIndex { index: usize, count: usize },

    #[error("Capacity reached: at most {capacity} entries allowed")]
    CapacityExceeded { capacity: usize },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Both participants must be active, {0} has been eliminated")]
    InactiveParticipant(String),

    #[error("Name already taken: {0}")]
    DuplicateName(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl SimError {
    /// Errors a session reports and recovers from without ending the loop
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SimError::IoError(_) | SimError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        assert!(SimError::InvalidIndex { index: 3, count: 1 }.is_recoverable());
        assert!(SimError::CapacityExceeded { capacity: 10 }.is_recoverable());
        assert!(SimError::MalformedInput("x".into()).is_recoverable());
        assert!(SimError::InactiveParticipant("Red".into()).is_recoverable());
        assert!(SimError::DuplicateName("Red".into()).is_recoverable());
    }

    #[test]
    fn test_io_errors_are_fatal() {
        let err: SimError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert!(!err.is_recoverable());
        assert!(!SimError::Config("bad".into()).is_recoverable());
    }

    #[test]
    fn test_invalid_index_message() {
        let err = SimError::InvalidIndex { index: 999, count: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid selection: no entry at index 999 (3 registered)"
        );
    }
}
