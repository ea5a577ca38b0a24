use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("NFT holder percentage must be between 0 and 100 (got {0}%)")]
    InvalidPercentage(String),

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Invalid argument {name}: '{value}' ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalculatorError {
    /// Errors the entry point reports and then exits cleanly on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalculatorError::InvalidPercentage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_percentage_message() {
        let err = CalculatorError::InvalidPercentage("150.0".to_string());
        assert_eq!(
            err.to_string(),
            "NFT holder percentage must be between 0 and 100 (got 150.0%)"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_fatal_errors_are_not_recoverable() {
        let err = CalculatorError::DivisionByZero { what: "tokens per NFT" };
        assert!(!err.is_recoverable());

        let err = CalculatorError::InvalidArgument {
            name: "max_supply",
            value: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("max_supply"));
    }
}
