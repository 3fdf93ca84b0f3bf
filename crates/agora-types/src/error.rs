use thiserror::Error;

/// Errors from type construction and parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypesError {
    #[error("Invalid address length: {0} (expected 20)")]
    InvalidAddressLength(usize),

    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Bech32 error: {0}")]
    Bech32Error(String),

    #[error("Hex decoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypesError::InvalidAddressLength(19);
        assert!(err.to_string().contains("19"));
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err = TypesError::from(hex_err.clone());
        assert_eq!(err, TypesError::HexError(hex_err));
        assert!(err.to_string().contains("Hex"));
    }
}
