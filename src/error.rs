//! Error types for quote loading and selection pricing.
//!
//! The formulas themselves are total and never fail; errors only come from
//! reading files and resolving catalog references.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed JSON (-3)
    ParseError = -3,
    /// File could not be read (-4)
    IoError = -4,
    /// Financing type not recognized (E100)
    UnknownFinancingType = 100,
    /// Product id not in catalog (E200)
    UnknownProduct = 200,
    /// Size row id not in catalog (E201)
    UnknownRow = 201,
    /// Finish id not in catalog (E202)
    UnknownFinish = 202,
}

/// Main error type for the quoting engine.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("Unknown financing type '{value}'")]
    UnknownFinancingType { value: String },

    #[error("Product not found in catalog: {product_id}")]
    UnknownProduct { product_id: String },

    #[error("Row {row_id} not found for product {product_id}")]
    UnknownRow { product_id: String, row_id: String },

    #[error("Finish not found in catalog: {finish_id}")]
    UnknownFinish { finish_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::InvalidJson { .. } => ErrorCode::ParseError,
            QuoteError::UnknownFinancingType { .. } => ErrorCode::UnknownFinancingType,
            QuoteError::UnknownProduct { .. } => ErrorCode::UnknownProduct,
            QuoteError::UnknownRow { .. } => ErrorCode::UnknownRow,
            QuoteError::UnknownFinish { .. } => ErrorCode::UnknownFinish,
            QuoteError::Io(_) => ErrorCode::IoError,
            QuoteError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quoting operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = QuoteError::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.code(), ErrorCode::FileNotFound);
        assert_eq!(err.code_value(), -1);

        let err = QuoteError::UnknownRow {
            product_id: "totem".into(),
            row_id: "55".into(),
        };
        assert_eq!(err.code_value(), 201);
        assert_eq!(err.to_string(), "Row 55 not found for product totem");
    }

    #[test]
    fn test_json_error_is_parse_error() {
        let err: QuoteError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::ParseError);
    }

    #[test]
    fn test_io_error_has_own_code() {
        let err: QuoteError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.code(), ErrorCode::IoError);
        assert_eq!(err.code_value(), -4);
    }
}
