//! Translation error definitions
//!
//! Every failure aborts the whole translation, so each variant carries the
//! location of the node that caused it and nothing else is collected.

use casm_common::{CompilerError, SourceLocation};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    #[error("Undefined variable '{name}' at {location}")]
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    #[error("Type mismatch at {location}: expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: String,
        location: SourceLocation,
    },

    #[error("Invalid assignment target at {location}")]
    InvalidAssignmentTarget { location: SourceLocation },

    #[error("Unsupported construct at {location}: {construct}")]
    UnsupportedConstruct {
        construct: String,
        location: SourceLocation,
    },

    #[error("Redefinition of '{name}' at {location} (previous definition at {original_location})")]
    RedefinedSymbol {
        name: String,
        original_location: SourceLocation,
        location: SourceLocation,
    },
}

/// Discriminant of a `TranslateError`, for callers that only branch on the
/// kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UndefinedVariable,
    TypeMismatch,
    InvalidAssignmentTarget,
    UnsupportedConstruct,
    RedefinedSymbol,
}

impl TranslateError {
    pub fn mismatch(expected: impl fmt::Display, found: impl fmt::Display, location: SourceLocation) -> Self {
        TranslateError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
            location,
        }
    }

    pub fn unsupported(construct: impl Into<String>, location: SourceLocation) -> Self {
        TranslateError::UnsupportedConstruct {
            construct: construct.into(),
            location,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            TranslateError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            TranslateError::InvalidAssignmentTarget { .. } => ErrorKind::InvalidAssignmentTarget,
            TranslateError::UnsupportedConstruct { .. } => ErrorKind::UnsupportedConstruct,
            TranslateError::RedefinedSymbol { .. } => ErrorKind::RedefinedSymbol,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            TranslateError::UndefinedVariable { location, .. }
            | TranslateError::TypeMismatch { location, .. }
            | TranslateError::InvalidAssignmentTarget { location }
            | TranslateError::UnsupportedConstruct { location, .. }
            | TranslateError::RedefinedSymbol { location, .. } => location,
        }
    }
}

impl From<TranslateError> for CompilerError {
    fn from(err: TranslateError) -> Self {
        let message = err.to_string();
        let location = err.location().clone();
        match err.kind() {
            ErrorKind::TypeMismatch => CompilerError::type_error(message, location),
            _ => CompilerError::semantic_error(message, location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_and_location() {
        let err = TranslateError::mismatch("int", "void", SourceLocation::new_simple(3, 5));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.location().line, 3);
        assert_eq!(err.to_string(), "Type mismatch at <input>:3:5: expected int, found void");
    }

    #[test]
    fn test_conversion_to_compiler_error() {
        let err = TranslateError::UndefinedVariable {
            name: "x".to_string(),
            location: SourceLocation::new_simple(1, 1),
        };
        match CompilerError::from(err) {
            CompilerError::SemanticError { message, location } => {
                assert_eq!(message, "Undefined variable 'x' at <input>:1:1");
                assert_eq!(location.line, 1);
            }
            other => panic!("Expected SemanticError, got {:?}", other),
        }

        let err = TranslateError::mismatch("2 arguments", "1 argument", SourceLocation::dummy());
        assert!(matches!(CompilerError::from(err), CompilerError::TypeError { .. }));
    }
}
