//! Unit tests for error handling.
//!
//! This module contains tests for error types, their user-visible messages
//! and their display format.

use crate::errors::errors::{
    ParseError, ParseErrorKind, RuntimeError, SemanticError, SemanticErrorKind,
};
use crate::Location;

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        ParseErrorKind::UnexpectedEndOfStream.to_string(),
        "Unexpected end of stream"
    );
    assert_eq!(
        ParseErrorKind::ExpectedIdentifierGotEndOfStream.to_string(),
        "Expected identifier but got end of stream"
    );
    assert_eq!(
        ParseErrorKind::MissingClosingBrace.to_string(),
        "Missing closing brace '}' before end of file"
    );
    assert_eq!(
        ParseErrorKind::InvalidInitializer {
            name: "a".to_string()
        }
        .to_string(),
        "Invalid initializer value for identifier: a"
    );
    assert_eq!(
        ParseErrorKind::SlashNotExpected.to_string(),
        "Can not have a slash here."
    );
    assert_eq!(
        ParseErrorKind::AssignmentNotExpected.to_string(),
        "Can not have an assignment operator here."
    );
    assert_eq!(
        ParseErrorKind::TokenizationFailed.to_string(),
        "Tokenization failed"
    );
}

#[test]
fn test_parse_error_display() {
    let error = ParseError::new(ParseErrorKind::ExpectedSomethingElse, Location::new(1, 2));
    assert_eq!(error.to_string(), "2:3: Expected something else");
}

#[test]
fn test_semantic_error_messages() {
    assert_eq!(
        SemanticErrorKind::UnknownIdentifier.to_string(),
        "Unknown identifier"
    );
    assert_eq!(
        SemanticErrorKind::NotCallable.to_string(),
        "This value is not callable"
    );
    assert_eq!(
        SemanticErrorKind::ArgumentTypeMismatch.to_string(),
        "Argument type mismatch"
    );
    assert_eq!(
        SemanticErrorKind::NotComparable.to_string(),
        "These types are not comparable"
    );
    assert_eq!(
        SemanticErrorKind::Redeclaration.to_string(),
        "Local variable with this name already exists"
    );
}

#[test]
fn test_semantic_error_display() {
    let error = SemanticError::new(SemanticErrorKind::UnknownIdentifier, Location::new(0, 6));
    assert_eq!(error.to_string(), "1:7: Unknown identifier");
}

#[test]
fn test_runtime_error_equality() {
    assert_eq!(RuntimeError::PoisonReached, RuntimeError::PoisonReached);
    assert_ne!(RuntimeError::NotCallable, RuntimeError::PoisonReached);
}
