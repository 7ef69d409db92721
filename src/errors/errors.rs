use std::fmt::Display;

use thiserror::Error;

use crate::Location;

/// A syntax error reported by the parser (or, for `TokenizationFailed`, by
/// the scanner through the parser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: Location) -> Self {
        ParseError { kind, location }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Unexpected end of stream")]
    UnexpectedEndOfStream,
    #[error("Expected identifier")]
    ExpectedIdentifier,
    #[error("Expected identifier but got end of stream")]
    ExpectedIdentifierGotEndOfStream,
    #[error("Expected a different special character")]
    ExpectedDifferentSpecialCharacter,
    #[error("Expected something else")]
    ExpectedSomethingElse,
    #[error("Expected special character but got end of stream")]
    ExpectedSpecialCharacterGotEndOfStream,
    #[error("Invalid initializer value for identifier: {name}")]
    InvalidInitializer { name: String },
    #[error("Can not have a closing parenthesis here.")]
    ClosingParenthesisNotExpected,
    #[error("Can not have a closing brace here.")]
    ClosingBraceNotExpected,
    #[error("Can not have a slash here.")]
    SlashNotExpected,
    #[error("Can not have an assignment operator here.")]
    AssignmentNotExpected,
    #[error("Can not have a comma here.")]
    CommaNotExpected,
    #[error("Could not parse argument of the function")]
    CouldNotParseArgument,
    #[error("Could not parse arguments of the function")]
    CouldNotParseArguments,
    #[error("Binary operator requires a right-hand side argument")]
    MissingRightHandSide,
    #[error("Missing closing brace '}}' before end of file")]
    MissingClosingBrace,
    #[error("Tokenization failed")]
    TokenizationFailed,
}

/// An error reported by the type checker. Semantic errors never abort
/// checking; the offending expression is lowered to a poison slot instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub location: Location,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, location: Location) -> Self {
        SemanticError { kind, location }
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorKind {
    #[error("Unknown identifier")]
    UnknownIdentifier,
    #[error("This value is not callable")]
    NotCallable,
    #[error("Argument type mismatch")]
    ArgumentTypeMismatch,
    #[error("These types are not comparable")]
    NotComparable,
    #[error("Local variable with this name already exists")]
    Redeclaration,
}

/// An error raised while executing the IR. Fatal: the run stops and any
/// partial output is discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("called a value that is not callable")]
    NotCallable,
    #[error("reached a poisoned local")]
    PoisonReached,
    #[error("local initialized twice")]
    LocalInitializedTwice,
    #[error("read of an uninitialized local")]
    ReadUninitializedLocal,
    #[error("invalid argument type")]
    InvalidArgumentType,
}
