//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, the token-level helpers it
//! is built on, and the `compile` entry point. The grammar productions
//! themselves live in `expr.rs`.
//!
//! The parser never aborts on the first problem: every error goes through
//! the injected `on_error` callback and parsing continues wherever a safe
//! resynchronization point exists.

use crate::{
    ast::expressions::{Identifier, Sequence},
    errors::errors::{ParseError, ParseErrorKind},
    lexer::{
        scanner::Scanner,
        tokens::{SpecialCharacter, Token, TokenKind},
    },
    Location,
};

use super::expr::parse_expression;

/// The main parser structure.
///
/// Holds the scanner and the error callback. Token payloads borrow from the
/// source buffer, so the produced AST is tied to the same lifetime.
pub struct Parser<'a, F> {
    tokens: Scanner<'a>,
    on_error: F,
}

impl<'a, F: FnMut(ParseError)> Parser<'a, F> {
    pub fn new(tokens: Scanner<'a>, on_error: F) -> Self {
        Parser { tokens, on_error }
    }

    /// Reports a parse error through the callback.
    pub fn error(&mut self, kind: ParseErrorKind, location: Location) {
        (self.on_error)(ParseError::new(kind, location));
    }

    /// The scanner's current location, used to anchor end-of-stream errors.
    pub fn current_location(&self) -> Location {
        self.tokens.location()
    }

    /// Returns the next non-comment token without consuming it, discarding
    /// any comment tokens on the way.
    pub fn peek_next_non_comment(&mut self) -> Option<Token<'a>> {
        loop {
            let token = self.tokens.peek()?;
            if let TokenKind::Comment(_) = token.kind {
                self.tokens.pop();
                continue;
            }
            return Some(token);
        }
    }

    /// Returns and consumes the next non-comment token.
    pub fn pop_next_non_comment(&mut self) -> Option<Token<'a>> {
        let token = self.peek_next_non_comment()?;
        self.tokens.pop();
        Some(token)
    }

    /// Expects the next token to be an identifier.
    ///
    /// Reports an error and returns `None` otherwise.
    pub fn expect_identifier(&mut self) -> Option<Identifier<'a>> {
        match self.pop_next_non_comment() {
            None => {
                let location = self.current_location();
                self.error(ParseErrorKind::ExpectedIdentifierGotEndOfStream, location);
                None
            }
            Some(Token {
                kind: TokenKind::Identifier(content),
                location,
            }) => Some(Identifier { content, location }),
            Some(token) => {
                self.error(ParseErrorKind::ExpectedIdentifier, token.location);
                None
            }
        }
    }

    /// Expects the next token to be the given special character.
    ///
    /// A wrong special character is reported twice: once specifically and
    /// once with the generic message every non-matching token gets.
    pub fn expect_special_character(&mut self, expected: SpecialCharacter) -> Option<()> {
        match self.pop_next_non_comment() {
            None => {
                let location = self.current_location();
                self.error(
                    ParseErrorKind::ExpectedSpecialCharacterGotEndOfStream,
                    location,
                );
                None
            }
            Some(token) => {
                if let TokenKind::Special(found) = token.kind {
                    if found == expected {
                        return Some(());
                    }
                    self.error(
                        ParseErrorKind::ExpectedDifferentSpecialCharacter,
                        token.location,
                    );
                }
                self.error(ParseErrorKind::ExpectedSomethingElse, token.location);
                None
            }
        }
    }

    /// Parses expressions until the end of the stream or, in braces mode,
    /// until the matching `}`.
    ///
    /// A failed element stops the loop: this is the parser's
    /// resynchronization boundary.
    pub fn parse_sequence(&mut self, is_in_braces: bool, start: Location) -> Sequence<'a> {
        let mut elements = Vec::new();

        loop {
            let next = match self.peek_next_non_comment() {
                Some(token) => token,
                None => {
                    if is_in_braces {
                        let location = self.current_location();
                        self.error(ParseErrorKind::MissingClosingBrace, location);
                    }
                    break;
                }
            };

            if is_in_braces && next.kind == TokenKind::Special(SpecialCharacter::RightBrace) {
                self.pop_next_non_comment();
                break;
            }

            match parse_expression(self) {
                Some(expression) => elements.push(expression),
                None => break,
            }
        }

        Sequence {
            elements,
            location: start,
        }
    }

    pub fn tokenization_failed(&self) -> bool {
        self.tokens.has_failed()
    }
}

/// Parses a whole source text into an AST sequence.
///
/// This is the scan-and-parse entry point. Every syntax problem is reported
/// through `on_error`; a scanner failure (an unterminated string) is
/// reported last, at the location of the offending quote.
pub fn compile<'a, F: FnMut(ParseError)>(source: &'a str, on_error: F) -> Sequence<'a> {
    let mut parser = Parser::new(Scanner::new(source), on_error);
    let program = parser.parse_sequence(false, Location::default());

    if parser.tokenization_failed() {
        let location = parser.current_location();
        parser.error(ParseErrorKind::TokenizationFailed, location);
    }

    program
}
