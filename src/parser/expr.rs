use crate::{
    ast::expressions::{
        BinaryOperator, BinaryOperatorExpression, BinaryOperatorLiteralExpression,
        BoolLiteralExpression, Call, Declaration, Expression, Identifier,
        StringLiteralExpression,
    },
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Keyword, SpecialCharacter, TokenKind},
};

use super::parser::Parser;

/// Parses one expression, including any call or `==` suffix.
///
/// Returns `None` when no expression could be parsed; the error has already
/// been reported through the parser's callback in that case.
pub fn parse_expression<'a, F: FnMut(ParseError)>(
    parser: &mut Parser<'a, F>,
) -> Option<Expression<'a>> {
    let token = match parser.pop_next_non_comment() {
        Some(token) => token,
        None => {
            let location = parser.current_location();
            parser.error(ParseErrorKind::UnexpectedEndOfStream, location);
            return None;
        }
    };

    let left = match token.kind {
        TokenKind::Identifier("let") => parse_declaration(parser)?,
        TokenKind::Identifier(content) => Expression::Identifier(Identifier {
            content,
            location: token.location,
        }),
        TokenKind::StringLiteral(literal) => Expression::StringLiteral(StringLiteralExpression {
            literal,
            location: token.location,
        }),
        TokenKind::Keyword(keyword) => {
            let value = match keyword {
                Keyword::True => true,
                Keyword::False => false,
            };
            Expression::BoolLiteral(BoolLiteralExpression {
                value,
                location: token.location,
            })
        }
        TokenKind::Special(SpecialCharacter::LeftParenthesis) => parse_parentheses(parser)?,
        TokenKind::Special(SpecialCharacter::LeftBrace) => {
            Expression::Sequence(parser.parse_sequence(true, token.location))
        }
        TokenKind::Special(SpecialCharacter::Equals) => {
            Expression::BinaryOperatorLiteral(BinaryOperatorLiteralExpression {
                which: BinaryOperator::Equals,
                location: token.location,
            })
        }
        TokenKind::Special(SpecialCharacter::RightParenthesis) => {
            parser.error(ParseErrorKind::ClosingParenthesisNotExpected, token.location);
            return None;
        }
        TokenKind::Special(SpecialCharacter::RightBrace) => {
            parser.error(ParseErrorKind::ClosingBraceNotExpected, token.location);
            return None;
        }
        TokenKind::Special(SpecialCharacter::Slash) => {
            parser.error(ParseErrorKind::SlashNotExpected, token.location);
            return None;
        }
        TokenKind::Special(SpecialCharacter::Assign) => {
            parser.error(ParseErrorKind::AssignmentNotExpected, token.location);
            return None;
        }
        TokenKind::Special(SpecialCharacter::Comma) => {
            parser.error(ParseErrorKind::CommaNotExpected, token.location);
            return None;
        }
        TokenKind::Comment(_) => unreachable!("comments are skipped by pop_next_non_comment"),
    };

    extend_expression(parser, left)
}

/// Decides whether the expression continues after its first production: a
/// `(` makes it a call, a `==` makes it a comparison, terminators and
/// expression-starting tokens leave it alone.
fn extend_expression<'a, F: FnMut(ParseError)>(
    parser: &mut Parser<'a, F>,
    left: Expression<'a>,
) -> Option<Expression<'a>> {
    let next = match parser.peek_next_non_comment() {
        Some(token) => token,
        None => return Some(left),
    };

    match next.kind {
        TokenKind::Special(SpecialCharacter::LeftParenthesis) => parse_call(parser, left),
        TokenKind::Special(SpecialCharacter::Equals) => {
            parser.pop_next_non_comment();
            match parse_expression(parser) {
                Some(right) => Some(Expression::BinaryOperator(BinaryOperatorExpression {
                    which: BinaryOperator::Equals,
                    left: Box::new(left),
                    right: Box::new(right),
                })),
                None => {
                    parser.error(ParseErrorKind::MissingRightHandSide, next.location);
                    Some(left)
                }
            }
        }
        // These terminate the expression without being consumed; the caller
        // decides what to do with them.
        TokenKind::Special(
            SpecialCharacter::RightParenthesis
            | SpecialCharacter::RightBrace
            | SpecialCharacter::Comma
            | SpecialCharacter::LeftBrace,
        ) => Some(left),
        // The next expression starts here.
        TokenKind::Identifier(_) | TokenKind::StringLiteral(_) | TokenKind::Keyword(_) => {
            Some(left)
        }
        TokenKind::Special(SpecialCharacter::Slash) => {
            parser.error(ParseErrorKind::SlashNotExpected, next.location);
            None
        }
        TokenKind::Special(SpecialCharacter::Assign) => {
            parser.error(ParseErrorKind::AssignmentNotExpected, next.location);
            None
        }
        TokenKind::Comment(_) => unreachable!("comments are skipped by peek_next_non_comment"),
    }
}

/// Parses `let <name> = <initializer>`; the `let` has already been consumed.
fn parse_declaration<'a, F: FnMut(ParseError)>(
    parser: &mut Parser<'a, F>,
) -> Option<Expression<'a>> {
    let name = parser.expect_identifier()?;
    parser.expect_special_character(SpecialCharacter::Assign)?;

    match parse_expression(parser) {
        Some(initializer) => Some(Expression::Declaration(Declaration {
            name,
            initializer: Box::new(initializer),
        })),
        None => {
            parser.error(
                ParseErrorKind::InvalidInitializer {
                    name: name.content.to_string(),
                },
                name.location,
            );
            None
        }
    }
}

/// Parses the inside of `( ... )`; the opening parenthesis has already been
/// consumed. On an inner parse failure the closing parenthesis is left in
/// the stream.
fn parse_parentheses<'a, F: FnMut(ParseError)>(
    parser: &mut Parser<'a, F>,
) -> Option<Expression<'a>> {
    let expression = parse_expression(parser)?;
    parser.expect_special_character(SpecialCharacter::RightParenthesis)?;
    Some(expression)
}

/// Parses the comma-separated argument list of a call. The callee has been
/// parsed; the opening parenthesis is the next token.
fn parse_call<'a, F: FnMut(ParseError)>(
    parser: &mut Parser<'a, F>,
    callee: Expression<'a>,
) -> Option<Expression<'a>> {
    let opening = parser.pop_next_non_comment()?;
    let mut arguments = Vec::new();

    loop {
        if let Some(token) = parser.peek_next_non_comment() {
            if token.kind == TokenKind::Special(SpecialCharacter::RightParenthesis) {
                parser.pop_next_non_comment();
                break;
            }
        }

        let argument = match parse_expression(parser) {
            Some(argument) => argument,
            None => {
                parser.error(ParseErrorKind::CouldNotParseArgument, opening.location);
                return None;
            }
        };
        arguments.push(argument);

        match parser.pop_next_non_comment() {
            Some(token) if token.kind == TokenKind::Special(SpecialCharacter::Comma) => {}
            Some(token) if token.kind == TokenKind::Special(SpecialCharacter::RightParenthesis) => {
                break;
            }
            _ => {
                parser.error(ParseErrorKind::CouldNotParseArguments, opening.location);
                return None;
            }
        }
    }

    Some(Expression::Call(Call {
        callee: Box::new(callee),
        arguments,
    }))
}
