use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("true", Keyword::True);
        map.insert("false", Keyword::False);
        map
    };
}

/// The keywords of the language. `let` is not one of them: it scans as an
/// ordinary identifier and only the parser treats it specially.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    True,
    False,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyword::True => write!(f, "true"),
            Keyword::False => write!(f, "false"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SpecialCharacter {
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    Slash,
    Assign, // =
    Equals, // ==
    Comma,
}

impl Display for SpecialCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SpecialCharacter::LeftParenthesis => "(",
            SpecialCharacter::RightParenthesis => ")",
            SpecialCharacter::LeftBrace => "{",
            SpecialCharacter::RightBrace => "}",
            SpecialCharacter::Slash => "/",
            SpecialCharacter::Assign => "=",
            SpecialCharacter::Equals => "==",
            SpecialCharacter::Comma => ",",
        };
        write!(f, "{}", text)
    }
}

/// A lexical unit. Payloads borrow from the source buffer, so tokens stay
/// valid only as long as the source they were scanned from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind<'a> {
    Identifier(&'a str),
    Keyword(Keyword),
    Special(SpecialCharacter),
    /// Inner content of the literal, without the surrounding quotes.
    StringLiteral(&'a str),
    /// Text between the `//` and the end of the line.
    Comment(&'a str),
}

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(content) => write!(f, "{}", content),
            TokenKind::Keyword(keyword) => write!(f, "{}", keyword),
            TokenKind::Special(character) => write!(f, "{}", character),
            TokenKind::StringLiteral(content) => write!(f, "\"{}\"", content),
            TokenKind::Comment(content) => write!(f, "//{}", content),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub location: Location,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.location)
    }
}
