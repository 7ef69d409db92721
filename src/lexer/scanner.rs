use lazy_static::lazy_static;
use regex::Regex;

use crate::{Location, MK_TOKEN};

use super::tokens::{SpecialCharacter, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-z]+").unwrap();
}

/// A lazy tokenizer over a source buffer.
///
/// `peek` returns the next token without consuming it and `pop` consumes it;
/// both return `None` at the end of input. Whitespace (spaces and newlines)
/// is skipped before every token while the location is advanced character by
/// character.
///
/// An unterminated string literal puts the scanner into a permanent failed
/// state: every later `peek`/`pop` returns `None` and the scanner's location
/// stays pinned to the opening quote so the caller can report it.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    location: Location,
    peeked: Option<Token<'a>>,
    has_failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            location: Location::default(),
            peeked: None,
            has_failed: false,
        }
    }

    /// The location the scanner would assign to the next character.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn has_failed(&self) -> bool {
        self.has_failed
    }

    pub fn peek(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.peeked {
            return Some(token);
        }
        let token = self.scan_token();
        self.peeked = token;
        token
    }

    pub fn pop(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.peeked.take() {
            return Some(token);
        }
        self.scan_token()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn current_char(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.location.line += 1;
                self.location.column = 0;
            } else {
                self.location.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if c == ' ' || c == '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_token(&mut self) -> Option<Token<'a>> {
        if self.has_failed {
            return None;
        }

        self.skip_whitespace();
        let start = self.location;
        let head = self.current_char()?;

        match head {
            '(' => self.scan_special_character(SpecialCharacter::LeftParenthesis, start),
            ')' => self.scan_special_character(SpecialCharacter::RightParenthesis, start),
            '{' => self.scan_special_character(SpecialCharacter::LeftBrace, start),
            '}' => self.scan_special_character(SpecialCharacter::RightBrace, start),
            ',' => self.scan_special_character(SpecialCharacter::Comma, start),
            '=' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Some(MK_TOKEN!(
                        TokenKind::Special(SpecialCharacter::Equals),
                        start
                    ))
                } else {
                    Some(MK_TOKEN!(
                        TokenKind::Special(SpecialCharacter::Assign),
                        start
                    ))
                }
            }
            '/' => {
                self.advance();
                if self.current_char() == Some('/') {
                    self.advance();
                    self.scan_comment(start)
                } else {
                    Some(MK_TOKEN!(TokenKind::Special(SpecialCharacter::Slash), start))
                }
            }
            '"' => self.scan_string_literal(start),
            c if c.is_ascii_lowercase() => self.scan_identifier(start),
            // Not a character any token starts with. Not consumed and not a
            // scanner failure; the parser turns this into a parse error.
            _ => None,
        }
    }

    fn scan_special_character(
        &mut self,
        character: SpecialCharacter,
        start: Location,
    ) -> Option<Token<'a>> {
        self.advance();
        Some(MK_TOKEN!(TokenKind::Special(character), start))
    }

    fn scan_comment(&mut self, start: Location) -> Option<Token<'a>> {
        let content_begin = self.pos;
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let content = &self.source[content_begin..self.pos];
        Some(MK_TOKEN!(TokenKind::Comment(content), start))
    }

    fn scan_string_literal(&mut self, start: Location) -> Option<Token<'a>> {
        self.advance();
        let content_begin = self.pos;
        loop {
            match self.current_char() {
                None => {
                    self.has_failed = true;
                    self.location = start;
                    return None;
                }
                Some('"') => break,
                Some(_) => self.advance(),
            }
        }
        let literal = &self.source[content_begin..self.pos];
        self.advance();
        Some(MK_TOKEN!(TokenKind::StringLiteral(literal), start))
    }

    fn scan_identifier(&mut self, start: Location) -> Option<Token<'a>> {
        let found = IDENTIFIER_PATTERN.find(self.remainder())?;
        let content = found.as_str();
        for _ in 0..content.len() {
            self.advance();
        }

        match RESERVED_LOOKUP.get(content) {
            Some(keyword) => Some(MK_TOKEN!(TokenKind::Keyword(*keyword), start)),
            None => Some(MK_TOKEN!(TokenKind::Identifier(content), start)),
        }
    }
}
