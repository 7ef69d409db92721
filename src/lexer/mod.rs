//! Lexical analysis module for the interpreter.
//!
//! This module contains the scanner that converts source code into a lazy
//! stream of located tokens. It handles:
//!
//! - Single- and double-character special tokens (`(` `)` `{` `}` `/` `=` `==` `,`)
//! - Identifiers (maximal runs of lowercase letters) and the keywords
//!   `true`/`false`
//! - String literals, including the permanent failed state for unterminated
//!   ones
//! - Line comments and whitespace with per-character location tracking

pub mod scanner;
pub mod tokens;
