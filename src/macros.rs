//! Utility macros for the interpreter.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$location` - The source location where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier("print"), location);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $location:expr) => {
        Token {
            kind: $kind,
            location: $location,
        }
    };
}
