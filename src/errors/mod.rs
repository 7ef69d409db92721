//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used throughout the pipeline. It
//! includes:
//!
//! - Parse errors and semantic errors, each carrying a source location
//! - Runtime errors, which are fatal to a run
//! - Error formatting and display functionality
//!
//! Parse and semantic errors are delivered through caller-supplied callbacks
//! so that a single compile can report several of them; runtime errors stop
//! execution immediately.

pub mod errors;

#[cfg(test)]
mod tests;
