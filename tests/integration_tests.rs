//! Integration tests for the end-to-end pipeline.
//!
//! These tests drive `run` over whole source texts and verify the program
//! output, the reported diagnostics and the runtime error behavior
//! together.

use interpreter::{
    errors::errors::{ParseError, RuntimeError, SemanticError},
    interpreter::interpreter::run,
    Location,
};

struct Outcome {
    result: Result<String, RuntimeError>,
    syntax_errors: Vec<ParseError>,
    semantic_errors: Vec<SemanticError>,
}

fn run_collecting(source: &str) -> Outcome {
    let mut syntax_errors = Vec::new();
    let mut semantic_errors = Vec::new();
    let result = run(
        source,
        |error| syntax_errors.push(error),
        |error| semantic_errors.push(error),
    );
    Outcome {
        result,
        syntax_errors,
        semantic_errors,
    }
}

#[test]
fn test_empty_program() {
    let outcome = run_collecting("");
    assert_eq!(outcome.result, Ok(String::new()));
    assert!(outcome.syntax_errors.is_empty());
    assert!(outcome.semantic_errors.is_empty());
}

#[test]
fn test_print_hello_world() {
    let outcome = run_collecting("print(\"Hello, world!\")");
    assert_eq!(outcome.result, Ok("Hello, world!".to_string()));
    assert!(outcome.syntax_errors.is_empty());
    assert!(outcome.semantic_errors.is_empty());
}

#[test]
fn test_blocks_return_their_last_value() {
    let outcome = run_collecting("let b = {\n print(\"a\")\n \"b\"\n}\nprint(b)");
    assert_eq!(outcome.result, Ok("ab".to_string()));
    assert!(outcome.syntax_errors.is_empty());
    assert!(outcome.semantic_errors.is_empty());
}

#[test]
fn test_unterminated_string() {
    let outcome = run_collecting("\"Hello world");
    assert_eq!(outcome.syntax_errors.len(), 1);
    assert_eq!(
        outcome.syntax_errors[0].to_string(),
        "1:1: Tokenization failed"
    );
    assert_eq!(outcome.syntax_errors[0].location, Location::new(0, 0));
    // The degraded program is empty and runs to empty output.
    assert_eq!(outcome.result, Ok(String::new()));
}

#[test]
fn test_missing_closing_brace() {
    let outcome = run_collecting("{");
    assert_eq!(outcome.syntax_errors.len(), 1);
    assert_eq!(
        outcome.syntax_errors[0].to_string(),
        "1:2: Missing closing brace '}' before end of file"
    );
    assert_eq!(outcome.result, Ok(String::new()));
}

#[test]
fn test_poison_propagation() {
    let outcome = run_collecting("print(uuu)");
    let messages: Vec<String> = outcome
        .semantic_errors
        .iter()
        .map(|error| error.to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            "1:7: Unknown identifier".to_string(),
            "1:7: Argument type mismatch".to_string(),
        ]
    );
    assert_eq!(outcome.result, Err(RuntimeError::PoisonReached));
}

#[test]
fn test_redeclaration_keeps_first_binding() {
    let outcome = run_collecting("let a = \"x\"\nlet a = \"y\"\nprint(a)");
    let messages: Vec<String> = outcome
        .semantic_errors
        .iter()
        .map(|error| error.to_string())
        .collect();
    assert_eq!(
        messages,
        vec!["2:5: Local variable with this name already exists".to_string()]
    );
    assert_eq!(outcome.result, Ok("x".to_string()));
}

#[test]
fn test_calling_a_string_reaches_poison() {
    let outcome = run_collecting("let a = \"hello\"\na(\"\")");
    assert_eq!(outcome.semantic_errors.len(), 1);
    assert_eq!(
        outcome.semantic_errors[0].to_string(),
        "2:1: This value is not callable"
    );
    assert_eq!(outcome.result, Err(RuntimeError::PoisonReached));
}

#[test]
fn test_syntax_errors_do_not_stop_execution_of_the_parsed_prefix() {
    // The first statement parses and runs; the parser stops at the slash.
    let outcome = run_collecting("print(\"ok\")\n/");
    assert_eq!(outcome.syntax_errors.len(), 1);
    assert_eq!(
        outcome.syntax_errors[0].to_string(),
        "2:1: Can not have a slash here."
    );
    assert!(outcome.semantic_errors.is_empty());
    assert_eq!(outcome.result, Ok("ok".to_string()));
}

#[test]
fn test_string_equality_program() {
    let outcome = run_collecting("let same = \"a\" == \"a\"\nlet different = \"a\" == \"b\"");
    assert_eq!(outcome.result, Ok(String::new()));
    assert!(outcome.syntax_errors.is_empty());
    assert!(outcome.semantic_errors.is_empty());
}

#[test]
fn test_comments_and_whitespace() {
    let outcome = run_collecting("// greeting\nprint(\"hi\") // trailing\n\n");
    assert_eq!(outcome.result, Ok("hi".to_string()));
    assert!(outcome.syntax_errors.is_empty());
    assert!(outcome.semantic_errors.is_empty());
}
