use std::{env, fs::read_to_string, process::exit};

use interpreter::{
    display_error,
    errors::errors::{ParseError, SemanticError},
    interpreter::interpreter::run,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        exit(2);
    }

    let source = read_to_string(&args[1]).expect("Failed to read file!");

    let mut syntax_errors = 0usize;
    let mut semantic_errors = 0usize;

    let result = run(
        &source,
        |error: ParseError| {
            syntax_errors += 1;
            display_error(&error.kind.to_string(), error.location, &source);
        },
        |error: SemanticError| {
            semantic_errors += 1;
            display_error(&error.kind.to_string(), error.location, &source);
        },
    );

    if syntax_errors + semantic_errors > 0 {
        exit(1);
    }

    match result {
        Ok(output) => print!("{}", output),
        Err(error) => {
            eprintln!("Runtime error: {}", error);
            exit(1);
        }
    }
}
