//! Canonical source reconstruction from the AST.
//!
//! Formatting a parsed program and re-parsing the result yields an equal
//! AST; for input that is already in canonical form the text itself round
//! trips.

use crate::ast::expressions::{Expression, Sequence};

const INDENTATION: &str = "    ";

struct Formatter {
    output: String,
    indentation_level: usize,
}

impl Formatter {
    fn format_sequence(&mut self, sequence: &Sequence) {
        // The top-level sequence has no braces; nested ones do.
        if self.indentation_level > 0 {
            self.output.push_str("{\n");
        }
        self.indentation_level += 1;
        for element in &sequence.elements {
            self.print_indentation(self.indentation_level - 1);
            self.format_expression(element);
            self.output.push('\n');
        }
        self.indentation_level -= 1;
        if self.indentation_level > 0 {
            self.print_indentation(self.indentation_level - 1);
            self.output.push('}');
        }
    }

    fn format_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::StringLiteral(literal) => {
                self.output.push('"');
                self.output.push_str(literal.literal);
                self.output.push('"');
            }
            Expression::Identifier(identifier) => self.output.push_str(identifier.content),
            Expression::Call(call) => {
                self.format_expression(&call.callee);
                self.output.push('(');
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.format_expression(argument);
                }
                self.output.push(')');
            }
            Expression::Sequence(sequence) => self.format_sequence(sequence),
            Expression::Declaration(declaration) => {
                self.output.push_str("let ");
                self.output.push_str(declaration.name.content);
                self.output.push_str(" = ");
                self.format_expression(&declaration.initializer);
            }
            Expression::BoolLiteral(literal) => {
                self.output.push_str(if literal.value { "true" } else { "false" });
            }
            Expression::BinaryOperator(operator) => {
                self.format_expression(&operator.left);
                self.output.push(' ');
                self.output.push_str(&operator.which.to_string());
                self.output.push(' ');
                self.format_expression(&operator.right);
            }
            Expression::BinaryOperatorLiteral(literal) => {
                self.output.push_str(&literal.which.to_string());
            }
        }
    }

    fn print_indentation(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(INDENTATION);
        }
    }
}

/// Renders a program back into canonical source text.
pub fn format(sequence: &Sequence) -> String {
    let mut formatter = Formatter {
        output: String::new(),
        indentation_level: 0,
    };
    formatter.format_sequence(sequence);
    formatter.output
}

#[cfg(test)]
mod tests {
    use super::format;
    use crate::parser::parser::compile;

    fn test_formatter_roundtrip(source: &str) {
        let parsed = compile(source, |error| panic!("unexpected parse error: {}", error));
        assert_eq!(format(&parsed), source);
    }

    // Formatting is idempotent: formatted text re-parses to an AST that
    // formats to the same text again. Exact AST equality additionally holds
    // for canonical input, where token locations coincide.
    fn test_reparse(source: &str) {
        let parsed = compile(source, |error| panic!("unexpected parse error: {}", error));
        let formatted = format(&parsed);
        let reparsed = compile(&formatted, |error| {
            panic!("formatted text failed to parse: {}", error)
        });
        assert_eq!(format(&reparsed), formatted);
    }

    #[test]
    fn test_format_empty_file() {
        test_formatter_roundtrip("");
    }

    #[test]
    fn test_format_call() {
        test_formatter_roundtrip("f()\n");
        test_formatter_roundtrip("f(a)\n");
        test_formatter_roundtrip("f(a, b)\n");
    }

    #[test]
    fn test_format_string() {
        test_formatter_roundtrip("\"test\"\n");
    }

    #[test]
    fn test_format_declaration() {
        test_formatter_roundtrip("let a = \"test\"\n");
    }

    #[test]
    fn test_format_keyword() {
        test_formatter_roundtrip("true\n");
        test_formatter_roundtrip("false\n");
    }

    #[test]
    fn test_format_binary_expression() {
        test_formatter_roundtrip("a == b\n");
    }

    #[test]
    fn test_format_binary_expression_literal() {
        test_formatter_roundtrip("==\n");
    }

    #[test]
    fn test_format_block() {
        test_formatter_roundtrip("let a = {\n    print(\"test\")\n}\n");
        test_formatter_roundtrip(
            "let a = {\n    {\n        {\n        }\n        print(\"test\")\n    }\n}\n",
        );
    }

    #[test]
    fn test_formatting_is_idempotent() {
        test_reparse("print(\"Hello, world!\")");
        test_reparse("let a=\"x\"\nprint( a )");
        test_reparse("{ print(\"a\") \"b\" }");
        test_reparse("f(a,b) // comment");
    }

    #[test]
    fn test_reparse_of_canonical_text_yields_equal_ast() {
        let source = "let a = \"test\"\nprint(a)\n";
        let parsed = compile(source, |error| panic!("unexpected parse error: {}", error));
        let formatted = format(&parsed);
        let reparsed = compile(&formatted, |error| {
            panic!("formatted text failed to parse: {}", error)
        });
        assert_eq!(parsed, reparsed);
    }
}
