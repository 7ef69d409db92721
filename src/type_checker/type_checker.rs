use std::collections::HashMap;

use crate::{
    ast::expressions::{
        BinaryOperator, BinaryOperatorExpression, Call, Declaration, Expression, Identifier,
        Sequence,
    },
    errors::errors::{SemanticError, SemanticErrorKind},
    Location,
};

use super::ir;
use super::ir::{BuiltinFunction, Instruction, LocalId};

/// The primitive types the checker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalType {
    String,
    Void,
    /// The builtin print function.
    Print,
    /// The builtin string-equality function.
    EqualsString,
    Boolean,
    /// Sentinel for slots tainted by an earlier semantic error.
    Poison,
}

/// State of one checking pass: the types of all allocated locals (the slot
/// id is the index), the flat symbol table and the error callback.
pub struct TypeChecker<'a, F> {
    locals: Vec<LocalType>,
    named_local_variables: HashMap<&'a str, LocalId>,
    on_error: F,
}

impl<'a, F: FnMut(SemanticError)> TypeChecker<'a, F> {
    fn new(on_error: F) -> Self {
        TypeChecker {
            locals: Vec::new(),
            named_local_variables: HashMap::new(),
            on_error,
        }
    }

    fn allocate_local(&mut self, local_type: LocalType) -> LocalId {
        let id = LocalId(self.locals.len());
        self.locals.push(local_type);
        id
    }

    fn local_type(&self, id: LocalId) -> LocalType {
        self.locals[id.0]
    }

    fn error(&mut self, kind: SemanticErrorKind, location: Location) {
        (self.on_error)(SemanticError::new(kind, location));
    }

    /// Allocates a poison slot and emits the instruction marking it.
    fn emit_poison(&mut self, output: &mut ir::Sequence) -> LocalId {
        let destination = self.allocate_local(LocalType::Poison);
        output.elements.push(Instruction::Poison { destination });
        destination
    }
}

fn check_sequence<'a, F: FnMut(SemanticError)>(
    checker: &mut TypeChecker<'a, F>,
    input: &Sequence<'a>,
    output: &mut ir::Sequence,
) -> LocalId {
    let mut sequence_result = None;
    for element in &input.elements {
        sequence_result = Some(check_expression(checker, element, output));
    }

    // The value of a sequence is the value of its last element; an empty
    // sequence is void.
    match sequence_result {
        Some(result) => result,
        None => {
            let destination = checker.allocate_local(LocalType::Void);
            output.elements.push(Instruction::VoidLiteral { destination });
            destination
        }
    }
}

fn check_identifier<'a, F: FnMut(SemanticError)>(
    checker: &mut TypeChecker<'a, F>,
    input: &Identifier<'a>,
    output: &mut ir::Sequence,
) -> LocalId {
    if input.content == "print" {
        let destination = checker.allocate_local(LocalType::Print);
        output.elements.push(Instruction::Builtin {
            destination,
            function: BuiltinFunction::Print,
        });
        return destination;
    }

    match checker.named_local_variables.get(input.content) {
        Some(found) => *found,
        None => {
            checker.error(SemanticErrorKind::UnknownIdentifier, input.location);
            checker.emit_poison(output)
        }
    }
}

fn check_call<'a, F: FnMut(SemanticError)>(
    checker: &mut TypeChecker<'a, F>,
    input: &Call<'a>,
    output: &mut ir::Sequence,
) -> LocalId {
    let callee = check_expression(checker, &input.callee, output);
    let arguments: Vec<LocalId> = input
        .arguments
        .iter()
        .map(|argument| check_expression(checker, argument, output))
        .collect();

    match checker.local_type(callee) {
        LocalType::Print => {
            if arguments.len() != 1 {
                checker.error(
                    SemanticErrorKind::ArgumentTypeMismatch,
                    input.callee.get_location(),
                );
                return checker.emit_poison(output);
            }
            if checker.local_type(arguments[0]) != LocalType::String {
                checker.error(
                    SemanticErrorKind::ArgumentTypeMismatch,
                    input.arguments[0].get_location(),
                );
                return checker.emit_poison(output);
            }

            let result = checker.allocate_local(LocalType::Void);
            output.elements.push(Instruction::Call {
                result,
                callee,
                arguments,
            });
            result
        }
        LocalType::EqualsString => {
            if arguments.len() != 2 {
                checker.error(
                    SemanticErrorKind::ArgumentTypeMismatch,
                    input.callee.get_location(),
                );
                return checker.emit_poison(output);
            }

            // Both arguments are checked independently so that each mismatch
            // is reported at its own location.
            let mut arguments_are_valid = true;
            for (id, argument) in arguments.iter().zip(&input.arguments) {
                if checker.local_type(*id) != LocalType::String {
                    checker.error(
                        SemanticErrorKind::ArgumentTypeMismatch,
                        argument.get_location(),
                    );
                    arguments_are_valid = false;
                }
            }
            if !arguments_are_valid {
                return checker.emit_poison(output);
            }

            let result = checker.allocate_local(LocalType::Boolean);
            output.elements.push(Instruction::Call {
                result,
                callee,
                arguments,
            });
            result
        }
        LocalType::String | LocalType::Void | LocalType::Boolean | LocalType::Poison => {
            checker.error(SemanticErrorKind::NotCallable, input.callee.get_location());
            checker.emit_poison(output)
        }
    }
}

fn check_declaration<'a, F: FnMut(SemanticError)>(
    checker: &mut TypeChecker<'a, F>,
    input: &Declaration<'a>,
    output: &mut ir::Sequence,
) -> LocalId {
    let name_exists = checker.named_local_variables.contains_key(input.name.content);
    if name_exists {
        checker.error(SemanticErrorKind::Redeclaration, input.name.location);
    }

    let initializer = check_expression(checker, &input.initializer, output);

    // A redeclaration leaves the first binding in effect.
    if !name_exists {
        checker
            .named_local_variables
            .insert(input.name.content, initializer);
    }

    let destination = checker.allocate_local(LocalType::Void);
    output.elements.push(Instruction::VoidLiteral { destination });
    destination
}

fn check_binary_operator<'a, F: FnMut(SemanticError)>(
    checker: &mut TypeChecker<'a, F>,
    input: &BinaryOperatorExpression<'a>,
    output: &mut ir::Sequence,
) -> LocalId {
    let BinaryOperator::Equals = input.which;

    let left = check_expression(checker, &input.left, output);
    let right = check_expression(checker, &input.right, output);

    if checker.local_type(left) != LocalType::String
        || checker.local_type(right) != LocalType::String
    {
        checker.error(SemanticErrorKind::NotComparable, input.left.get_location());
        return checker.emit_poison(output);
    }

    let callee = checker.allocate_local(LocalType::EqualsString);
    output.elements.push(Instruction::Builtin {
        destination: callee,
        function: BuiltinFunction::EqualsString,
    });

    let result = checker.allocate_local(LocalType::Boolean);
    output.elements.push(Instruction::Call {
        result,
        callee,
        arguments: vec![left, right],
    });
    result
}

/// Checks one expression and returns the local holding its result.
fn check_expression<'a, F: FnMut(SemanticError)>(
    checker: &mut TypeChecker<'a, F>,
    input: &Expression<'a>,
    output: &mut ir::Sequence,
) -> LocalId {
    match input {
        Expression::StringLiteral(literal) => {
            let destination = checker.allocate_local(LocalType::String);
            // The literal is copied into owned storage here; from this point
            // on the IR no longer borrows from the source buffer.
            output.elements.push(Instruction::StringLiteral {
                destination,
                value: literal.literal.to_string(),
            });
            destination
        }
        Expression::Identifier(identifier) => check_identifier(checker, identifier, output),
        Expression::Call(call) => check_call(checker, call, output),
        // A nested block lowers flat into the enclosing instruction
        // sequence; only its value is its own.
        Expression::Sequence(sequence) => check_sequence(checker, sequence, output),
        Expression::Declaration(declaration) => check_declaration(checker, declaration, output),
        Expression::BoolLiteral(literal) => {
            let destination = checker.allocate_local(LocalType::Boolean);
            output.elements.push(Instruction::BooleanLiteral {
                destination,
                value: literal.value,
            });
            destination
        }
        Expression::BinaryOperator(operator) => check_binary_operator(checker, operator, output),
        Expression::BinaryOperatorLiteral(_) => {
            let destination = checker.allocate_local(LocalType::EqualsString);
            output.elements.push(Instruction::Builtin {
                destination,
                function: BuiltinFunction::EqualsString,
            });
            destination
        }
    }
}

/// Checks a whole program and returns the lowered instruction sequence.
///
/// The program's own result value is discarded. Errors go through
/// `on_error`; the returned IR is always produced, with poison slots
/// standing in for everything that failed to check.
pub fn check_types<'a, F: FnMut(SemanticError)>(
    input: &Sequence<'a>,
    on_error: F,
) -> ir::Sequence {
    let mut checker = TypeChecker::new(on_error);
    let mut result = ir::Sequence::default();
    let _ = check_sequence(&mut checker, input, &mut result);
    result
}
