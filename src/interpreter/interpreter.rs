use crate::{
    errors::errors::{ParseError, RuntimeError, SemanticError},
    parser::parser::compile,
    type_checker::ir::{BuiltinFunction, Instruction, LocalId, Sequence},
    type_checker::type_checker::check_types,
};

/// A value held by a local slot at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Builtin(BuiltinFunction),
    Boolean(bool),
    Void,
}

/// Execution state: one optional value per local slot, plus the output
/// accumulated by `print`.
pub struct Interpreter {
    locals: Vec<Option<Value>>,
    output: String,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            locals: Vec::new(),
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// Stores the value of a slot. Locals are write-once: a second
    /// initialization is an error.
    pub fn initialize_local(
        &mut self,
        destination: LocalId,
        value: Value,
    ) -> Result<(), RuntimeError> {
        if self.locals.len() <= destination.0 {
            self.locals.resize(destination.0 + 1, None);
        }

        let slot = &mut self.locals[destination.0];
        if slot.is_some() {
            return Err(RuntimeError::LocalInitializedTwice);
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn read_local(&self, id: LocalId) -> Result<&Value, RuntimeError> {
        match self.locals.get(id.0) {
            Some(Some(value)) => Ok(value),
            _ => Err(RuntimeError::ReadUninitializedLocal),
        }
    }

    pub fn run_sequence(&mut self, sequence: &Sequence) -> Result<(), RuntimeError> {
        for instruction in &sequence.elements {
            self.run_instruction(instruction)?;
        }
        Ok(())
    }

    pub fn run_instruction(&mut self, instruction: &Instruction) -> Result<(), RuntimeError> {
        match instruction {
            Instruction::Builtin {
                destination,
                function,
            } => self.initialize_local(*destination, Value::Builtin(*function)),
            Instruction::StringLiteral { destination, value } => {
                self.initialize_local(*destination, Value::String(value.clone()))
            }
            Instruction::VoidLiteral { destination } => {
                self.initialize_local(*destination, Value::Void)
            }
            Instruction::BooleanLiteral { destination, value } => {
                self.initialize_local(*destination, Value::Boolean(*value))
            }
            Instruction::Call {
                result,
                callee,
                arguments,
            } => self.run_call(*result, *callee, arguments),
            Instruction::Sequence(sequence) => self.run_sequence(sequence),
            Instruction::Poison { .. } => Err(RuntimeError::PoisonReached),
        }
    }

    fn run_call(
        &mut self,
        result: LocalId,
        callee: LocalId,
        arguments: &[LocalId],
    ) -> Result<(), RuntimeError> {
        let function = match self.read_local(callee)? {
            Value::Builtin(function) => *function,
            _ => return Err(RuntimeError::NotCallable),
        };

        match function {
            BuiltinFunction::Print => {
                let argument = match arguments.first() {
                    Some(argument) => *argument,
                    None => return Err(RuntimeError::InvalidArgumentType),
                };
                let text = match self.read_local(argument)? {
                    Value::String(text) => text.clone(),
                    _ => return Err(RuntimeError::InvalidArgumentType),
                };
                self.output.push_str(&text);
                // print returns void; its result slot is intentionally
                // never written.
                Ok(())
            }
            BuiltinFunction::EqualsString => {
                let (left, right) = match (arguments.first(), arguments.get(1)) {
                    (Some(left), Some(right)) => (*left, *right),
                    _ => return Err(RuntimeError::InvalidArgumentType),
                };
                let is_equal = match (self.read_local(left)?, self.read_local(right)?) {
                    (Value::String(left), Value::String(right)) => left == right,
                    _ => return Err(RuntimeError::InvalidArgumentType),
                };
                self.initialize_local(result, Value::Boolean(is_equal))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// Executes a checked program and returns its accumulated output.
pub fn interpret(program: &Sequence) -> Result<String, RuntimeError> {
    let mut interpreter = Interpreter::new();
    interpreter.run_sequence(program)?;
    Ok(interpreter.into_output())
}

/// Runs the full pipeline over a source text.
///
/// Syntax and semantic errors are reported through their callbacks and do
/// not stop the pipeline by themselves: the possibly-degraded IR is still
/// executed and only fails if execution actually reaches a poisoned slot.
/// Callers that want compile errors to be fatal should check whether their
/// callbacks were invoked.
pub fn run<F, G>(
    source: &str,
    on_syntax_error: F,
    on_semantic_error: G,
) -> Result<String, RuntimeError>
where
    F: FnMut(ParseError),
    G: FnMut(SemanticError),
{
    let program = compile(source, on_syntax_error);
    let checked = check_types(&program, on_semantic_error);
    interpret(&checked)
}
