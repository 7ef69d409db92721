//! The intermediate representation executed by the interpreter.
//!
//! Instructions operate on write-once local slots addressed by `LocalId`.
//! Ids are assigned in strictly increasing order within one checking pass
//! and are never reused.

/// Index of a local slot, both for check-time type bookkeeping and for
/// run-time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalId(pub usize);

/// The primitively-known callables of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFunction {
    Print,
    EqualsString,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Materializes a reference to a builtin function.
    Builtin {
        destination: LocalId,
        function: BuiltinFunction,
    },
    /// Calls the value in `callee` with the values in `arguments`. A
    /// void-returning call never writes `result`.
    Call {
        result: LocalId,
        callee: LocalId,
        arguments: Vec<LocalId>,
    },
    StringLiteral {
        destination: LocalId,
        value: String,
    },
    /// A nested block of instructions.
    Sequence(Sequence),
    VoidLiteral {
        destination: LocalId,
    },
    /// Marks a slot whose value is unusable because of an earlier semantic
    /// error. Executing it is a runtime error.
    Poison {
        destination: LocalId,
    },
    BooleanLiteral {
        destination: LocalId,
        value: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    pub elements: Vec<Instruction>,
}
