use std::fmt::Display;

use crate::Location;

/// An identifier together with the location of its first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub content: &'a str,
    pub location: Location,
}

/// The binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Equals => write!(f, "=="),
        }
    }
}

/// String Literal Expression
/// Represents a string literal in the AST. The content borrows from the
/// source buffer; owned copies are only made during type checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLiteralExpression<'a> {
    pub literal: &'a str,
    pub location: Location,
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Call<'a> {
    pub callee: Box<Expression<'a>>,
    pub arguments: Vec<Expression<'a>>,
}

/// Sequence
/// A brace-delimited block, or the whole program at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<'a> {
    pub elements: Vec<Expression<'a>>,
    pub location: Location,
}

/// Declaration
/// Represents a `let <name> = <initializer>` expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
    pub name: Identifier<'a>,
    pub initializer: Box<Expression<'a>>,
}

/// Bool Literal Expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolLiteralExpression {
    pub value: bool,
    pub location: Location,
}

/// Binary Operator Expression
/// Represents `left == right`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperatorExpression<'a> {
    pub which: BinaryOperator,
    pub left: Box<Expression<'a>>,
    pub right: Box<Expression<'a>>,
}

/// Binary Operator Literal Expression
/// The bare operator token used as a value, e.g. `==` on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryOperatorLiteralExpression {
    pub which: BinaryOperator,
    pub location: Location,
}

/// Expression Types
///
/// Every node exclusively owns its children; the AST is a pure tree with no
/// sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    StringLiteral(StringLiteralExpression<'a>),
    Identifier(Identifier<'a>),
    Call(Call<'a>),
    Sequence(Sequence<'a>),
    Declaration(Declaration<'a>),
    BoolLiteral(BoolLiteralExpression),
    BinaryOperator(BinaryOperatorExpression<'a>),
    BinaryOperatorLiteral(BinaryOperatorLiteralExpression),
}

impl Expression<'_> {
    /// Returns where the expression starts, recursing to the leftmost token
    /// of composite nodes.
    pub fn get_location(&self) -> Location {
        match self {
            Expression::StringLiteral(literal) => literal.location,
            Expression::Identifier(identifier) => identifier.location,
            Expression::Call(call) => call.callee.get_location(),
            Expression::Sequence(sequence) => sequence.location,
            Expression::Declaration(declaration) => declaration.name.location,
            Expression::BoolLiteral(literal) => literal.location,
            Expression::BinaryOperator(operator) => operator.left.get_location(),
            Expression::BinaryOperatorLiteral(literal) => literal.location,
        }
    }
}
