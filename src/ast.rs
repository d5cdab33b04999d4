//! The components of the abstract syntax tree.
//!
//! Each node is a tagged variant corresponding to one grammar production, and
//! exclusively owns its children. The tree holds no back edges and no sharing,
//! so both the parser and the [semantic traversal][`crate::semantic`] can walk
//! it with plain exhaustive matches.

use crate::lexer::token::Operator;

/// A complete program: the statements between `programa` and `fimprog`.
#[derive(Debug, PartialEq)]
pub struct Program(pub Vec<Stmt>);

/// A braced group of commands (`{ ... }`).
///
/// Blocks group control flow only; they do not open a new scope.
#[derive(Debug, PartialEq)]
pub struct Block(pub Vec<Stmt>);

/// A variable type.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Ty {
    /// `inteiro`, the integer type. Numeric literals always have this type.
    Inteiro,
    /// `decimal`. The lexer recognizes no fractional literals, so this type
    /// can only be carried by declared variables.
    Decimal,
}

/// A statement (a declaration or a command).
#[derive(Debug, PartialEq)]
pub enum Stmt {
    /// A variable declaration (e.g. `inteiro x, y;`).
    Decl {
        /// Declared type, applied to every variable in the list.
        ty: Ty,
        /// The declared variable names, in source order.
        vars: Vec<String>,
    },

    /// An assignment (e.g. `x := y * 2;`).
    Assign {
        /// The assigned variable.
        target: String,
        /// The right-hand side.
        value: Expr,
    },

    /// A read command (e.g. `leia(x);`).
    Read(String),

    /// A write command (e.g. `escreva("dobro: ", y);`).
    Write(Vec<WriteArg>),

    /// A conditional without an alternative (e.g. `if (x > 0) { ... }`).
    If {
        /// The condition.
        cond: Expr,
        /// Commands run when the condition holds.
        then_block: Block,
    },

    /// A conditional with an alternative.
    IfElse {
        /// The condition.
        cond: Expr,
        /// Commands run when the condition holds.
        then_block: Block,
        /// Commands run otherwise.
        else_block: Block,
    },

    /// A bare block used as a command.
    Block(Block),
}

/// One argument of a write command.
#[derive(Debug, PartialEq)]
pub enum WriteArg {
    /// A variable reference, checked against the symbol table.
    Ident(String),
    /// A numeric literal, passed through unchecked.
    Num(i64),
    /// A string literal, passed through unchecked.
    Str(String),
}

/// An expression.
#[derive(Debug, PartialEq)]
pub enum Expr {
    /// A variable reference.
    Ident(String),

    /// A numeric literal.
    Literal(i64),

    /// A binary operation (e.g. `a + b`). All binary operators share one
    /// precedence level and chain left-associatively.
    BinaryOp {
        /// Operator to apply.
        op: Operator,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
}
