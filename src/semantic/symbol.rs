//! The symbol table: a registry mapping declared variable names to types.
//!
//! The table knows nothing about the grammar. It only validates declarations
//! and lookups, and both the [parser][`crate::parser`] and the
//! [semantic traversal][`crate::semantic`] own their own instance of it.

use std::fmt::Display;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::ast::Ty;
use crate::err::GolErr;

/// An error raised by a semantic check.
#[derive(PartialEq, Eq, Debug)]
pub enum SemErr {
    /// A variable name was declared more than once.
    AlreadyDeclared(String),

    /// A variable was referenced before/without declaration.
    NotDeclared(String),

    /// The operands of a binary operation resolved to different types.
    MismatchedOperands(Ty, Ty),

    /// A variable's stored type differs from the type expected of it.
    WrongType {
        /// The checked variable.
        name: String,
        /// The type the check expected.
        expected: Ty,
        /// The type the table holds.
        found: Ty,
    },
}

impl GolErr for SemErr {
    fn err_name(&self) -> &'static str {
        "semantic error"
    }
}

impl Display for SemErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemErr::AlreadyDeclared(name) => {
                write!(f, "variable '{name}' was already declared")
            }
            SemErr::NotDeclared(name) => {
                write!(f, "variable '{name}' was not declared")
            }
            SemErr::MismatchedOperands(left, right) => {
                write!(f, "invalid operation between types '{left}' and '{right}'")
            }
            SemErr::WrongType {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "variable '{name}' has type '{found}', expected '{expected}'"
                )
            }
        }
    }
}
impl std::error::Error for SemErr {}

/// A mapping from declared variable names to their types.
///
/// The language has a single flat scope, so there is no removal and no
/// nesting; a table lives exactly as long as the pipeline stage that owns it.
/// Iteration follows declaration order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: IndexMap<String, Ty>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration of `name` with the given type.
    pub fn declare(&mut self, name: &str, ty: Ty) -> Result<(), SemErr> {
        match self.symbols.entry(name.to_string()) {
            Entry::Occupied(_) => Err(SemErr::AlreadyDeclared(name.to_string())),
            Entry::Vacant(e) => {
                e.insert(ty);
                Ok(())
            }
        }
    }

    /// Look up the declared type of `name`.
    pub fn lookup(&self, name: &str) -> Result<Ty, SemErr> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| SemErr::NotDeclared(name.to_string()))
    }

    /// Verify that `name` is declared with exactly the expected type.
    pub fn check_type(&self, name: &str, expected: Ty) -> Result<(), SemErr> {
        let found = self.lookup(name)?;

        if found == expected {
            Ok(())
        } else {
            Err(SemErr::WrongType {
                name: name.to_string(),
                expected,
                found,
            })
        }
    }

    /// Iterate over the declared variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Ty)> {
        self.symbols.iter().map(|(name, &ty)| (name.as_str(), ty))
    }

    /// The number of declared variables.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no variable has been declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, ty) in self.iter() {
            writeln!(f, "{name}: {ty}")?;
        }

        Ok(())
    }
}
