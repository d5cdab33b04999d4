//! The post-parse semantic traversal.
//!
//! The parser already checks declarations and references while it consumes
//! tokens, but the pipeline re-validates the finished tree in a second,
//! independent pass: [`analyze`] walks the AST depth-first with a fresh
//! [`SymbolTable`] and re-derives every declaration and usage from the tree
//! alone. The finished table is the final artifact of the front-end.
//!
//! On any tree the parser produced, this pass agrees with the parser's inline
//! checks; it only fails on trees built some other way.

use crate::ast::{Block, Expr, Program, Stmt, WriteArg};
use crate::err::FullGolErr;

use self::symbol::{SemErr, SymbolTable};
pub mod symbol;

/// A [`Result`] type for semantic analysis.
pub type SemResult<T> = Result<T, FullSemErr>;
type FullSemErr = FullGolErr<SemErr>;

/// Walk a completed program and rebuild its symbol table from scratch,
/// re-validating every declaration and variable reference.
pub fn analyze(program: &Program) -> SemResult<SymbolTable> {
    let mut table = SymbolTable::new();
    program.traverse(&mut table)?;

    Ok(table)
}

trait Traverse {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()>;
}

impl<T: Traverse> Traverse for [T] {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()> {
        self.iter().try_for_each(|t| t.traverse(table))
    }
}

impl Traverse for Program {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()> {
        self.0.traverse(table)
    }
}

impl Traverse for Block {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()> {
        // blocks do not open a new scope
        self.0.traverse(table)
    }
}

impl Traverse for Stmt {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()> {
        match self {
            Stmt::Decl { ty, vars } => {
                for var in vars {
                    table.declare(var, *ty)?;
                }
                Ok(())
            }
            Stmt::Assign { target, value } => {
                table.lookup(target)?;
                value.traverse(table)
            }
            Stmt::Read(target) => {
                table.lookup(target)?;
                Ok(())
            }
            Stmt::Write(args) => args.traverse(table),
            Stmt::If { cond, then_block } => {
                cond.traverse(table)?;
                then_block.traverse(table)
            }
            Stmt::IfElse {
                cond,
                then_block,
                else_block,
            } => {
                cond.traverse(table)?;
                then_block.traverse(table)?;
                else_block.traverse(table)
            }
            Stmt::Block(block) => block.traverse(table),
        }
    }
}

impl Traverse for WriteArg {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()> {
        match self {
            WriteArg::Ident(name) => {
                table.lookup(name)?;
                Ok(())
            }
            WriteArg::Num(_) | WriteArg::Str(_) => Ok(()),
        }
    }
}

impl Traverse for Expr {
    fn traverse(&self, table: &mut SymbolTable) -> SemResult<()> {
        match self {
            Expr::Ident(name) => {
                table.lookup(name)?;
                Ok(())
            }
            Expr::Literal(_) => Ok(()),
            // operand existence only; operand type agreement is the parser's
            // inline check and is not re-derived here
            Expr::BinaryOp { left, right, .. } => {
                left.traverse(table)?;
                right.traverse(table)
            }
        }
    }
}
