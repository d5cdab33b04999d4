//! Display implementations for the AST, used to
//! reconstruct a source-like rendition of a parsed program.

use std::fmt::{Display, Formatter};

use crate::ast::*;

fn fmt_stmt_list(f: &mut Formatter<'_>, stmts: &[Stmt]) -> std::fmt::Result {
    for stmt in stmts {
        write!(f, "{stmt}")?;

        if !stmt.ends_with_block() {
            write!(f, ";")?;
        }

        writeln!(f)?;
    }

    Ok(())
}

fn fmt_list<D: Display>(f: &mut Formatter<'_>, elems: &[D]) -> std::fmt::Result {
    if let Some((tail, head)) = elems.split_last() {
        for el in head {
            write!(f, "{el}, ")?;
        }

        write!(f, "{tail}")
    } else {
        Ok(())
    }
}

impl Stmt {
    fn ends_with_block(&self) -> bool {
        matches!(
            self,
            Stmt::If { .. } | Stmt::IfElse { .. } | Stmt::Block(_)
        )
    }
}

impl Display for Ty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::Inteiro => f.write_str("inteiro"),
            Ty::Decimal => f.write_str("decimal"),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "programa")?;
        fmt_stmt_list(f, &self.0)?;
        write!(f, "fimprog")
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "{{}}")
        } else {
            writeln!(f, "{{")?;

            let buf = BlockInner(&self.0).to_string();
            for line in buf.lines() {
                writeln!(f, "{:4}{line}", "")?;
            }

            write!(f, "}}")
        }
    }
}

struct BlockInner<'b>(&'b [Stmt]);
impl Display for BlockInner<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_stmt_list(f, self.0)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Decl { ty, vars } => {
                write!(f, "{ty} ")?;
                fmt_list(f, vars)
            }
            Stmt::Assign { target, value } => write!(f, "{target} := {value}"),
            Stmt::Read(target) => write!(f, "leia({target})"),
            Stmt::Write(args) => {
                write!(f, "escreva(")?;
                fmt_list(f, args)?;
                write!(f, ")")
            }
            Stmt::If { cond, then_block } => write!(f, "if ({cond}) {then_block}"),
            Stmt::IfElse {
                cond,
                then_block,
                else_block,
            } => write!(f, "if ({cond}) {then_block} else {else_block}"),
            Stmt::Block(b) => write!(f, "{b}"),
        }
    }
}

impl Display for WriteArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteArg::Ident(id) => write!(f, "{id}"),
            WriteArg::Num(n) => write!(f, "{n}"),
            WriteArg::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Ident(id) => write!(f, "{id}"),
            Expr::Literal(n) => write!(f, "{n}"),
            Expr::BinaryOp { op, left, right } => {
                write!(f, "{left} {op} ")?;

                // operators are left-associative, so a binary op on the right
                // can only have come from parentheses
                match &**right {
                    e @ Expr::BinaryOp { .. } => write!(f, "({e})"),
                    e => write!(f, "{e}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn reconstruct(input: &str) -> String {
        let program = parse(tokenize(input).unwrap()).unwrap();
        program.to_string()
    }

    #[test]
    fn flat_program_display() {
        let out = reconstruct("programa inteiro x, y; x := 1 + 2; escreva(\"x: \", x); fimprog");

        assert_eq!(
            out,
            "programa\n\
             inteiro x, y;\n\
             x := 1 + 2;\n\
             escreva(\"x: \", x);\n\
             fimprog"
        );
    }

    #[test]
    fn block_display() {
        let out = reconstruct("programa inteiro x; if (x < 10) { leia(x); } else {} fimprog");

        assert_eq!(
            out,
            "programa\n\
             inteiro x;\n\
             if (x < 10) {\n    leia(x);\n} else {}\n\
             fimprog"
        );
    }

    #[test]
    fn grouped_expr_display() {
        let out = reconstruct("programa inteiro x; x := 1 * (2 + x); fimprog");

        assert_eq!(
            out,
            "programa\n\
             inteiro x;\n\
             x := 1 * (2 + x);\n\
             fimprog"
        );
    }
}
