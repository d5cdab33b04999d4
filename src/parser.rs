//! Converts sequences of tokens to an AST.
//!
//! The parser is implemented as a recursive descent parser.
//! This parser has grammatical rules, which break down into smaller
//! grammatical rules: the token sequence is assigned the top-most rule
//! (`program`) and the individual units of this rule are computed by
//! recursive procedures.
//!
//! While it consumes tokens, the parser also drives an owned
//! [`SymbolTable`]: declarations are registered as they are parsed and every
//! variable reference is checked on the spot, so a tree with a dangling
//! reference never escapes this module.
//!
//! This module provides:
//! - [`parse`]: A function to parse [a list of lexed tokens][`crate::lexer`] into an AST.
//! - [`Parser`]: The struct that does all the parsing.

use std::collections::VecDeque;

use crate::ast::{self, Ty};
use crate::err::{Cursor, CursorRange, FullGolErr, GolErr};
use crate::lexer::token::{token, FullToken, Token};
use crate::semantic::symbol::{SemErr, SymbolTable};

/// Parse a sequence of tokens into a program tree.
pub fn parse(tokens: impl IntoIterator<Item = FullToken>) -> ParseResult<ast::Program> {
    Parser::new(tokens).parse()
}

/// An error that occurs in the parsing process.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseErr {
    /// The parser expected one of the listed tokens.
    ExpectedTokens(Vec<Token>),

    /// The parser expected an identifier.
    ExpectedIdent,

    /// The parser expected a command (`escreva`, `leia`, `if`, a block, or an
    /// assignment).
    ExpectedCommand,

    /// The parser expected a term (an identifier, a number, or a
    /// parenthesized expression).
    ExpectedTerm,

    /// The parser expected a write argument (an identifier, a number, or a
    /// string literal).
    ExpectedArgument,

    /// Tokens remain after the closing `fimprog`.
    ExpectedEof,

    /// The numeric lexeme could not be parsed into a numeric value.
    CannotParseNumeric,

    /// A semantic check failed while parsing.
    Semantic(SemErr),
}

impl GolErr for ParseErr {
    fn err_name(&self) -> &'static str {
        match self {
            ParseErr::Semantic(e) => e.err_name(),
            _ => "syntax error",
        }
    }
}

impl std::fmt::Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErr::ExpectedTokens(tokens) => {
                if tokens.len() == 1 {
                    write!(f, "expected '{}'", tokens[0])
                } else {
                    let tstr = tokens
                        .iter()
                        .map(|t| format!("'{t}'"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    write!(f, "expected one of {tstr}")
                }
            }
            ParseErr::ExpectedIdent => f.write_str("expected identifier"),
            ParseErr::ExpectedCommand => f.write_str("expected command"),
            ParseErr::ExpectedTerm => f.write_str("expected term"),
            ParseErr::ExpectedArgument => f.write_str("expected argument"),
            ParseErr::ExpectedEof => f.write_str("expected end of program"),
            ParseErr::CannotParseNumeric => f.write_str("could not parse numeric"),
            ParseErr::Semantic(e) => write!(f, "{e}"),
        }
    }
}
impl std::error::Error for ParseErr {}

impl From<SemErr> for ParseErr {
    fn from(err: SemErr) -> Self {
        ParseErr::Semantic(err)
    }
}

/// A [`Result`] type for operations in the parsing process.
pub type ParseResult<T> = Result<T, FullParseErr>;
type FullParseErr = FullGolErr<ParseErr>;

macro_rules! expected_tokens {
    ($($t:tt),*) => {
        ParseErr::ExpectedTokens(vec![$(token![$t]),*])
    }
}

/// Combine two ranges, such that the new range at least spans over the two
/// provided ranges. `l` should be left of `r`.
fn merge_ranges(l: CursorRange, r: CursorRange) -> CursorRange {
    *l.start()..=*r.end()
}

/// A struct that does the conversion of tokens to a program tree.
pub struct Parser {
    tokens: VecDeque<FullToken>,
    table: SymbolTable,
    eof: Cursor,
}

impl Parser {
    /// Create a new Parser to read a given set of tokens.
    pub fn new(tokens: impl IntoIterator<Item = FullToken>) -> Self {
        let tokens: VecDeque<_> = tokens.into_iter().collect();

        let eof = if let Some(FullToken { loc, .. }) = tokens.back() {
            let &(lno, cno) = loc.end();
            (lno, cno + 1)
        } else {
            (0, 0)
        };

        Self {
            tokens,
            table: SymbolTable::new(),
            eof,
        }
    }

    /// Consumes the parser and converts the tokens into an AST.
    ///
    /// `program := 'programa' body 'fimprog'`
    pub fn parse(mut self) -> ParseResult<ast::Program> {
        self.expect1(token![programa])?;
        let body = self.expect_body()?;
        self.expect1(token![fimprog])?;

        if let Some(FullToken { loc, .. }) = self.tokens.get(0) {
            // there are tokens left after the program was closed.
            return Err(ParseErr::ExpectedEof.at_range(loc.clone()));
        }

        Ok(ast::Program(body))
    }

    // General terminology:
    // "expect X": The next set of tokens must represent X, otherwise error.
    // "match X": If the next set of tokens represent X, consume those tokens.
    //     Otherwise, do & return nothing.

    /// Expect that the next token is the specified token.
    ///
    /// Error if the next token is not the specified token.
    fn expect1(&mut self, u: Token) -> ParseResult<()> {
        if let Some(FullToken { tt: t, loc }) = self.tokens.pop_front() {
            if t == u {
                Ok(())
            } else {
                Err(ParseErr::ExpectedTokens(vec![u]).at_range(loc))
            }
        } else {
            Err(ParseErr::ExpectedTokens(vec![u]).at(self.eof))
        }
    }

    /// Return whether the next token matches the specified token,
    /// and consume the token from input if it does.
    fn match1(&mut self, u: Token) -> bool {
        match self.peek_token() {
            Some(t) if t == &u => self.tokens.pop_front(),
            _ => None,
        }
        .is_some()
    }

    /// If the next token is in the specified list of tokens,
    /// consume the token from input and return it.
    ///
    /// Return None if it is not in the specified list of tokens.
    fn match_n(&mut self, one_of: &[Token]) -> Option<FullToken> {
        match self.peek_token() {
            Some(t) if one_of.contains(t) => self.tokens.pop_front(),
            _ => None,
        }
    }

    /// Look at the next token in the input if present.
    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(0).map(|FullToken { tt, .. }| tt)
    }

    /// Consume the next token in the input and return it if present.
    fn next_token(&mut self) -> Option<Token> {
        self.tokens.pop_front().map(|FullToken { tt, .. }| tt)
    }

    /// Look at the range of the next token in the input (or return EOF).
    fn peek_loc(&self) -> CursorRange {
        self.tokens
            .get(0)
            .map_or(self.eof..=self.eof, |FullToken { loc, .. }| loc.clone())
    }

    /// Expect that the next token is an identifier.
    ///
    /// Return the identifier's name and position.
    fn expect_ident(&mut self) -> ParseResult<(String, CursorRange)> {
        match self.tokens.pop_front() {
            Some(FullToken {
                tt: Token::Ident(id),
                loc,
            }) => Ok((id, loc)),
            Some(FullToken { loc, .. }) => Err(ParseErr::ExpectedIdent.at_range(loc)),
            None => Err(ParseErr::ExpectedIdent.at(self.eof)),
        }
    }

    /// Expect that the next tokens represent the program body.
    ///
    /// `body := (declaration | command)*` until the lookahead is `fimprog`.
    fn expect_body(&mut self) -> ParseResult<Vec<ast::Stmt>> {
        let mut stmts = vec![];

        loop {
            match self.peek_token() {
                Some(token![fimprog]) | None => break,
                Some(token![inteiro] | token![decimal]) => stmts.push(self.expect_decl()?),
                Some(_) => stmts.push(self.expect_command()?),
            }
        }

        Ok(stmts)
    }

    /// Expect that the next tokens represent a variable declaration.
    ///
    /// `declaration := type var_list ';'`. Every variable in the list is
    /// declared in the symbol table once the statement is fully consumed.
    fn expect_decl(&mut self) -> ParseResult<ast::Stmt> {
        let ty = match self.next_token() {
            Some(token![inteiro]) => Ty::Inteiro,
            Some(token![decimal]) => Ty::Decimal,
            _ => unreachable!("declaration dispatched on a type keyword"),
        };

        let var_list = self.expect_var_list()?;
        self.expect1(token![;])?;

        let mut vars = Vec::with_capacity(var_list.len());
        for (name, loc) in var_list {
            self.table
                .declare(&name, ty)
                .map_err(|e| ParseErr::from(e).at_range(loc))?;
            vars.push(name);
        }

        Ok(ast::Stmt::Decl { ty, vars })
    }

    /// `var_list := identifier (',' identifier)*`
    fn expect_var_list(&mut self) -> ParseResult<Vec<(String, CursorRange)>> {
        let mut vars = vec![self.expect_ident()?];

        while self.match1(token![,]) {
            vars.push(self.expect_ident()?);
        }

        Ok(vars)
    }

    /// Expect that the next tokens represent a command,
    /// dispatched on the current token.
    ///
    /// `command := write | read | conditional | block | assignment`
    fn expect_command(&mut self) -> ParseResult<ast::Stmt> {
        match self.peek_token() {
            Some(token![escreva]) => self.expect_write(),
            Some(token![leia]) => self.expect_read(),
            Some(token![if]) => self.expect_cond(),
            Some(token!["{"]) => self.expect_block().map(ast::Stmt::Block),
            Some(Token::Ident(_)) => self.expect_assign(),
            _ => Err(ParseErr::ExpectedCommand.at_range(self.peek_loc())),
        }
    }

    /// `write := 'escreva' '(' argument_list ')' ';'`
    ///
    /// Identifier arguments must already be declared; string and number
    /// arguments pass through unchecked.
    fn expect_write(&mut self) -> ParseResult<ast::Stmt> {
        self.expect1(token![escreva])?;
        self.expect1(token!["("])?;
        let args = self.expect_arg_list()?;
        self.expect1(token![")"])?;
        self.expect1(token![;])?;

        Ok(ast::Stmt::Write(args))
    }

    /// `argument_list := argument (',' argument)*`
    fn expect_arg_list(&mut self) -> ParseResult<Vec<ast::WriteArg>> {
        let mut args = vec![self.expect_arg()?];

        while self.match1(token![,]) {
            args.push(self.expect_arg()?);
        }

        Ok(args)
    }

    /// `argument := identifier | number | string-literal`
    fn expect_arg(&mut self) -> ParseResult<ast::WriteArg> {
        match self.peek_token() {
            Some(Token::Ident(_)) => {
                let Some(FullToken {
                    tt: Token::Ident(id),
                    loc,
                }) = self.tokens.pop_front()
                else {
                    unreachable!()
                };

                self.table
                    .lookup(&id)
                    .map_err(|e| ParseErr::from(e).at_range(loc))?;
                Ok(ast::WriteArg::Ident(id))
            }
            Some(Token::Numeric(_)) => {
                let Some(FullToken {
                    tt: Token::Numeric(n),
                    loc,
                }) = self.tokens.pop_front()
                else {
                    unreachable!()
                };

                let value = n
                    .parse()
                    .map_err(|_| ParseErr::CannotParseNumeric.at_range(loc))?;
                Ok(ast::WriteArg::Num(value))
            }
            Some(Token::Str(_)) => {
                let Some(FullToken {
                    tt: Token::Str(s), ..
                }) = self.tokens.pop_front()
                else {
                    unreachable!()
                };

                Ok(ast::WriteArg::Str(s))
            }
            _ => Err(ParseErr::ExpectedArgument.at_range(self.peek_loc())),
        }
    }

    /// `read := 'leia' '(' identifier ')' ';'`
    ///
    /// The identifier must already be declared.
    fn expect_read(&mut self) -> ParseResult<ast::Stmt> {
        self.expect1(token![leia])?;
        self.expect1(token!["("])?;

        let (target, loc) = self.expect_ident()?;
        self.table
            .lookup(&target)
            .map_err(|e| ParseErr::from(e).at_range(loc))?;

        self.expect1(token![")"])?;
        self.expect1(token![;])?;

        Ok(ast::Stmt::Read(target))
    }

    /// `conditional := 'if' '(' expr ')' block ('else' block)?`
    fn expect_cond(&mut self) -> ParseResult<ast::Stmt> {
        self.expect1(token![if])?;
        self.expect1(token!["("])?;
        let cond = self.expect_expr()?;
        self.expect1(token![")"])?;

        let then_block = self.expect_block()?;

        if self.match1(token![else]) {
            let else_block = self.expect_block()?;
            Ok(ast::Stmt::IfElse {
                cond,
                then_block,
                else_block,
            })
        } else {
            Ok(ast::Stmt::If { cond, then_block })
        }
    }

    /// `block := '{' command* '}'`
    ///
    /// Blocks do not open a new scope, and declarations are not commands, so
    /// a declaration inside a block is rejected here.
    fn expect_block(&mut self) -> ParseResult<ast::Block> {
        self.expect1(token!["{"])?;

        let mut stmts = vec![];
        loop {
            match self.peek_token() {
                Some(token!["}"]) | None => break,
                Some(_) => stmts.push(self.expect_command()?),
            }
        }

        self.expect1(token!["}"])?;
        Ok(ast::Block(stmts))
    }

    /// `assignment := identifier ':=' expr ';'`
    ///
    /// The target identifier must already be declared. The assignment itself
    /// performs no type check.
    fn expect_assign(&mut self) -> ParseResult<ast::Stmt> {
        let (target, loc) = self.expect_ident()?;
        self.table
            .lookup(&target)
            .map_err(|e| ParseErr::from(e).at_range(loc))?;

        self.expect1(token![:=])?;
        let value = self.expect_expr()?;
        self.expect1(token![;])?;

        Ok(ast::Stmt::Assign { target, value })
    }

    /// Expect that the next tokens represent an expression.
    fn expect_expr(&mut self) -> ParseResult<ast::Expr> {
        self.expect_expr_ty().map(|(e, _, _)| e)
    }

    /// `expr := term (operator term)*`, left-associative, one precedence
    /// level. Also resolves the expression's type: each binary application
    /// requires both operand types to agree, and the chain keeps that type.
    fn expect_expr_ty(&mut self) -> ParseResult<(ast::Expr, Ty, CursorRange)> {
        let (mut e, ty, mut loc) = self.expect_term()?;

        // the assignment operators `:=` and `=` are deliberately absent here,
        // so an expression can never consume an assignment
        while let Some(op_tok) = self.match_n(&[
            token![+],
            token![-],
            token![*],
            token![/],
            token![<],
            token![<=],
            token![>],
            token![>=],
            token![!=],
            token![==],
        ]) {
            let Token::Operator(op) = op_tok.tt else {
                unreachable!()
            };

            let (right, rty, rloc) = self.expect_term()?;
            loc = merge_ranges(loc, rloc);

            if rty != ty {
                return Err(ParseErr::from(SemErr::MismatchedOperands(ty, rty)).at_range(loc));
            }

            e = ast::Expr::BinaryOp {
                op,
                left: Box::new(e),
                right: Box::new(right),
            };
        }

        Ok((e, ty, loc))
    }

    /// `term := identifier | number | '(' expr ')'`
    ///
    /// Identifiers are resolved against the symbol table, which both checks
    /// that they are declared and yields the term's type. Numeric literals
    /// are always `inteiro`.
    fn expect_term(&mut self) -> ParseResult<(ast::Expr, Ty, CursorRange)> {
        match self.peek_token() {
            Some(Token::Ident(_)) => {
                let Some(FullToken {
                    tt: Token::Ident(id),
                    loc,
                }) = self.tokens.pop_front()
                else {
                    unreachable!()
                };

                let ty = self
                    .table
                    .lookup(&id)
                    .map_err(|e| ParseErr::from(e).at_range(loc.clone()))?;
                Ok((ast::Expr::Ident(id), ty, loc))
            }
            Some(Token::Numeric(_)) => {
                let Some(FullToken {
                    tt: Token::Numeric(n),
                    loc,
                }) = self.tokens.pop_front()
                else {
                    unreachable!()
                };

                let value = n
                    .parse()
                    .map_err(|_| ParseErr::CannotParseNumeric.at_range(loc.clone()))?;
                Ok((ast::Expr::Literal(value), Ty::Inteiro, loc))
            }
            Some(token!["("]) => {
                let open_loc = self.peek_loc();
                self.expect1(token!["("])?;
                let (e, ty, _) = self.expect_expr_ty()?;
                let close_loc = self.peek_loc();
                self.expect1(token![")"])?;

                Ok((e, ty, merge_ranges(open_loc, close_loc)))
            }
            _ => Err(ParseErr::ExpectedTerm.at_range(self.peek_loc())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::err::{FullGolErr, GolErr};
    use crate::lexer::token::Operator;
    use crate::lexer::tokenize;

    use super::*;

    macro_rules! program {
        ($($e:expr),*) => {
            Program(vec![$($e),*])
        }
    }

    /// Unwrap the result (or print error if not possible).
    fn unwrap_fe<T>(result: Result<T, FullGolErr<impl GolErr>>, input: &str) -> T {
        match result {
            Ok(t) => t,
            Err(e) => panic!("{}", e.full_msg(input)),
        }
    }
    /// Lex and parse string.
    fn parse_str(s: &str) -> ParseResult<Program> {
        parse(unwrap_fe(tokenize(s), s))
    }
    /// Assert that the string provided parses into the program.
    fn assert_parse(input: &str, r: Program) {
        assert_eq!(unwrap_fe(parse_str(input), input), r)
    }
    /// Assert that the string provided errors with the given error when parsed.
    fn assert_parse_fail<E>(input: &str, result: E)
    where
        E: std::fmt::Debug,
        FullParseErr: PartialEq<E>,
    {
        match parse_str(input) {
            Ok(t) => panic!("Parsing resulted in value: {t:?}"),
            Err(e) => assert_eq!(e, result),
        }
    }

    fn ident(s: &str) -> Expr {
        Expr::Ident(String::from(s))
    }
    fn binop(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn empty_program() {
        assert_parse("programa fimprog", program![]);
    }

    #[test]
    fn decl_parse() {
        assert_parse(
            "programa
             inteiro x;
             decimal a, b;
             fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Decl {
                    ty: Ty::Decimal,
                    vars: vec![String::from("a"), String::from("b")],
                }
            ],
        );
    }

    #[test]
    fn write_parse() {
        assert_parse(
            "programa inteiro x; escreva(\"hi\"); fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Write(vec![WriteArg::Str(String::from("hi"))])
            ],
        );

        assert_parse(
            "programa inteiro x; escreva(\"x vale \", x, 42); fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Write(vec![
                    WriteArg::Str(String::from("x vale ")),
                    WriteArg::Ident(String::from("x")),
                    WriteArg::Num(42),
                ])
            ],
        );
    }

    #[test]
    fn read_and_assign_parse() {
        assert_parse(
            "programa inteiro x; leia(x); x := 1; fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Read(String::from("x")),
                Stmt::Assign {
                    target: String::from("x"),
                    value: Expr::Literal(1),
                }
            ],
        );
    }

    #[test]
    fn cond_parse() {
        assert_parse(
            "programa inteiro x; if (x > 0) { x := 1; } fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::If {
                    cond: binop(Operator::Gt, ident("x"), Expr::Literal(0)),
                    then_block: Block(vec![Stmt::Assign {
                        target: String::from("x"),
                        value: Expr::Literal(1),
                    }]),
                }
            ],
        );

        assert_parse(
            "programa inteiro x; if (x == 0) {} else { leia(x); } fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::IfElse {
                    cond: binop(Operator::DEqual, ident("x"), Expr::Literal(0)),
                    then_block: Block(vec![]),
                    else_block: Block(vec![Stmt::Read(String::from("x"))]),
                }
            ],
        );
    }

    #[test]
    fn block_command_parse() {
        assert_parse(
            "programa inteiro x; { x := 1; { x := 2; } } fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Block(Block(vec![
                    Stmt::Assign {
                        target: String::from("x"),
                        value: Expr::Literal(1),
                    },
                    Stmt::Block(Block(vec![Stmt::Assign {
                        target: String::from("x"),
                        value: Expr::Literal(2),
                    }])),
                ]))
            ],
        );
    }

    #[test]
    fn binop_left_assoc() {
        assert_parse(
            "programa inteiro x; x := 1 + 2 + 3; fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Assign {
                    target: String::from("x"),
                    value: binop(
                        Operator::Plus,
                        binop(Operator::Plus, Expr::Literal(1), Expr::Literal(2)),
                        Expr::Literal(3),
                    ),
                }
            ],
        );
    }

    #[test]
    fn paren_grouping() {
        // parenthesization is the only way to control grouping
        assert_parse(
            "programa inteiro x; x := 1 + (2 + 3); fimprog",
            program![
                Stmt::Decl {
                    ty: Ty::Inteiro,
                    vars: vec![String::from("x")],
                },
                Stmt::Assign {
                    target: String::from("x"),
                    value: binop(
                        Operator::Plus,
                        Expr::Literal(1),
                        binop(Operator::Plus, Expr::Literal(2), Expr::Literal(3)),
                    ),
                }
            ],
        );
    }

    #[test]
    fn missing_semi() {
        assert_parse_fail("programa inteiro x fimprog", expected_tokens![;]);
    }

    #[test]
    fn missing_fimprog() {
        assert_parse_fail("programa inteiro x;", expected_tokens![fimprog]);
    }

    #[test]
    fn trailing_tokens() {
        assert_parse_fail("programa fimprog extra", ParseErr::ExpectedEof);
    }

    #[test]
    fn bad_command() {
        assert_parse_fail("programa + fimprog", ParseErr::ExpectedCommand);
        // declarations are not commands, so they cannot appear in a block
        assert_parse_fail("programa { inteiro x; } fimprog", ParseErr::ExpectedCommand);
    }

    #[test]
    fn expr_cannot_consume_assignment() {
        assert_parse_fail(
            "programa inteiro x; x := x := 1; fimprog",
            expected_tokens![;],
        );
    }

    #[test]
    fn duplicate_declaration() {
        assert_parse_fail(
            "programa inteiro x; inteiro x; fimprog",
            ParseErr::Semantic(SemErr::AlreadyDeclared(String::from("x"))),
        );
        // different type changes nothing
        assert_parse_fail(
            "programa inteiro x; decimal x; fimprog",
            ParseErr::Semantic(SemErr::AlreadyDeclared(String::from("x"))),
        );
    }

    #[test]
    fn undeclared_references() {
        assert_parse_fail(
            "programa escreva(y); fimprog",
            ParseErr::Semantic(SemErr::NotDeclared(String::from("y"))),
        );
        assert_parse_fail(
            "programa leia(y); fimprog",
            ParseErr::Semantic(SemErr::NotDeclared(String::from("y"))),
        );
        assert_parse_fail(
            "programa y := 1; fimprog",
            ParseErr::Semantic(SemErr::NotDeclared(String::from("y"))),
        );
        assert_parse_fail(
            "programa inteiro x; x := y; fimprog",
            ParseErr::Semantic(SemErr::NotDeclared(String::from("y"))),
        );
    }

    #[test]
    fn operand_type_mismatch() {
        assert_parse_fail(
            "programa inteiro x; decimal y; if (x > y) {} fimprog",
            ParseErr::Semantic(SemErr::MismatchedOperands(Ty::Inteiro, Ty::Decimal)),
        );
        // numeric literals are inteiro
        assert_parse_fail(
            "programa decimal y; y := y + 1; fimprog",
            ParseErr::Semantic(SemErr::MismatchedOperands(Ty::Decimal, Ty::Inteiro)),
        );
    }

    #[test]
    fn operand_types_agree() {
        // same-typed chains and parenthesized terms resolve fine
        unwrap_fe(
            parse_str("programa inteiro x; x := x + 1 + (2 * x); fimprog"),
            "chain",
        );
        unwrap_fe(
            parse_str("programa decimal a, b; if (a != b) { a := b; } fimprog"),
            "decimal pair",
        );
    }

    #[test]
    fn assignment_has_no_type_check() {
        // only binary operands are type-checked; the assignment target is not
        unwrap_fe(
            parse_str("programa inteiro x; decimal y; leia(x); y := x; fimprog"),
            "cross-typed assignment",
        );
    }

    #[test]
    fn huge_numeric_fails() {
        assert_parse_fail(
            "programa inteiro x; x := 99999999999999999999; fimprog",
            ParseErr::CannotParseNumeric,
        );
    }
}
