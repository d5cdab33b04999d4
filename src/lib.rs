#![warn(missing_docs)]

//! Front end for the Portugol teaching language.
//!
//! # Parsing
//!
//! Parsing of a string to a syntax tree (AST) is done
//! with the [`lexer`] and [`parser`] modules.
//!
//! These modules provide:
//! - [`tokenize`][`lexer::tokenize`]: A function that processes strings into sequences of tokens.
//! - [`Parser`][`parser::Parser`]: A struct that processes sequences of lexer tokens into an AST,
//!   checking declarations and references against a symbol table as it goes.
//! - [`ast`]: The components of the AST.
//!
//! # Semantic analysis
//!
//! The parsed tree can be traversed again with the [`semantic`] module,
//! which re-checks every declaration and variable reference from scratch.
//!
//! This module provides:
//! - [`analyze`][`semantic::analyze`]: A function that walks the AST and
//!   rebuilds its [`SymbolTable`][`semantic::symbol::SymbolTable`].

// public API
pub mod ast;
pub mod lexer;
pub mod parser;
pub mod semantic;

pub mod err;

mod display;
