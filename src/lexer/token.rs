//! The tokens that source text can be lexed into.
//!
//! See [`Token`] for more information.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use once_cell::sync::Lazy;

use crate::err::CursorRange;

/// A specific unit that carries some graphemic value in Portugol.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    /// An identifier, such as a variable name (e.g. `abcd`, `a_b`, `média`).
    Ident(String),

    /// A numeric value (e.g. `123`, `0`). The language only lexes digit runs,
    /// so there is no fractional form.
    Numeric(String),

    /// A string literal (e.g. `"olá!"`), stored without the enclosing quotes.
    Str(String),

    /// Keywords (e.g. `programa`, `leia`). These cannot be identifiers.
    Keyword(Keyword),

    /// Operators (e.g. `+`, `:=`, `<=`).
    Operator(Operator),

    /// Delimiters (e.g. `(`, `{`, `;`).
    Delimiter(Delimiter),
}

impl Token {
    /// The name of this token's lexical class, used when dumping the token
    /// stream as `(value, kind)` pairs.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Ident(_) => "Identifier",
            Token::Numeric(_) => "Number",
            Token::Str(_) => "StringLiteral",
            Token::Keyword(_) => "Keyword",
            Token::Operator(_) => "Operator",
            Token::Delimiter(_) => "Delimiter",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident(s) | Token::Numeric(s) => f.write_str(s),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Keyword(kw) => write!(f, "{kw}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Delimiter(d) => write!(f, "{d}"),
        }
    }
}

/// A token with position information.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct FullToken {
    /// The token itself.
    pub tt: Token,
    /// The range of characters the token spans.
    pub loc: CursorRange,
}

impl FullToken {
    /// Create a FullToken using a token and its given position.
    pub fn new(tt: Token, loc: CursorRange) -> Self {
        Self { tt, loc }
    }
}

impl PartialEq<Token> for FullToken {
    fn eq(&self, other: &Token) -> bool {
        &self.tt == other
    }
}
impl PartialEq<FullToken> for Token {
    fn eq(&self, other: &FullToken) -> bool {
        self == &other.tt
    }
}

macro_rules! define_keywords {
    ($($id:ident: $ex:literal),* $(,)?) => {
        /// The reserved words of Portugol.
        #[derive(PartialEq, Eq, Debug, Clone, Copy)]
        pub enum Keyword {
            $(
                #[allow(missing_docs)] $id
            ),*
        }

        impl Keyword {
            /// If the string is a keyword, return the [`Token`] it represents,
            /// or `None` if it does not represent one.
            ///
            /// Keywords are lexically identifiers, so this check has to win
            /// over identifier classification.
            pub fn get_kw(s: &str) -> Option<Token> {
                match s {
                    $(
                        $ex => Some(Token::Keyword(Self::$id))
                    ),+ ,
                    _ => None
                }
            }
        }

        impl Display for Keyword {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $(Self::$id => $ex),*
                })
            }
        }
    };
}

macro_rules! define_operators_and_delimiters {
    (
        operators: {$($id:ident: $ex:literal),* $(,)?},
        delimiters: {$($idd:ident: $exd:literal),* $(,)?}
    ) => {
        /// The defined Portugol operators.
        #[derive(PartialEq, Eq, Debug, Clone, Copy)]
        pub enum Operator {
            $(
                #[allow(missing_docs)] $id
            ),*
        }

        /// The defined Portugol delimiters.
        #[derive(PartialEq, Eq, Debug, Clone, Copy)]
        pub enum Delimiter {
            $(
                #[allow(missing_docs)] $idd
            ),*
        }

        impl Display for Operator {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $(Self::$id => $ex),*
                })
            }
        }

        impl Display for Delimiter {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $(Self::$idd => $exd),*
                })
            }
        }

        /// Lookup from lexeme to operator/delimiter token, ordered so that the
        /// lexer can scan for the longest matching prefix.
        pub(super) static OP_MAP: Lazy<BTreeMap<&'static str, Token>> = Lazy::new(|| {
            let mut m = BTreeMap::new();

            $(m.insert($ex, Token::Operator(Operator::$id));)*
            $(m.insert($exd, Token::Delimiter(Delimiter::$idd));)*

            m
        });
    };
}

define_keywords! {
    Programa: "programa", // start of program
    Fimprog:  "fimprog",  // end of program
    Inteiro:  "inteiro",  // integer type
    Decimal:  "decimal",  // decimal type
    Leia:     "leia",     // read a variable
    Escreva:  "escreva",  // write arguments
    If:       "if",
    Else:     "else",
}

define_operators_and_delimiters! {
    operators: {
        Plus:   "+",
        Minus:  "-",
        Star:   "*",
        Slash:  "/",

        Lt:     "<",
        Le:     "<=",
        Gt:     ">",
        Ge:     ">=",
        Ne:     "!=",
        DEqual: "==",

        Assign: ":=",
        Equal:  "=",
    },

    delimiters: {
        LParen: "(",
        RParen: ")",
        LCurly: "{",
        RCurly: "}",
        Comma:  ",",
        Semi:   ";",
    }
}

/// Utility macro that can be used as a shorthand for basic tokens.
macro_rules! token {
    (programa) => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Programa) };
    (fimprog)  => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Fimprog)  };
    (inteiro)  => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Inteiro)  };
    (decimal)  => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Decimal)  };
    (leia)     => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Leia)     };
    (escreva)  => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Escreva)  };
    (if)       => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::If)       };
    (else)     => { $crate::lexer::token::Token::Keyword($crate::lexer::token::Keyword::Else)     };

    (+)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Plus)   };
    (-)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Minus)  };
    (*)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Star)   };
    (/)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Slash)  };
    (<)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Lt)     };
    (<=) => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Le)     };
    (>)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Gt)     };
    (>=) => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Ge)     };
    (!=) => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Ne)     };
    (==) => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::DEqual) };
    (:=) => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Assign) };
    (=)  => { $crate::lexer::token::Token::Operator($crate::lexer::token::Operator::Equal)  };

    ("(") => { $crate::lexer::token::Token::Delimiter($crate::lexer::token::Delimiter::LParen) };
    (")") => { $crate::lexer::token::Token::Delimiter($crate::lexer::token::Delimiter::RParen) };
    ("{") => { $crate::lexer::token::Token::Delimiter($crate::lexer::token::Delimiter::LCurly) };
    ("}") => { $crate::lexer::token::Token::Delimiter($crate::lexer::token::Delimiter::RCurly) };
    (,)   => { $crate::lexer::token::Token::Delimiter($crate::lexer::token::Delimiter::Comma)  };
    (;)   => { $crate::lexer::token::Token::Delimiter($crate::lexer::token::Delimiter::Semi)   };
}
pub(crate) use token;
