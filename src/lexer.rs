//! Converts strings to sequences of tokens.
//!
//! In a general sense, lexing is performed by reading the string and
//! repeatedly matching specific token patterns until the entire string is
//! consumed.
//!
//! This module provides:
//! - [`tokenize`]: A utility function that opaquely does the lexing from string to tokens.
//! - [`Lexer`]: The struct which does the entire lexing process.

use std::collections::VecDeque;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::err::{Cursor, FullGolErr, GolErr};

use self::token::{FullToken, Keyword, Token, OP_MAP};
pub mod token;

/// Lex a string into a sequence of tokens.
///
/// # Example
/// ```
/// # use portugol_lang::lexer::tokenize;
/// use portugol_lang::lexer::token::Token;
///
/// let tokens = tokenize("leia(x);").unwrap();
/// assert_eq!(tokens[2], Token::Ident(String::from("x")));
/// ```
pub fn tokenize(input: &str) -> LexResult<Vec<FullToken>> {
    Lexer::new(input).lex()
}

/// An error that occurs in the lexing process.
#[derive(PartialEq, Eq, Debug)]
pub enum LexErr {
    /// Lexer found a character that isn't used in Portugol code
    /// outside of a string literal.
    UnknownChar(char),

    /// The lexer tried to read a string literal,
    /// but there was no closing quote (e.g. `"olá!`).
    UnclosedQuote,

    /// The characters are punctuation but they don't start a valid
    /// operator or delimiter (e.g. `@`).
    UnknownOp(String),
}

/// A [`Result`] type for operations in the lexing process.
pub type LexResult<T> = Result<T, FullLexErr>;
type FullLexErr = FullGolErr<LexErr>;

impl GolErr for LexErr {
    fn err_name(&self) -> &'static str {
        "syntax error"
    }
}

impl std::fmt::Display for LexErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexErr::UnknownChar(c) => write!(f, "invalid character '{}'", c),
            LexErr::UnclosedQuote => write!(f, "quote was never terminated"),
            LexErr::UnknownOp(op) => write!(f, "operator \"{op}\" does not exist"),
        }
    }
}
impl std::error::Error for LexErr {}

/// The accented Latin range used by the source language's vocabulary.
/// Everything else alphabetic has to be ASCII.
static ACCENTED: Lazy<Regex> = Lazy::new(|| Regex::new("^[á-úÁ-Ú]$").unwrap());

fn is_accented(c: char) -> bool {
    ACCENTED.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Character classes that are treated differently in the lexer.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum CharClass {
    /// An alphabetic character (ASCII or the accented range).
    Alpha,

    /// A numeric character (`0-9`).
    Numeric,

    /// The quote that encloses a string (`"`).
    StrQuote,

    /// Any other ASCII punctuation.
    Punct,

    /// Whitespace, including newlines.
    Whitespace,
}

impl CharClass {
    fn of(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() || is_accented(c) {
            Some(Self::Alpha)
        } else if c.is_ascii_digit() {
            Some(Self::Numeric)
        } else if c == '"' {
            Some(Self::StrQuote)
        } else if c.is_ascii_punctuation() {
            Some(Self::Punct)
        } else if c.is_whitespace() {
            Some(Self::Whitespace)
        } else {
            None
        }
    }
}

/// A character and its class, or `None` if it belongs to no class.
/// Unclassified characters are only valid inside string literals.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
struct CharData {
    chr: char,
    cls: Option<CharClass>,
}

/// Shift a cursor forward along its line.
fn cur_shift((lno, cno): Cursor, chars: usize) -> Cursor {
    (lno, cno + chars)
}

/// A struct that does the conversion of strings to sequences of tokens.
pub struct Lexer {
    tokens: Vec<FullToken>,

    cursor: Cursor,
    _current: Option<char>,
    remaining: VecDeque<CharData>,
}

impl Lexer {
    /// Create a new lexer over an input string.
    pub fn new(input: &str) -> Self {
        let remaining = input
            .chars()
            .map(|chr| CharData {
                chr,
                cls: CharClass::of(chr),
            })
            .collect();

        Self {
            tokens: vec![],
            cursor: (0, 0),
            _current: None,
            remaining,
        }
    }

    /// Perform the actual lexing.
    ///
    /// Consumes the lexer and converts the input into a list of tokens.
    ///
    /// An unclassified character outside a string literal fails with
    /// [`LexErr::UnknownChar`] here, when the scan reaches it. Inside a
    /// string literal any character is content.
    pub fn lex(mut self) -> LexResult<Vec<FullToken>> {
        while let Some(&CharData { chr, cls }) = self.peek() {
            match cls {
                Some(CharClass::Alpha) => self.push_ident(),
                Some(CharClass::Numeric) => self.push_numeric(),
                Some(CharClass::StrQuote) => self.push_str()?,
                Some(CharClass::Punct) => self.push_punct()?,
                Some(CharClass::Whitespace) => {
                    self.next();
                }
                None => return Err(LexErr::UnknownChar(chr).at(self.peek_cursor())),
            }
        }

        Ok(self.tokens)
    }

    /// The position the next character in the input would hold.
    fn peek_cursor(&self) -> Cursor {
        let (lno, cno) = self.cursor;

        match self._current {
            Some('\n') => (lno + 1, 0),
            Some(_) => (lno, cno + 1),
            None => (lno, cno),
        }
    }

    /// Look at the next character in the input.
    ///
    /// If there are no more characters in the input, return None.
    fn peek(&self) -> Option<&CharData> {
        self.remaining.get(0)
    }

    /// Consume the next character in the input and return it.
    fn next(&mut self) -> Option<CharData> {
        self.cursor = self.peek_cursor();

        let mcd = self.remaining.pop_front();
        self._current = mcd.map(|cd| cd.chr);
        mcd
    }

    /// Check if the next character in the input matches the given character class.
    ///
    /// If it does, consume it and return the character.
    /// If it does not, return None.
    fn match_cls(&mut self, match_cls: CharClass) -> Option<char> {
        match self.peek() {
            Some(CharData { cls, .. }) if cls == &Some(match_cls) => self.next().map(|cd| cd.chr),
            _ => None,
        }
    }

    /// Analyzes the next characters in the input as an identifier or keyword.
    ///
    /// Identifiers start alphabetic and continue with alphanumerics or
    /// underscores; the keyword check wins over the identifier classification.
    fn push_ident(&mut self) {
        let start = self.peek_cursor();
        let mut buf = String::new();

        while let Some(&CharData { chr, cls }) = self.peek() {
            match (cls, chr) {
                (Some(CharClass::Alpha | CharClass::Numeric), _) | (_, '_') => {
                    buf.push(chr);
                    self.next();
                }
                _ => break,
            }
        }

        let token = Keyword::get_kw(&buf).unwrap_or_else(|| Token::Ident(buf));

        self.tokens.push(FullToken::new(token, start..=self.cursor));
    }

    /// Analyzes the next characters in the input as a numeric value.
    ///
    /// Only digit runs are recognized. There is no fractional syntax, even
    /// though a `decimal` type keyword exists.
    fn push_numeric(&mut self) {
        let start = self.peek_cursor();
        let mut buf = String::new();

        while let Some(c) = self.match_cls(CharClass::Numeric) {
            buf.push(c);
        }

        self.tokens
            .push(FullToken::new(Token::Numeric(buf), start..=self.cursor));
    }

    /// Analyzes the next characters in the input as a string literal.
    ///
    /// The stored value has the enclosing quotes stripped. A backslash escapes
    /// the character after it; both are kept verbatim in the value. Any
    /// character can appear as content, including unclassified ones.
    fn push_str(&mut self) -> LexResult<()> {
        let start = self.peek_cursor();
        // validated by the caller to be the opening quote
        self.next();

        let mut buf = String::new();
        loop {
            let c = self.next().ok_or_else(|| LexErr::UnclosedQuote.at(start))?.chr;

            match c {
                '"' => break,
                '\\' => {
                    buf.push(c);
                    let esc = self.next().ok_or_else(|| LexErr::UnclosedQuote.at(start))?.chr;
                    buf.push(esc);
                }
                _ => buf.push(c),
            }
        }

        self.tokens
            .push(FullToken::new(Token::Str(buf), start..=self.cursor));
        Ok(())
    }

    /// Analyzes the next characters in the input as a run of punctuation.
    ///
    /// The run is split into operator and delimiter tokens by repeatedly
    /// taking the longest prefix present in the operator map, so that
    /// multi-character operators win over their one-character prefixes.
    fn push_punct(&mut self) -> LexResult<()> {
        let start = self.peek_cursor();
        let mut buf = String::new();

        while let Some(c) = self.match_cls(CharClass::Punct) {
            buf.push(c);
        }

        let mut off = 0;
        while off < buf.len() {
            let rest = &buf[off..];
            let left = &rest[..1];

            // Find the largest length operator that matches the start of the buffer.
            let (op, tok) = OP_MAP
                .range(left..=rest)
                .rev()
                .find(|(&op, _)| rest.starts_with(op))
                .ok_or_else(|| LexErr::UnknownOp(rest.to_string()).at(cur_shift(start, off)))?;

            let len = op.len();
            self.tokens.push(FullToken::new(
                tok.clone(),
                cur_shift(start, off)..=cur_shift(start, off + len - 1),
            ));
            off += len;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::token::token;
    use super::*;

    macro_rules! assert_lex {
        ($e1:literal => $e2:expr) => {
            assert_eq!(tokenize($e1).unwrap(), $e2)
        };
    }

    macro_rules! assert_lex_fail {
        ($e1:literal => $e2:expr) => {
            assert_eq!(tokenize($e1).unwrap_err(), $e2)
        };
    }

    #[test]
    fn basic_lex() {
        assert_lex!("x := 10;" => vec![
            Token::Ident(String::from("x")),
            token![:=],
            Token::Numeric(String::from("10")),
            token![;],
        ]);

        assert_lex!("escreva(\"oi\", x);" => vec![
            token![escreva],
            token!["("],
            Token::Str(String::from("oi")),
            token![,],
            Token::Ident(String::from("x")),
            token![")"],
            token![;],
        ]);
    }

    #[test]
    fn keyword_vs_ident_lex() {
        // keyword check is tried before identifier classification,
        // but only on the full scanned word
        assert_lex!("programa programax fimprog" => vec![
            token![programa],
            Token::Ident(String::from("programax")),
            token![fimprog],
        ]);
    }

    #[test]
    fn accented_ident_lex() {
        assert_lex!("média m_2 décimo" => vec![
            Token::Ident(String::from("média")),
            Token::Ident(String::from("m_2")),
            Token::Ident(String::from("décimo")),
        ]);
    }

    #[test]
    fn maximal_munch_lex() {
        // multi-char operators beat their one-char prefixes
        assert_lex!("<= >= != == :=" => vec![
            token![<=], token![>=], token![!=], token![==], token![:=],
        ]);
        assert_lex!("< = > <" => vec![
            token![<], token![=], token![>], token![<],
        ]);
        // a punct run splits into as many tokens as needed
        assert_lex!("x<=2);" => vec![
            Token::Ident(String::from("x")),
            token![<=],
            Token::Numeric(String::from("2")),
            token![")"],
            token![;],
        ]);
    }

    #[test]
    fn multiline_lex() {
        assert_lex!("
programa
inteiro x;
fimprog" => vec![
            token![programa],
            token![inteiro],
            Token::Ident(String::from("x")),
            token![;],
            token![fimprog],
        ]);
    }

    #[test]
    fn str_lex() {
        // quotes are stripped from the stored value
        assert_lex!("\"olá, mundo!\"" => vec![
            Token::Str(String::from("olá, mundo!")),
        ]);
        // escaped quote does not terminate; the escape is kept verbatim
        assert_lex!(r#""a\"b""# => vec![
            Token::Str(String::from("a\\\"b")),
        ]);

        assert_lex_fail!("\"unterminated" => LexErr::UnclosedQuote);
    }

    #[test]
    fn str_content_unrestricted_lex() {
        // characters with no class are fine inside a literal
        assert_lex!("escreva(\"à noite — ß\");" => vec![
            token![escreva],
            token!["("],
            Token::Str(String::from("à noite — ß")),
            token![")"],
            token![;],
        ]);

        // but are still rejected once the literal closes
        assert_lex_fail!("\"ok\" à" => LexErr::UnknownChar('à'));
    }

    #[test]
    fn lex_fail() {
        assert_lex_fail!("x @ y" => LexErr::UnknownOp(String::from("@")));
        assert_lex_fail!("a & b" => LexErr::UnknownOp(String::from("&")));
        assert_lex_fail!("x¢" => LexErr::UnknownChar('¢'));
    }

    #[test]
    fn token_spans() {
        let tokens = tokenize("inteiro x;\nx := 1;").unwrap();

        assert_eq!(tokens[0].loc, (0, 0)..=(0, 6)); // inteiro
        assert_eq!(tokens[1].loc, (0, 8)..=(0, 8)); // x
        assert_eq!(tokens[2].loc, (0, 9)..=(0, 9)); // ;
        assert_eq!(tokens[3].loc, (1, 0)..=(1, 0)); // x
        assert_eq!(tokens[4].loc, (1, 2)..=(1, 3)); // :=
    }
}
