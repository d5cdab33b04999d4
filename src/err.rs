//! Shared error plumbing for the analysis pipeline.
//!
//! Every stage (lexer, parser, semantic traversal) defines its own error enum
//! and implements [`GolErr`] on it. [`FullGolErr`] attaches source positions to
//! those errors and renders them as readable messages, with a pointer into the
//! offending line when the full source is available.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Indicates a specific character in given code (line, column), zero-indexed.
pub type Cursor = (usize, usize);

/// Indicates a contiguous inclusive range of characters in given code.
pub type CursorRange = RangeInclusive<Cursor>;

/// Errors that can be reported by the Portugol front-end.
///
/// Implementors provide the name of the error class and a message (through
/// `Display`); the trait supplies the combinators that attach positions.
pub trait GolErr: Display + Sized {
    /// The name of the error class (e.g. `syntax error`, `semantic error`).
    fn err_name(&self) -> &'static str;

    /// Designate that this error occurred at a specific position.
    fn at(self, p: Cursor) -> FullGolErr<Self> {
        FullGolErr::new(self, vec![ErrPos::Point(p)])
    }

    /// Designate that this error occurred within a range of positions.
    fn at_range(self, range: CursorRange) -> FullGolErr<Self> {
        FullGolErr::new(self, vec![ErrPos::from_range(range)])
    }

    /// Designate that this error occurred at an unknown position in the code.
    fn at_unknown(self) -> FullGolErr<Self> {
        FullGolErr::new(self, vec![])
    }
}

impl<E: GolErr> From<E> for FullGolErr<E> {
    fn from(err: E) -> Self {
        err.at_unknown()
    }
}

/// An error that has associated source positions.
#[derive(PartialEq, Eq, Debug)]
pub struct FullGolErr<E: GolErr> {
    pub(crate) err: E,
    pos: BTreeSet<ErrPos>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug)]
enum ErrPos {
    /// Error occurred at a specific point.
    Point(Cursor),

    /// Error occurred at an inclusive range of points.
    Range(Cursor, Cursor),
}

impl ErrPos {
    fn from_range(range: CursorRange) -> Self {
        let (start, end) = range.into_inner();
        if start == end {
            ErrPos::Point(start)
        } else {
            ErrPos::Range(start, end)
        }
    }

    fn position(&self) -> String {
        match self {
            ErrPos::Point((lno, cno)) => format!("{}:{}", lno + 1, cno + 1),
            ErrPos::Range((slno, scno), (elno, ecno)) => {
                format!("{}:{}-{}:{}", slno + 1, scno + 1, elno + 1, ecno + 1)
            }
        }
    }

    fn display_pointer(&self, src: &str) -> Vec<String> {
        match *self {
            ErrPos::Point(p) => ptr_point(src, p),
            ErrPos::Range(s, e) => ptrs_range(src, s, e),
        }
    }
}

/// Get a line from the original text, or `None` if the position falls outside
/// of it (e.g. an end-of-input cursor on an empty source).
fn get_line(orig_txt: &str, lno: usize) -> Option<String> {
    orig_txt.lines().nth(lno).map(String::from)
}

fn ptr_point(orig_txt: &str, (lno, cno): Cursor) -> Vec<String> {
    match get_line(orig_txt, lno) {
        Some(code) => {
            let ptr = " ".repeat(cno) + "^";
            vec![code, ptr]
        }
        None => vec![],
    }
}

fn ptrs_range(orig_txt: &str, (slno, scno): Cursor, (elno, ecno): Cursor) -> Vec<String> {
    if slno == elno {
        let Some(code) = get_line(orig_txt, slno) else {
            return vec![];
        };

        // 3-9
        // 0 1 2 3 4 5 6 7 8 9
        // _ _ _ ~ ~ ~ ~ ~ ~ ~ _ _ _
        let ptrs = " ".repeat(scno) + &"~".repeat(ecno - scno + 1);

        vec![code, ptrs]
    } else {
        let mut lines = vec![];

        // after the start column, ~ until the end of the start line
        if let Some(start_code) = get_line(orig_txt, slno) {
            // cursors count chars, not bytes
            let start_len = start_code.chars().count();
            let start_ptr =
                " ".repeat(scno) + "^" + &"~".repeat(start_len.saturating_sub(scno + 1));
            lines.push(start_code);
            lines.push(start_ptr);
        }

        // ~ before the end pointer
        if let Some(end_code) = get_line(orig_txt, elno) {
            let end_ptr = "~".repeat(ecno) + "^";
            lines.push(end_code);
            lines.push(end_ptr);
        }

        lines
    }
}

impl<E: GolErr> FullGolErr<E> {
    fn new(e: E, positions: impl IntoIterator<Item = ErrPos>) -> Self {
        Self {
            err: e,
            pos: positions.into_iter().collect(),
        }
    }

    /// The wrapped stage error.
    pub fn inner(&self) -> &E {
        &self.err
    }

    /// Get a String designating where the error occurred
    /// and the message associated with the error.
    pub fn short_msg(&self) -> String {
        let line_fmt = self
            .pos
            .iter()
            .map(ErrPos::position)
            .collect::<Vec<_>>()
            .join(", ");

        if line_fmt.trim().is_empty() {
            format!("{}: {}", self.err.err_name(), self.err)
        } else {
            format!("{} :: {}: {}", line_fmt.trim(), self.err.err_name(), self.err)
        }
    }

    /// Get a String designating where the error occurred,
    /// the message associated with the error,
    /// and a pointer to what happened at the line to cause the error.
    ///
    /// When no position points into an existing line of `src`, this is just
    /// the short message.
    pub fn full_msg(&self, src: &str) -> String {
        let ptrs: Vec<_> = self
            .pos
            .iter()
            .flat_map(|p| p.display_pointer(src))
            .collect();

        if ptrs.is_empty() {
            return self.short_msg();
        }

        let mut lines = vec![self.short_msg(), String::new()];
        lines.extend(ptrs);
        lines.join("\n")
    }

    /// Map the inner error to another error, keeping the positions.
    pub fn map<F: GolErr>(self, f: impl FnOnce(E) -> F) -> FullGolErr<F> {
        FullGolErr {
            err: f(self.err),
            pos: self.pos,
        }
    }

    /// Cast the inner error to another error type, keeping the positions.
    pub fn cast_err<F: GolErr + From<E>>(self) -> FullGolErr<F> {
        self.map(F::from)
    }
}

impl<E: GolErr + PartialEq> PartialEq<E> for FullGolErr<E> {
    fn eq(&self, other: &E) -> bool {
        &self.err == other
    }
}
