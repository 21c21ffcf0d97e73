//! Low-level delimiter scanning.
//!
//! A [`Delimiter`] names an open/close marker pair; [`scan`] locates the next
//! occurrence of that pair in a string. Scanning is purely positional: there
//! is no escaping, and markers are matched as literal substrings.

use std::ops::Range;

/// An open/close marker pair bounding a math span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Delimiter {
    pub open: &'static str,
    pub close: &'static str,
}

/// `$ ... $`
pub(crate) const INLINE_DOLLAR: Delimiter = Delimiter {
    open: "$",
    close: "$",
};

/// `$$ ... $$`
pub(crate) const DISPLAY_DOLLAR: Delimiter = Delimiter {
    open: "$$",
    close: "$$",
};

/// `\[ ... \]`
pub(crate) const DISPLAY_BRACKET: Delimiter = Delimiter {
    open: "\\[",
    close: "\\]",
};

/// Result of scanning for one delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scan {
    /// Both markers found. `body` is the span between them, exclusive of the
    /// markers; scanning may resume at `resume` (just past the close marker).
    Matched {
        open: usize,
        body: Range<usize>,
        resume: usize,
    },
    /// An open marker at `open` with no close marker before end of input.
    /// This is a normal outcome, not an error; the caller decides what the
    /// remainder becomes.
    Unmatched { open: usize },
    /// No open marker at or after the start offset.
    None,
}

impl Scan {
    /// The position of the open marker, if one was found.
    pub fn open(&self) -> Option<usize> {
        match *self {
            Scan::Matched { open, .. } | Scan::Unmatched { open } => Some(open),
            Scan::None => None,
        }
    }
}

/// Find the first occurrence of `delimiter`'s open marker at or after `from`,
/// then its close marker. The close marker is searched strictly after the end
/// of the open marker, so a marker can never close itself.
///
/// All delimiter markers are ASCII, so every offset produced here falls on a
/// char boundary of `input`.
pub(crate) fn scan(input: &str, from: usize, delimiter: Delimiter) -> Scan {
    let open = match input[from..].find(delimiter.open) {
        Some(ix) => from + ix,
        None => return Scan::None,
    };

    let body_start = open + delimiter.open.len();
    match input[body_start..].find(delimiter.close) {
        Some(ix) => {
            let body_end = body_start + ix;
            Scan::Matched {
                open,
                body: body_start..body_end,
                resume: body_end + delimiter.close.len(),
            }
        }
        None => Scan::Unmatched { open },
    }
}
