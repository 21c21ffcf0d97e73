//! A segmentation engine for text interleaved with LaTeX-style math markup.
//!
//! `mathseg` splits a string into an ordered sequence of typed segments —
//! plain text, inline math (`$ ... $`), and display math (`$$ ... $$` or
//! `\[ ... \]`) — for a renderer to map onto display primitives. Unbalanced
//! markup is never an error; it falls back to literal text.
//!
//! ```
//! use mathseg::{segment_text, Options, Segment};
//!
//! let segments = segment_text("solve $x^2 = 4$ for $x$", &Options::default());
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::Text("solve "),
//!         Segment::InlineMath("x^2 = 4"),
//!         Segment::Text(" for "),
//!         Segment::InlineMath("x"),
//!     ],
//! );
//! ```
//!
//! For HTML output there is a one-call wrapper:
//!
//! ```
//! use mathseg::{latex_to_html, Options};
//!
//! assert_eq!(
//!     latex_to_html("Pythagoras: $$a^2 + b^2 = c^2$$", &Options::default()),
//!     "Pythagoras: <code data-math-style=\"display\">a^2 + b^2 = c^2</code>",
//! );
//! ```

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod html;
mod parser;
mod scanners;
mod segment;

pub use crate::html::format_html;
pub use crate::parser::{segment_text, Options, ParseOptions, RenderOptions};
pub use crate::segment::{Segment, SegmentKind};

/// Segment `input` and render the result to an HTML string.
///
/// A convenience over [`segment_text`] + [`format_html`] for callers that
/// don't need the segment sequence itself.
pub fn latex_to_html(input: &str, options: &Options) -> String {
    let mut bytes = vec![];
    let segments = segment_text(input, options);
    format_html(&segments, options, &mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
