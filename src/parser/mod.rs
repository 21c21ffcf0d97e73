//! The segmentation pipeline: block stage, then inline stage per text run.

mod blocks;
mod inlines;
pub mod options;

pub use crate::parser::options::{Options, ParseOptions, RenderOptions};

use crate::parser::blocks::BlockRun;
use crate::segment::Segment;

/// Split a string of mixed prose and LaTeX-style math markup into an ordered
/// sequence of typed segments.
///
/// Display math (`$$ ... $$`, `\[ ... \]`) is extracted first across the
/// whole input; each remaining text run is then scanned for inline math
/// (`$ ... $`). Unmatched delimiters are never an error: the remainder from
/// the orphan marker onward falls back to text (see the stage docs for the
/// exact policy). Empty input yields no segments.
///
/// The function is referentially transparent; callers that render the same
/// string repeatedly may memoize on it freely.
///
/// See the documentation of the crate root for an example.
pub fn segment_text<'a>(input: &'a str, options: &Options) -> Vec<Segment<'a>> {
    if input.is_empty() {
        return vec![];
    }

    // Nothing that can open a math span: the whole input is one text run.
    let matcher = jetscii::bytes!(b'$', b'\\');
    if matcher.find(input.as_bytes()).is_none() {
        return vec![Segment::Text(input)];
    }

    let mut segments = vec![];
    for run in blocks::split_blocks(input, &options.parse) {
        match run {
            BlockRun::Math(body) => segments.push(Segment::BlockMath(body)),
            BlockRun::Text(text) => inlines::split_inlines(text, &mut segments),
        }
    }
    segments
}
