//! The inline stage: extracting `$ ... $` math from a single text run.

use crate::scanners::{self, Scan, INLINE_DOLLAR};
use crate::segment::Segment;

/// Split one text run (already free of recognized block spans) into
/// alternating text and inline-math segments, appending to `out`.
///
/// Pairing is naive, matching surrounding app behavior: each `$` closes at
/// the very next `$`. An unmatched `$` stops the scan immediately and the
/// whole remainder, orphan marker included, becomes one final text segment.
pub(crate) fn split_inlines<'a>(text: &'a str, out: &mut Vec<Segment<'a>>) {
    let mut pos = 0;

    while let Scan::Matched { open, body, resume } = scanners::scan(text, pos, INLINE_DOLLAR) {
        if open > pos {
            out.push(Segment::Text(&text[pos..open]));
        }
        out.push(Segment::InlineMath(&text[body]));
        pos = resume;
    }

    if pos < text.len() {
        out.push(Segment::Text(&text[pos..]));
    }
}
