//! The block stage: extracting display math from the whole input.

use crate::parser::ParseOptions;
use crate::scanners::{self, Scan, DISPLAY_BRACKET, DISPLAY_DOLLAR};

/// One run of the block stage's output. Text runs still need inline
/// scanning; math runs are final.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BlockRun<'a> {
    Text(&'a str),
    Math(&'a str),
}

/// Split `input` into alternating text and display-math runs, in one
/// left-to-right pass over the two block forms (`$$ ... $$` and, unless
/// disabled, `\[ ... \]`). Whichever form opens earliest wins; a close
/// marker must come from the same family as its open.
///
/// An open marker with no matching close stops the scan entirely: the
/// remainder from that marker onward is carried forward as a text run, still
/// eligible for inline scanning downstream.
pub(crate) fn split_blocks<'a>(input: &'a str, options: &ParseOptions) -> Vec<BlockRun<'a>> {
    let mut runs = vec![];
    let mut pos = 0;

    while pos < input.len() {
        let mut candidate = scanners::scan(input, pos, DISPLAY_DOLLAR);
        if options.bracket_math {
            let bracket = scanners::scan(input, pos, DISPLAY_BRACKET);
            if earlier(&bracket, &candidate) {
                candidate = bracket;
            }
        }

        match candidate {
            Scan::Matched { open, body, resume } => {
                if open > pos {
                    runs.push(BlockRun::Text(&input[pos..open]));
                }
                runs.push(BlockRun::Math(&input[body]));
                pos = resume;
            }
            // Unmatched open or no marker at all: the rest is text.
            Scan::Unmatched { .. } | Scan::None => break,
        }
    }

    if pos < input.len() {
        runs.push(BlockRun::Text(&input[pos..]));
    }
    runs
}

/// Whether `a` found an open marker strictly before `b`'s, treating "no
/// marker" as infinitely late. The two block forms have distinct open
/// markers, so ties cannot occur.
fn earlier(a: &Scan, b: &Scan) -> bool {
    match (a.open(), b.open()) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(input: &str) -> Vec<BlockRun<'_>> {
        split_blocks(input, &ParseOptions::default())
    }

    #[test]
    fn no_markers_is_a_single_text_run() {
        assert_eq!(blocks("just words"), vec![BlockRun::Text("just words")]);
    }

    #[test]
    fn dollar_and_bracket_forms_are_equivalent() {
        assert_eq!(blocks("$$x^2$$"), vec![BlockRun::Math("x^2")]);
        assert_eq!(blocks("\\[x^2\\]"), vec![BlockRun::Math("x^2")]);
    }

    #[test]
    fn earliest_open_wins_across_families() {
        assert_eq!(
            blocks("\\[a\\] then $$b$$"),
            vec![
                BlockRun::Math("a"),
                BlockRun::Text(" then "),
                BlockRun::Math("b"),
            ]
        );
    }

    #[test]
    fn unmatched_open_stops_the_scan_entirely() {
        // The unmatched \[ comes first, so the later well-formed $$ pair is
        // not extracted either.
        assert_eq!(
            blocks("\\[a $$b$$"),
            vec![BlockRun::Text("\\[a $$b$$")]
        );
    }

    #[test]
    fn unmatched_tail_is_carried_forward() {
        assert_eq!(
            blocks("$$a$$ rest $$b"),
            vec![BlockRun::Math("a"), BlockRun::Text(" rest $$b")]
        );
    }

    #[test]
    fn bracket_form_can_be_disabled() {
        let options = ParseOptions {
            bracket_math: false,
        };
        assert_eq!(
            split_blocks("\\[x\\]", &options),
            vec![BlockRun::Text("\\[x\\]")]
        );
    }
}
