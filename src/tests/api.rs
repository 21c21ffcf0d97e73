use super::*;
use crate::{format_html, SegmentKind};
use pretty_assertions::assert_eq;

#[test]
fn exercise_full_api() {
    let default_options = Options::default();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let segments = segment_text("a $b$ $$c$$", &default_options);
    let mut buffer = vec![];
    let _: std::io::Result<()> = format_html(&segments, &default_options, &mut buffer);
    let _: String = latex_to_html("a $b$", &default_options);

    let segment = segments[0];
    let _: &str = segment.content();
    let _: SegmentKind = segment.kind();
    let _: bool = segment.is_math();

    let _ = Segment::Text("a");
    let _ = Segment::InlineMath("b");
    let _ = Segment::BlockMath("c");

    let mut options = Options::default();
    options.parse.bracket_math = false;
    options.render.raw_math = true;
    assert_eq!(
        segment_text("\\[x\\] and $y$", &options),
        vec![Segment::Text("\\[x\\] and "), Segment::InlineMath("y")],
    );
    assert_eq!(latex_to_html("$y$", &options), "$y$");
}

#[cfg(feature = "bon")]
#[test]
fn exercise_builders() {
    use crate::{ParseOptions, RenderOptions};

    let parse = ParseOptions::builder().bracket_math(false).build();
    let render = RenderOptions::builder().raw_math(true).build();
    let options = Options { parse, render };

    assert_eq!(
        segment_text("\\[x\\]", &options),
        vec![Segment::Text("\\[x\\]")],
    );
    assert_eq!(latex_to_html("$x$", &options), "$x$");
}

#[test]
fn segment_kinds_match_variants() {
    assert_eq!(Segment::Text("a").kind(), SegmentKind::Text);
    assert_eq!(Segment::InlineMath("a").kind(), SegmentKind::InlineMath);
    assert_eq!(Segment::BlockMath("a").kind(), SegmentKind::BlockMath);
    assert!(!Segment::Text("a").is_math());
    assert!(Segment::InlineMath("a").is_math());
    assert!(Segment::BlockMath("a").is_math());
}
