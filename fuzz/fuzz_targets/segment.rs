#![no_main]

use libfuzzer_sys::fuzz_target;

use mathseg::{latex_to_html, segment_text, Options, Segment};

fuzz_target!(|s: &str| {
    let options = Options::default();
    let segments = segment_text(s, &options);

    let total: usize = segments.iter().map(|seg| seg.content().len()).sum();
    assert!(total <= s.len());
    for segment in &segments {
        if let Segment::Text(text) = segment {
            assert!(!text.is_empty());
        }
    }

    latex_to_html(s, &options);
});
