#![no_main]

use libfuzzer_sys::fuzz_target;

use mathseg::{latex_to_html, segment_text, Options};

fuzz_target!(|input: (String, Options)| {
    let (s, options) = input;
    segment_text(&s, &options);
    latex_to_html(&s, &options);
});
