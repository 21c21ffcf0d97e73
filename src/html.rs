//! The HTML render adapter: maps a segment sequence to HTML.

use std::io::{self, Write};

use crate::parser::Options;
use crate::segment::Segment;

/// Render a segment sequence to HTML, in order.
///
/// Text segments are HTML-escaped; math segments become `<code>` elements
/// tagged with `data-math-style="inline"` or `data-math-style="display"`,
/// with their (escaped) LaTeX source as the element body, ready for a
/// client-side math renderer to pick up. With
/// [`raw_math`](crate::RenderOptions::raw_math) set, math segments are
/// instead printed as escaped source with dollar delimiters re-attached.
pub fn format_html<W: Write>(
    segments: &[Segment],
    options: &Options,
    output: &mut W,
) -> io::Result<()> {
    for segment in segments {
        match *segment {
            Segment::Text(text) => escape(output, text.as_bytes())?,
            Segment::InlineMath(body) => write_math(output, options, body, "inline", "$")?,
            Segment::BlockMath(body) => write_math(output, options, body, "display", "$$")?,
        }
    }
    Ok(())
}

fn write_math<W: Write>(
    output: &mut W,
    options: &Options,
    body: &str,
    style: &str,
    delimiter: &str,
) -> io::Result<()> {
    if options.render.raw_math {
        output.write_all(delimiter.as_bytes())?;
        escape(output, body.as_bytes())?;
        output.write_all(delimiter.as_bytes())?;
    } else {
        write!(output, "<code data-math-style=\"{}\">", style)?;
        escape(output, body.as_bytes())?;
        output.write_all(b"</code>")?;
    }
    Ok(())
}

/// Write `buffer` with the HTML-significant bytes replaced by entities.
pub fn escape<W: Write>(output: &mut W, buffer: &[u8]) -> io::Result<()> {
    let mut offset = 0;
    for (i, &byte) in buffer.iter().enumerate() {
        let entity: &[u8] = match byte {
            b'"' => b"&quot;",
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            _ => continue,
        };
        output.write_all(&buffer[offset..i])?;
        output.write_all(entity)?;
        offset = i + 1;
    }
    output.write_all(&buffer[offset..])?;
    Ok(())
}
