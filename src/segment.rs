//! The segment sequence produced by the engine.

/// One atomic unit of segmenter output.
///
/// Segments borrow from the input string; the engine only locates spans, it
/// never copies or rewrites them. A segment sequence is ordered: consumers
/// must lay segments out in the order they were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Ordinary prose, carried verbatim.
    Text(&'a str),

    /// A math span delimited by a single pair of `$` markers, rendered
    /// within a line of text. The delimiters are stripped.
    InlineMath(&'a str),

    /// A math span delimited by `$$ ... $$` or `\[ ... \]`, rendered as its
    /// own standalone display element. The delimiters are stripped; the two
    /// forms are not distinguished downstream. The body may still contain a
    /// literal `$` — block bodies are not re-scanned for inline math.
    BlockMath(&'a str),
}

/// The kind of a [`Segment`], for adapters that dispatch on kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Plain text.
    Text,
    /// Inline math.
    InlineMath,
    /// Display (block) math.
    BlockMath,
}

impl<'a> Segment<'a> {
    /// The substring belonging to this segment, delimiters stripped for the
    /// math kinds and untouched for text.
    pub fn content(&self) -> &'a str {
        match *self {
            Segment::Text(s) | Segment::InlineMath(s) | Segment::BlockMath(s) => s,
        }
    }

    /// This segment's kind.
    pub fn kind(&self) -> SegmentKind {
        match *self {
            Segment::Text(..) => SegmentKind::Text,
            Segment::InlineMath(..) => SegmentKind::InlineMath,
            Segment::BlockMath(..) => SegmentKind::BlockMath,
        }
    }

    /// Whether this is one of the two math kinds.
    pub fn is_math(&self) -> bool {
        !matches!(self, Segment::Text(..))
    }
}
