//! Configuration for the segmenter and the HTML renderer.

#[cfg(feature = "bon")]
use bon::Builder;

/// Umbrella options struct.
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Options {
    /// Configure segmentation-time options.
    pub parse: ParseOptions,

    /// Configure render-time options.
    pub render: RenderOptions,
}

/// Options that affect how input is split into segments.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct ParseOptions {
    /// Recognize `\[ ... \]` as a block math form, equivalent to
    /// `$$ ... $$`. Enabled by default; disable for dollars-only input.
    ///
    /// ```rust
    /// # use mathseg::{segment_text, Options, Segment};
    /// let options = Options::default();
    /// assert_eq!(segment_text("\\[x\\]", &options),
    ///            vec![Segment::BlockMath("x")]);
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub bracket_math: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { bracket_math: true }
    }
}

/// Options that affect how segments are rendered to HTML.
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct RenderOptions {
    /// Display math segments as their escaped LaTeX source, with dollar
    /// delimiters re-attached, instead of wrapping them in math elements.
    /// This backs a user-level "show LaTeX" preference: the input is still
    /// segmented, only the display changes.
    ///
    /// Segments do not record which block form they came from, so a span
    /// written as `\[ ... \]` is displayed with `$$` delimiters.
    ///
    /// ```rust
    /// # use mathseg::{latex_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.raw_math = true;
    /// assert_eq!(latex_to_html("solve $x^2$", &options),
    ///            "solve $x^2$");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub raw_math: bool,
}
