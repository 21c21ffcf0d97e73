//! The `mathseg` binary.

use std::error::Error;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mathseg::{format_html, segment_text, Options};

/// Split text with embedded LaTeX math into typed segments.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The file(s) to segment; or standard input if none passed.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Specify output format.
    #[arg(
        short = 't',
        long = "to",
        value_enum,
        default_value = "html",
        value_name = "FORMAT"
    )]
    format: Format,

    /// Write output to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Display math as its LaTeX source instead of math elements.
    #[arg(long)]
    raw_math: bool,

    /// Do not recognize \[ ... \] as display math.
    #[arg(long)]
    no_bracket_math: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// HTML, one document for all inputs.
    Html,
    /// One "kind<TAB>content" line per segment.
    Segments,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut options = Options::default();
    options.parse.bracket_math = !cli.no_bracket_math;
    options.render.raw_math = cli.raw_math;

    let mut input = String::new();
    if cli.files.is_empty() {
        io::stdin().read_to_string(&mut input)?;
    } else {
        for path in &cli.files {
            File::open(path)?.read_to_string(&mut input)?;
        }
    }

    let segments = segment_text(&input, &options);

    let mut output: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        Format::Html => {
            format_html(&segments, &options, &mut output)?;
            output.write_all(b"\n")?;
        }
        Format::Segments => {
            for segment in &segments {
                writeln!(output, "{:?}\t{}", segment.kind(), segment.content())?;
            }
        }
    }

    Ok(())
}
