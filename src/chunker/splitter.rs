use crate::tokenizer::Tokenizer;
use regex::Regex;
use std::sync::LazyLock;

/// A line opening a markdown header (`#` to `######` then whitespace)
static SECTION_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s").expect("valid section regex"));

/// Blank line(s) between paragraphs
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid paragraph regex"));

/// A line opening a header, code fence, dash list item or numbered list item
static STRUCTURAL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:#{1,6}\s|```|-\s|\d+\.\s)").expect("valid boundary regex")
});

/// Separator placed between accumulated segments
const SEGMENT_JOINER: &str = "\n\n";

/// A candidate piece of text produced by a [`Splitter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Segments with different sections are never merged into one chunk
    pub section: Option<usize>,
}

/// Boundary detection for the accumulating strategies
pub trait Splitter: Send + Sync {
    /// Split content into ordered candidate segments
    fn split<'a>(&self, content: &'a str) -> Vec<Segment<'a>>;
}

/// Header sections, then paragraphs within each section
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionSplitter;

impl Splitter for SectionSplitter {
    fn split<'a>(&self, content: &'a str) -> Vec<Segment<'a>> {
        split_before(content, &SECTION_BOUNDARY)
            .into_iter()
            .enumerate()
            .flat_map(|(section, text)| {
                PARAGRAPH_BREAK.split(text).map(move |paragraph| Segment {
                    text: paragraph,
                    section: Some(section),
                })
            })
            .collect()
    }
}

/// One flat list of structural boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundarySplitter;

impl Splitter for BoundarySplitter {
    fn split<'a>(&self, content: &'a str) -> Vec<Segment<'a>> {
        split_before(content, &STRUCTURAL_BOUNDARY)
            .into_iter()
            .map(|text| Segment {
                text,
                section: None,
            })
            .collect()
    }
}

/// Split `text` so that every match of `boundary` starts a new piece
///
/// No empty leading piece is produced when the text opens with a boundary.
fn split_before<'a>(text: &'a str, boundary: &Regex) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for m in boundary.find_iter(text) {
        if m.start() > start {
            pieces.push(&text[start..m.start()]);
            start = m.start();
        }
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

/// Merge segments into chunks of at most `chunk_size` tokens
///
/// A segment that would overflow a non-empty buffer flushes the buffer first,
/// then is appended whatever its own size: oversized segments become a chunk
/// of their own and are never subdivided. A change of section also flushes.
/// Whitespace-only segments are dropped. `flush` receives the joined text and
/// the section of the buffered segments.
pub(crate) fn accumulate<F>(
    segments: Vec<Segment<'_>>,
    chunk_size: usize,
    tokenizer: &dyn Tokenizer,
    mut flush: F,
) where
    F: FnMut(String, Option<usize>),
{
    let mut buffer: Vec<&str> = Vec::new();
    let mut buffer_tokens = 0;
    let mut section = None;

    for segment in segments {
        if segment.text.trim().is_empty() {
            continue;
        }

        if segment.section != section && !buffer.is_empty() {
            flush(buffer.join(SEGMENT_JOINER), section);
            buffer.clear();
            buffer_tokens = 0;
        }
        section = segment.section;

        let segment_tokens = tokenizer.count(segment.text);

        if buffer_tokens + segment_tokens > chunk_size && !buffer.is_empty() {
            flush(buffer.join(SEGMENT_JOINER), section);
            buffer.clear();
            buffer_tokens = 0;
        }

        buffer.push(segment.text);
        buffer_tokens += segment_tokens;
    }

    if !buffer.is_empty() {
        flush(buffer.join(SEGMENT_JOINER), section);
    }
}
