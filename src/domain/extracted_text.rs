pub const PREVIEW_CHARS: usize = 1000;
pub const PROMPT_CHARS: usize = 2000;
pub const MIN_READABLE_CHARS: usize = 10;
pub const TRUNCATION_MARKER: &str = "...";

/// Trimmed text recovered from a document. Lengths are counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_readable(&self) -> bool {
        self.char_len() >= MIN_READABLE_CHARS
    }

    /// The first 1000 chars, with a marker appended when anything was cut.
    pub fn preview(&self) -> String {
        match char_boundary(&self.0, PREVIEW_CHARS) {
            Some(end) => format!("{}{}", &self.0[..end], TRUNCATION_MARKER),
            None => self.0.clone(),
        }
    }

    /// The slice sent to the analysis service.
    pub fn prompt_excerpt(&self) -> &str {
        match char_boundary(&self.0, PROMPT_CHARS) {
            Some(end) => &self.0[..end],
            None => &self.0,
        }
    }
}

/// Byte offset of the `max_chars`-th char, or `None` if the text is not longer than that.
fn char_boundary(text: &str, max_chars: usize) -> Option<usize> {
    text.char_indices().nth(max_chars).map(|(idx, _)| idx)
}
