//! Page, line, and word model for positional text.
//!
//! The decoder delivers text in chunks it grouped with its own heuristics:
//! a chunk frequently spans several words, and its character count can
//! disagree with its glyph count because a glyph may resolve to several
//! code points. The segmentation pass in this module re-walks each chunk
//! glyph by glyph, stepping the character cursor once per resolved code
//! point, and splits at whitespace so that every finished word carries one
//! glyph position per character.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::normalize::resolve_glyph_text;
use crate::position::GlyphPosition;

/// A single word paired with the glyph positions of its characters.
///
/// Before segmentation a `Word` holds a raw decoder chunk and the position
/// count can disagree with the character count. After segmentation the
/// counts match: `positions()[i]` is the glyph that contributed the `i`-th
/// character of `text()`.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    text: String,
    positions: Vec<Arc<GlyphPosition>>,
}

impl Word {
    /// Create a word from text and the glyph positions backing it.
    pub fn new(text: impl Into<String>, positions: &[Arc<GlyphPosition>]) -> Self {
        Self {
            text: text.into(),
            positions: positions.to_vec(),
        }
    }

    /// The word's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The glyph positions backing the word's characters.
    pub fn positions(&self) -> &[Arc<GlyphPosition>] {
        &self.positions
    }

    /// Number of code points in the word.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the word's text is empty.
    ///
    /// Empty words mark whitespace runs; their positions carry the
    /// geometry of the spaces that produced them.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split this chunk-level word at whitespace and append the finer
    /// words to `line`.
    ///
    /// Walks the glyph positions in order, advancing a character cursor
    /// into the chunk text once per code point each glyph resolves to.
    /// The resolved string is used only as a count; the characters that
    /// reach the output come from the chunk text itself. A whitespace
    /// character flushes the staging buffer as a finished word. Whitespace
    /// that terminates a non-empty word is dropped along with its
    /// position; whitespace with nothing staged yet flushes an empty word
    /// that keeps the space's position as its geometry.
    pub(crate) fn segment_into(&self, line: &mut Line, config: &EngineConfig) -> Result<()> {
        let chars: Vec<char> = self.text.chars().collect();
        let mut builder = String::new();
        let mut staged: Vec<Arc<GlyphPosition>> = Vec::new();
        let mut cursor = 0;

        'glyphs: for position in &self.positions {
            let resolved = resolve_glyph_text(&position.unicode);
            for _ in resolved.chars() {
                if cursor == chars.len() {
                    if config.strict_alignment {
                        return Err(self.misaligned());
                    }
                    log::warn!(
                        "Truncating misaligned chunk {:?}: glyphs resolve past its text",
                        self.text
                    );
                    break 'glyphs;
                }
                let ch = chars[cursor];
                if ch.is_whitespace() {
                    if builder.is_empty() {
                        staged.push(Arc::clone(position));
                    }
                    line.emit(
                        Word {
                            text: std::mem::take(&mut builder),
                            positions: std::mem::take(&mut staged),
                        },
                        config,
                    );
                } else {
                    staged.push(Arc::clone(position));
                    builder.push(ch);
                }
                cursor += 1;
            }
        }

        if cursor != chars.len() {
            if config.strict_alignment {
                return Err(self.misaligned());
            }
            log::warn!(
                "Truncating misaligned chunk {:?}: text continues past its glyphs",
                self.text
            );
        }

        // Usually the last word on the line
        if !builder.is_empty() {
            line.emit(
                Word {
                    text: builder,
                    positions: staged,
                },
                config,
            );
        }
        Ok(())
    }

    fn misaligned(&self) -> Error {
        let glyph_chars = self
            .positions
            .iter()
            .map(|position| resolve_glyph_text(&position.unicode).chars().count())
            .sum();
        Error::ChunkMisaligned {
            page: 0,
            chunk: self.text.clone(),
            glyph_chars,
            text_chars: self.text.chars().count(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.positions.first() {
            Some(first) => write!(
                f,
                "{:?} at ({}, {}, {}pt)",
                self.text, first.bbox.x, first.bbox.y, first.font_size
            ),
            None => write!(f, "{:?}", self.text),
        }
    }
}

/// An ordered sequence of words on one line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Line {
    words: Vec<Word>,
}

impl Line {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word to the line.
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// The words on this line, in emission order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Append a segmented word, honoring the empty-word filter.
    fn emit(&mut self, word: Word, config: &EngineConfig) {
        if word.is_empty() && !config.keep_empty_words {
            return;
        }
        self.words.push(word);
    }

    /// Re-segment every chunk-level word on this line.
    ///
    /// Snapshots and clears the word list, then replays each snapshotted
    /// word's segmentation so the finer words land back on the line in
    /// order.
    pub(crate) fn segment(&mut self, config: &EngineConfig) -> Result<()> {
        let raw = std::mem::take(&mut self.words);
        for word in &raw {
            word.segment_into(self, config)?;
        }
        Ok(())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&word.text)?;
        }
        Ok(())
    }
}

/// One page of extracted text: ordered lines plus a flat word view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    lines: Vec<Line>,
    words: Vec<Word>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new line on this page.
    pub fn new_line(&mut self) -> &mut Line {
        self.lines.push(Line::new());
        self.lines.last_mut().unwrap()
    }

    /// Append a decoder chunk to the current (last) line.
    ///
    /// # Panics
    ///
    /// Panics if no line has been started; the driver opens the first line
    /// of every page before forwarding text.
    pub fn new_text(&mut self, text: &str, positions: &[Arc<GlyphPosition>]) {
        let line = self
            .lines
            .last_mut()
            .expect("new_text called before any line was started");
        line.push(Word::new(text, positions));
    }

    /// The lines of this page, in emission order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Flat view of every word on the page, line by line.
    ///
    /// Empty until the page has been segmented.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Segment every line, then populate the flat word view.
    pub(crate) fn segment(&mut self, config: &EngineConfig) -> Result<()> {
        for line in &mut self.lines {
            line.segment(config)?;
        }
        self.words = self
            .lines
            .iter()
            .flat_map(|line| line.words.iter().cloned())
            .collect();
        Ok(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
