//! Error types for the word extraction pipeline.

/// Result type alias for word extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while driving a decoder and segmenting its
/// output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error surfaced by the upstream decoder, passed through unchanged
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the upstream decoder
    #[error("Decoder error: {0}")]
    Decoder(String),

    /// A chunk's glyph positions do not resolve to its text.
    ///
    /// The upstream contract requires the per-glyph Unicode strings to
    /// concatenate to the chunk text; a count mismatch means the decoder
    /// violated it.
    #[error(
        "Chunk {chunk:?} on page {page} is misaligned: glyphs resolve to \
         {glyph_chars} characters but the chunk text has {text_chars}"
    )]
    ChunkMisaligned {
        /// 1-based page number of the offending chunk (0 until the driver
        /// attaches it)
        page: usize,
        /// Text of the offending chunk
        chunk: String,
        /// Characters produced by resolving the chunk's glyphs
        glyph_chars: usize,
        /// Characters in the chunk text
        text_chars: usize,
    },
}

impl Error {
    /// Attach a 1-based page number to an alignment error.
    ///
    /// Segmentation reports the mismatch without knowing which page it is
    /// on; the driver fills the page in as it walks the document.
    pub(crate) fn on_page(self, page: usize) -> Self {
        match self {
            Error::ChunkMisaligned {
                chunk,
                glyph_chars,
                text_chars,
                ..
            } => Error::ChunkMisaligned {
                page,
                chunk,
                glyph_chars,
                text_chars,
            },
            other => other,
        }
    }
}
