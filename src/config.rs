//! Configuration for the word extraction engine.

/// Tunable behavior for the segmentation pass.
///
/// The defaults reproduce the reference behavior: empty-text words are
/// emitted for leading and consecutive whitespace (their positions carry
/// the space geometry), and a chunk whose glyphs disagree with its text
/// fails the whole document.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Fail fast when a chunk's glyph count disagrees with its text.
    ///
    /// When true (default), segmentation returns
    /// [`Error::ChunkMisaligned`](crate::Error::ChunkMisaligned) naming the
    /// page and chunk. When false, segmentation stops at the shorter of the
    /// two sequences and logs a warning instead.
    pub strict_alignment: bool,

    /// Keep empty-text words produced by leading or consecutive whitespace.
    ///
    /// An empty word's positions mark the geometry of the space that
    /// produced it. Set to false to drop such words at emission when the
    /// consumer has no use for them.
    pub keep_empty_words: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_alignment: true,
            keep_empty_words: true,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select strict or lenient handling of misaligned chunks.
    pub fn with_strict_alignment(mut self, strict: bool) -> Self {
        self.strict_alignment = strict;
        self
    }

    /// Keep or drop empty-text words at emission.
    pub fn with_keep_empty_words(mut self, keep: bool) -> Self {
        self.keep_empty_words = keep;
        self
    }
}
