//! Decoder-emitted glyph positions.
//!
//! A glyph position pairs a rendered glyph's geometric placement with the
//! Unicode string the decoder resolved it to. The word model treats these
//! records as immutable: segmentation re-distributes them across words but
//! never changes their contents, so a single glyph may be referenced from
//! several words through a shared handle.

use std::sync::Arc;

use serde::Serialize;

use crate::geometry::Rect;

/// One glyph as the upstream decoder resolved and placed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphPosition {
    /// Unicode string the glyph resolves to (one or more code points)
    pub unicode: String,
    /// Bounding box in device space
    pub bbox: Rect,
    /// Font size in points
    pub font_size: f32,
    /// Font name/family
    pub font_name: String,
}

impl GlyphPosition {
    /// Create a new glyph position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_words::geometry::Rect;
    /// use pdf_words::GlyphPosition;
    ///
    /// let glyph = GlyphPosition::new("a", Rect::new(72.0, 720.0, 5.0, 10.0), 10.0, "Helvetica");
    /// assert_eq!(glyph.unicode, "a");
    /// assert_eq!(glyph.bbox.x, 72.0);
    /// ```
    pub fn new(
        unicode: impl Into<String>,
        bbox: Rect,
        font_size: f32,
        font_name: impl Into<String>,
    ) -> Self {
        Self {
            unicode: unicode.into(),
            bbox,
            font_size,
            font_name: font_name.into(),
        }
    }

    /// Wrap this position in the shared handle the word model stages.
    pub fn shared(self) -> Arc<GlyphPosition> {
        Arc::new(self)
    }
}
