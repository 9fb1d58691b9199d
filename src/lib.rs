//! # pdf_words
//!
//! Word-level positional text model for PDF extraction.
//!
//! An external PDF decoder walks a document and reports text in chunks,
//! each chunk paired with the glyph positions that back it. The decoder's
//! chunking heuristics frequently produce multi-word chunks, chunks whose
//! character count disagrees with the glyph count (a glyph may resolve to
//! several code points under normalization), and Arabic presentation-form
//! ligatures. This crate re-segments those chunks into a page / line /
//! word model where every finished word carries one glyph position per
//! character, ready for downstream layout analysis such as table
//! detection or form-field extraction.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use pdf_words::geometry::Rect;
//! use pdf_words::{DocumentMeta, GlyphPosition, PositionSource, Result, TextSink, WordEngine};
//!
//! /// A stand-in for a real decoder adapter: one page, one chunk.
//! struct OnePage;
//!
//! impl PositionSource for OnePage {
//!     fn stream_text(&mut self, sink: &mut dyn TextSink) -> Result<()> {
//!         let meta = DocumentMeta::titled("example");
//!         sink.start_document(&meta)?;
//!         sink.start_page()?;
//!         let positions: Vec<Arc<GlyphPosition>> = "to be"
//!             .chars()
//!             .enumerate()
//!             .map(|(i, c)| {
//!                 GlyphPosition::new(
//!                     c.to_string(),
//!                     Rect::new(72.0 + i as f32 * 6.0, 720.0, 6.0, 10.0),
//!                     10.0,
//!                     "Helvetica",
//!                 )
//!                 .shared()
//!             })
//!             .collect();
//!         sink.write_string("to be", &positions)?;
//!         sink.end_document(&meta)
//!     }
//! }
//!
//! # fn main() -> pdf_words::Result<()> {
//! let mut engine = WordEngine::new();
//! engine.process(&mut OnePage)?;
//!
//! let page = &engine.result()[0];
//! let texts: Vec<&str> = page.words().iter().map(|w| w.text()).collect();
//! assert_eq!(texts, ["to", "be"]);
//! // One glyph position per character, passed through from the decoder.
//! assert_eq!(page.words()[0].positions().len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Pass-through geometry
pub mod geometry;

// Scoped Unicode normalization
pub mod normalize;

// Word model and segmentation
pub mod page;
pub mod position;

// Engine driver
pub mod engine;

// Re-exports
pub use config::EngineConfig;
pub use engine::{DocumentMeta, PositionSource, TextSink, WordEngine};
pub use error::{Error, Result};
pub use page::{Line, Page, Word};
pub use position::GlyphPosition;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
