//! Engine that processes a decoded document into positional word units.
//!
//! The upstream PDF decoder walks a document and reports what it finds
//! through the [`TextSink`] hooks. The engine holds the accumulating
//! pages, forwards each event to the current page, and runs the
//! segmentation pass over every page once the document ends. Decoders (or
//! test fakes) plug in behind [`PositionSource`]; the engine never parses
//! PDF content itself.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::page::Page;
use crate::position::GlyphPosition;

/// Document metadata supplied by the decoder.
#[derive(Debug, Clone, Default)]
pub struct DocumentMeta {
    /// Document title, if the document carries one
    pub title: Option<String>,
}

impl DocumentMeta {
    /// Metadata with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Callback hooks a decoder invokes while walking a document.
///
/// Events arrive on one thread in a fixed order: `start_document`, then
/// for each page `start_page` followed by zero or more interleaved
/// `write_string` and `write_line_separator` calls, finally
/// `end_document`.
pub trait TextSink {
    /// A document is about to be walked.
    fn start_document(&mut self, meta: &DocumentMeta) -> Result<()>;

    /// A new page begins.
    fn start_page(&mut self) -> Result<()>;

    /// A chunk of text with the glyph positions that back it.
    ///
    /// The per-glyph resolved Unicode strings must flatten to `text`.
    fn write_string(&mut self, text: &str, positions: &[Arc<GlyphPosition>]) -> Result<()>;

    /// The current line ended.
    fn write_line_separator(&mut self) -> Result<()>;

    /// The document has been fully walked.
    fn end_document(&mut self, meta: &DocumentMeta) -> Result<()>;
}

/// A decoder-supplied document that can stream its text.
pub trait PositionSource {
    /// Drive one full document through the sink's hooks in order.
    fn stream_text(&mut self, sink: &mut dyn TextSink) -> Result<()>;
}

/// Engine that processes PDF documents into positional word units.
///
/// # Examples
///
/// See the crate-level documentation for an end-to-end example with a
/// scripted source.
#[derive(Debug, Default)]
pub struct WordEngine {
    pages: Vec<Page>,
    config: EngineConfig,
}

impl WordEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            pages: Vec::new(),
            config,
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process one document: reset, then drive the source to completion.
    pub fn process<S: PositionSource>(&mut self, source: &mut S) -> Result<()> {
        self.reset();
        source.stream_text(self)
    }

    /// The processed pages, in document order.
    pub fn result(&self) -> &[Page] {
        &self.pages
    }

    /// Consume the engine and take ownership of the processed pages.
    pub fn into_result(self) -> Vec<Page> {
        self.pages
    }

    /// Clear all accumulated pages. Valid between documents.
    pub fn reset(&mut self) {
        log::info!("Resetting word engine");
        self.pages.clear();
    }

    /// # Panics
    ///
    /// Panics if the decoder emitted text before any `start_page`.
    fn current_page(&mut self) -> &mut Page {
        self.pages
            .last_mut()
            .expect("decoder emitted text before start_page")
    }
}

impl TextSink for WordEngine {
    fn start_document(&mut self, meta: &DocumentMeta) -> Result<()> {
        log::info!(
            "Word engine started processing document {}",
            meta.title.as_deref().unwrap_or("<untitled>")
        );
        Ok(())
    }

    fn start_page(&mut self) -> Result<()> {
        let mut page = Page::new();
        page.new_line();
        self.pages.push(page);
        Ok(())
    }

    fn write_string(&mut self, text: &str, positions: &[Arc<GlyphPosition>]) -> Result<()> {
        self.current_page().new_text(text, positions);
        Ok(())
    }

    fn write_line_separator(&mut self) -> Result<()> {
        self.current_page().new_line();
        Ok(())
    }

    fn end_document(&mut self, _meta: &DocumentMeta) -> Result<()> {
        log::info!("Segmenting {} pages", self.pages.len());
        let config = self.config.clone();
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.segment(&config).map_err(|err| err.on_page(index + 1))?;
        }
        log::info!("Document processing completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    /// Scripted decoder events, in stream order.
    enum Event {
        Page,
        Text(&'static str),
        LineBreak,
    }

    struct Scripted(Vec<Event>);

    impl PositionSource for Scripted {
        fn stream_text(&mut self, sink: &mut dyn TextSink) -> Result<()> {
            let meta = DocumentMeta::titled("script");
            sink.start_document(&meta)?;
            for event in &self.0 {
                match event {
                    Event::Page => sink.start_page()?,
                    Event::Text(text) => {
                        let positions: Vec<Arc<GlyphPosition>> = text
                            .chars()
                            .enumerate()
                            .map(|(i, c)| {
                                GlyphPosition::new(
                                    c.to_string(),
                                    Rect::new(i as f32 * 6.0, 700.0, 6.0, 10.0),
                                    10.0,
                                    "Helvetica",
                                )
                                .shared()
                            })
                            .collect();
                        sink.write_string(text, &positions)?;
                    },
                    Event::LineBreak => sink.write_line_separator()?,
                }
            }
            sink.end_document(&meta)
        }
    }

    #[test]
    fn test_line_separator_starts_a_new_line() {
        let mut engine = WordEngine::new();
        engine
            .process(&mut Scripted(vec![
                Event::Page,
                Event::Text("a"),
                Event::LineBreak,
                Event::Text("b"),
            ]))
            .unwrap();

        let pages = engine.result();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines().len(), 2);
        assert_eq!(pages[0].lines()[0].words()[0].text(), "a");
        assert_eq!(pages[0].lines()[1].words()[0].text(), "b");
    }

    #[test]
    fn test_pages_keep_emission_order() {
        let mut engine = WordEngine::new();
        engine
            .process(&mut Scripted(vec![
                Event::Page,
                Event::Text("first"),
                Event::Page,
                Event::Text("second"),
            ]))
            .unwrap();

        let pages = engine.result();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].words()[0].text(), "first");
        assert_eq!(pages[1].words()[0].text(), "second");
    }

    #[test]
    fn test_process_resets_previous_document() {
        let mut engine = WordEngine::new();
        engine
            .process(&mut Scripted(vec![Event::Page, Event::Text("one")]))
            .unwrap();
        assert_eq!(engine.result().len(), 1);

        engine
            .process(&mut Scripted(vec![
                Event::Page,
                Event::Text("two"),
                Event::Page,
                Event::Text("three"),
            ]))
            .unwrap();
        assert_eq!(engine.result().len(), 2);
    }

    #[test]
    fn test_reset_clears_result() {
        let mut engine = WordEngine::new();
        engine
            .process(&mut Scripted(vec![Event::Page, Event::Text("one")]))
            .unwrap();
        engine.reset();
        assert!(engine.result().is_empty());
    }

    #[test]
    #[should_panic(expected = "before start_page")]
    fn test_text_before_page_is_a_programmer_error() {
        let mut engine = WordEngine::new();
        let _ = engine.process(&mut Scripted(vec![Event::Text("stray")]));
    }

    #[test]
    fn test_into_result() {
        let mut engine = WordEngine::new();
        engine
            .process(&mut Scripted(vec![Event::Page, Event::Text("word")]))
            .unwrap();
        let pages = engine.into_result();
        assert_eq!(pages.len(), 1);
    }
}
