//! Shared test helpers: a scripted decoder and glyph builders.

#![allow(dead_code)]

use std::sync::Arc;

use pdf_words::geometry::Rect;
use pdf_words::{DocumentMeta, GlyphPosition, PositionSource, Result, TextSink};

/// One decoder event, in stream order.
pub enum Event {
    StartPage,
    Text(String, Vec<Arc<GlyphPosition>>),
    LineBreak,
}

/// A decoder fake that replays a fixed event script.
pub struct ScriptedSource {
    pub meta: DocumentMeta,
    pub events: Vec<Event>,
}

impl ScriptedSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            meta: DocumentMeta::titled("scripted"),
            events,
        }
    }
}

impl PositionSource for ScriptedSource {
    fn stream_text(&mut self, sink: &mut dyn TextSink) -> Result<()> {
        sink.start_document(&self.meta)?;
        for event in &self.events {
            match event {
                Event::StartPage => sink.start_page()?,
                Event::Text(text, positions) => sink.write_string(text, positions)?,
                Event::LineBreak => sink.write_line_separator()?,
            }
        }
        sink.end_document(&self.meta)
    }
}

/// A glyph resolving to `unicode`, placed at `x` on a fixed baseline.
pub fn glyph(unicode: &str, x: f32) -> Arc<GlyphPosition> {
    GlyphPosition::new(unicode, Rect::new(x, 720.0, 6.0, 10.0), 10.0, "Helvetica").shared()
}

/// One glyph per character of `text`, advancing 6pt per glyph.
pub fn ascii_glyphs(text: &str) -> Vec<Arc<GlyphPosition>> {
    text.chars()
        .enumerate()
        .map(|(index, c)| glyph(&c.to_string(), index as f32 * 6.0))
        .collect()
}

/// A chunk event with one glyph per character.
pub fn ascii_chunk(text: &str) -> Event {
    Event::Text(text.to_string(), ascii_glyphs(text))
}

/// Initialize test logging once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
