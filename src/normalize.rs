//! Scoped Unicode normalization for decoder-resolved glyph text.
//!
//! PDF fonts commonly resolve glyphs to Alphabetic Presentation Forms
//! (U+FB00..U+FDFF) and Arabic Presentation Forms A/B (U+FE70..U+FEFF).
//! Only those ranges are normalized here. Full NFKC converts too many
//! things that would cause confusion; for example, it converts the micro
//! sign in extended Latin to the value in the Greek script.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

/// True when `c` lies in a range this module normalizes.
fn is_presentation_form(c: char) -> bool {
    matches!(c, '\u{FB00}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

/// Apply NFKC to the presentation-form code points of `word`.
///
/// Code points outside the two ranges contribute to the output only as
/// context between transformed segments: a trailing run of out-of-range
/// code points is not copied, and a string containing no presentation
/// forms normalizes to the empty string. Callers that need the original
/// text back in that case go through [`resolve_glyph_text`].
pub fn normalize_presentation_forms(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut builder = String::new();
    let mut pending = 0;

    for (index, &c) in chars.iter().enumerate() {
        if !is_presentation_form(c) {
            continue;
        }
        builder.extend(&chars[pending..index]);

        // Some fonts map U+FDF2 differently than the Unicode spec and add
        // an extra U+0627 in front to compensate. Substituting the
        // lam-lam-heh tail avoids doubling the alef NFKC would produce.
        if c == '\u{FDF2}'
            && index > 0
            && (chars[index - 1] == '\u{0627}' || chars[index - 1] == '\u{FE8D}')
        {
            builder.push_str("\u{0644}\u{0644}\u{0647}");
        } else {
            // Trim because some decompositions have an extra space,
            // such as U+FC5E.
            let decomposed: String = c.nfkc().collect();
            builder.push_str(decomposed.trim());
        }
        pending = index + 1;
    }

    builder
}

/// Resolve a glyph's Unicode string for alignment purposes.
///
/// Returns the scoped normalization of `unicode`, falling back to the
/// input unchanged when normalization yields an empty string (the common
/// case: no presentation forms present). Unlike the raw normalizer, this
/// composition is idempotent for every input.
pub fn resolve_glyph_text(unicode: &str) -> Cow<'_, str> {
    let normalized = normalize_presentation_forms(unicode);
    if normalized.is_empty() {
        Cow::Borrowed(unicode)
    } else {
        Cow::Owned(normalized)
    }
}
