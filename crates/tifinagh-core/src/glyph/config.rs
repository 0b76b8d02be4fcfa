use serde::Deserialize;

use super::GlyphRecord;
use crate::unicode::{is_labialization_mark, is_tifinagh_glyph};

#[derive(Deserialize)]
struct GlyphConfig {
    #[serde(default)]
    glyphs: Vec<GlyphRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[glyphs]] table is empty")]
    Empty,
    #[error("empty glyph for record: {0}")]
    EmptyGlyph(String),
    #[error("non-Tifinagh glyph: {0}")]
    NonTifinaghGlyph(String),
    #[error("invalid code point: {0}")]
    InvalidCodePoint(String),
    #[error("code point {code_point} does not spell glyph {glyph}")]
    CodePointMismatch { glyph: String, code_point: String },
    #[error("malformed cluster {0}: expected a base letter followed by U+2D6F")]
    MalformedCluster(String),
    #[error("glyph table already initialized")]
    AlreadyInitialized,
}

/// A multi-char glyph must be one base letter plus the labialization mark.
fn is_labialized_cluster(glyph: &str) -> bool {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(base), Some(mark), None) => {
            !is_labialization_mark(base) && is_labialization_mark(mark)
        }
        _ => false,
    }
}

/// Parse TOML text into the ordered list of glyph records.
///
/// Duplicate glyph keys are accepted here; they are rejected when the
/// reverse index is built.
pub fn parse_glyph_toml(toml_str: &str) -> Result<Vec<GlyphRecord>, GlyphConfigError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    if config.glyphs.is_empty() {
        return Err(GlyphConfigError::Empty);
    }

    for record in &config.glyphs {
        if record.glyph.is_empty() {
            return Err(GlyphConfigError::EmptyGlyph(record.name.clone()));
        }
        if !is_tifinagh_glyph(&record.glyph) {
            return Err(GlyphConfigError::NonTifinaghGlyph(record.glyph.clone()));
        }
        if record.glyph_len() > 1 && !is_labialized_cluster(&record.glyph) {
            return Err(GlyphConfigError::MalformedCluster(record.glyph.clone()));
        }
        let spelled: String = record.code_points()?.into_iter().collect();
        if spelled != record.glyph {
            return Err(GlyphConfigError::CodePointMismatch {
                glyph: record.glyph.clone(),
                code_point: record.code_point.clone(),
            });
        }
    }

    Ok(config.glyphs)
}
