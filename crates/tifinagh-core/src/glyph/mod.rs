//! Tifinagh glyph correspondence table.
//!
//! The table is an ordered list of [`GlyphRecord`]s loaded from TOML, either
//! the embedded default or a custom table installed with [`init_custom`]
//! before first use. It is parsed once and never mutated afterwards.

mod config;
mod table;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use config::{parse_glyph_toml, GlyphConfigError};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// One Tifinagh glyph or glyph cluster and its equivalents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRecord {
    /// Unicode code point(s) spelling the glyph, e.g. `U+2D33U+2D6F`.
    pub code_point: String,
    /// The glyph as it appears in text. Lookup key.
    pub glyph: String,
    /// Latin transliteration; empty for marks with no standalone form.
    #[serde(default)]
    pub latin: String,
    /// Arabic transliteration; may be empty.
    #[serde(default)]
    pub arabic: String,
    pub ipa: String,
    pub name: String,
    /// Part of the IRCAM base script.
    #[serde(rename = "standard")]
    pub is_standard: bool,
}

impl GlyphRecord {
    /// Decode `code_point` (one or more `U+XXXX` groups) into chars.
    pub fn code_points(&self) -> Result<Vec<char>, GlyphConfigError> {
        let invalid = || GlyphConfigError::InvalidCodePoint(self.code_point.clone());
        let rest = self.code_point.strip_prefix("U+").ok_or_else(invalid)?;
        rest.split("U+")
            .map(|hex| {
                if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit())
                {
                    return Err(invalid());
                }
                u32::from_str_radix(hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(invalid)
            })
            .collect()
    }

    /// Number of chars in the glyph key (2 for labialized clusters).
    pub fn glyph_len(&self) -> usize {
        self.glyph.chars().count()
    }
}

/// Set a custom glyph table before the first [`all_records`] call.
pub fn init_custom(toml_content: String) -> Result<(), GlyphConfigError> {
    // Validate eagerly
    parse_glyph_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| GlyphConfigError::AlreadyInitialized)
}

/// The active glyph table, in declaration order. Never empty.
pub fn all_records() -> &'static [GlyphRecord] {
    static INSTANCE: OnceLock<Vec<GlyphRecord>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(table::DEFAULT_TOML);
        parse_glyph_toml(toml_str).expect("glyph table TOML must be valid")
    })
}

/// Returns the embedded default glyph table TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
