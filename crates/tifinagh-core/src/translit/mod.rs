//! Tifinagh → Latin / Arabic transliteration engine.
//!
//! Builds a [`ReverseIndex`] from the glyph table and scans input text left to
//! right, replacing the longest registered glyph at each position with its
//! target-script form. Characters with no glyph record are copied through.

mod index;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::glyph::{all_records, GlyphRecord};
use crate::settings::settings;

pub use index::{build_index, build_index_with, DuplicateGlyphError, IndexOptions, ReverseIndex};

/// Output script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptTarget {
    Latin,
    Arabic,
}

impl ScriptTarget {
    /// The record's representation in this script. May be empty.
    pub fn select(self, record: &GlyphRecord) -> &str {
        match self {
            ScriptTarget::Latin => &record.latin,
            ScriptTarget::Arabic => &record.arabic,
        }
    }
}

impl fmt::Display for ScriptTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScriptTarget::Latin => "latin",
            ScriptTarget::Arabic => "arabic",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported target script: {0:?}")]
pub struct UnsupportedTargetError(pub String);

/// Parse a mode selector. At most one leading dash is dropped and the match is
/// case-sensitive, so `-l`, `latin` and `latin-mode` select Latin while `--l`
/// and `Latin` are rejected.
impl FromStr for ScriptTarget {
    type Err = UnsupportedTargetError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.strip_prefix('-').unwrap_or(selector) {
            "l" | "latin" | "latin-mode" => Ok(ScriptTarget::Latin),
            "a" | "arabic" | "arabic-mode" => Ok(ScriptTarget::Arabic),
            _ => Err(UnsupportedTargetError(selector.to_string())),
        }
    }
}

/// Transliterate `text` into `target` using `index`.
///
/// At each position the longest registered glyph wins; its target form is
/// appended (an empty form drops the glyph) and the cursor skips the whole
/// glyph. Unregistered characters are appended unchanged and the cursor
/// advances by one char.
pub fn transliterate(text: &str, target: ScriptTarget, index: &ReverseIndex<'_>) -> String {
    let _span = debug_span!("transliterate", %target, bytes = text.len()).entered();
    let mut out = String::with_capacity(text.len());
    let mut matched = 0usize;
    let mut passed_through = 0usize;

    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let advance = match index.longest_match(rest) {
            Some((record, len)) => {
                out.push_str(target.select(record));
                matched += 1;
                len
            }
            None => {
                out.push(c);
                passed_through += 1;
                c.len_utf8()
            }
        };
        rest = &rest[advance..];
    }

    debug!(matched, passed_through);
    out
}

/// A transliterator holding a pre-built reverse index.
#[derive(Debug)]
pub struct Transliterator<'a> {
    index: ReverseIndex<'a>,
}

impl<'a> Transliterator<'a> {
    pub fn new(
        records: &'a [GlyphRecord],
        options: IndexOptions,
    ) -> Result<Self, DuplicateGlyphError> {
        Ok(Self {
            index: build_index_with(records, options)?,
        })
    }

    pub fn index(&self) -> &ReverseIndex<'a> {
        &self.index
    }

    pub fn transliterate(&self, text: &str, target: ScriptTarget) -> String {
        transliterate(text, target, &self.index)
    }

    pub fn to_latin(&self, text: &str) -> String {
        self.transliterate(text, ScriptTarget::Latin)
    }

    pub fn to_arabic(&self, text: &str) -> String {
        self.transliterate(text, ScriptTarget::Arabic)
    }
}

impl Transliterator<'static> {
    /// Get or initialize the global transliterator over the active glyph
    /// table and settings.
    ///
    /// # Panics
    ///
    /// If the glyph table registers the same glyph twice.
    pub fn global() -> &'static Transliterator<'static> {
        static INSTANCE: OnceLock<Transliterator<'static>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Transliterator::new(all_records(), settings().index_options())
                .unwrap_or_else(|e| panic!("glyph table is malformed: {e}"))
        })
    }
}

/// Transliterate Tifinagh text to Latin script.
pub fn to_latin(text: &str) -> String {
    Transliterator::global().to_latin(text)
}

/// Transliterate Tifinagh text to Arabic script.
pub fn to_arabic(text: &str) -> String {
    Transliterator::global().to_arabic(text)
}
