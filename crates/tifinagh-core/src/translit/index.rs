use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::glyph::GlyphRecord;

/// Options applied when building a [`ReverseIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Index only IRCAM base-script glyphs. Other glyphs pass through.
    pub standard_only: bool,
}

/// Two records share the same glyph key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate glyph {glyph}: registered by {first:?} and {second:?}")]
pub struct DuplicateGlyphError {
    pub glyph: String,
    /// Name of the record that registered the key first.
    pub first: String,
    pub second: String,
}

/// Glyph string → record lookup, borrowed from the glyph table.
#[derive(Debug)]
pub struct ReverseIndex<'a> {
    by_glyph: HashMap<&'a str, &'a GlyphRecord>,
    /// Length in chars of the longest key; bounds the match window.
    max_glyph_chars: usize,
}

impl<'a> ReverseIndex<'a> {
    pub fn get(&self, glyph: &str) -> Option<&'a GlyphRecord> {
        self.by_glyph.get(glyph).copied()
    }

    pub fn len(&self) -> usize {
        self.by_glyph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_glyph.is_empty()
    }

    pub fn max_glyph_chars(&self) -> usize {
        self.max_glyph_chars
    }

    /// Find the longest registered glyph at the start of `rest`.
    ///
    /// Returns the record and the byte length of the matched key. Candidates
    /// are tried from `max_glyph_chars` chars down to one, so a cluster such
    /// as ⴳⵯ wins over its base consonant ⴳ.
    pub fn longest_match(&self, rest: &str) -> Option<(&'a GlyphRecord, usize)> {
        let mut end = rest
            .char_indices()
            .nth(self.max_glyph_chars)
            .map_or(rest.len(), |(i, _)| i);
        while end > 0 {
            let candidate = &rest[..end];
            if let Some(&record) = self.by_glyph.get(candidate) {
                return Some((record, end));
            }
            end -= candidate.chars().next_back().map_or(1, char::len_utf8);
        }
        None
    }
}

/// Build the reverse index over every record.
pub fn build_index(records: &[GlyphRecord]) -> Result<ReverseIndex<'_>, DuplicateGlyphError> {
    build_index_with(records, IndexOptions::default())
}

/// Build the reverse index, filtering records per `options`.
///
/// Key uniqueness is checked over the whole table, including records the
/// filter leaves out.
pub fn build_index_with(
    records: &[GlyphRecord],
    options: IndexOptions,
) -> Result<ReverseIndex<'_>, DuplicateGlyphError> {
    let _span = debug_span!(
        "build_index",
        records = records.len(),
        standard_only = options.standard_only
    )
    .entered();

    let mut by_glyph: HashMap<&str, &GlyphRecord> = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(first) = by_glyph.insert(record.glyph.as_str(), record) {
            return Err(DuplicateGlyphError {
                glyph: record.glyph.clone(),
                first: first.name.clone(),
                second: record.name.clone(),
            });
        }
    }

    if options.standard_only {
        by_glyph.retain(|_, record| record.is_standard);
    }

    let max_glyph_chars = by_glyph
        .values()
        .map(|record| record.glyph_len())
        .max()
        .unwrap_or(0);

    debug!(
        indexed = by_glyph.len(),
        skipped = records.len() - by_glyph.len(),
        max_glyph_chars
    );

    Ok(ReverseIndex {
        by_glyph,
        max_glyph_chars,
    })
}
