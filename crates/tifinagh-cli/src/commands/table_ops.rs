use std::path::Path;

use unicode_width::UnicodeWidthStr;

use tifinagh_core::glyph::{self, parse_glyph_toml, GlyphRecord};
use tifinagh_core::translit::build_index;

use super::{read_file, CommandError};

pub fn table_export() -> &'static str {
    glyph::default_toml()
}

/// Parse a glyph table file and build its index. Returns a one-line summary.
pub fn table_validate(file: &Path) -> Result<String, CommandError> {
    let content = read_file(file)?;
    let records = parse_glyph_toml(&content)?;
    let index = build_index(&records)?;
    let standard = records.iter().filter(|r| r.is_standard).count();
    let clusters = records.iter().filter(|r| r.glyph_len() > 1).count();
    Ok(format!(
        "OK: {} glyphs ({} standard, {} clusters, longest key {} chars)",
        index.len(),
        standard,
        clusters,
        index.max_glyph_chars()
    ))
}

/// Install a custom glyph table for this process. The table must also index
/// cleanly, so a duplicate glyph is reported here rather than at first use.
pub fn install_custom_table(file: &Path) -> Result<(), CommandError> {
    let content = read_file(file)?;
    let records = parse_glyph_toml(&content)?;
    build_index(&records)?;
    glyph::init_custom(content)?;
    Ok(())
}

fn selected(records: &[GlyphRecord], standard_only: bool) -> Vec<&GlyphRecord> {
    records
        .iter()
        .filter(|r| !standard_only || r.is_standard)
        .collect()
}

fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Format the table as aligned text, one glyph per line.
pub fn format_table(records: &[GlyphRecord], standard_only: bool) -> String {
    const HEADER: [&str; 6] = ["GLYPH", "CODE POINT", "LATIN", "ARABIC", "IPA", "NAME"];

    let rows: Vec<[&str; 7]> = selected(records, standard_only)
        .into_iter()
        .map(|r| {
            [
                r.glyph.as_str(),
                r.code_point.as_str(),
                or_dash(&r.latin),
                or_dash(&r.arabic),
                r.ipa.as_str(),
                r.name.as_str(),
                if r.is_standard { "*" } else { "" },
            ]
        })
        .collect();

    let mut widths = HEADER.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str], marker: &str| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad(cell, *w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        if !marker.is_empty() {
            out.push_str("  ");
            out.push_str(marker);
        }
        out.push('\n');
    };

    push_line(&HEADER, "");
    for row in &rows {
        push_line(&row[..6], row[6]);
    }
    out.push_str(&format!("\n{} glyphs (* = IRCAM standard)\n", rows.len()));
    out
}

pub fn format_json(records: &[GlyphRecord], standard_only: bool) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&selected(records, standard_only))
}
