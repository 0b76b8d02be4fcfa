use std::fs;
use std::io;
use std::path::Path;

use tifinagh_core::glyph::GlyphConfigError;
use tifinagh_core::settings::SettingsError;
use tifinagh_core::translit::DuplicateGlyphError;

pub mod config_ops;
pub mod convert_ops;
pub mod table_ops;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("error reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Table(#[from] GlyphConfigError),
    #[error(transparent)]
    Index(#[from] DuplicateGlyphError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read_file(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.display().to_string(),
        source,
    })
}
