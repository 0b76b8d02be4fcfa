use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tifinagh", about = "Tifinagh to Latin / Arabic transliteration")]
pub struct Cli {
    /// Custom glyph table (TOML) to use instead of the built-in one
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,
    /// Custom settings file (TOML)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transliterate Tifinagh text
    Convert {
        /// Output script: -l / latin / latin-mode, or -a / arabic / arabic-mode
        #[arg(allow_hyphen_values = true)]
        mode: String,
        /// Text to transliterate (several words are joined with spaces).
        /// Put `--` before text that starts with a dash.
        text: Vec<String>,
    },
    /// Print the active glyph table
    List {
        /// Only IRCAM standard glyphs
        #[arg(long)]
        standard_only: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in glyph table as TOML
    TableExport,
    /// Validate a custom glyph table TOML file
    TableValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}
