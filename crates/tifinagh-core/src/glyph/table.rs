/// Default glyph table, embedded at compile time and checked by `build.rs`.
pub const DEFAULT_TOML: &str = include_str!("default_glyphs.toml");
