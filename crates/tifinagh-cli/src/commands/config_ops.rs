use std::path::Path;

use tifinagh_core::settings;

use super::{read_file, CommandError};

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

pub fn settings_validate(file: &Path) -> Result<String, CommandError> {
    let content = read_file(file)?;
    let s = settings::parse_settings_toml(&content)?;
    Ok(format!("OK: index.standard_only={}", s.index.standard_only))
}

/// Install custom settings for this process, before first use.
pub fn install_custom_settings(file: &Path) -> Result<(), CommandError> {
    let content = read_file(file)?;
    settings::init_custom(content)?;
    Ok(())
}
