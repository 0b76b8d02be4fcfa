//! Validation of front-end input: a mode selector plus the text to convert.

use crate::translit::{ScriptTarget, Transliterator, UnsupportedTargetError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    UnsupportedTarget(#[from] UnsupportedTargetError),
    #[error("no text to transliterate")]
    EmptyInput,
}

/// A validated transliteration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'t> {
    pub target: ScriptTarget,
    pub text: &'t str,
}

impl<'t> Request<'t> {
    /// The selector is checked before the text, so a bad mode is reported
    /// even when the text is missing too.
    pub fn parse(selector: &str, text: Option<&'t str>) -> Result<Self, RequestError> {
        let target: ScriptTarget = selector.parse()?;
        match text {
            Some(text) if !text.is_empty() => Ok(Request { target, text }),
            _ => Err(RequestError::EmptyInput),
        }
    }

    pub fn run(&self, transliterator: &Transliterator<'_>) -> String {
        transliterator.transliterate(self.text, self.target)
    }
}
