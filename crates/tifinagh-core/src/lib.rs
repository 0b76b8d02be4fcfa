pub mod glyph;
pub mod request;
pub mod settings;
pub mod translit;
pub mod unicode;

pub use translit::{to_arabic, to_latin};
