use tifinagh_core::request::{Request, RequestError};
use tifinagh_core::translit::Transliterator;

pub const USAGE: &str = "\
usage: tifinagh convert <MODE> <TEXT>...
       -l, latin, latin-mode      show latin
       -a, arabic, arabic-mode    show arabic
       text starting with '-' goes after '--': tifinagh convert -l -- -ⴰ";

/// Transliterate `words` (joined with single spaces) per the mode selector.
pub fn convert(selector: &str, words: &[String]) -> Result<String, RequestError> {
    let text = words.join(" ");
    let request = Request::parse(selector, Some(&text))?;
    Ok(request.run(Transliterator::global()))
}
