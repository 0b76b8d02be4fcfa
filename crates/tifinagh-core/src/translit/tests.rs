use proptest::prelude::*;

use super::*;
use crate::glyph::{default_toml, parse_glyph_toml};
use crate::unicode::{contains_tifinagh, LABIALIZATION_MARK};

fn record(glyph: &str, latin: &str, arabic: &str, is_standard: bool) -> GlyphRecord {
    GlyphRecord {
        code_point: glyph.chars().map(|c| format!("U+{:04X}", c as u32)).collect(),
        glyph: glyph.to_string(),
        latin: latin.to_string(),
        arabic: arabic.to_string(),
        ipa: String::new(),
        name: format!("test {latin}"),
        is_standard,
    }
}

// --- scenarios ---

#[test]
fn test_letter_by_letter() {
    assert_eq!(to_latin("ⴰⵍⵍⵓ"), "allw");
    assert_eq!(to_arabic("ⴰⵍⵍⵓ"), "اللو");
}

#[test]
fn test_cluster_wins_over_base() {
    assert_eq!(to_latin("ⴳⵯ"), "gw");
    assert_eq!(to_arabic("ⴳⵯ"), "وڲ");
    assert_eq!(to_latin("ⴽⵯ"), "kw");
}

#[test]
fn test_base_without_mark() {
    assert_eq!(to_latin("ⴳ"), "g");
    assert_eq!(to_latin("ⴳⴰ"), "ga");
}

#[test]
fn test_cluster_inside_word() {
    // ⴰⴳⵯⴰⵔ: a + gw + a + r
    assert_eq!(to_latin("ⴰⴳⵯⴰⵔ"), "agwar");
}

#[test]
fn test_pass_through_latin() {
    assert_eq!(to_latin("hello"), "hello");
    assert_eq!(to_arabic("hello"), "hello");
}

#[test]
fn test_empty_input() {
    assert_eq!(to_latin(""), "");
    assert_eq!(to_arabic(""), "");
}

#[test]
fn test_standalone_mark_is_dropped() {
    assert_eq!(to_latin("ⵯ"), "");
    assert_eq!(to_arabic("ⵯ"), "");
    // mark after a vowel has no cluster record
    assert_eq!(to_latin("ⴰⵯ"), "a");
}

#[test]
fn test_empty_arabic_form_is_dropped() {
    // ⵡ has a Latin form but no Arabic one
    assert_eq!(to_latin("ⵡ"), "w");
    assert_eq!(to_arabic("ⵡ"), "");
}

#[test]
fn test_mixed_text_keeps_positions() {
    assert_eq!(to_latin("ⴰⵣⵓⵍ, world!"), "azwl, world!");
    assert_eq!(to_latin("1 ⵜ 2"), "1 t 2");
    assert_eq!(to_arabic("(ⵎ)"), "(م)");
}

#[test]
fn test_many_to_one() {
    assert_eq!(to_latin("ⴽⴾⴿ"), "kkk");
    assert_eq!(to_latin("ⵅⵆ"), "khkh");
}

#[test]
fn test_multi_char_outputs() {
    assert_eq!(to_latin("ⵞ"), "tš");
    assert_eq!(to_arabic("ⵞ"), "تش");
    assert_eq!(to_latin("ⵐ"), "ny");
}

#[test]
fn test_unassigned_tifinagh_passes_through() {
    assert_eq!(to_latin("\u{2D68}"), "\u{2D68}");
}

// --- index ---

#[test]
fn test_index_holds_every_record() {
    let records = parse_glyph_toml(default_toml()).unwrap();
    let index = build_index(&records).unwrap();
    assert_eq!(index.len(), records.len());
    assert_eq!(index.max_glyph_chars(), 2);
    for r in &records {
        let found = index.get(&r.glyph).unwrap();
        assert!(std::ptr::eq(found, r), "{} not indexed under its glyph", r.name);
    }
}

#[test]
fn test_duplicate_glyph_rejected() {
    let records = vec![
        record("ⴰ", "a", "ا", true),
        record("ⴱ", "b", "ب", true),
        record("ⴰ", "e", "ه", false),
    ];
    let err = build_index(&records).unwrap_err();
    assert_eq!(err.glyph, "ⴰ");
    assert_eq!(err.first, "test a");
    assert_eq!(err.second, "test e");
    assert!(Transliterator::new(&records, IndexOptions::default()).is_err());
}

#[test]
fn test_duplicate_checked_even_when_filtered() {
    let records = vec![record("ⴰ", "a", "ا", true), record("ⴰ", "e", "ه", false)];
    let options = IndexOptions {
        standard_only: true,
    };
    assert!(build_index_with(&records, options).is_err());
}

#[test]
fn test_empty_index_passes_everything_through() {
    let records: Vec<GlyphRecord> = Vec::new();
    let index = build_index(&records).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.max_glyph_chars(), 0);
    assert_eq!(transliterate("ⴰⵣⵓⵍ", ScriptTarget::Latin, &index), "ⴰⵣⵓⵍ");
}

#[test]
fn test_longest_match_backs_off() {
    let records = vec![
        record("ⴰ", "a", "ا", true),
        record("ⴰⴱ", "ab", "اب", true),
        record("ⴰⴱⴳ", "abg", "ابگ", true),
    ];
    let index = build_index(&records).unwrap();
    assert_eq!(index.max_glyph_chars(), 3);

    let (r, len) = index.longest_match("ⴰⴱⴳⴰ").unwrap();
    assert_eq!(r.latin, "abg");
    assert_eq!(len, "ⴰⴱⴳ".len());

    // ⴰⴱⴰ: three-char window misses, two-char hits
    assert_eq!(transliterate("ⴰⴱⴰ", ScriptTarget::Latin, &index), "aba");
    // ⴱ alone is not registered
    assert_eq!(transliterate("ⴱⴰ", ScriptTarget::Latin, &index), "ⴱa");
    assert!(index.longest_match("xⴰ").is_none());
    assert!(index.longest_match("").is_none());
}

#[test]
fn test_standard_only_skips_variants() {
    let records = parse_glyph_toml(default_toml()).unwrap();
    let t = Transliterator::new(
        &records,
        IndexOptions {
            standard_only: true,
        },
    )
    .unwrap();
    assert_eq!(t.index().len(), 34);
    assert!(t.index().get("ⵤ").is_none());
    // ⵣ is IRCAM, ⵤ (Tawellemet yaz) is not
    assert_eq!(t.to_latin("ⵣⵤ"), "zⵤ");
    assert_eq!(t.to_latin("ⴳⵯ"), "gw");
}

#[test]
fn test_global_matches_fresh_index() {
    let records = parse_glyph_toml(default_toml()).unwrap();
    let t = Transliterator::new(&records, IndexOptions::default()).unwrap();
    let text = "ⵜⴰⵎⴰⵣⵉⵖⵜ ⵜⴰⵏⴰⵡⴰⵢⵜ";
    assert_eq!(t.to_latin(text), to_latin(text));
    assert_eq!(t.to_arabic(text), to_arabic(text));
    assert_eq!(t.to_latin(text), "tamaziɣt tanawayt");
}

#[test]
fn test_script_target_parse_and_display() {
    assert_eq!("-l".parse::<ScriptTarget>().unwrap(), ScriptTarget::Latin);
    assert_eq!("arabic-mode".parse::<ScriptTarget>().unwrap(), ScriptTarget::Arabic);
    assert!("-x".parse::<ScriptTarget>().is_err());
    assert!("--l".parse::<ScriptTarget>().is_err());
    assert!("Latin".parse::<ScriptTarget>().is_err());
    assert_eq!(ScriptTarget::Latin.to_string(), "latin");
    assert_eq!(ScriptTarget::Arabic.to_string(), "arabic");
}

#[test]
fn test_transliterator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transliterator<'static>>();
    assert_send_sync::<ReverseIndex<'static>>();
}

// --- properties ---

#[derive(Debug, Clone)]
enum Token {
    Glyph(GlyphRecord),
    Other(char),
}

/// Every default record except the standalone mark, which would fuse with a
/// preceding consonant into a cluster.
fn tokenizable_records() -> Vec<GlyphRecord> {
    parse_glyph_toml(default_toml())
        .unwrap()
        .into_iter()
        .filter(|r| !r.glyph.starts_with(LABIALIZATION_MARK))
        .collect()
}

fn arb_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        3 => prop::sample::select(tokenizable_records()).prop_map(Token::Glyph),
        1 => prop::sample::select(vec![' ', 'a', 'z', '.', ',', '-', '1', '\n'])
            .prop_map(Token::Other),
    ]
}

proptest! {
    #[test]
    fn prop_output_is_concatenation(tokens in prop::collection::vec(arb_token(), 0..40)) {
        let text: String = tokens
            .iter()
            .map(|t| match t {
                Token::Glyph(r) => r.glyph.clone(),
                Token::Other(c) => c.to_string(),
            })
            .collect();
        for target in [ScriptTarget::Latin, ScriptTarget::Arabic] {
            let expected: String = tokens
                .iter()
                .map(|t| match t {
                    Token::Glyph(r) => target.select(r).to_string(),
                    Token::Other(c) => c.to_string(),
                })
                .collect();
            prop_assert_eq!(Transliterator::global().transliterate(&text, target), expected);
        }
    }

    #[test]
    fn prop_non_tifinagh_unchanged(text in any::<String>().prop_filter("no Tifinagh", |s| !contains_tifinagh(s))) {
        prop_assert_eq!(to_latin(&text), text.clone());
        prop_assert_eq!(to_arabic(&text), text);
    }
}
