// File: src/core/converter.rs
use crate::core::script;
use crate::core::tables::{ARABIC_TO_LATIN, LATIN_TO_ARABIC, NORMALIZATION, PATTERNS};
use crate::core::types::ScriptMix;

/// A piece of Latin input during Latin -> Arabic conversion.
/// `Protected` spans were produced by the pattern pass and are never rescanned.
#[derive(Debug, PartialEq)]
enum Span {
    Raw(String),
    Protected(&'static str),
}

/// Stateless converter between Arabic script and Tunisian Arabizi.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransliterationEngine;

impl TransliterationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn is_arabic_script(&self, text: &str) -> bool {
        script::is_arabic_script(text)
    }

    pub fn detect_dialect_script_mix(&self, text: &str) -> ScriptMix {
        script::detect_dialect_script_mix(text)
    }

    /// Maps every known Arabic character to Latin; anything else passes through.
    pub fn arabic_to_latin(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match ARABIC_TO_LATIN.get(&c) {
                Some(latin) => result.push_str(latin),
                None => result.push(c),
            }
        }
        result
    }

    /// Two passes: Tunisian patterns first (protected from rescanning), then
    /// a left-to-right scan preferring two-char keys over single chars.
    pub fn latin_to_arabic(&self, text: &str) -> String {
        let spans = protect_patterns(text);

        let mut result = String::with_capacity(text.len() * 2);
        for span in &spans {
            match span {
                Span::Protected(arabic) => result.push_str(arabic),
                Span::Raw(raw) => convert_raw(raw, &mut result),
            }
        }
        result
    }

    pub fn auto_transliterate(&self, text: &str) -> String {
        if self.is_arabic_script(text) {
            self.arabic_to_latin(text)
        } else {
            self.latin_to_arabic(text)
        }
    }

    /// Digits-as-letters become Arabic, French accents lose their marks.
    pub fn normalize_tunisian_text(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                NORMALIZATION
                    .iter()
                    .find(|&&(from, _)| from == c)
                    .map_or(c, |&(_, to)| to)
            })
            .collect()
    }
}

fn protect_patterns(text: &str) -> Vec<Span> {
    let mut spans = vec![Span::Raw(text.to_string())];
    for &(pattern, arabic) in PATTERNS {
        spans = spans
            .into_iter()
            .flat_map(|span| match span {
                Span::Raw(raw) if raw.contains(pattern) => split_on_pattern(&raw, pattern, arabic),
                other => vec![other],
            })
            .collect();
    }
    spans
}

fn split_on_pattern(raw: &str, pattern: &str, arabic: &'static str) -> Vec<Span> {
    let mut out = Vec::new();
    for (i, piece) in raw.split(pattern).enumerate() {
        if i > 0 {
            out.push(Span::Protected(arabic));
        }
        if !piece.is_empty() {
            out.push(Span::Raw(piece.to_string()));
        }
    }
    out
}

fn convert_raw(raw: &str, out: &mut String) {
    let chars: Vec<char> = raw.chars().collect();
    let mut buf = [0u8; 4];
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(arabic) = LATIN_TO_ARABIC.get(pair.as_str()) {
                out.push_str(arabic);
                i += 2;
                continue;
            }
        }
        let single: &str = chars[i].encode_utf8(&mut buf);
        match LATIN_TO_ARABIC.get(single) {
            Some(arabic) => out.push_str(arabic),
            None => out.push(chars[i]),
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TransliterationEngine {
        TransliterationEngine::new()
    }

    #[test]
    fn digraph_beats_single_chars() {
        assert_eq!(engine().latin_to_arabic("ch"), "ش");
        assert_eq!(engine().latin_to_arabic("sh"), "ش");
        assert_eq!(engine().latin_to_arabic("kh"), "خ");
    }

    #[test]
    fn latin_sentence() {
        assert_eq!(
            engine().latin_to_arabic("ahla kifech labess 3lik?"),
            "اهلا كيفاش لاباسس عليك?"
        );
    }

    #[test]
    fn numerals_as_letters() {
        assert_eq!(engine().latin_to_arabic("7ala"), "حالا");
        assert_eq!(engine().latin_to_arabic("9alb"), "قالب");
    }

    #[test]
    fn literal_underscore_survives() {
        assert_eq!(engine().latin_to_arabic("a_b"), "ا_ب");
        assert_eq!(engine().latin_to_arabic("_ch_"), "_ش_");
    }

    #[test]
    fn unmapped_latin_passes_through() {
        assert_eq!(engine().latin_to_arabic("Ahla"), "Aهلا");
        assert_eq!(engine().latin_to_arabic("1, x!"), "1, x!");
    }

    #[test]
    fn protected_spans_are_not_rescanned() {
        let spans = protect_patterns("3ch");
        assert_eq!(
            spans,
            vec![Span::Protected("ع"), Span::Protected("ش")]
        );
        let spans = protect_patterns("bch");
        assert_eq!(
            spans,
            vec![Span::Raw("b".to_string()), Span::Protected("ش")]
        );
    }

    #[test]
    fn arabic_sentence() {
        assert_eq!(
            engine().arabic_to_latin("أهلا كيفاش لاباس عليك؟"),
            "ahla kifach labas 3lik؟"
        );
    }

    #[test]
    fn diacritics() {
        assert_eq!(engine().arabic_to_latin("بَ"), "ba");
        assert_eq!(engine().arabic_to_latin("شّ"), "ch");
        assert_eq!(engine().arabic_to_latin("٢٠٢٤"), "2024");
    }

    #[test]
    fn empty_input() {
        let e = engine();
        assert_eq!(e.arabic_to_latin(""), "");
        assert_eq!(e.latin_to_arabic(""), "");
        assert_eq!(e.auto_transliterate(""), "");
        assert_eq!(e.normalize_tunisian_text(""), "");
    }

    #[test]
    fn auto_picks_direction() {
        let e = engine();
        assert_eq!(e.auto_transliterate("عسلامة"), "3slama");
        assert_eq!(e.auto_transliterate("barcha"), "بارشا");
    }

    #[test]
    fn round_trip_is_lossy() {
        let e = engine();
        let original = "ص";
        let latin = e.arabic_to_latin(original);
        assert_eq!(latin, "s");
        assert_ne!(e.latin_to_arabic(&latin), original);
    }

    #[test]
    fn normalization() {
        assert_eq!(
            engine().normalize_tunisian_text("3aslema ça va"),
            "عaslema sa va"
        );
        assert_eq!(engine().normalize_tunisian_text("é7ki"), "eحki");
    }
}
