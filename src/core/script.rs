// File: src/core/script.rs
//! Script detection heuristics.
use crate::core::tables::is_arabic_char;
use crate::core::types::{PrimaryScript, ScriptMix};

/// Fraction of Arabic codepoints above which text counts as Arabic script.
pub const ARABIC_SCRIPT_THRESHOLD: f64 = 0.3;

/// Both scripts must exceed this share (in percent) for text to be mixed.
pub const MIXED_SCRIPT_THRESHOLD_PERCENT: f64 = 10.0;

/// True when strictly more than 30% of all codepoints are Arabic.
pub fn is_arabic_script(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let arabic = text.chars().filter(|&c| is_arabic_char(c)).count();
    arabic as f64 / total as f64 > ARABIC_SCRIPT_THRESHOLD
}

pub fn detect_dialect_script_mix(text: &str) -> ScriptMix {
    let total = text.trim().chars().count();
    let (arabic, latin) = text.chars().fold((0usize, 0usize), |(ar, lat), c| {
        if is_arabic_char(c) {
            (ar + 1, lat)
        } else if c.is_ascii_alphanumeric() {
            (ar, lat + 1)
        } else {
            (ar, lat)
        }
    });

    let percent = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    };
    let arabic_percent = percent(arabic);
    let latin_percent = percent(latin);

    let primary_script = if arabic_percent > latin_percent {
        PrimaryScript::Arabic
    } else if latin_percent > arabic_percent {
        PrimaryScript::Latin
    } else {
        PrimaryScript::Mixed
    };

    ScriptMix {
        primary_script,
        arabic_percent,
        latin_percent,
        is_mixed: arabic_percent > MIXED_SCRIPT_THRESHOLD_PERCENT
            && latin_percent > MIXED_SCRIPT_THRESHOLD_PERCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_not_arabic() {
        assert!(!is_arabic_script(""));
    }

    #[test]
    fn threshold_is_strict() {
        // 3 of 10 codepoints Arabic: exactly 30%.
        assert!(!is_arabic_script("عرب abcdef"));
        // 4 of 10.
        assert!(is_arabic_script("عربي abcde"));
    }

    #[test]
    fn latin_text_is_not_arabic() {
        assert!(!is_arabic_script("ahla bik labess 3lik"));
    }

    #[test]
    fn arabic_text_is_arabic() {
        assert!(is_arabic_script("أهلا كيفاش لاباس عليك؟"));
    }

    #[test]
    fn empty_mix_report() {
        let mix = detect_dialect_script_mix("");
        assert_eq!(mix.arabic_percent, 0.0);
        assert_eq!(mix.latin_percent, 0.0);
        assert_eq!(mix.primary_script, PrimaryScript::Mixed);
        assert!(!mix.is_mixed);

        let blank = detect_dialect_script_mix("   ");
        assert_eq!(blank.arabic_percent, 0.0);
        assert!(!blank.is_mixed);
    }

    #[test]
    fn mixed_text_has_a_primary_script() {
        let mix = detect_dialect_script_mix("ahla بيك");
        assert!(mix.is_mixed);
        assert_eq!(mix.primary_script, PrimaryScript::Latin);
        assert_eq!(mix.latin_percent, 50.0);
        assert_eq!(mix.arabic_percent, 37.5);
    }

    #[test]
    fn tie_is_mixed() {
        let mix = detect_dialect_script_mix("ab عب");
        assert_eq!(mix.primary_script, PrimaryScript::Mixed);
        assert!(mix.is_mixed);
    }

    #[test]
    fn small_share_is_not_mixed() {
        // One Arabic letter among twenty codepoints is 5%.
        let mix = detect_dialect_script_mix("abcdefghijklmnopqrsع");
        assert_eq!(mix.primary_script, PrimaryScript::Latin);
        assert!(!mix.is_mixed);
    }
}
