// File: src/core/tables.rs
//! Fixed transliteration tables for Tunisian Arabizi.
//!
//! Everything here is built at compile time; nothing needs initializing.
use phf::phf_map;

/// Arabic codepoint -> Latin rendering. Shadda and sukun are dropped.
pub static ARABIC_TO_LATIN: phf::Map<char, &'static str> = phf_map! {
    'ا' => "a", 'أ' => "a", 'إ' => "i", 'آ' => "e",
    'ب' => "b", 'ت' => "t", 'ث' => "th",
    'ج' => "j", 'ح' => "7", 'خ' => "kh",
    'د' => "d", 'ذ' => "dh", 'ر' => "r",
    'ز' => "z", 'س' => "s", 'ش' => "ch",
    'ص' => "s", 'ض' => "dh", 'ط' => "t",
    'ظ' => "th", 'ع' => "3", 'غ' => "gh",
    'ف' => "f", 'ق' => "9", 'ك' => "k",
    'ل' => "l", 'م' => "m", 'ن' => "n",
    'ه' => "h", 'ة' => "a", 'و' => "w",
    'ي' => "i", 'ى' => "a", 'ء' => "'",
    'ئ' => "i", 'ؤ' => "w",
    '\u{064E}' => "a", // fatha
    '\u{064F}' => "u", // damma
    '\u{0650}' => "i", // kasra
    '\u{0651}' => "",  // shadda
    '\u{0652}' => "",  // sukun
    '٠' => "0", '١' => "1", '٢' => "2", '٣' => "3", '٤' => "4",
    '٥' => "5", '٦' => "6", '٧' => "7", '٨' => "8", '٩' => "9",
};

/// Latin key (one or two chars) -> Arabic. Many-to-one, hence lossy.
pub static LATIN_TO_ARABIC: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "ا", "e" => "ا", "i" => "ي",
    "o" => "و", "u" => "و", "y" => "ي",
    "b" => "ب", "t" => "ت", "th" => "ث",
    "j" => "ج", "7" => "ح", "kh" => "خ",
    "d" => "د", "dh" => "ذ", "r" => "ر",
    "z" => "ز", "s" => "س", "ch" => "ش",
    "sh" => "ش", "9" => "ق", "k" => "ك",
    "l" => "ل", "m" => "م", "n" => "ن",
    "h" => "ه", "w" => "و", "3" => "ع",
    "gh" => "غ", "f" => "ف", "g" => "ق",
    "5" => "خ", "8" => "ق", "2" => "ء",
};

/// Tunisian-specific patterns substituted before the character pass.
/// Applied in this order.
pub const PATTERNS: &[(&str, &str)] = &[
    // Numbers used as letters
    ("3", "ع"),
    ("7", "ح"),
    ("9", "ق"),
    ("5", "خ"),
    ("8", "ق"),
    ("2", "ء"),
    // Digraphs
    ("ch", "ش"),
    ("th", "ث"),
    ("gh", "غ"),
    ("kh", "خ"),
    ("dh", "ذ"),
];

/// Cleanup substitutions, one per source character.
pub const NORMALIZATION: &[(char, char)] = &[
    ('2', 'ء'),
    ('3', 'ع'),
    ('5', 'خ'),
    ('7', 'ح'),
    ('8', 'ق'),
    ('9', 'ق'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('à', 'a'),
    ('ç', 's'),
];

/// Unicode blocks counted as Arabic script: main block, supplement,
/// extended-A, presentation forms A and B.
pub const ARABIC_RANGES: &[(char, char)] = &[
    ('\u{0600}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'),
    ('\u{08A0}', '\u{08FF}'),
    ('\u{FB50}', '\u{FDFF}'),
    ('\u{FE70}', '\u{FEFF}'),
];

pub fn is_arabic_char(c: char) -> bool {
    ARABIC_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}
