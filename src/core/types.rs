// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::EntityMatches;

/// The script judged dominant in a text sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryScript {
    Arabic,
    Latin,
    /// Neither fraction is strictly greater (includes empty input).
    Mixed,
}

impl fmt::Display for PrimaryScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimaryScript::Arabic => "Arabic",
            PrimaryScript::Latin => "Latin",
            PrimaryScript::Mixed => "Mixed",
        };
        f.write_str(name)
    }
}

/// Script composition report for a piece of text.
/// Percentages are in the 0..=100 range, relative to the trimmed length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMix {
    pub primary_script: PrimaryScript,
    pub arabic_percent: f64,
    pub latin_percent: f64,
    pub is_mixed: bool,
}

/// Everything the engine knows about one input, merged for a caller.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub script_mix: ScriptMix,
    pub transliteration: String,
    pub entities: EntityMatches,
    pub suggestions: Vec<String>,
    pub explanation: Option<String>,
}
