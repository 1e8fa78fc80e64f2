// src/lib.rs

pub mod core;
pub mod error;
pub mod lexicon;
pub mod persistence;
pub mod tagger;
#[cfg(feature = "cli")]
pub mod trace_init;

pub use crate::core::converter::TransliterationEngine;
pub use crate::core::engine::DialectEngine;
pub use crate::core::script::{ARABIC_SCRIPT_THRESHOLD, MIXED_SCRIPT_THRESHOLD_PERCENT};
pub use crate::core::types::{Analysis, PrimaryScript, ScriptMix};
pub use crate::error::LexiconError;
pub use crate::lexicon::{EntityMatches, EntityRecord, Lexicon};
pub use crate::tagger::CulturalTagger;
