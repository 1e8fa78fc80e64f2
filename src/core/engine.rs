use crate::core::converter::TransliterationEngine;
use crate::core::types::Analysis;
use crate::tagger::CulturalTagger;
use std::path::Path;

// The two engines are independent; this only merges their outputs the way a
// front end would.
pub struct DialectEngine {
    transliterator: TransliterationEngine,
    tagger: CulturalTagger,
}

impl DialectEngine {
    pub fn new(tagger: CulturalTagger) -> Self {
        Self {
            transliterator: TransliterationEngine::new(),
            tagger,
        }
    }

    pub fn from_file_or_seed(path: &Path) -> Self {
        Self::new(CulturalTagger::from_file_or_seed(path))
    }

    pub fn transliterator(&self) -> &TransliterationEngine {
        &self.transliterator
    }

    pub fn tagger(&self) -> &CulturalTagger {
        &self.tagger
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let entities = self.tagger.extract_entities(text);
        Analysis {
            script_mix: self.transliterator.detect_dialect_script_mix(text),
            transliteration: self.transliterator.auto_transliterate(text),
            suggestions: self.tagger.suggestions_for(&entities),
            explanation: self.tagger.explanation_for(&entities),
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PrimaryScript;
    use crate::lexicon::seed_lexicon;

    #[test]
    fn analysis_merges_both_engines() {
        let engine = DialectEngine::new(CulturalTagger::in_memory(seed_lexicon()));
        let analysis = engine.analyze("ahla bik");

        assert_eq!(analysis.script_mix.primary_script, PrimaryScript::Latin);
        assert_eq!(analysis.transliteration, "اهلا بيك");
        assert_eq!(analysis.entities["expressions"], vec!["ahla bik".to_string()]);
        assert_eq!(analysis.suggestions, vec!["Ahla bik! Chneya n3awnek?"]);
        assert!(analysis.explanation.is_some());
    }

    #[test]
    fn arabic_input_goes_to_latin() {
        let engine = DialectEngine::new(CulturalTagger::in_memory(seed_lexicon()));
        let analysis = engine.analyze("لبلابي");
        assert_eq!(analysis.transliteration, "lblabi");
        assert_eq!(analysis.entities["food"], vec!["lablebi".to_string()]);
    }
}
