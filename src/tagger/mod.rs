//! Lexicon-backed cultural entity tagger.
//!
//! The lexicon sits behind a `RwLock` together with its compiled matchers.
//! Writers hold the write lock across clone, modify and persist, so updates
//! inside one process are serialized; the snapshot (and its matchers) is only
//! replaced once the file write succeeded.


use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use regex::{Regex, RegexBuilder};
use tracing::{debug, error, info, warn};

use crate::error::LexiconError;
use crate::lexicon::{merge_extended, seed_lexicon, EntityMatches, EntityRecord, Lexicon};
use crate::persistence::{load_lexicon, save_lexicon};

/// One regex per entity: `\b(?:name|variation|...)\b`, case-insensitive.
/// `None` when the entity has no usable terms.
struct EntityMatcher {
    name: String,
    regex: Option<Regex>,
}

/// A lexicon version and the matchers compiled from it.
struct Snapshot {
    lexicon: Lexicon,
    matchers: Vec<(String, Vec<EntityMatcher>)>,
}

impl Snapshot {
    fn new(lexicon: Lexicon) -> Self {
        let matchers: Vec<_> = lexicon
            .categories()
            .map(|(category, items)| {
                let entities: Vec<EntityMatcher> = items
                    .iter()
                    .map(|(name, record)| EntityMatcher {
                        name: name.clone(),
                        regex: compile_matcher(name, &record.variations),
                    })
                    .collect();
                (category.to_string(), entities)
            })
            .collect();
        Self { lexicon, matchers }
    }
}

/// Where writes go.
enum Backing {
    Memory,
    File(PathBuf),
    /// The file exists but could not be loaded; writing would clobber it.
    Unloaded(PathBuf),
}

pub struct CulturalTagger {
    state: RwLock<Snapshot>,
    backing: Backing,
}

impl CulturalTagger {
    /// Tagger without disk backing; writes only touch memory.
    pub fn in_memory(lexicon: Lexicon) -> Self {
        Self {
            state: RwLock::new(Snapshot::new(lexicon)),
            backing: Backing::Memory,
        }
    }

    /// Loads `path`, writing the seed there if it does not exist yet.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let lexicon = load_lexicon(path)?;
        Ok(Self {
            state: RwLock::new(Snapshot::new(lexicon)),
            backing: Backing::File(path.to_path_buf()),
        })
    }

    /// Like `open`, but falls back to the in-memory seed on any load failure.
    /// Writes are then refused so an unreadable file is never replaced.
    pub fn from_file_or_seed(path: &Path) -> Self {
        Self::open(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "using built-in seed lexicon, writes disabled");
            Self {
                state: RwLock::new(Snapshot::new(seed_lexicon())),
                backing: Backing::Unloaded(path.to_path_buf()),
            }
        })
    }

    pub fn lexicon_path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::Memory => None,
            Backing::File(path) | Backing::Unloaded(path) => Some(path.as_path()),
        }
    }

    pub fn lexicon_snapshot(&self) -> Lexicon {
        self.read().lexicon.clone()
    }

    /// Canonical names of every entity whose name or a variation occurs in
    /// `text` as a whole word (case-insensitive), grouped by category.
    pub fn extract_entities(&self, text: &str) -> EntityMatches {
        let state = self.read();
        let mut entities = EntityMatches::new();

        for (category, matchers) in &state.matchers {
            let found: Vec<String> = matchers
                .iter()
                .filter(|m| m.regex.as_ref().is_some_and(|re| re.is_match(text)))
                .map(|m| m.name.clone())
                .collect();

            if !found.is_empty() {
                entities.insert(category.clone(), found);
            }
        }

        debug!(categories = entities.len(), "extracted cultural entities");
        entities
    }

    pub fn get_cultural_context(&self, entity: &str, category: &str) -> Option<EntityRecord> {
        self.read().lexicon.get(category, entity).cloned()
    }

    /// Inserts or overwrites an entity and persists the lexicon.
    /// Returns false for an empty category, name or variation, or when saving fails.
    pub fn add_cultural_entity(
        &self,
        category: &str,
        entity: &str,
        meaning: &str,
        context: &str,
        variations: Vec<String>,
    ) -> bool {
        let record = EntityRecord {
            meaning: meaning.to_string(),
            context: context.to_string(),
            variations,
        };
        match self.try_add(category, entity, record) {
            Ok(()) => true,
            Err(e) => {
                error!(category, entity, error = %e, "error saving cultural data");
                false
            }
        }
    }

    fn try_add(&self, category: &str, entity: &str, record: EntityRecord) -> Result<(), LexiconError> {
        if category.is_empty() {
            return Err(LexiconError::InvalidEntity("empty category"));
        }
        if entity.is_empty() {
            return Err(LexiconError::InvalidEntity("empty entity name"));
        }
        if record.variations.iter().any(String::is_empty) {
            return Err(LexiconError::InvalidEntity("empty variation"));
        }
        self.update(|lexicon| {
            lexicon.insert(category, entity, record);
        })
    }

    /// Merges the extended built-in entity set without overwriting anything.
    pub fn enrich_lexicon(&self) -> bool {
        let mut added = 0;
        let result = self.update(|lexicon| added = merge_extended(lexicon));
        match result {
            Ok(()) => {
                info!(added, "cultural data enriched");
                true
            }
            Err(e) => {
                error!(error = %e, "error enriching cultural data");
                false
            }
        }
    }

    /// Canned replies for matched entities, in match order.
    pub fn get_response_suggestions(&self, text: &str) -> Vec<String> {
        self.suggestions_for(&self.extract_entities(text))
    }

    /// Suggestions for an already computed set of matches.
    pub fn suggestions_for(&self, entities: &EntityMatches) -> Vec<String> {
        let state = self.read();
        let mut suggestions = Vec::new();

        for (category, items) in entities {
            for item in items {
                if state.lexicon.get(category, item).is_none() {
                    continue;
                }
                if let Some(suggestion) = suggestion_for(category, item) {
                    suggestions.push(suggestion);
                }
            }
        }
        suggestions
    }

    /// Multi-line report of matched entities with their meaning and context.
    pub fn get_cultural_explanation(&self, text: &str) -> Option<String> {
        self.explanation_for(&self.extract_entities(text))
    }

    pub fn explanation_for(&self, entities: &EntityMatches) -> Option<String> {
        if entities.is_empty() {
            return None;
        }

        let state = self.read();
        let mut explanation = String::from("Cultural context:\n");
        for (category, items) in entities {
            explanation.push_str(&format!("\n{}:\n", capitalize(category)));
            for item in items {
                if let Some(record) = state.lexicon.get(category, item) {
                    explanation.push_str(&format!(
                        "- {}: {} - {}\n",
                        item, record.meaning, record.context
                    ));
                }
            }
        }
        Some(explanation)
    }

    /// Runs `mutate` on a copy, persists it, then swaps it in with fresh matchers.
    fn update<F>(&self, mutate: F) -> Result<(), LexiconError>
    where
        F: FnOnce(&mut Lexicon),
    {
        if let Backing::Unloaded(path) = &self.backing {
            return Err(LexiconError::NotLoaded(path.clone()));
        }
        let mut guard = self.write();
        let mut next = guard.lexicon.clone();
        mutate(&mut next);
        if let Backing::File(path) = &self.backing {
            save_lexicon(&next, path)?;
        }
        *guard = Snapshot::new(next);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// Empty terms are skipped: `\b\b` would match almost any text. They can only
// come from a hand-edited file since `add_cultural_entity` rejects them.
fn compile_matcher(name: &str, variations: &[String]) -> Option<Regex> {
    let terms: Vec<String> = std::iter::once(name)
        .chain(variations.iter().map(String::as_str))
        .filter(|term| !term.is_empty())
        .map(regex::escape)
        .collect();
    if terms.is_empty() {
        return None;
    }
    match RegexBuilder::new(&format!(r"\b(?:{})\b", terms.join("|")))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(entity = name, error = %e, "skipping unmatchable lexicon entity");
            None
        }
    }
}

fn suggestion_for(category: &str, item: &str) -> Option<String> {
    match category {
        "expressions" => match item {
            "ahla bik" | "ahla" => Some("Ahla bik! Chneya n3awnek?".to_string()),
            "labess" => Some("Hamdullah, enti labess?".to_string()),
            "barcha" => Some("Ih, barcha barcha!".to_string()),
            _ => None,
        },
        "food" => Some(format!("T7eb {item}? Makla tounsia tayba barcha!")),
        "places" => Some(format!("{item} blasa jmila fi tounes!")),
        "customs" => Some(format!("{item} 3ada mohema fi thaqafetna.")),
        _ => None,
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
