// File: src/lexicon.rs
//! The cultural lexicon: category -> canonical entity name -> record.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Gloss and usage note for one cultural entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub meaning: String,
    pub context: String,
    /// Alternate spellings, Latin and/or Arabic.
    #[serde(default)]
    pub variations: Vec<String>,
}

impl EntityRecord {
    pub fn new(meaning: &str, context: &str, variations: &[&str]) -> Self {
        Self {
            meaning: meaning.to_string(),
            context: context.to_string(),
            variations: variations.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Matched canonical names grouped by category, in lexicon order.
pub type EntityMatches = IndexMap<String, Vec<String>>;

pub type Category = IndexMap<String, EntityRecord>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    categories: IndexMap<String, Category>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&EntityRecord> {
        self.categories.get(category)?.get(name)
    }

    /// Inserts or overwrites, creating the category when absent.
    pub fn insert(&mut self, category: &str, name: &str, record: EntityRecord) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), record);
    }

    /// Inserts only if the entity is not already present. Returns whether it was added.
    pub fn insert_if_absent(&mut self, category: &str, name: &str, record: EntityRecord) -> bool {
        let entities = self.categories.entry(category.to_string()).or_default();
        if entities.contains_key(name) {
            return false;
        }
        entities.insert(name.to_string(), record);
        true
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(name, entities)| (name.as_str(), entities))
    }

    pub fn entity_count(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}

type SeedEntry = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str]);

/// Written to disk the first time no lexicon file exists.
const SEED: &[SeedEntry] = &[
    ("expressions", "ahla bik", "Hello/Welcome", "Common greeting in Tunisian dialect", &["ahla", "ahla w sahla"]),
    ("expressions", "labess", "How are you?", "Common greeting/question about well-being", &["labess 3lik", "ça va"]),
    ("expressions", "barcha", "A lot/very much", "Used to emphasize quantity or intensity", &["barsha", "bezzef"]),
    ("food", "couscous", "Traditional Tunisian dish", "National dish made of semolina with vegetables and meat", &["كسكسي"]),
    ("food", "lablebi", "Tunisian chickpea soup", "Popular street food", &["لبلابي"]),
    ("places", "sidi bou said", "Famous blue and white village", "Tourist destination near Tunis", &["سيدي بو سعيد"]),
    ("customs", "fitr", "Eid al-Fitr celebration", "Celebration after Ramadan", &["عيد الفطر", "l3id"]),
];

/// Merged into an existing lexicon on request, never overwriting.
const EXTENDED: &[SeedEntry] = &[
    ("expressions", "3aslema", "Hello/Hi", "Casual greeting in Tunisian dialect", &["3aslama", "3asslema"]),
    ("expressions", "chbik", "What's wrong with you?", "Used to ask what's bothering someone", &["chbik", "شبيك"]),
    ("expressions", "yezzi", "Enough/Stop it", "Used to tell someone to stop doing something", &["yezzi", "يزي"]),
    ("expressions", "mela", "So/Then/Well", "Used as a filler word or to transition in conversation", &["mela", "ملا"]),
    ("expressions", "sahit", "Thank you/Bless you", "Used to thank someone or as a response to a sneeze", &["sahit", "صحيت"]),
    ("food", "brik", "Tunisian pastry with egg and tuna", "Popular during Ramadan", &["brik", "بريك"]),
    ("food", "makroudh", "Semolina cake with dates", "Traditional sweet pastry", &["makroudh", "مقروض"]),
    ("food", "ojja", "Tunisian egg dish with tomatoes and peppers", "Popular breakfast or lunch dish", &["ojja", "عجة"]),
    ("food", "kafteji", "Fried vegetables with egg", "Popular street food", &["kafteji", "كفتاجي"]),
    ("food", "mlawi", "Tunisian layered flatbread", "Often eaten with honey or cheese", &["mlawi", "ملاوي"]),
    ("places", "carthage", "Ancient city and archaeological site", "Historical site near Tunis", &["carthage", "قرطاج"]),
    ("places", "djerba", "Island in southern Tunisia", "Popular tourist destination", &["djerba", "جربة"]),
    ("places", "kairouan", "City in central Tunisia", "Known for the Great Mosque and Islamic heritage", &["kairouan", "القيروان"]),
    ("places", "el jem", "Town with Roman amphitheater", "Home to one of the best-preserved Roman amphitheaters", &["el jem", "الجم"]),
    ("places", "matmata", "Berber town with underground houses", "Famous for troglodyte dwellings and Star Wars filming location", &["matmata", "مطماطة"]),
    ("customs", "henna", "Traditional body art", "Used in weddings and celebrations", &["henna", "حناء"]),
    ("customs", "ramadan", "Holy month of fasting", "Important religious observance", &["ramadan", "رمضان"]),
    ("customs", "chachia", "Traditional Tunisian hat", "Part of traditional male attire", &["chachia", "شاشية"]),
    ("customs", "mezoued", "Traditional Tunisian bagpipe music", "Popular folk music style", &["mezoued", "مزود"]),
    ("customs", "khomsa", "Hand-shaped amulet", "Used for protection against evil eye", &["khomsa", "خمسة"]),
    ("slang", "mrigel", "Cool/Awesome/Manly", "Used to describe something impressive or someone brave", &["mrigel", "مريقل"]),
    ("slang", "fissa", "Quickly/In a hurry", "Used to tell someone to do something quickly", &["fissa", "فيسع"]),
    ("slang", "3ayech", "Living the life/Enjoying", "Used to describe someone who is enjoying life", &["3ayech", "عايش"]),
    ("slang", "7ala", "Situation/State", "Often used to describe a bad or chaotic situation", &["7ala", "حالة"]),
    ("slang", "meskina", "Poor thing/Unfortunate", "Expression of sympathy", &["meskina", "مسكينة"]),
];

/// Four categories, one to three entities each.
pub fn seed_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();
    for &(category, name, meaning, context, variations) in SEED {
        lexicon.insert(category, name, EntityRecord::new(meaning, context, variations));
    }
    lexicon
}

/// Adds the extended entity set, keeping any entry already present.
/// Returns how many entities were added.
pub fn merge_extended(lexicon: &mut Lexicon) -> usize {
    let mut added = 0;
    for &(category, name, meaning, context, variations) in EXTENDED {
        if lexicon.insert_if_absent(category, name, EntityRecord::new(meaning, context, variations)) {
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape() {
        let lexicon = seed_lexicon();
        let names: Vec<&str> = lexicon.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["expressions", "food", "places", "customs"]);
        assert_eq!(lexicon.entity_count(), 7);
        assert_eq!(
            lexicon.get("expressions", "ahla bik").map(|r| r.variations.len()),
            Some(2)
        );
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let mut lexicon = seed_lexicon();
        lexicon.insert("food", "brik", EntityRecord::new("mine", "mine", &[]));

        let added = merge_extended(&mut lexicon);
        assert_eq!(added, EXTENDED.len() - 1);
        assert_eq!(lexicon.get("food", "brik").map(|r| r.meaning.as_str()), Some("mine"));
        assert!(lexicon.get("slang", "mrigel").is_some());

        assert_eq!(merge_extended(&mut lexicon), 0);
    }

    #[test]
    fn missing_variations_default_to_empty() {
        let lexicon: Lexicon =
            serde_json::from_str(r#"{"food": {"brik": {"meaning": "m", "context": "c"}}}"#)
                .unwrap();
        assert!(lexicon.get("food", "brik").unwrap().variations.is_empty());
    }

    #[test]
    fn lookups_on_unknown_keys() {
        let lexicon = seed_lexicon();
        assert!(lexicon.get("nope", "ahla bik").is_none());
        assert!(lexicon.get("expressions", "nope").is_none());
        assert!(Lexicon::new().is_empty());
    }
}
