// File: src/persistence.rs
use crate::error::LexiconError;
use crate::lexicon::{seed_lexicon, Lexicon};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Where the lexicon lives unless a caller says otherwise.
pub const DEFAULT_LEXICON_PATH: &str = "resources/cultural_context.json";

/// Writes the whole lexicon atomically: temp file in the same directory, then rename.
/// Non-ASCII text is written literally, indented by four spaces.
pub fn save_lexicon(lexicon: &Lexicon, path: &Path) -> Result<(), LexiconError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        lexicon.serialize(&mut ser)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    debug!(path = %path.display(), entities = lexicon.entity_count(), "lexicon saved");
    Ok(())
}

/// Loads the lexicon, synthesizing and persisting the seed when the file is missing.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, LexiconError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "cultural lexicon not found, writing seed");
            let seed = seed_lexicon();
            save_lexicon(&seed, path)?;
            info!(path = %path.display(), "created seed cultural lexicon");
            return Ok(seed);
        }
        Err(e) => return Err(e.into()),
    };
    let lexicon: Lexicon = serde_json::from_reader(BufReader::new(file))?;
    if lexicon.is_empty() {
        warn!(path = %path.display(), "cultural lexicon has no entities");
    }
    debug!(path = %path.display(), entities = lexicon.entity_count(), "lexicon loaded");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::EntityRecord;

    #[test]
    fn missing_file_writes_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cultural_context.json");

        let first = load_lexicon(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, seed_lexicon());

        let second = load_lexicon(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn arabic_is_written_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        save_lexicon(&seed_lexicon(), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("كسكسي"));
        assert!(raw.contains("ça va"));
        assert!(!raw.contains("\\u"));
        assert!(raw.contains("\n    \"expressions\""));
    }

    #[test]
    fn order_survives_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        let mut lexicon = Lexicon::new();
        for category in ["zeta", "alpha", "mid"] {
            lexicon.insert(category, "x", EntityRecord::new("m", "c", &[]));
        }
        save_lexicon(&lexicon, &path).unwrap();

        let loaded = load_lexicon(&path).unwrap();
        let names: Vec<&str> = loaded.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_object_loads_as_empty_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(&path, "{}").unwrap();
        assert!(load_lexicon(&path).unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_lexicon(&path), Err(LexiconError::Parse(_))));
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        // Parent is a regular file.
        let path = blocker.join("lexicon.json");
        assert!(load_lexicon(&path).is_err());
    }
}
