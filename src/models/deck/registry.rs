use std::fmt;
use std::path::{Path, PathBuf};

use super::types::{Deck, DeckManifestEntry};

pub const MANIFEST_FILE: &str = "decks.json";

#[derive(Debug)]
pub enum DeckError {
    Io(PathBuf, std::io::Error),
    Manifest(serde_json::Error),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(path, e) => write!(f, "Cannot read {}: {e}", path.display()),
            DeckError::Manifest(e) => write!(f, "Bad {MANIFEST_FILE}: {e}"),
        }
    }
}

impl std::error::Error for DeckError {}

/// Immutable set of slide decks, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct DeckRegistry {
    decks: Vec<Deck>,
}

impl DeckRegistry {
    /// Build a registry from already-loaded decks. Later duplicates of a slug are dropped.
    pub fn from_decks(decks: impl IntoIterator<Item = Deck>) -> Self {
        let mut kept: Vec<Deck> = Vec::new();
        for deck in decks {
            if kept.iter().any(|d| d.slug == deck.slug) {
                log::warn!("Duplicate deck slug '{}', keeping the first definition", deck.slug);
                continue;
            }
            kept.push(deck);
        }
        Self { decks: kept }
    }

    /// Load `dir/decks.json` and every template it references.
    /// A missing directory or manifest gives an empty registry.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, DeckError> {
        let dir = dir.as_ref();
        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            log::warn!("No deck manifest at {}, no slide decks available", manifest_path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&manifest_path)
            .map_err(|e| DeckError::Io(manifest_path.clone(), e))?;
        let entries: Vec<DeckManifestEntry> =
            serde_json::from_str(&raw).map_err(DeckError::Manifest)?;

        let mut decks = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = dir.join(&entry.file);
            let template = std::fs::read_to_string(&path).map_err(|e| DeckError::Io(path, e))?;
            decks.push(Deck {
                slug: entry.slug,
                title: entry.title,
                lab: entry.lab,
                template,
            });
        }

        let registry = Self::from_decks(decks);
        log::info!("Loaded {} slide deck(s) from {}", registry.len(), dir.display());
        Ok(registry)
    }

    pub fn find(&self, slug: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn deck(slug: &str, title: &str) -> Deck {
        Deck { slug: slug.into(), title: title.into(), lab: None, template: String::new() }
    }

    #[test]
    fn first_duplicate_wins() {
        let reg = DeckRegistry::from_decks(vec![deck("a", "First"), deck("b", "B"), deck("a", "Second")]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.find("a").map(|d| d.title.as_str()), Some("First"));
    }

    #[test]
    fn find_unknown_slug_is_none() {
        let reg = DeckRegistry::from_decks(vec![deck("a", "A")]);
        assert!(reg.find("zzz").is_none());
    }

    #[test]
    fn missing_directory_gives_empty_registry() {
        let dir = TempDir::new().expect("tempdir");
        let reg = DeckRegistry::load_dir(dir.path().join("nope")).expect("load");
        assert!(reg.is_empty());
    }

    #[test]
    fn loads_manifest_and_templates() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("intro.html"), "<h1>{{event_name}}</h1>").expect("write");
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"[{"slug": "intro", "title": "Intro Lab", "file": "intro.html", "lab": "lab-01"}]"#,
        )
        .expect("write");

        let reg = DeckRegistry::load_dir(dir.path()).expect("load");
        let d = reg.find("intro").expect("deck");
        assert_eq!(d.title, "Intro Lab");
        assert_eq!(d.lab.as_deref(), Some("lab-01"));
        assert_eq!(d.template, "<h1>{{event_name}}</h1>");
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"[{"slug": "x", "title": "X", "file": "gone.html"}]"#,
        )
        .expect("write");
        assert!(matches!(DeckRegistry::load_dir(dir.path()), Err(DeckError::Io(_, _))));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join(MANIFEST_FILE), "{not json").expect("write");
        assert!(matches!(DeckRegistry::load_dir(dir.path()), Err(DeckError::Manifest(_))));
    }
}
