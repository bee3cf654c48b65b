//! `catalog` — the list of target words a puzzle asks for.
//!
//! Each word keeps the form it was given in (for display, e.g. "Empatía")
//! and its normalized form (for matching, e.g. "EMPATIA"). Normalized forms
//! are unique: a catalog that would contain the same letters twice is rejected
//! when it is built, because only one of the two entries could ever be found.

use crate::errors::BuildError;
use crate::normalize::{normalize, GridChar};
use std::collections::HashMap;

/// One target word.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TargetWord {
    /// The word as supplied, casing and accents intact.
    pub display: String,
    /// Accent-stripped uppercase letters, compared against the grid.
    pub plain: String,
}

impl TargetWord {
    /// Normalize `display` into a target word.
    ///
    /// # Errors
    ///
    /// Fails when the normalized form is shorter than two letters or contains
    /// anything outside A-Z.
    pub fn new(display: &str) -> Result<TargetWord, BuildError> {
        let display = display.trim();
        let plain = normalize(display);
        if let Some(invalid_char) = plain.chars().find(|c| !c.is_grid_letter()) {
            return Err(BuildError::InvalidWordChars { word: display.to_string(), invalid_char });
        }
        if plain.chars().count() < 2 {
            return Err(BuildError::WordTooShort { word: display.to_string() });
        }
        Ok(TargetWord { display: display.to_string(), plain })
    }
}

/// The immutable set of target words for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<TargetWord>,
    /// normalized form -> position in `words`
    by_plain: HashMap<String, usize>,
}

impl WordCatalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// `EmptyCatalog` for no words, `DuplicateWord` when two entries share a
    /// normalized form, or whatever [`TargetWord::new`] reports for a bad entry.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<WordCatalog, BuildError> {
        if words.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let mut catalog = WordCatalog {
            words: Vec::with_capacity(words.len()),
            by_plain: HashMap::with_capacity(words.len()),
        };
        for raw in words {
            let word = TargetWord::new(raw.as_ref())?;
            if catalog.by_plain.contains_key(&word.plain) {
                return Err(BuildError::DuplicateWord {
                    word: word.display,
                    normalized: word.plain,
                });
            }
            catalog.by_plain.insert(word.plain.clone(), catalog.words.len());
            catalog.words.push(word);
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetWord> {
        self.words.iter()
    }

    /// Exact lookup by normalized form.
    #[must_use]
    pub fn get(&self, plain: &str) -> Option<&TargetWord> {
        self.by_plain.get(plain).map(|&i| &self.words[i])
    }

    /// Find the word spelled by `letters` read forwards or backwards.
    ///
    /// Forward wins if both readings happen to be catalog words (a palindrome
    /// reads the same either way, so only distinct pairs like "ROMA"/"AMOR"
    /// can hit this).
    #[must_use]
    pub fn lookup_either_way(&self, letters: &str) -> Option<&TargetWord> {
        self.get(letters).or_else(|| {
            let reversed: String = letters.chars().rev().collect();
            self.get(&reversed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_word_normalizes() {
        let word = TargetWord::new("Empatía").unwrap();
        assert_eq!(word.display, "Empatía");
        assert_eq!(word.plain, "EMPATIA");
    }

    #[test]
    fn test_target_word_rejects_bad_input() {
        assert_eq!(TargetWord::new("a"), Err(BuildError::WordTooShort { word: "a".to_string() }));
        assert_eq!(TargetWord::new("  "), Err(BuildError::WordTooShort { word: String::new() }));
        assert_eq!(
            TargetWord::new("buena fe"),
            Err(BuildError::InvalidWordChars { word: "buena fe".to_string(), invalid_char: ' ' })
        );
    }

    #[test]
    fn test_catalog_keeps_order() {
        let catalog = WordCatalog::new(&["Respeto", "lealtad", "EMPATÍA"]).unwrap();
        let plains: Vec<&str> = catalog.iter().map(|w| w.plain.as_str()).collect();
        assert_eq!(plains, vec!["RESPETO", "LEALTAD", "EMPATIA"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_rejects_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(WordCatalog::new(&empty), Err(BuildError::EmptyCatalog));
    }

    #[test]
    fn test_catalog_rejects_duplicate_normalized_forms() {
        assert_eq!(
            WordCatalog::new(&["PASION", "Pasión"]),
            Err(BuildError::DuplicateWord { word: "Pasión".to_string(), normalized: "PASION".to_string() })
        );
    }

    #[test]
    fn test_lookup_either_way() {
        let catalog = WordCatalog::new(&["RESPETO", "SOL"]).unwrap();
        assert_eq!(catalog.lookup_either_way("RESPETO").map(|w| w.display.as_str()), Some("RESPETO"));
        assert_eq!(catalog.lookup_either_way("OTEPSER").map(|w| w.display.as_str()), Some("RESPETO"));
        assert_eq!(catalog.lookup_either_way("LOS").map(|w| w.display.as_str()), Some("SOL"));
        assert!(catalog.lookup_either_way("RESPET").is_none());
    }

    #[test]
    fn test_lookup_prefers_forward_reading() {
        let catalog = WordCatalog::new(&["AMOR", "ROMA"]).unwrap();
        assert_eq!(catalog.lookup_either_way("ROMA").map(|w| w.plain.as_str()), Some("ROMA"));
        assert_eq!(catalog.lookup_either_way("AMOR").map(|w| w.plain.as_str()), Some("AMOR"));
    }
}
