//! Text normalization shared by the word catalog and preset parsing.
//!
//! Matching is always done on a *normalized* form: the text is decomposed
//! (Unicode NFD), combining diacritical marks (U+0300..=U+036F) are dropped,
//! and the rest is upper-cased. "Pasión" and "PASION" therefore compare equal,
//! and so do "ñ" and "N".

use std::ops::RangeInclusive;
use unicode_normalization::UnicodeNormalization;

/// The combining diacritical marks block removed after decomposition.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Characters that may appear in a grid cell.
pub(crate) const GRID_ALPHABET: RangeInclusive<char> = 'A'..='Z';

pub(crate) trait GridChar {
    fn is_grid_letter(&self) -> bool;
}

impl GridChar for char {
    fn is_grid_letter(&self) -> bool {
        GRID_ALPHABET.contains(self)
    }
}

/// Strip diacritics and upper-case `s`.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("Pasión"), "PASION");
        assert_eq!(normalize("empatía"), "EMPATIA");
        assert_eq!(normalize("Über"), "UBER");
    }

    #[test]
    fn test_enye_becomes_n() {
        assert_eq!(normalize("niño"), "NINO");
    }

    #[test]
    fn test_plain_ascii_is_only_uppercased() {
        assert_eq!(normalize("respeto"), "RESPETO");
        assert_eq!(normalize("RESPETO"), "RESPETO");
    }

    #[test]
    fn test_keeps_non_letters() {
        // callers decide what to do with them
        assert_eq!(normalize("a b-1"), "A B-1");
    }

    #[test]
    fn test_grid_letter() {
        for c in GRID_ALPHABET {
            assert!(c.is_grid_letter());
        }
        assert!(!'a'.is_grid_letter());
        assert!(!'Ñ'.is_grid_letter());
        assert!(!'1'.is_grid_letter());
        assert!(!' '.is_grid_letter());
    }
}
