//! Orthographic units of Mirandese and their candidate realizations.
//!
//! Candidate order matters: index 0 is the elsewhere realization and the
//! other indices are picked by the context rules in [`crate::rules`].

use std::collections::HashMap;
use std::sync::LazyLock;

const GRAPHEMES: &[(&str, &[&str])] = &[
    ("a", &["a", "ä", "ɐ"]),
    ("á", &["a", "ɐ"]),
    ("â", &["ɐ"]),
    ("ã", &["ɐ̃"]),
    ("ai", &["aj"]),
    ("an", &["ɐ̃ŋ"]),
    ("b", &["b", "β"]),       // β between vowels and after voiced consonants
    ("c", &["k", "s̻"]),       // s̻ before e or i
    ("ç", &["z̻", "s̻"]),      // z̻ before words starting with a voiced consonant
    ("ch", &["tʃ"]),
    ("cl", &["kl"]),
    ("d", &["d", "ð"]),       // ð between vowels and after r
    ("e", &["ɛ", "e", "ɨ"]),  // ɨ before stressed syllables
    ("é", &["ɛ"]),
    ("ê", &["e"]),
    ("ei", &["ej"]),
    ("eu", &["ew"]),
    ("éu", &["ɛw"]),
    ("en", &["ẽŋ", "ɨ̃"]),
    ("f", &["f"]),
    ("fl", &["fl"]),
    ("g", &["g", "ɣ", "ʒ"]),  // ɣ between vowels and after r, ʒ before e and i
    ("gu", &["g", "ɣ"]),
    ("h", &[""]),
    ("i", &["i", "j"]),
    ("í", &["i"]),
    ("ia", &["ja"]),
    ("iê", &["je"]),
    ("iu", &["iw"]),
    ("in", &["ĩŋ", "ɨ̃j̃"]),
    ("j", &["ʒ"]),
    ("k", &["k"]),
    ("kl", &["kl"]),
    ("l", &["l", "ʎ"]),       // ʎ at the beginning of words
    ("lh", &["ʎ"]),
    ("ll", &["l"]),
    ("ly", &["lj"]),
    ("m", &["m"]),
    ("mn", &["mn"]),
    ("n", &["n", "ŋ"]),
    ("nh", &["ɲ"]),
    ("nn", &["n"]),
    ("o", &["ɔ", "o", "u"]),  // u word-finally
    ("ó", &["ɔ"]),
    ("ô", &["o"]),
    ("õ", &["õ"]),
    ("oi", &["oj"]),
    ("ói", &["ɔj"]),
    ("on", &["õŋ"]),
    ("ou", &["ow"]),
    ("p", &["p"]),
    ("pl", &["pl"]),
    ("q", &["k"]),
    ("qu", &["k", "kʷ"]),     // kʷ before a and en
    ("r", &["ɾ", "r"]),       // r at the beginning of words and after n
    ("rr", &["r"]),
    ("s", &["s̺", "z̺"]),
    ("ss", &["s̺"]),
    ("t", &["t"]),
    ("u", &["u", "w"]),
    ("ú", &["u"]),
    ("ũ", &["ũ"]),
    ("ua", &["wa"]),
    ("ui", &["uj"]),
    ("un", &["ũŋ"]),
    ("uo", &["wo"]),
    ("v", &["b", "v"]),
    ("w", &["w", "b"]),
    ("x", &["ʃ"]),
    ("y", &["j"]),
    ("z", &["z"]),
];

static TABLE: LazyLock<GraphemeTable> = LazyLock::new(|| GraphemeTable::new(GRAPHEMES));

/// The process-wide grapheme table.
pub fn table() -> &'static GraphemeTable {
    &TABLE
}

pub struct GraphemeTable {
    entries: HashMap<&'static str, &'static [&'static str]>,
    max_unit_len: usize,
}

impl GraphemeTable {
    fn new(graphemes: &[(&'static str, &'static [&'static str])]) -> Self {
        let entries: HashMap<_, _> = graphemes
            .iter()
            .filter(|(unit, candidates)| !unit.is_empty() && !candidates.is_empty())
            .map(|&(unit, candidates)| (unit, candidates))
            .collect();
        let max_unit_len = entries.keys().map(|unit| unit.chars().count()).max().unwrap_or(1);
        Self { entries, max_unit_len }
    }

    /// Candidates for a lowercase unit.
    pub fn get(&self, unit: &str) -> Option<&'static [&'static str]> {
        self.entries.get(unit).copied()
    }

    /// The default (index 0) realization of a unit.
    pub fn default_for(&self, unit: &str) -> Option<&'static str> {
        self.get(unit).and_then(|candidates| candidates.first().copied())
    }

    /// Length in characters of the longest unit.
    pub fn max_unit_len(&self) -> usize {
        self.max_unit_len
    }

    #[cfg(test)]
    pub(crate) fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_empty_keys_or_candidate_lists() {
        for (unit, candidates) in GRAPHEMES {
            assert!(!unit.is_empty());
            assert!(!candidates.is_empty(), "{unit} has no candidates");
            assert_eq!(unit.to_lowercase(), *unit, "{unit} must be lowercase");
        }
    }

    #[test]
    fn test_no_duplicate_units() {
        assert_eq!(table().units().count(), GRAPHEMES.len());
    }

    #[test]
    fn test_max_unit_len() {
        assert_eq!(table().max_unit_len(), 2);
    }

    #[test]
    fn test_lookup() {
        let t = table();
        assert_eq!(t.get("lh"), Some(&["ʎ"][..]));
        assert_eq!(t.default_for("h"), Some(""));
        assert_eq!(t.default_for("l"), Some("l"));
        assert!(t.get("iê").is_some());
        assert!(t.get("th").is_none());
    }
}
