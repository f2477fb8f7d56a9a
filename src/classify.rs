/// Vowels used for context checks, including the IPA vowel symbols that can
/// appear as markers in the grapheme table.
const VOWELS: &str = "aeiouáéíóúâêôàãõũäɐɛɨɪɔʊ";

/// Approximation of the voiced consonant letters.
const VOICED_CONSONANTS: &str = "bdgjlmnrvz";

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(lower(c))
}

pub fn is_voiced_consonant(c: char) -> bool {
    VOICED_CONSONANTS.contains(lower(c))
}
