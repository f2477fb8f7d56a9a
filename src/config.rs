use serde::{Deserialize, Serialize};

/// Rendering switches threaded through every word of a phonemization call.
///
/// None of them changes how a word is segmented; they only decide whether
/// the exception lexicon is consulted and how its entries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhonemizeOptions {
    pub use_word_lookup: bool,
    pub keep_optional_phones: bool,
    pub keep_stress_marks: bool,
}

impl Default for PhonemizeOptions {
    fn default() -> Self {
        Self {
            use_word_lookup: true,
            keep_optional_phones: true,
            keep_stress_marks: false,
        }
    }
}

impl PhonemizeOptions {
    pub fn with_word_lookup(mut self, enabled: bool) -> Self {
        self.use_word_lookup = enabled;
        self
    }

    pub fn with_optional_phones(mut self, keep: bool) -> Self {
        self.keep_optional_phones = keep;
        self
    }

    pub fn with_stress_marks(mut self, keep: bool) -> Self {
        self.keep_stress_marks = keep;
        self
    }
}
