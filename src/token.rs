use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A maximal run of word characters.
    Word,
    /// Punctuation, whitespace and everything between words.
    Other,
}

/// Where a token's phonemes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Lexicon,
    Rules,
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub phonemes: String,
    pub source: Source,
}

impl Token {
    pub fn passthrough(text: &str, kind: TokenKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            phonemes: text.to_string(),
            source: Source::Passthrough,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
