use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::PhonemizeOptions;
use crate::dialect::Dialect;
use crate::lexicon::Lexicon;
use crate::postprocess::post_process;
use crate::rules;
use crate::token::{Source, Token, TokenKind};

static DEFAULT_G2P: LazyLock<G2P> = LazyLock::new(G2P::default);

/// Word runs and the non-word runs between them.
static SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<word>\b\w+\b)|(?P<other>[\W_]+)").expect("span pattern is valid")
});

/// Phonemize `text` with the built-in lexicon.
pub fn phonemize(text: &str, dialect: Dialect, options: PhonemizeOptions) -> String {
    DEFAULT_G2P.phonemize_with(text, dialect, options)
}

/// Phonemize a single word with the built-in lexicon.
pub fn phonemize_word(word: &str, dialect: Dialect, options: PhonemizeOptions) -> String {
    DEFAULT_G2P.word_phonemes(word, dialect, options).0
}

pub struct G2P {
    pub lexicon: Lexicon,
    pub dialect: Dialect,
    pub options: PhonemizeOptions,
}

impl Default for G2P {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl G2P {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_lexicon(Lexicon::new(), dialect)
    }

    pub fn with_lexicon(lexicon: Lexicon, dialect: Dialect) -> Self {
        Self {
            lexicon,
            dialect,
            options: PhonemizeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PhonemizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Split text into alternating word and non-word spans. Hyphens are
    /// treated as spaces so clitics become separate words.
    pub fn tokenize(&self, text: &str) -> Vec<(String, TokenKind)> {
        let text = text.replace('-', " ");
        SPAN_REGEX
            .captures_iter(&text)
            .filter_map(|caps| {
                if let Some(m) = caps.name("word") {
                    Some((m.as_str().to_string(), TokenKind::Word))
                } else {
                    caps.name("other").map(|m| (m.as_str().to_string(), TokenKind::Other))
                }
            })
            .collect()
    }

    /// Transcription of one word and where it came from.
    pub fn word_phonemes(
        &self,
        word: &str,
        dialect: Dialect,
        options: PhonemizeOptions,
    ) -> (String, Source) {
        if options.use_word_lookup {
            if let Some(stored) = self.lexicon.lookup(word, dialect) {
                let ps =
                    post_process(stored, options.keep_stress_marks, options.keep_optional_phones);
                return (ps, Source::Lexicon);
            }
        }
        (rules::transcribe(word, dialect), Source::Rules)
    }

    pub fn phonemize_word(&self, word: &str) -> String {
        self.word_phonemes(word, self.dialect, self.options).0
    }

    pub fn phonemize(&self, text: &str) -> String {
        self.phonemize_with(text, self.dialect, self.options)
    }

    pub fn phonemize_with(
        &self,
        text: &str,
        dialect: Dialect,
        options: PhonemizeOptions,
    ) -> String {
        self.tokens_with(text, dialect, options)
            .into_iter()
            .map(|tk| tk.phonemes)
            .collect()
    }

    /// Phonemize text and keep the per-span breakdown.
    pub fn phonemize_tokens(&self, text: &str) -> (String, Vec<Token>) {
        let tokens = self.tokens_with(text, self.dialect, self.options);
        let result = tokens.iter().map(|tk| tk.phonemes.as_str()).collect::<String>();
        (result, tokens)
    }

    fn tokens_with(&self, text: &str, dialect: Dialect, options: PhonemizeOptions) -> Vec<Token> {
        self.tokenize(text)
            .into_iter()
            .map(|(span, kind)| {
                if kind == TokenKind::Word && span.chars().all(char::is_alphabetic) {
                    let (phonemes, source) = self.word_phonemes(&span, dialect, options);
                    debug!(word = %span, ?source, %phonemes, "phonemized word");
                    Token { text: span, kind, phonemes, source }
                } else {
                    Token::passthrough(&span, kind)
                }
            })
            .collect()
    }
}
