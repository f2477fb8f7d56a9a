use std::collections::HashMap;

use tracing::debug;

use crate::data;
use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// Whole-word exceptions that bypass the rule engine.
///
/// Central is the default table. Raiano and Sendinese each carry an
/// override layer that is consulted first and falls back to central.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub central: HashMap<String, String>,
    pub raiano: HashMap<String, String>,
    pub sendinese: HashMap<String, String>,
}

impl Lexicon {
    /// The lexicon embedded in the crate.
    pub fn new() -> Self {
        let lexicon = Self {
            central: data::load_exceptions(Dialect::Central),
            raiano: data::load_exceptions(Dialect::Raiano),
            sendinese: data::load_exceptions(Dialect::Sendinese),
        };
        debug!(
            central = lexicon.central.len(),
            raiano = lexicon.raiano.len(),
            sendinese = lexicon.sendinese.len(),
            "loaded exception lexicon"
        );
        lexicon
    }

    /// A lexicon without entries; every word goes through the rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a lexicon from JSON objects mapping words to transcriptions.
    pub fn from_json(central: &str, raiano: &str, sendinese: &str) -> Result<Self> {
        let mut lexicon = Self::empty();
        for (dialect, json) in [
            (Dialect::Central, central),
            (Dialect::Raiano, raiano),
            (Dialect::Sendinese, sendinese),
        ] {
            let entries: HashMap<String, String> = serde_json::from_str(json)
                .map_err(|source| Error::Lexicon { dialect, source })?;
            lexicon.extend(dialect, entries);
        }
        Ok(lexicon)
    }

    /// Merge entries into one dialect's table, replacing existing words.
    pub fn extend<I>(&mut self, dialect: Dialect, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let table = self.table_mut(dialect);
        table.extend(entries.into_iter().map(|(word, ps)| (word.to_lowercase(), ps)));
    }

    pub fn table(&self, dialect: Dialect) -> &HashMap<String, String> {
        match dialect {
            Dialect::Central => &self.central,
            Dialect::Raiano => &self.raiano,
            Dialect::Sendinese => &self.sendinese,
        }
    }

    fn table_mut(&mut self, dialect: Dialect) -> &mut HashMap<String, String> {
        match dialect {
            Dialect::Central => &mut self.central,
            Dialect::Raiano => &mut self.raiano,
            Dialect::Sendinese => &mut self.sendinese,
        }
    }

    /// Stored transcription of a word, before post-processing.
    pub fn lookup(&self, word: &str, dialect: Dialect) -> Option<&str> {
        let word = word.to_lowercase();
        let specific = match dialect {
            Dialect::Central => None,
            other => self.table(other).get(&word),
        };
        specific
            .or_else(|| self.central.get(&word))
            .map(String::as_str)
    }
}
