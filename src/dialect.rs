use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Regional variety of Mirandese.
///
/// Only the `l`/`lh` rules and the choice of exception table depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Central,
    Raiano,
    Sendinese,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Central, Dialect::Raiano, Dialect::Sendinese];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Central => "central",
            Dialect::Raiano => "raiano",
            Dialect::Sendinese => "sendinese",
        }
    }

    pub fn is_sendinese(&self) -> bool {
        matches!(self, Dialect::Sendinese)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "central" => Ok(Dialect::Central),
            "raiano" => Ok(Dialect::Raiano),
            "sendinese" | "sendinés" => Ok(Dialect::Sendinese),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}
