use std::collections::HashMap;

use tracing::warn;

use crate::dialect::Dialect;

fn raw(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Central => include_str!("../data/central.json"),
        Dialect::Raiano => include_str!("../data/raiano.json"),
        Dialect::Sendinese => include_str!("../data/sendinese.json"),
    }
}

/// Load the embedded exception table of a dialect.
pub fn load_exceptions(dialect: Dialect) -> HashMap<String, String> {
    serde_json::from_str(raw(dialect)).unwrap_or_else(|e| {
        warn!(%dialect, error = %e, "embedded exception table is malformed, using an empty one");
        HashMap::new()
    })
}
