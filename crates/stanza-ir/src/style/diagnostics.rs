//! Opt-in diagnostic logging, gated per category.

use std::collections::HashSet;
use std::sync::OnceLock;

const ENV_VAR: &str = "STANZA_DIAGNOSTICS";

/// Whether diagnostics are enabled for a category.
///
/// Categories come from the `STANZA_DIAGNOSTICS` environment variable as a
/// comma-separated list (`cascade,effects`); `all` enables everything. The
/// set is read once per process.
pub fn diagnostics_enabled(category: &str) -> bool {
    static CATEGORIES: OnceLock<HashSet<String>> = OnceLock::new();
    let set = CATEGORIES.get_or_init(|| {
        std::env::var(ENV_VAR)
            .unwrap_or_default()
            .split(',')
            .map(|part| part.trim().to_ascii_lowercase())
            .filter(|part| !part.is_empty())
            .collect()
    });
    set.contains("all") || set.contains(&category.to_ascii_lowercase())
}
