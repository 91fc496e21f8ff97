//! Three-tier label resolution against an ordered taxonomy.

use crate::taxonomy::{Alias, Style, TaxonomyEntry, POI_ALIASES, POI_TAXONOMY, UNSTYLED};

/// Resolves a free-text label to a style descriptor.
///
/// Resolution order, first match wins:
///
/// 1. exact key match on the lowercased label;
/// 2. alias-table lookup, resolving the mapped canonical key;
/// 3. first taxonomy key (in slice order) contained in the label;
/// 4. the taxonomy's `default` entry.
///
/// Alias resolution runs before the substring scan so curated mappings
/// win over substring collisions, and the scan order is the taxonomy's
/// declaration order, so ties resolve deterministically.
#[must_use]
pub fn classify(label: &str, taxonomy: &[TaxonomyEntry], aliases: &[Alias]) -> Style {
    let needle = label.trim().to_lowercase();

    if let Some((_, style)) = taxonomy.iter().find(|(key, _)| *key == needle) {
        return *style;
    }

    if let Some((_, canonical)) = aliases.iter().find(|(phrase, _)| *phrase == needle) {
        if let Some((_, style)) = taxonomy.iter().find(|(key, _)| key == canonical) {
            return *style;
        }
    }

    if !needle.is_empty() {
        if let Some((_, style)) = taxonomy.iter().find(|(key, _)| needle.contains(key)) {
            return *style;
        }
    }

    fallback(taxonomy)
}

/// Classifies a POI category against the built-in POI taxonomy.
#[must_use]
pub fn poi_style(category: &str) -> Style {
    classify(category, POI_TAXONOMY, POI_ALIASES)
}

fn fallback(taxonomy: &[TaxonomyEntry]) -> Style {
    taxonomy
        .iter()
        .find(|(key, _)| *key == "default")
        .map_or(UNSTYLED, |(_, style)| *style)
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
