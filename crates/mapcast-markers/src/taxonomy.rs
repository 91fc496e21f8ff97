//! The fixed, ordered taxonomies and curated alias tables.
//!
//! Taxonomies are slices of `(key, style)` pairs rather than maps: the
//! substring-fallback tier scans keys in slice order, so insertion order
//! is a load-bearing, tested invariant — a label containing several key
//! substrings (e.g. "shopping plaza") must resolve the same way on every
//! run.

use serde::Serialize;

/// Style descriptor for one marker: glyph name plus foreground and
/// background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

pub type TaxonomyEntry = (&'static str, Style);

/// Provider-specific phrase → canonical taxonomy key.
pub type Alias = (&'static str, &'static str);

/// Neutral style used when a taxonomy carries no `default` entry.
pub(crate) const UNSTYLED: Style = Style {
    icon: "map-marker",
    color: "#2E4053",
    background: "#FFFFFF",
};

/// POI category taxonomy, in substring-scan order.
pub const POI_TAXONOMY: &[TaxonomyEntry] = &[
    ("restaurant", Style { icon: "utensils", color: "#FF5733", background: "#FFFFFF" }),
    ("cafe", Style { icon: "coffee", color: "#C70039", background: "#FFFFFF" }),
    ("bar", Style { icon: "glass-martini", color: "#900C3F", background: "#FFFFFF" }),
    ("attraction", Style { icon: "monument", color: "#581845", background: "#FFFFFF" }),
    ("hotel", Style { icon: "bed", color: "#FFC300", background: "#FFFFFF" }),
    ("shop", Style { icon: "shopping-bag", color: "#DAF7A6", background: "#FFFFFF" }),
    ("transport", Style { icon: "bus", color: "#3498DB", background: "#FFFFFF" }),
    ("park", Style { icon: "tree", color: "#2ECC71", background: "#FFFFFF" }),
    ("plaza", Style { icon: "landmark", color: "#9B59B6", background: "#FFFFFF" }),
    ("structure", Style { icon: "building", color: "#34495E", background: "#FFFFFF" }),
    ("default", UNSTYLED),
];

/// Curated POI subcategory phrases. Consulted before the substring scan
/// so these win over accidental substring collisions.
pub const POI_ALIASES: &[Alias] = &[
    ("french restaurant", "restaurant"),
    ("burger joint", "restaurant"),
    ("fish and chips shop", "restaurant"),
    ("deli", "restaurant"),
    ("café", "cafe"),
    ("coffee shop", "cafe"),
    ("pastry shop", "cafe"),
    ("toy store", "shop"),
    ("computers and electronics retail", "shop"),
    ("shopping plaza", "shop"),
];

/// Weather condition taxonomy, in substring-scan order. `clear` carries
/// the sun glyph and `cloud` the partly-cloudy-day glyph; those two are
/// the only entries with night variants.
pub const CONDITION_TAXONOMY: &[TaxonomyEntry] = &[
    ("rain", Style { icon: "rain", color: "#2471A3", background: "#D6EAF8" }),
    ("drizzle", Style { icon: "rain", color: "#5499C7", background: "#D6EAF8" }),
    ("shower", Style { icon: "rain", color: "#2471A3", background: "#D6EAF8" }),
    ("thunderstorm", Style { icon: "thunderstorm", color: "#6C3483", background: "#D2B4DE" }),
    ("clear", Style { icon: "sun", color: "#F1C40F", background: "#FDEBD0" }),
    ("cloud", Style { icon: "partly-cloudy-day", color: "#85929E", background: "#FDEBD0" }),
    ("overcast", Style { icon: "cloud", color: "#808B96", background: "#EAECEE" }),
    ("fog", Style { icon: "fog", color: "#ABB2B9", background: "#EAECEE" }),
    ("mist", Style { icon: "fog", color: "#ABB2B9", background: "#EAECEE" }),
    ("haze", Style { icon: "fog", color: "#B3B6B7", background: "#EAECEE" }),
    ("snow", Style { icon: "snow", color: "#5DADE2", background: "#FBFCFC" }),
    ("sleet", Style { icon: "snow", color: "#5DADE2", background: "#FBFCFC" }),
    ("hail", Style { icon: "snow", color: "#5DADE2", background: "#FBFCFC" }),
    ("default", Style { icon: "cloud", color: "#95A5A6", background: "#F2F3F4" }),
];

/// OpenWeather group names with no taxonomy key of their own.
pub const CONDITION_ALIASES: &[Alias] = &[
    ("smoke", "fog"),
    ("dust", "haze"),
    ("sand", "haze"),
    ("squall", "shower"),
    ("tornado", "thunderstorm"),
];

/// Background applied by the night substitution.
pub const NIGHT_BACKGROUND: &str = "#1B2631";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_taxonomies_end_with_a_default_entry() {
        assert_eq!(POI_TAXONOMY.last().map(|(k, _)| *k), Some("default"));
        assert_eq!(CONDITION_TAXONOMY.last().map(|(k, _)| *k), Some("default"));
    }

    #[test]
    fn taxonomy_keys_are_lowercase_and_unique() {
        for taxonomy in [POI_TAXONOMY, CONDITION_TAXONOMY] {
            let mut seen = std::collections::HashSet::new();
            for (key, _) in taxonomy {
                assert_eq!(*key, key.to_lowercase(), "key '{key}' must be lowercase");
                assert!(seen.insert(*key), "key '{key}' appears twice");
            }
        }
    }

    #[test]
    fn aliases_resolve_to_existing_taxonomy_keys() {
        for (alias, canonical) in POI_ALIASES {
            assert!(
                POI_TAXONOMY.iter().any(|(k, _)| k == canonical),
                "alias '{alias}' points at unknown key '{canonical}'"
            );
        }
        for (alias, canonical) in CONDITION_ALIASES {
            assert!(
                CONDITION_TAXONOMY.iter().any(|(k, _)| k == canonical),
                "alias '{alias}' points at unknown key '{canonical}'"
            );
        }
    }

    #[test]
    fn style_serializes_flat() {
        let (_, style) = POI_TAXONOMY[0];
        let json = serde_json::to_value(style).expect("serialize Style");
        assert_eq!(json["icon"], "utensils");
        assert_eq!(json["color"], "#FF5733");
        assert_eq!(json["background"], "#FFFFFF");
    }
}
