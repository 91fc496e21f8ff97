//! Marker styling: maps free-text provider labels (POI categories,
//! weather condition groups) onto a fixed internal taxonomy of style
//! descriptors, plus the day/night variant selection and temperature
//! band coloring used to annotate weather markers.
//!
//! Everything in this crate is pure and total: [`classify`] always
//! returns a descriptor, with the taxonomy's `default` entry as the
//! guaranteed fallback.

mod classify;
mod taxonomy;
mod weather;

pub use classify::{classify, poi_style};
pub use taxonomy::{
    Alias, Style, TaxonomyEntry, CONDITION_ALIASES, CONDITION_TAXONOMY, NIGHT_BACKGROUND,
    POI_ALIASES, POI_TAXONOMY,
};
pub use weather::{condition_style, night_variant, temp_color};
