//! Weather-specific styling: day/night variant selection and the
//! temperature band used to color marker labels.

use crate::classify::classify;
use crate::taxonomy::{Style, CONDITION_ALIASES, CONDITION_TAXONOMY, NIGHT_BACKGROUND};

/// Resolves a condition group label and applies the night substitution
/// carried by the provider icon code.
#[must_use]
pub fn condition_style(condition_main: &str, icon_code: &str) -> Style {
    night_variant(
        classify(condition_main, CONDITION_TAXONOMY, CONDITION_ALIASES),
        icon_code,
    )
}

/// Applies the night substitution to a resolved style.
///
/// The provider icon code ends in `n` at night. Only the two day glyphs
/// have night variants: `sun` becomes `moon` and `partly-cloudy-day`
/// becomes `partly-cloudy-night`, both on the fixed night background.
/// Applied once, after classification; already-substituted styles pass
/// through unchanged, so the operation is idempotent.
#[must_use]
pub fn night_variant(style: Style, icon_code: &str) -> Style {
    if !icon_code.ends_with('n') {
        return style;
    }
    match style.icon {
        "sun" => Style {
            icon: "moon",
            background: NIGHT_BACKGROUND,
            ..style
        },
        "partly-cloudy-day" => Style {
            icon: "partly-cloudy-night",
            background: NIGHT_BACKGROUND,
            ..style
        },
        _ => style,
    }
}

/// Temperature band for the marker label, as a step function over
/// degrees Celsius.
#[must_use]
pub fn temp_color(celsius: f64) -> &'static str {
    if celsius <= 0.0 {
        "cyan"
    } else if celsius <= 10.0 {
        "white"
    } else if celsius <= 20.0 {
        "yellow"
    } else if celsius <= 30.0 {
        "orange"
    } else {
        "red"
    }
}
