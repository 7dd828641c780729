use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::options::REFERENCE_SENTINEL;

/// Label rendered in place of the reference sentinel.
pub const REFERENCE_LABEL: &str = "from reference image";

/// Ratio used when a value carries no `W:H` token.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?").expect("number pattern is valid"));
static ASPECT_RATIO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(\.\d+)?:\d+(\.\d+)?").expect("aspect ratio pattern is valid")
});

pub fn is_reference_value(value: &str) -> bool {
    value == REFERENCE_SENTINEL
}

/// Strip the decorative annotation from an option value.
///
/// `"35mm (Storyteller)"` becomes `"35mm"`. Empty input stays empty and the
/// reference sentinel becomes [`REFERENCE_LABEL`].
pub fn clean_label(value: &str) -> &str {
    if value.is_empty() {
        return "";
    }
    if is_reference_value(value) {
        return REFERENCE_LABEL;
    }
    let cleaned = value.split(" (").next().unwrap_or(value);
    trace!(?value, ?cleaned, "Cleaned label");
    cleaned
}

/// First integer or decimal token of `value`, e.g. `1600.0` for `"ISO 1600"`.
pub fn extract_number(value: &str) -> Option<f64> {
    if value.is_empty() || is_reference_value(value) {
        return None;
    }
    NUMBER
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// First `W:H` token of `value`, falling back to [`DEFAULT_ASPECT_RATIO`].
pub fn extract_aspect_ratio(value: &str) -> &str {
    if value.is_empty() || is_reference_value(value) {
        return DEFAULT_ASPECT_RATIO;
    }
    ASPECT_RATIO
        .find(value)
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_ASPECT_RATIO)
}
