//! Window and counter validation.

use crate::schema::KlaimeerConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &KlaimeerConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}

pub(crate) fn validate_counters(errors: &mut Vec<String>, config: &KlaimeerConfig) {
    for (i, entry) in config.counters.entries.iter().enumerate() {
        let name = |field: &str| format!("counters.entries[{i}].{field}");
        if !entry.end.is_finite() {
            errors.push(format!("{} = {} must be finite", name("end"), entry.end));
        }
        validate_range_f64(errors, &name("duration_secs"), entry.duration_secs, 0.0, 60.0);
        validate_range(errors, &name("decimals"), entry.decimals, 0, 20);
    }
}
