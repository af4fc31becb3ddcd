//! Region label normalization.

/// The one source label that collides with the interchange delimiter.
const OCEANIA_RAW: &str = "Australia/Oceania";
const OCEANIA_NORMALIZED: &str = "Australia-Oceania";

/// Normalizes a region label for use in the canonical dataset.
///
/// "Australia/Oceania" is rewritten to "Australia-Oceania"; every other label
/// passes through trimmed. Idempotent: normalizing an already-normalized
/// label is a no-op.
pub fn normalize_region_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == OCEANIA_RAW {
        OCEANIA_NORMALIZED.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_region_label;

    #[test]
    fn rewrites_oceania() {
        assert_eq!(
            normalize_region_label("Australia/Oceania"),
            "Australia-Oceania"
        );
    }

    #[test]
    fn trims_other_labels() {
        assert_eq!(normalize_region_label(" Europe "), "Europe");
        assert_eq!(normalize_region_label("Asia"), "Asia");
    }
}
