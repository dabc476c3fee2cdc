//! Free-text normalization for station fields and request parameters.

/// Normalize a single text field.
///
/// Transliterates to ASCII (stripping accents), lowercases, and trims
/// surrounding whitespace. Every textual field of a station record and every
/// request parameter goes through this before reaching the graph builder.
///
/// # Examples
///
/// ```
/// use metro_server::domain::normalize;
///
/// assert_eq!(normalize("  Estación Central "), "estacion central");
/// assert_eq!(normalize("ÑUÑOA"), "nunoa");
/// ```
pub fn normalize(text: &str) -> String {
    deunicode::deunicode(text).to_lowercase().trim().to_string()
}

/// Normalize an optional field, mapping absent and blank values to `None`.
pub fn normalize_opt(text: Option<&str>) -> Option<String> {
    text.map(normalize).filter(|s| !s.is_empty())
}
