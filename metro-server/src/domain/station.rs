//! Station record types.

use serde::{Deserialize, Serialize};

use super::normalize::{normalize, normalize_opt};

/// A station record exactly as stored in a network dataset.
///
/// Every field is optional; datasets are hand-maintained and may omit
/// anything. Use [`StationRecord::from_raw`] before building a graph.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStationRecord {
    pub name: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub color: Option<String>,
    pub line: Option<String>,
}

/// A normalized station entry.
///
/// `prev` and `next` are `None` at a line terminus. A `color` of `None`
/// matches any requested color. `line` is descriptive only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRecord {
    /// Station identifier. Empty only for defective upstream records.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

impl StationRecord {
    /// Create a record with the given name and no neighbors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prev: None,
            next: None,
            color: None,
            line: None,
        }
    }

    /// Set the preceding station.
    pub fn with_prev(mut self, prev: impl Into<String>) -> Self {
        self.prev = Some(prev.into());
        self
    }

    /// Set the following station.
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// Set the color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the line label.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Normalize every textual field of a raw record.
    pub fn from_raw(raw: &RawStationRecord) -> Self {
        Self {
            name: normalize(raw.name.as_deref().unwrap_or_default()),
            prev: normalize_opt(raw.prev.as_deref()),
            next: normalize_opt(raw.next.as_deref()),
            color: normalize_opt(raw.color.as_deref()),
            line: normalize_opt(raw.line.as_deref()),
        }
    }

    /// Whether this station belongs to the requested color.
    ///
    /// An empty filter, or a station without a color, always matches.
    pub fn matches_color(&self, filter: &str) -> bool {
        filter.is_empty() || self.color.as_deref().is_none_or(|c| c == filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_normalizes_all_fields() {
        let raw = RawStationRecord {
            name: Some(" Los Héroes ".to_string()),
            prev: Some("República".to_string()),
            next: Some("LA MONEDA".to_string()),
            color: Some("Rojo".to_string()),
            line: Some("L1".to_string()),
        };

        let record = StationRecord::from_raw(&raw);
        assert_eq!(record.name, "los heroes");
        assert_eq!(record.prev.as_deref(), Some("republica"));
        assert_eq!(record.next.as_deref(), Some("la moneda"));
        assert_eq!(record.color.as_deref(), Some("rojo"));
        assert_eq!(record.line.as_deref(), Some("l1"));
    }

    #[test]
    fn from_raw_maps_blank_fields_to_none() {
        let raw = RawStationRecord {
            name: None,
            prev: Some("  ".to_string()),
            next: Some(String::new()),
            color: None,
            line: None,
        };

        let record = StationRecord::from_raw(&raw);
        assert_eq!(record.name, "");
        assert_eq!(record.prev, None);
        assert_eq!(record.next, None);
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let json = r#"{"name": "Alcántara", "prev": "El Golf", "extra": "x"}"#;
        let raw: RawStationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Alcántara"));
        assert_eq!(raw.next, None);
    }

    #[test]
    fn matches_color() {
        let azul = StationRecord::new("a").with_color("azul");
        let uncolored = StationRecord::new("b");

        assert!(azul.matches_color(""));
        assert!(azul.matches_color("azul"));
        assert!(!azul.matches_color("verde"));

        assert!(uncolored.matches_color(""));
        assert!(uncolored.matches_color("verde"));
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let record = StationRecord::new("alcantara")
            .with_prev("el golf")
            .with_line("l1");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "alcantara", "prev": "el golf", "line": "l1"})
        );
    }
}
