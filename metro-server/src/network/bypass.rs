//! Re-linking lines around stations excluded by a color filter.

use std::collections::HashMap;

use tracing::warn;

/// Direction along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Original neighbors of an excluded station, captured before exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bypass {
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Direction::Prev => Direction::Next,
            Direction::Next => Direction::Prev,
        }
    }
}

impl Bypass {
    fn toward(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Prev => self.prev.as_deref(),
            Direction::Next => self.next.as_deref(),
        }
    }
}

/// Excluded station name → the original `prev`/`next` pointers of each of
/// its records.
///
/// A transfer station excluded on several lines keeps one entry per line.
/// Lives for a single graph build.
#[derive(Debug, Clone, Default)]
pub struct BypassMap {
    entries: HashMap<String, Vec<Bypass>>,
    records: usize,
}

impl BypassMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an excluded station and its original neighbors.
    pub fn exclude(&mut self, name: impl Into<String>, prev: Option<String>, next: Option<String>) {
        self.entries
            .entry(name.into())
            .or_default()
            .push(Bypass { prev, next });
        self.records += 1;
    }

    /// Whether a station has been excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of excluded stations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no station is excluded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk from `current` in `direction` past every excluded station.
    ///
    /// `from` is the station whose pointer is `current`. At an excluded
    /// station with several records, the walk continues along the record
    /// that points back to the station it came from, or the first record
    /// if none does.
    ///
    /// Returns the first identifier that is not excluded. Returns `default`
    /// when the walk runs off the end of the line, or when it takes more
    /// steps than there are excluded records (a cycle in the chain).
    pub fn resolve<'a>(
        &'a self,
        from: &str,
        current: Option<&'a str>,
        direction: Direction,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        let mut came_from = from;
        let mut current = current.filter(|c| !c.is_empty());

        // A chain through n excluded records needs at most n steps.
        for _ in 0..=self.records {
            let Some(name) = current else {
                return default;
            };
            let Some(bypass) = self.entries.get(name).and_then(|bypasses| {
                bypasses
                    .iter()
                    .find(|b| b.toward(direction.opposite()) == Some(came_from))
                    .or_else(|| bypasses.first())
            }) else {
                return Some(name);
            };
            came_from = name;
            current = bypass.toward(direction).filter(|c| !c.is_empty());
        }

        warn!(
            stuck_at = ?current,
            ?direction,
            excluded = self.records,
            "cyclic bypass chain, falling back to default"
        );
        default
    }
}
