//! Identity matching against the roster.
//!
//! Field order and separators in pasted text are inconsistent, so matching
//! is a fallback cascade of individually cheap, unambiguous rules; any hit
//! wins. Lookups are backed by insertion-ordered indexes so that on key
//! collision the earliest roster entry is the one matched.

use indexmap::IndexMap;

use super::AnimalRef;

/// Outcome of resolving identity tokens against the roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult<'a> {
    /// The line refers to this registered animal.
    Matched(&'a AnimalRef),
    /// No roster entry fits; the line becomes a pending record.
    Unmatched,
}

impl<'a> MatchResult<'a> {
    pub fn animal(&self) -> Option<&'a AnimalRef> {
        match self {
            MatchResult::Matched(animal) => Some(animal),
            MatchResult::Unmatched => None,
        }
    }
}

/// Indexed view over the caller's animal roster.
pub struct Roster<'a> {
    by_series_reg: IndexMap<(String, String), &'a AnimalRef>,
    by_series: IndexMap<String, &'a AnimalRef>,
    by_registration: IndexMap<String, &'a AnimalRef>,
    by_composed: IndexMap<String, &'a AnimalRef>,
}

impl<'a> Roster<'a> {
    /// Index a roster slice. First entry wins on duplicate keys.
    pub fn new(animals: &'a [AnimalRef]) -> Self {
        let mut by_series_reg = IndexMap::new();
        let mut by_series = IndexMap::new();
        let mut by_registration = IndexMap::new();
        let mut by_composed = IndexMap::new();

        for animal in animals {
            let series = normalize(&animal.series_code);
            let registration = normalize(&animal.registration_number);
            by_series_reg
                .entry((series.clone(), registration.clone()))
                .or_insert(animal);
            by_series.entry(series.clone()).or_insert(animal);
            by_registration.entry(registration.clone()).or_insert(animal);
            by_composed
                .entry(compose(&series, &registration))
                .or_insert(animal);
        }

        Self {
            by_series_reg,
            by_series,
            by_registration,
            by_composed,
        }
    }

    /// Resolve one or two identity tokens via the fallback cascade:
    ///
    /// 1. series == token0 AND registration == token1;
    /// 2. series alone == token0, or registration alone == token0
    ///    (tolerates swapped field order);
    /// 3. composed `series-registration` key == `token0-token1` or ==
    ///    token0 alone (tolerates hyphen/space-joined identities);
    /// 4. token1 purely numeric AND series == token0 (covers an
    ///    unseparated `SERIES REGNUMBER` read as two fields).
    pub fn resolve(&self, token0: &str, token1: Option<&str>) -> MatchResult<'a> {
        let first = normalize(token0);
        let second = token1.map(normalize);

        if let Some(reg) = &second {
            if let Some(animal) = self.by_series_reg.get(&(first.clone(), reg.clone())) {
                return MatchResult::Matched(animal);
            }
        }

        if let Some(animal) = self.by_series.get(&first) {
            return MatchResult::Matched(animal);
        }
        if let Some(animal) = self.by_registration.get(&first) {
            return MatchResult::Matched(animal);
        }

        if let Some(reg) = &second {
            if let Some(animal) = self.by_composed.get(&compose(&first, reg)) {
                return MatchResult::Matched(animal);
            }
        }
        if let Some(animal) = self.by_composed.get(&first) {
            return MatchResult::Matched(animal);
        }

        if let Some(reg) = &second {
            if reg.chars().all(|c| c.is_ascii_digit()) && !reg.is_empty() {
                if let Some(animal) = self.by_series.get(&first) {
                    return MatchResult::Matched(animal);
                }
            }
        }

        MatchResult::Unmatched
    }
}

/// Trim, lowercase, fold spaces to hyphens.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace(' ', "-")
}

fn compose(series: &str, registration: &str) -> String {
    format!("{series}-{registration}")
}
