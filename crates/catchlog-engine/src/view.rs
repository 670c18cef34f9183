use catchlog_types::{CatchRecord, FishType};
use serde::Serialize;
use std::cmp::Ordering;

/// Filter criteria for the catch view. Every active criterion must match
/// for a record to pass; an absent criterion always passes its dimension,
/// so relaxing a criterion can only widen the result.
#[derive(Debug, Clone, Default)]
pub struct CatchFilter {
    pub fish_type: Option<FishType>,
    pub location: Option<String>,
    pub lure: Option<String>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
}

impl CatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fish_type(mut self, fish_type: FishType) -> Self {
        self.fish_type = Some(fish_type);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn lure(mut self, lure: impl Into<String>) -> Self {
        self.lure = Some(lure.into());
        self
    }

    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(mut self, max_size: f64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.fish_type.is_none()
            && self.location.is_none()
            && self.lure.is_none()
            && self.min_size.is_none()
            && self.max_size.is_none()
    }

    /// A record passes iff all active criteria match. Substring criteria
    /// are case-insensitive containment; size bounds are inclusive.
    pub fn matches(&self, record: &CatchRecord) -> bool {
        let matches_type = self.fish_type.is_none_or(|ft| record.fish_type == ft);
        let matches_location = self
            .location
            .as_deref()
            .is_none_or(|l| contains_ignore_case(&record.location, l));
        let matches_lure = self
            .lure
            .as_deref()
            .is_none_or(|l| contains_ignore_case(&record.lure, l));
        let matches_min = self.min_size.is_none_or(|min| record.size >= min);
        let matches_max = self.max_size.is_none_or(|max| record.size <= max);

        matches_type && matches_location && matches_lure && matches_min && matches_max
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Column to sort the table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FishType,
    Size,
    Lure,
    Location,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Interactive sort state of the table: active column plus direction.
///
/// Selecting the active column flips the direction; selecting a different
/// column resets to ascending. The table starts out on size descending,
/// matching the default projection ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }

    fn compare(&self, a: &CatchRecord, b: &CatchRecord) -> Ordering {
        let ordering = match self.key {
            SortKey::FishType => cmp_ignore_case(a.fish_type.as_str(), b.fish_type.as_str()),
            SortKey::Size => a.size.total_cmp(&b.size),
            SortKey::Lure => cmp_ignore_case(&a.lure, &b.lure),
            SortKey::Location => cmp_ignore_case(&a.location, &b.location),
            SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortKey::Size, SortDirection::Descending)
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Derive the view projection: filter, order by size descending, then
/// apply the table's interactive sort on the already-filtered set. Both
/// passes use a stable sort so ties keep their prior order.
pub fn project(
    records: &[CatchRecord],
    filter: &CatchFilter,
    sort: Option<SortSpec>,
) -> Vec<CatchRecord> {
    let mut filtered: Vec<CatchRecord> = records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.size.total_cmp(&a.size));

    if let Some(spec) = sort {
        filtered.sort_by(|a, b| spec.compare(a, b));
    }

    filtered
}

/// Summary statistics over the filtered set (not the full store).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchSummary {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

impl CatchSummary {
    pub fn compute(records: &[CatchRecord]) -> Self {
        if records.is_empty() {
            return Self {
                total: 0,
                biggest: None,
                average: None,
            };
        }

        let biggest = records
            .iter()
            .map(|r| r.size)
            .fold(f64::NEG_INFINITY, f64::max);
        let average = records.iter().map(|r| r.size).sum::<f64>() / records.len() as f64;

        Self {
            total: records.len(),
            biggest: Some(biggest),
            average: Some(average),
        }
    }

    /// Average size formatted to one decimal place, as displayed.
    pub fn average_display(&self) -> Option<String> {
        self.average.map(|avg| format!("{:.1}", avg))
    }
}
