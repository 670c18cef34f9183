use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fish::FishType;

/// Record identifier derived from the creation instant (milliseconds since
/// the Unix epoch). Monotonic in practice; two appends within the same
/// millisecond would collide, which the design accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatchId(i64);

impl CatchId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Derive an id from a creation timestamp.
    pub fn from_instant(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged catch. Immutable after creation; there is no edit or delete.
///
/// Field names and order follow the persisted JSON layout exactly:
/// `{"fishType", "size", "lure", "location", "id", "timestamp"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    #[serde(rename = "fishType")]
    pub fish_type: FishType,
    /// Length in inches, always > 0 for records produced by the entry form.
    pub size: f64,
    pub lure: String,
    pub location: String,
    pub id: CatchId,
    /// Creation instant, serialized as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
}

/// A validated candidate record, produced by the entry form. The store
/// assigns the id and timestamp at append time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCatch {
    pub fish_type: FishType,
    pub size: f64,
    pub lure: String,
    pub location: String,
}

impl NewCatch {
    /// Stamp the candidate with an id and timestamp taken from `at`.
    pub fn into_record(self, at: DateTime<Utc>) -> CatchRecord {
        CatchRecord {
            fish_type: self.fish_type,
            size: self.size,
            lure: self.lure,
            location: self.location,
            id: CatchId::from_instant(at),
            timestamp: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_persisted_layout_field_names() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let record = NewCatch {
            fish_type: FishType::Pike,
            size: 27.5,
            lure: "Spoon".to_string(),
            location: "Lake St. Clair".to_string(),
        }
        .into_record(at);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["fishType"], "Pike");
        assert_eq!(value["size"], 27.5);
        assert_eq!(value["lure"], "Spoon");
        assert_eq!(value["location"], "Lake St. Clair");
        assert_eq!(value["id"], at.timestamp_millis());
        assert_eq!(value["timestamp"], "2024-06-01T12:30:00Z");
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let record = NewCatch {
            fish_type: FishType::SmallmouthBass,
            size: 17.25,
            lure: "Ned rig".to_string(),
            location: "Sturgeon Bay".to_string(),
        }
        .into_record(at);

        let json = serde_json::to_string(&record).unwrap();
        let back: CatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
