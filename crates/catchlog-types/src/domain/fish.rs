use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of species the log knows about.
///
/// Serialized as the display name (e.g. "Largemouth Bass") so the persisted
/// layout stays readable and stable. The entry form and the filter control
/// both enumerate [`FishType::ALL`]; there is no other source of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishType {
    #[serde(rename = "Largemouth Bass")]
    LargemouthBass,
    #[serde(rename = "Smallmouth Bass")]
    SmallmouthBass,
    #[serde(rename = "Rock Bass")]
    RockBass,
    #[serde(rename = "Pike")]
    Pike,
}

impl FishType {
    /// All known fish types, in the order they are offered for selection.
    pub const ALL: [FishType; 4] = [
        FishType::LargemouthBass,
        FishType::SmallmouthBass,
        FishType::RockBass,
        FishType::Pike,
    ];

    /// The display name, which is also the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FishType::LargemouthBass => "Largemouth Bass",
            FishType::SmallmouthBass => "Smallmouth Bass",
            FishType::RockBass => "Rock Bass",
            FishType::Pike => "Pike",
        }
    }
}

impl fmt::Display for FishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FishType {
    type Err = Error;

    /// Matches the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FishType::ALL
            .iter()
            .find(|ft| ft.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| Error::UnknownFishType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&FishType::LargemouthBass).unwrap();
        assert_eq!(json, "\"Largemouth Bass\"");

        let back: FishType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FishType::LargemouthBass);
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(
            "  rock bass ".parse::<FishType>().unwrap(),
            FishType::RockBass
        );
        assert!("Muskie".parse::<FishType>().is_err());
    }
}
