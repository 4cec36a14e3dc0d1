//! Record types shared by both pipelines
//!
//! - CorrectedRecord: one export row after the column shift is undone
//! - AggregatedGroup: Qty summed per (Gender, Style, Color)
//! - ClientRecord: one row of the reservation client list

use serde::{Deserialize, Serialize};

/// Export row with every field under its true meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectedRecord {
    /// `None` when the export cell was empty
    pub gender: Option<String>,
    pub division: String,
    pub style: String,
    /// `None` when the export cell was empty
    pub color: Option<String>,
    /// Carried through, not used in aggregation
    pub size: String,
    pub qty: f64,
}

impl CorrectedRecord {
    /// Aggregation key. Rows with an empty gender or color cell do not form
    /// a group; a whitespace-only cell trims to "" and still does.
    pub fn group_key(&self) -> Option<GroupKey> {
        Some(GroupKey {
            gender: self.gender.clone()?,
            style: self.style.clone(),
            color: self.color.clone()?,
        })
    }
}

/// Exact-match grouping key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub gender: String,
    pub style: String,
    pub color: String,
}

/// One row per unique (Gender, Style, Color)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedGroup {
    pub gender: String,
    pub style: String,
    pub color: String,
    pub total: f64,
}

impl AggregatedGroup {
    pub fn from_key(key: GroupKey, total: f64) -> Self {
        Self {
            gender: key.gender,
            style: key.style,
            color: key.color,
            total,
        }
    }

    /// Styles ending in "N" belong to the Nano line.
    pub fn is_nano(&self) -> bool {
        self.style.ends_with('N')
    }
}

/// Client list row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub number: String,
    pub reference: String,
    pub color: String,
    pub size: String,
    pub worker: String,
    pub date: String,
}

impl ClientRecord {
    /// NAME followed by LAST NAME when present
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.name, last),
            _ => self.name.clone(),
        }
    }

    /// REF, COLOR and SIZE joined by spaces
    pub fn observation(&self) -> String {
        [
            self.reference.as_str(),
            self.color.as_str(),
            self.size.as_str(),
        ]
        .join(" ")
    }

    pub fn date_line(&self) -> String {
        format!("Fecha: {}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gender: &str, style: &str, color: &str) -> CorrectedRecord {
        CorrectedRecord {
            gender: Some(gender.into()),
            division: "RUN".into(),
            style: style.into(),
            color: Some(color.into()),
            size: "9".into(),
            qty: 1.0,
        }
    }

    fn client() -> ClientRecord {
        ClientRecord {
            name: "Ana".into(),
            last_name: Some("Lopez".into()),
            number: "88887777".into(),
            reference: "REF1".into(),
            color: "BLACK".into(),
            size: "38".into(),
            worker: "Carlos".into(),
            date: "12/03/2025".into(),
        }
    }

    #[test]
    fn test_group_key() {
        let key = record("MENS", "AIR", "BLACK").group_key().unwrap();
        assert_eq!(key.gender, "MENS");
        assert_eq!(key.style, "AIR");
        assert_eq!(key.color, "BLACK");
    }

    #[test]
    fn test_group_key_requires_gender_and_color() {
        let mut r = record("MENS", "AIR", "BLACK");
        r.gender = None;
        assert!(r.group_key().is_none());

        let mut r = record("MENS", "AIR", "BLACK");
        r.color = None;
        assert!(r.group_key().is_none());
    }

    #[test]
    fn test_group_key_keeps_blank_text() {
        let key = record("", "AIRN", "BLACK").group_key().unwrap();
        assert_eq!(key.gender, "");
        assert_eq!(key.style, "AIRN");
    }

    #[test]
    fn test_is_nano() {
        let group = AggregatedGroup::from_key(record("MENS", "AIRN", "RED").group_key().unwrap(), 2.0);
        assert!(group.is_nano());
        let group = AggregatedGroup::from_key(record("MENS", "AIRn", "RED").group_key().unwrap(), 2.0);
        assert!(!group.is_nano());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(client().full_name(), "Ana Lopez");

        let mut c = client();
        c.last_name = None;
        assert_eq!(c.full_name(), "Ana");

        c.last_name = Some("  ".into());
        assert_eq!(c.full_name(), "Ana");
    }

    #[test]
    fn test_observation_and_date_line() {
        let c = client();
        assert_eq!(c.observation(), "REF1 BLACK 38");
        assert_eq!(c.date_line(), "Fecha: 12/03/2025");
    }
}
