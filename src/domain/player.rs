use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Handle produced by roster extraction and consumed by profile extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRef {
    pub player_url: Url,
    pub player_name: String,
}

/// A value derived from an infobox cell.
///
/// The source vocabulary of labels is not enumerable in advance, so the
/// profile carries an open mapping of these rather than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Date(NaiveDate),
    Text(String),
}

/// Per-season regular or playoff totals. Any cell may be a placeholder
/// dash or absent in the source, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonTotals {
    pub games_played: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub points: Option<i64>,
    pub penalty_minutes: Option<i64>,
}

/// One row of a player's career-statistics table, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerStatistic {
    pub season: String,
    pub team: String,
    pub league: String,
    pub regular_season: SeasonTotals,
    pub playoff_season: SeasonTotals,
}

/// A player record: identity, the open infobox attribute bag, and career
/// statistics when the statistics table was usable.
///
/// An attribute key is present only if a non-null value was derived from
/// the page; absent attributes are missing keys, never null placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_name: String,
    pub player_url: Url,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_statistics: Option<Vec<CareerStatistic>>,
}

impl PlayerProfile {
    pub fn new(player: &PlayerRef) -> Self {
        Self {
            player_name: player.player_name.clone(),
            player_url: player.player_url.clone(),
            attributes: BTreeMap::new(),
            career_statistics: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attributes_are_missing_keys() {
        let player = PlayerRef {
            player_url: Url::parse("https://en.wikipedia.org/wiki/Some_Player").unwrap(),
            player_name: "Some Player".into(),
        };
        let mut profile = PlayerProfile::new(&player);
        profile
            .attributes
            .insert("position".into(), AttributeValue::Text("Centre".into()));

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["position"], "Centre");
        assert!(json.get("born").is_none());
        assert!(json.get("career_statistics").is_none());
    }

    #[test]
    fn attribute_values_serialize_untagged() {
        let json = serde_json::to_value(AttributeValue::Integer(188)).unwrap();
        assert_eq!(json, serde_json::json!(188));

        let json =
            serde_json::to_value(AttributeValue::Date(NaiveDate::from_ymd_opt(1987, 8, 7).unwrap()))
                .unwrap();
        assert_eq!(json, serde_json::json!("1987-08-07"));
    }
}
