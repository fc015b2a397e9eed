use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{NOWCAST_WARNINGS_DE, NOWCAST_WARNINGS_EN};

// ============================================================================
// Station Identifiers
// ============================================================================

/// A single DWD station identifier, given as a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum StationId {
    Text(String),
    Numeric(f64),
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Text(s) => f.write_str(s),
            StationId::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// One station identifier or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum StationIds {
    One(StationId),
    Many(Vec<StationId>),
}

impl StationIds {
    /// Comma-joined form used as the `stationIds` query parameter,
    /// preserving input order.
    pub fn to_query_value(&self) -> String {
        match self {
            StationIds::One(id) => id.to_string(),
            StationIds::Many(ids) => ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

// ============================================================================
// Warning Languages
// ============================================================================

/// Language of the nowcast warnings feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// File name of the nowcast feed for this language.
    pub fn nowcast_file(self) -> &'static str {
        match self {
            Language::De => NOWCAST_WARNINGS_DE,
            Language::En => NOWCAST_WARNINGS_EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::De => "de",
            Language::En => "en",
        })
    }
}

// Only the literal string "en" selects the English feed; any other value
// falls back to German.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            Some("en") => Language::En,
            _ => Language::De,
        })
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetStationDataRequest {
    /// Station IDs for the DWD weather stations
    #[serde(rename = "stationIds")]
    pub station_ids: StationIds,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetNowcastWarningsRequest {
    /// Language for warnings (de or en)
    #[serde(default)]
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn station_ids_from_scalar_string() {
        let ids: StationIds = serde_json::from_value(json!("10865")).unwrap();
        assert_eq!(ids.to_query_value(), "10865");
    }

    #[test]
    fn station_ids_from_scalar_number() {
        let ids: StationIds = serde_json::from_value(json!(10865)).unwrap();
        assert_eq!(ids.to_query_value(), "10865");
    }

    #[test]
    fn station_ids_mixed_list_preserves_order() {
        let ids: StationIds =
            serde_json::from_value(json!(["10865", 10866, "P0036"])).unwrap();
        assert_eq!(ids.to_query_value(), "10865,10866,P0036");
    }

    #[test]
    fn station_data_request_requires_station_ids() {
        let err = serde_json::from_value::<GetStationDataRequest>(json!({})).unwrap_err();
        assert!(err.to_string().contains("stationIds"));
    }

    #[test]
    fn language_defaults_to_german() {
        let req: GetNowcastWarningsRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.language, Language::De);
    }

    #[test]
    fn language_en_selected_only_by_exact_match() {
        let req: GetNowcastWarningsRequest =
            serde_json::from_value(json!({ "language": "en" })).unwrap();
        assert_eq!(req.language, Language::En);

        let req: GetNowcastWarningsRequest =
            serde_json::from_value(json!({ "language": "fr" })).unwrap();
        assert_eq!(req.language, Language::De);

        let req: GetNowcastWarningsRequest =
            serde_json::from_value(json!({ "language": 5 })).unwrap();
        assert_eq!(req.language, Language::De);
    }

    #[test]
    fn nowcast_file_per_language() {
        assert_eq!(Language::De.nowcast_file(), "warnings_nowcast.json");
        assert_eq!(Language::En.nowcast_file(), "warnings_nowcast_en.json");
    }

    #[test]
    fn station_data_schema_marks_station_ids_required() {
        let schema = schemars::schema_for!(GetStationDataRequest);
        let value = serde_json::to_value(schema).unwrap();
        assert_eq!(value["required"], json!(["stationIds"]));
    }

    #[test]
    fn language_schema_enumerates_de_and_en() {
        let schema = schemars::schema_for!(Language);
        let value = serde_json::to_value(schema).unwrap();
        assert_eq!(value["enum"], json!(["de", "en"]));
    }
}
