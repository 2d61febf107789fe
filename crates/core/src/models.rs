use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Hi,
    Te,
    Ta,
    Bn,
    Mr,
    Unknown,
}

impl Locale {
    pub fn from_optional_str(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "en" || v == "en-in" || v == "english" => Self::En,
            Some(v) if v == "hi" || v == "hi-in" || v == "hindi" => Self::Hi,
            Some(v) if v == "te" || v == "te-in" || v == "telugu" => Self::Te,
            Some(v) if v == "ta" || v == "ta-in" || v == "tamil" => Self::Ta,
            Some(v) if v == "bn" || v == "bn-in" || v == "bengali" => Self::Bn,
            Some(v) if v == "mr" || v == "mr-in" || v == "marathi" => Self::Mr,
            _ => Self::Unknown,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
            Self::Ta => "ta",
            Self::Bn => "bn",
            Self::Mr => "mr",
            Self::Unknown => "unknown",
        }
    }
}

/// Every category the offline responder can assign to a message. The six
/// specific scheme topics exist because they must win over the generic
/// `Scheme` topic when both would match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Weather,
    Market,
    PestControl,
    Pest,
    Disease,
    Fertilizer,
    Irrigation,
    Planting,
    Harvest,
    Soil,
    Variety,
    SchemePmKisan,
    SchemeCropInsurance,
    SchemeKisanCredit,
    SchemeSoilCard,
    SchemeEquipmentSubsidy,
    SchemeMsp,
    Scheme,
    Livestock,
    Organic,
    Rotation,
    SeedTreatment,
    WaterManagement,
    Composting,
    Aphid,
    Monsoon,
    Drought,
    Greeting,
    Thanks,
    General,
}

impl Topic {
    /// Key into the response catalog for topics answered by a plain string
    /// lookup. Weather and market build their answers instead.
    pub fn catalog_key(self) -> &'static str {
        match self {
            Self::Weather => "weather_response",
            Self::Market => "market_response",
            Self::PestControl => "pest_control",
            Self::Pest => "pest_response",
            Self::Disease => "disease_response",
            Self::Fertilizer => "fertilizer_response",
            Self::Irrigation => "irrigation_response",
            Self::Planting => "planting_response",
            Self::Harvest => "harvest_response",
            Self::Soil => "soil_general",
            Self::Variety => "variety_response",
            Self::SchemePmKisan => "scheme_pmkisan",
            Self::SchemeCropInsurance => "scheme_pmfby",
            Self::SchemeKisanCredit => "scheme_kcc",
            Self::SchemeSoilCard => "scheme_soilcard",
            Self::SchemeEquipmentSubsidy => "scheme_subsidy",
            Self::SchemeMsp => "scheme_msp",
            Self::Scheme => "scheme_response",
            Self::Livestock => "livestock_response",
            Self::Organic => "organic_farming",
            Self::Rotation => "crop_rotation",
            Self::SeedTreatment => "seed_treatment",
            Self::WaterManagement => "water_management",
            Self::Composting => "composting",
            Self::Aphid => "pest_aphids",
            Self::Monsoon => "monsoon_prep",
            Self::Drought => "drought_management",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks_response",
            Self::General => "general_fallback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Weather,
    Market,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temp: i32,
    pub humidity: u8,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReading {
    pub min: u32,
    pub max: u32,
    pub avg: u32,
    pub unit: String,
    pub trend: PriceTrend,
}

/// Optional data card attached to a response. Untagged so the wire shape
/// matches the flat objects the chat frontend renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructuredPayload {
    Weather(WeatherReading),
    Market(MarketReading),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StructuredPayload>,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// Static per-city weather attributes held in the gazetteer.
#[derive(Debug, Clone, Serialize)]
pub struct CityRecord {
    pub name: &'static str,
    pub state: &'static str,
    pub temp: i32,
    pub humidity: u8,
    pub condition: &'static str,
    pub wind_kmh: u8,
}

impl CityRecord {
    pub fn reading(&self) -> WeatherReading {
        WeatherReading {
            temp: self.temp,
            humidity: self.humidity,
            condition: self.condition.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub session_id: Option<String>,
    pub text: String,
    pub locale: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StructuredPayload>,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub locale: Locale,
    pub topic: Topic,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub at: DateTime<Utc>,
    pub user_text: String,
    pub bot_text: String,
    pub topic: Topic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSession {
    pub session_id: String,
    pub user_id: Option<String>,
    pub locale: Locale,
    pub expires_at: DateTime<Utc>,
    pub turns: Vec<ConversationTurn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parsing_accepts_region_variants() {
        assert_eq!(Locale::from_optional_str(Some("te-IN")), Locale::Te);
        assert_eq!(Locale::from_optional_str(Some("Hindi")), Locale::Hi);
        assert_eq!(Locale::from_optional_str(Some("de")), Locale::Unknown);
        assert_eq!(Locale::from_optional_str(None), Locale::Unknown);
    }

    #[test]
    fn weather_payload_serializes_flat() {
        let payload = StructuredPayload::Weather(WeatherReading {
            temp: 34,
            humidity: 52,
            condition: "Sunny".to_string(),
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["temp"], 34);
        assert_eq!(value["condition"], "Sunny");
    }
}
