use regex::Regex;

use crate::catalog::ResponseCatalog;
use crate::gazetteer::Gazetteer;
use crate::intent::{default_topic_rules, normalize_text, TopicRule};
use crate::models::{
    AdvisoryResponse, CityRecord, Locale, MarketReading, PriceTrend, ResponseKind,
    StructuredPayload, Topic,
};
use crate::ResponderError;

/// The offline advisory engine: a total function from `(text, locale)` to a
/// canned, localized response. No I/O, no clock, no randomness; the same
/// input always yields the same output.
#[derive(Debug)]
pub struct OfflineResponder {
    rules: Vec<TopicRule>,
    catalog: ResponseCatalog,
    gazetteer: Gazetteer,
    defaults: SmartDefaults,
}

impl OfflineResponder {
    pub fn new() -> Result<Self, ResponderError> {
        Ok(Self {
            rules: default_topic_rules()?,
            catalog: ResponseCatalog::default(),
            gazetteer: Gazetteer::default(),
            defaults: SmartDefaults::compile()?,
        })
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// The static market reading attached to every market answer.
    pub fn market_reading() -> MarketReading {
        MarketReading {
            min: 1800,
            max: 2200,
            avg: 2000,
            unit: "quintal".to_string(),
            trend: PriceTrend::Stable,
        }
    }

    pub fn classify(&self, text: &str, locale: Locale) -> AdvisoryResponse {
        self.classify_with_topic(text, locale).1
    }

    /// First-match-wins over the ordered detector list, then the smart
    /// default chain when nothing claimed the message.
    pub fn classify_with_topic(&self, text: &str, locale: Locale) -> (Topic, AdvisoryResponse) {
        let normalized = normalize_text(text);

        for rule in &self.rules {
            if rule.matches(&normalized) {
                return (rule.topic, self.answer(rule.topic, &normalized, locale));
            }
        }

        (Topic::General, self.defaults.answer(&normalized))
    }

    fn answer(&self, topic: Topic, normalized: &str, locale: Locale) -> AdvisoryResponse {
        match topic {
            Topic::Weather => {
                let city = self.gazetteer.extract_or_default(normalized);
                AdvisoryResponse {
                    message: weather_message(city, locale),
                    data: Some(StructuredPayload::Weather(city.reading())),
                    kind: ResponseKind::Weather,
                }
            }
            Topic::Market => AdvisoryResponse {
                message: self.catalog.message(topic.catalog_key(), locale).to_string(),
                data: Some(StructuredPayload::Market(Self::market_reading())),
                kind: ResponseKind::Market,
            },
            Topic::Soil => AdvisoryResponse {
                message: self
                    .catalog
                    .message(soil_key(normalized), locale)
                    .to_string(),
                data: None,
                kind: ResponseKind::General,
            },
            _ => AdvisoryResponse {
                message: self.catalog.message(topic.catalog_key(), locale).to_string(),
                data: None,
                kind: ResponseKind::General,
            },
        }
    }
}

/// Soil questions that name a crop get the crop-specific answer; checks run
/// in fixed order so a message naming two crops is stable.
fn soil_key(normalized: &str) -> &'static str {
    const CROPS: &[(&[&str], &str)] = &[
        (&["rice", "paddy", "धान"], "soil_rice"),
        (&["wheat", "गेहूं"], "soil_wheat"),
        (&["cotton", "कपास"], "soil_cotton"),
        (&["tomato", "vegetable", "टमाटर"], "soil_vegetable"),
        (&["sugarcane", "गन्ना"], "soil_sugarcane"),
    ];

    for (needles, key) in CROPS {
        if needles.iter().any(|needle| normalized.contains(needle)) {
            return key;
        }
    }
    "soil_general"
}

fn weather_message(city: &CityRecord, locale: Locale) -> String {
    let CityRecord {
        name,
        state,
        temp,
        humidity,
        condition,
        wind_kmh,
        ..
    } = city;
    match locale {
        Locale::Hi => format!(
            "{name}, {state} का मौसम:\n\n🌡️ तापमान: {temp}°C\n💧 नमी: {humidity}%\n☁️ स्थिति: {condition}\n💨 हवा: {wind_kmh} किमी/घंटा\n\n✅ खेती के लिए अच्छी परिस्थिति।"
        ),
        Locale::Te => format!(
            "{name}, {state} వాతావరణం:\n\n🌡️ ఉష్ణోగ్రత: {temp}°C\n💧 తేమ: {humidity}%\n☁️ పరిస్థితి: {condition}\n💨 గాలి: {wind_kmh} కిమీ/గంట\n\n✅ వ్యవసాయం కోసం మంచి పరిస్థితులు।"
        ),
        Locale::Ta => format!(
            "{name}, {state} வானிலை:\n\n🌡️ வெப்பநிலை: {temp}°C\n💧 ஈரப்பதம்: {humidity}%\n☁️ நிலை: {condition}\n💨 காற்று: {wind_kmh} கி.மீ/மணி\n\n✅ விவசாயத்திற்கு நல்லது।"
        ),
        Locale::Bn => format!(
            "{name}, {state} আবহাওয়া:\n\n🌡️ তাপমাত্রা: {temp}°C\n💧 আর্দ্রতা: {humidity}%\n☁️ অবস্থা: {condition}\n💨 বাতাস: {wind_kmh} কিমি/ঘন্টা\n\n✅ চাষের জন্য ভালো।"
        ),
        Locale::Mr => format!(
            "{name}, {state} हवामान:\n\n🌡️ तापमान: {temp}°C\n💧 आर्द्रता: {humidity}%\n☁️ स्थिती: {condition}\n💨 वारा: {wind_kmh} किमी/तास\n\n✅ शेतीसाठी चांगले।"
        ),
        Locale::En | Locale::Unknown => format!(
            "Weather in {name}, {state}:\n\n🌡️ Temperature: {temp}°C\n💧 Humidity: {humidity}%\n☁️ Condition: {condition}\n💨 Wind Speed: {wind_kmh} km/h\n\n✅ Good conditions for farming. Plan irrigation accordingly."
        ),
    }
}

/// The last-resort chain for messages no detector claimed: named crop ×
/// intent word, then question-word menus, then symptom patterns, then the
/// unconditional generic fallback. English-only, mirroring the depth of
/// coverage the catalog gives the detector topics.
#[derive(Debug)]
struct SmartDefaults {
    yellowing: Regex,
    stunted: Regex,
    scheme: Regex,
}

const CROP_NAMES: &[(&str, &str)] = &[
    ("rice", "rice/paddy"),
    ("paddy", "rice/paddy"),
    ("wheat", "wheat"),
    ("cotton", "cotton"),
    ("maize", "maize/corn"),
    ("corn", "maize/corn"),
    ("sugarcane", "sugarcane"),
    ("tomato", "tomato"),
    ("potato", "potato"),
    ("onion", "onion"),
    ("chilli", "chilli/pepper"),
    ("pepper", "chilli/pepper"),
];

impl SmartDefaults {
    fn compile() -> Result<Self, ResponderError> {
        let pattern = |pattern: &str| {
            Regex::new(pattern).map_err(|source| ResponderError::InvalidPattern {
                topic: Topic::General,
                source,
            })
        };
        Ok(Self {
            yellowing: pattern(r"yellow|pale|chlorosis")?,
            stunted: pattern(r"not growing|slow growth|stunted")?,
            scheme: pattern(r"subsidy|scheme|loan|support")?,
        })
    }

    fn answer(&self, normalized: &str) -> AdvisoryResponse {
        let general = |message: String| AdvisoryResponse {
            message,
            data: None,
            kind: ResponseKind::General,
        };

        let crop = CROP_NAMES
            .iter()
            .find(|(needle, _)| normalized.contains(needle))
            .map(|(_, label)| *label);

        if let Some(crop) = crop {
            if ["how", "grow", "cultivation"].iter().any(|w| normalized.contains(w)) {
                return general(format!(
                    "To grow {crop}: 1) Prepare soil properly (get soil test done). 2) Use certified seeds. 3) Sow at right time based on season. 4) Apply recommended fertilizers. 5) Maintain proper irrigation. 6) Control pests and diseases. 7) Harvest at right maturity. For a detailed {crop} cultivation guide, contact your agricultural officer."
                ));
            }
            if ["fertilizer", "nutrient"].iter().any(|w| normalized.contains(w)) {
                return general(format!(
                    "Fertilizer for {crop}: Apply NPK based on soil test. General recommendation - Apply basal dose at sowing, then top dressing during growth stages. Use organic manure to improve soil health. Specific doses vary by soil type and target yield. Get soil tested for precise recommendations."
                ));
            }
            if ["disease", "problem"].iter().any(|w| normalized.contains(w)) {
                return general(format!(
                    "Common {crop} diseases: Watch for leaf spots, wilting, or discoloration. Remove infected plants immediately. Apply appropriate fungicides. Maintain field hygiene. Practice crop rotation. For specific disease identification, consult an agricultural officer."
                ));
            }
            if ["yield", "production"].iter().any(|w| normalized.contains(w)) {
                return general(format!(
                    "To increase {crop} yield: 1) Use high-yielding varieties. 2) Proper soil preparation and testing. 3) Timely sowing. 4) Balanced fertilization. 5) Proper irrigation management. 6) Timely pest/disease control. 7) Good agronomic practices. 8) Harvest at right time."
                ));
            }
        }

        if normalized.contains("how") {
            return general(
                "I can help with 'how to' questions! Examples:\n• How to control pests?\n• How to improve soil quality?\n• How to increase crop yield?\n• How to get government subsidy?\n• How to apply fertilizer?\n\nPlease ask your specific question with details (crop name, issue, location) for better guidance."
                    .to_string(),
            );
        }
        if normalized.contains("what") {
            return general(
                "I can answer 'what' questions:\n• What fertilizer for [crop]?\n• What is the best variety?\n• What are current market prices?\n• What pest is this?\n• What crops grow in [season]?\n\nPlease provide more details for accurate answers."
                    .to_string(),
            );
        }
        if normalized.contains("when") {
            return general(
                "I can help with 'when' questions:\n• When to plant [crop]?\n• When to harvest?\n• When to apply fertilizer?\n• When to irrigate?\n• When is the best selling time?\n\nSpecify your crop and region for accurate timing."
                    .to_string(),
            );
        }
        if normalized.contains("why") {
            return general(
                "I can explain 'why' issues occur:\n• Why leaves are yellowing?\n• Why crops not growing well?\n• Why yield is low?\n• Why plants are wilting?\n\nDescribe your situation in detail (crop, symptoms, when started) for diagnosis."
                    .to_string(),
            );
        }
        if normalized.contains("where") {
            return general(
                "I can guide you on 'where' questions:\n• Where to sell crops for best price?\n• Where to buy quality seeds?\n• Where to apply for schemes?\n• Where to get soil tested?\n\nMention your location for specific guidance."
                    .to_string(),
            );
        }
        if normalized.contains("which") || normalized.contains("best") {
            return general(
                "I can recommend 'which/best' options:\n• Which crop for my soil?\n• Which variety gives high yield?\n• Which fertilizer is best?\n• Which season for planting?\n\nProvide details (soil type, region, season) for accurate recommendations."
                    .to_string(),
            );
        }

        if self.yellowing.is_match(normalized) {
            return general(
                "Yellow leaves usually indicate: 1) Nitrogen deficiency (most common). 2) Iron deficiency (check pH). 3) Waterlogging. 4) Disease. Solution: Apply urea for nitrogen, maintain proper drainage, get soil tested."
                    .to_string(),
            );
        }
        if self.stunted.is_match(normalized) {
            return general(
                "Slow growth reasons: 1) Nutrient deficiency (get soil test). 2) Poor soil quality. 3) Water stress (too much/little). 4) Pest/disease attack. 5) Improper pH. Solutions: Soil testing, balanced fertilization, proper irrigation, pest control."
                    .to_string(),
            );
        }
        if self.scheme.is_match(normalized) {
            return general(
                "Government support available: PM-KISAN (₹6000/year), Crop Insurance (PMFBY), Kisan Credit Card (KCC), Equipment subsidies, Soil Health Card, Minimum Support Price (MSP). Visit the nearest Krishi Vigyan Kendra or agriculture office with Aadhaar card for registration."
                    .to_string(),
            );
        }

        general(
            "I'm your farming assistant! Ask me specific questions like:\n\n❓ 'Which soil is best for rice?'\n❓ 'How to control aphids in cotton?'\n❓ 'When to plant wheat in Punjab?'\n❓ 'What fertilizer for tomato?'\n❓ 'Why are my leaves turning yellow?'\n\n💡 Tip: Include crop name, your issue/question, and location for best answers!"
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> OfflineResponder {
        OfflineResponder::new().unwrap()
    }

    #[test]
    fn market_keyword_returns_market_card() {
        let (topic, response) = responder().classify_with_topic("what is the mandi rate", Locale::En);
        assert_eq!(topic, Topic::Market);
        assert_eq!(response.kind, ResponseKind::Market);
        match response.data {
            Some(StructuredPayload::Market(reading)) => {
                assert_eq!(reading.min, 1800);
                assert_eq!(reading.max, 2200);
                assert_eq!(reading.avg, 2000);
                assert_eq!(reading.unit, "quintal");
                assert_eq!(reading.trend, PriceTrend::Stable);
            }
            other => panic!("expected market payload, got {other:?}"),
        }
    }

    #[test]
    fn city_weather_uses_gazetteer_values() {
        let response = responder().classify("weather in Warangal", Locale::En);
        assert_eq!(response.kind, ResponseKind::Weather);
        assert!(response.message.contains("Warangal, Telangana"));
        assert!(response.message.contains("34°C"));
        match response.data {
            Some(StructuredPayload::Weather(reading)) => {
                assert_eq!(reading.temp, 34);
                assert_eq!(reading.humidity, 52);
                assert_eq!(reading.condition, "Sunny");
            }
            other => panic!("expected weather payload, got {other:?}"),
        }
    }

    #[test]
    fn weather_without_city_defaults_to_hyderabad() {
        let response = responder().classify("will it rain tomorrow", Locale::En);
        assert!(response.message.contains("Hyderabad"));
    }

    #[test]
    fn weather_message_is_localized() {
        let response = responder().classify("వాతావరణం", Locale::Te);
        assert!(response.message.contains("వాతావరణం"));
        assert!(response.message.contains("32°C"));
    }

    #[test]
    fn pest_control_phrasing_beats_generic_pest() {
        let response = responder().classify("control pest in cotton", Locale::En);
        assert!(response.message.starts_with("Pest Control Methods:"));
    }

    #[test]
    fn generic_pest_keyword_gets_pest_answer() {
        let response = responder().classify("insects are attacking my field", Locale::En);
        assert!(response.message.starts_with("Pest Control:"));
    }

    #[test]
    fn soil_question_naming_a_crop_is_specialized() {
        let responder = responder();
        let rice = responder.classify("which soil is best for rice", Locale::En);
        assert!(rice.message.contains("Clayey loam"));
        let plain = responder.classify("tell me about soil", Locale::En);
        assert!(plain.message.starts_with("Soil types:"));
    }

    #[test]
    fn specific_scheme_wins_over_generic_scheme() {
        let (topic, response) =
            responder().classify_with_topic("how do i register for pm kisan", Locale::En);
        assert_eq!(topic, Topic::SchemePmKisan);
        assert!(response.message.starts_with("PM-KISAN:"));
    }

    #[test]
    fn catalog_falls_back_to_english_for_uncovered_locale() {
        let responder = responder();
        let tamil = responder.classify("kcc loan details", Locale::Ta);
        let english = responder.classify("kcc loan details", Locale::En);
        assert_eq!(tamil.message, english.message);
    }

    #[test]
    fn thanks_is_localized() {
        let response = responder().classify("thank you", Locale::Hi);
        assert_eq!(response.message, "आपका स्वागत है! खुश खेती! 🌾");
    }

    #[test]
    fn crop_intent_default_interpolates_crop_name() {
        let response = responder().classify("how to grow rice", Locale::En);
        assert!(response.message.starts_with("To grow rice/paddy:"));
        assert_eq!(response.kind, ResponseKind::General);
    }

    #[test]
    fn question_word_menu_fires_without_crop() {
        let response = responder().classify("when should i start", Locale::En);
        assert!(response.message.contains("'when' questions"));
    }

    #[test]
    fn symptom_pattern_matches_yellowing() {
        let response = responder().classify("my leaves are turning yellow", Locale::En);
        assert!(response.message.starts_with("Yellow leaves"));
    }

    #[test]
    fn empty_input_yields_generic_fallback() {
        let (topic, response) = responder().classify_with_topic("", Locale::En);
        assert_eq!(topic, Topic::General);
        assert!(response.message.starts_with("I'm your farming assistant!"));
        assert!(response.data.is_none());
    }

    #[test]
    fn classification_is_deterministic() {
        let responder = responder();
        for text in ["weather in vizag", "mandi rate", "how to grow cotton", ""] {
            let first = responder.classify(text, Locale::En);
            let second = responder.classify(text, Locale::En);
            assert_eq!(first, second);
        }
    }
}
