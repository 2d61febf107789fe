use regex::Regex;

use crate::models::{Locale, Topic};
use crate::ResponderError;

/// Lowercase and collapse whitespace. Lowercasing is a no-op for the
/// native-script keywords, so a single pass covers both alphabets.
pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_lowercase()
}

/// Resolve the locale for a message: an explicit supported code wins,
/// otherwise the dominant script of the text decides, defaulting to English.
pub fn detect_locale(explicit: Option<Locale>, text: &str) -> Locale {
    if let Some(locale) = explicit {
        if locale != Locale::Unknown {
            return locale;
        }
    }

    let mut devanagari = 0usize;
    let mut telugu = 0usize;
    let mut tamil = 0usize;
    let mut bengali = 0usize;

    for ch in text.chars() {
        let code = ch as u32;
        if (0x0900..=0x097F).contains(&code) {
            devanagari += 1;
        } else if (0x0C00..=0x0C7F).contains(&code) {
            telugu += 1;
        } else if (0x0B80..=0x0BFF).contains(&code) {
            tamil += 1;
        } else if (0x0980..=0x09FF).contains(&code) {
            bengali += 1;
        }
    }

    let max = devanagari.max(telugu).max(tamil).max(bengali);
    if max == 0 {
        return Locale::En;
    }

    // Devanagari is shared by Hindi and Marathi; Hindi is the default there.
    if devanagari == max {
        Locale::Hi
    } else if telugu == max {
        Locale::Te
    } else if tamil == max {
        Locale::Ta
    } else {
        Locale::Bn
    }
}

/// One entry of the ordered detector list: a topic claimed either by a regex
/// over English keyword stems or by containment of a native-script keyword.
#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    stems: Regex,
    native: &'static [&'static str],
}

impl TopicRule {
    fn compile(
        topic: Topic,
        pattern: &str,
        native: &'static [&'static str],
    ) -> Result<Self, ResponderError> {
        let stems = Regex::new(pattern).map_err(|source| ResponderError::InvalidPattern {
            topic,
            source,
        })?;
        Ok(Self {
            topic,
            stems,
            native,
        })
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.stems.is_match(normalized)
            || self.native.iter().any(|needle| normalized.contains(needle))
    }
}

/// The detector list in its fixed priority order. The order is empirical and
/// load-bearing: specific scheme rules run before the generic scheme rule,
/// and the explicit pest-control phrasing runs before the generic pest rule.
/// Several late rules (seed treatment, composting, aphid, drought) are
/// shadowed by earlier broader rules for most phrasings; they are kept in
/// place so the precedence stays auditable rule by rule.
pub fn default_topic_rules() -> Result<Vec<TopicRule>, ResponderError> {
    Ok(vec![
        TopicRule::compile(
            Topic::Weather,
            r"weather|climat|temperature|rain|forecast|humid|wind|sun|cloud|storm|wheather",
            &["मौसम", "వాతావరణం"],
        )?,
        TopicRule::compile(
            Topic::Market,
            r"price|market|sell|buy|mandi|rate|cost|value",
            &["कीमत", "बाजार"],
        )?,
        TopicRule::compile(
            Topic::PestControl,
            r"control.*pest|pest.*control|kill.*pest|pest.*kill|remove.*pest",
            &[],
        )?,
        TopicRule::compile(
            Topic::Pest,
            r"pest|insect|bug|worm|caterpillar|aphid|locust|attack",
            &["कीट"],
        )?,
        TopicRule::compile(
            Topic::Disease,
            r"disease|sick|infection|fungus|bacteria|virus|rot|blight|wilt|spot|mold",
            &["रोग"],
        )?,
        TopicRule::compile(
            Topic::Fertilizer,
            r"fertili[zs]er|nutrient|npk|nitrogen|phosphorus|potassium|manure|compost|urea",
            &["खाद"],
        )?,
        TopicRule::compile(
            Topic::Irrigation,
            r"water|irrigat|drip|spray|pump|well|canal|drought",
            &["पानी", "सिंचाई"],
        )?,
        TopicRule::compile(
            Topic::Planting,
            r"plant|sow|seed|germination|spacing|depth|transplant",
            &["बोना", "बीज"],
        )?,
        TopicRule::compile(
            Topic::Harvest,
            r"harvest|crop|yield|produce|reap|mature|ready",
            &["कटाई", "फसल"],
        )?,
        TopicRule::compile(
            Topic::Soil,
            r"soil|land|earth|clay|sandy|loam|ph|texture",
            &["मिट्टी"],
        )?,
        TopicRule::compile(
            Topic::Variety,
            r"variety|varieties|hybrid|cultivar|strain|species",
            &["किस्म"],
        )?,
        TopicRule::compile(
            Topic::SchemePmKisan,
            r"pm.*kisan|pmkisan|kisan.*samman",
            &["पीएम किसान"],
        )?,
        TopicRule::compile(
            Topic::SchemeCropInsurance,
            r"crop.*insurance|pmfby|fasal.*bima",
            &["फसल बीमा"],
        )?,
        TopicRule::compile(
            Topic::SchemeKisanCredit,
            r"kisan.*credit.*card|kcc",
            &["किसान क्रेडिट"],
        )?,
        TopicRule::compile(
            Topic::SchemeSoilCard,
            r"soil.*health.*card|mitti.*card",
            &["मृदा स्वास्थ्य"],
        )?,
        TopicRule::compile(
            Topic::SchemeEquipmentSubsidy,
            r"tractor.*subsidy|equipment.*subsidy|machinery",
            &["ट्रैक्टर"],
        )?,
        TopicRule::compile(
            Topic::SchemeMsp,
            r"msp|minimum.*support.*price|guarantee.*price",
            &["न्यूनतम समर्थन"],
        )?,
        TopicRule::compile(
            Topic::Scheme,
            r"scheme|subsidy|loan|credit|insurance|support|government|yojana",
            &["योजना", "सब्सिडी"],
        )?,
        TopicRule::compile(
            Topic::Livestock,
            r"cow|buffalo|goat|sheep|poultry|chicken|cattle|livestock|dairy|milk",
            &["गाय", "पशु"],
        )?,
        TopicRule::compile(
            Topic::Organic,
            r"organic|natural|chemical.*free|eco.*friendly|biodynamic",
            &["जैविक"],
        )?,
        TopicRule::compile(
            Topic::Rotation,
            r"rotation|crop.*cycle|alternate.*crop",
            &["फसल चक्र"],
        )?,
        TopicRule::compile(
            Topic::SeedTreatment,
            r"seed.*treat|treat.*seed|seed.*soak",
            &["बीज उपचार"],
        )?,
        TopicRule::compile(
            Topic::WaterManagement,
            r"water.*save|conserv.*water|rainwater|mulch",
            &["जल प्रबंधन"],
        )?,
        TopicRule::compile(Topic::Composting, r"compost|vermi|organic.*manure", &["कम्पोस्ट"])?,
        TopicRule::compile(Topic::Aphid, r"aphid|white.*fly|jassid|thrip", &["एफिड"])?,
        TopicRule::compile(
            Topic::Monsoon,
            r"monsoon|rainy.*season|kharif.*prep",
            &["मानसून"],
        )?,
        TopicRule::compile(Topic::Drought, r"drought|dry.*spell|water.*scar", &["सूखा"])?,
        TopicRule::compile(
            Topic::Greeting,
            r"\b(hi|hello|hey|namaste)\b|good\s+(morning|evening)",
            &["नमस्ते"],
        )?,
        TopicRule::compile(
            Topic::Thanks,
            r"thank|thanks|grateful|appreciate",
            &["धन्यवाद"],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lowercases_and_collapses() {
        assert_eq!(normalize_text("  What IS   the\tWeather "), "what is the weather");
    }

    #[test]
    fn native_script_survives_normalization() {
        assert_eq!(normalize_text("आज का मौसम"), "आज का मौसम");
    }

    #[test]
    fn detects_telugu_script() {
        assert_eq!(detect_locale(None, "వాతావరణం ఎలా ఉంది"), Locale::Te);
    }

    #[test]
    fn devanagari_defaults_to_hindi() {
        assert_eq!(detect_locale(None, "मौसम कैसा है"), Locale::Hi);
    }

    #[test]
    fn explicit_locale_beats_script_detection() {
        assert_eq!(detect_locale(Some(Locale::Mr), "मौसम"), Locale::Mr);
    }

    #[test]
    fn latin_text_is_english() {
        assert_eq!(detect_locale(None, "how to grow rice"), Locale::En);
    }

    #[test]
    fn pest_control_rule_precedes_generic_pest() {
        let rules = default_topic_rules().unwrap();
        let winner = rules
            .iter()
            .find(|rule| rule.matches("control pest in cotton"))
            .unwrap();
        assert_eq!(winner.topic, Topic::PestControl);
    }

    #[test]
    fn specific_scheme_rules_precede_generic_scheme() {
        let rules = default_topic_rules().unwrap();
        let winner = rules
            .iter()
            .find(|rule| rule.matches("how to apply for pm kisan"))
            .unwrap();
        assert_eq!(winner.topic, Topic::SchemePmKisan);
    }

    #[test]
    fn greeting_requires_word_boundary() {
        let rules = default_topic_rules().unwrap();
        let greeting = rules
            .iter()
            .find(|rule| rule.topic == Topic::Greeting)
            .unwrap();
        assert!(greeting.matches("hi there"));
        assert!(!greeting.matches("which one"));
    }
}
