use std::time::Duration;

use crate::conversation::Message;
use crate::i18n;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quality,
    Comparison,
    Prediction,
    Level,
    Help,
}

/// Structured payload attached to a reply. Only predictions carry one;
/// the other intents attach nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseData {
    Prediction,
}

// Each set carries the English and Hindi variants so a Hindi query
// classifies the same way regardless of the active language.
const QUALITY_KEYWORDS: [&str; 2] = ["quality", "गुणवत्ता"];
const COMPARE_KEYWORDS: [&str; 2] = ["compare", "तुलना"];
const PREDICT_KEYWORDS: [&str; 3] = ["predict", "पूर्वानुमान", "भविष्यवाणी"];
const LEVEL_KEYWORDS: [&str; 2] = ["level", "स्तर"];

fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| query.contains(k))
}

/// Ordered keyword containment, first match wins: quality outranks
/// compare, compare outranks predict, predict outranks level. A query
/// mentioning both "quality" and "compare" is a quality query.
pub fn classify(text: &str) -> Intent {
    let query = text.to_lowercase();
    if contains_any(&query, &QUALITY_KEYWORDS) {
        Intent::Quality
    } else if contains_any(&query, &COMPARE_KEYWORDS) {
        Intent::Comparison
    } else if contains_any(&query, &PREDICT_KEYWORDS) {
        Intent::Prediction
    } else if contains_any(&query, &LEVEL_KEYWORDS) {
        Intent::Level
    } else {
        Intent::Help
    }
}

/// Builds the assistant reply for a classified query: localized body
/// (with `{area}` phrasing picked by whether a location fix exists),
/// display flags, the prediction marker, and three follow-up chips.
pub fn compose(intent: Intent, language: Language, location_known: bool) -> Message {
    let s = i18n::strings(language);
    let area = if location_known { s.area_yours } else { s.area_this };

    let (body, chips) = match intent {
        Intent::Quality => (s.quality_body.replace("{area}", area), &s.quality_chips),
        Intent::Comparison => (s.comparison_body.to_string(), &s.comparison_chips),
        Intent::Prediction => (s.prediction_body.replace("{area}", area), &s.prediction_chips),
        Intent::Level => (s.level_body.replace("{area}", area), &s.level_chips),
        Intent::Help => (s.help_body.to_string(), &s.sample_queries),
    };

    let mut message = Message::assistant(body);
    message.show_chart = matches!(intent, Intent::Quality | Intent::Prediction | Intent::Level);
    message.show_comparison = intent == Intent::Comparison;
    if intent == Intent::Prediction {
        message.data = Some(ResponseData::Prediction);
    }
    message.suggestions = chips.iter().map(|c| c.to_string()).collect();
    message
}

/// Classifies the query and produces the reply after the configured
/// simulated latency. The caller shows its processing indicator and
/// blocks further submissions until the reply lands.
pub async fn generate_response(
    text: &str,
    language: Language,
    location_known: bool,
    delay: Duration,
) -> Message {
    tokio::time::sleep(delay).await;
    compose(classify(text), language, location_known)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("Show GROUNDWATER Quality in Delhi"), Intent::Quality);
        assert_eq!(classify("COMPARE the cities"), Intent::Comparison);
    }

    #[test]
    fn test_quality_outranks_compare() {
        let reply = compose(
            classify("compare water quality between Delhi and Jaipur"),
            Language::En,
            false,
        );
        assert!(reply.show_chart);
        assert!(!reply.show_comparison);
    }

    #[test]
    fn test_sample_sentence_flags() {
        let quality = compose(classify("Show groundwater quality in Delhi"), Language::En, false);
        assert!(quality.show_chart);
        assert!(!quality.show_comparison);
        assert!(quality.data.is_none());

        let comparison = compose(
            classify("Compare water levels between Mumbai and Pune"),
            Language::En,
            false,
        );
        assert!(comparison.show_comparison);
        assert!(!comparison.show_chart);

        let prediction = compose(
            classify("Predict water levels for next 5 years in Bangalore"),
            Language::En,
            false,
        );
        assert!(prediction.show_chart);
        assert_eq!(prediction.data, Some(ResponseData::Prediction));
    }

    #[test]
    fn test_hindi_keywords_classify_identically() {
        assert_eq!(classify("दिल्ली में भूजल गुणवत्ता दिखाएँ"), Intent::Quality);
        assert_eq!(classify("मुंबई और पुणे के जल स्तर की तुलना करें"), Intent::Comparison);
        assert_eq!(classify("अगले 5 वर्षों का पूर्वानुमान करें"), Intent::Prediction);
        assert_eq!(classify("यहाँ का जल स्तर क्या है"), Intent::Level);
    }

    #[test]
    fn test_unknown_query_falls_back_to_help() {
        let reply = compose(classify("tell me a story"), Language::En, false);
        assert!(!reply.show_chart);
        assert!(!reply.show_comparison);
        assert!(reply.data.is_none());
        let samples = i18n::strings(Language::En).sample_queries;
        assert_eq!(reply.suggestions, samples.map(String::from).to_vec());
    }

    #[test]
    fn test_area_phrasing_follows_location() {
        let with_fix = compose(Intent::Level, Language::En, true);
        assert!(with_fix.text.contains("your area"));
        let without = compose(Intent::Level, Language::En, false);
        assert!(without.text.contains("this area"));
    }

    #[test]
    fn test_every_intent_offers_three_chips() {
        for intent in [
            Intent::Quality,
            Intent::Comparison,
            Intent::Prediction,
            Intent::Level,
            Intent::Help,
        ] {
            let reply = compose(intent, Language::Hi, false);
            assert_eq!(reply.suggestions.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_generate_response_matches_compose() {
        let reply = generate_response(
            "predict the level next year",
            Language::En,
            true,
            Duration::ZERO,
        )
        .await;
        assert_eq!(reply.data, Some(ResponseData::Prediction));
        assert!(reply.show_chart);
        assert!(reply.text.contains("your area"));
    }
}
