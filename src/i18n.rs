//! Static English/Hindi string tables. Pure lookup, no logic.

use crate::language::Language;

/// Every user-visible string for one language. Bodies that vary by
/// location carry an `{area}` placeholder filled in at compose time.
pub struct Strings {
    pub app_title: &'static str,
    pub transcript_title: &'static str,
    pub input_title: &'static str,
    pub listening: &'static str,
    pub thinking: &'static str,
    pub you_label: &'static str,
    pub assistant_label: &'static str,

    pub hint_quit: &'static str,
    pub hint_type: &'static str,
    pub hint_voice: &'static str,
    pub hint_language: &'static str,
    pub hint_suggestions: &'static str,
    pub hint_scroll: &'static str,
    pub hint_done: &'static str,
    pub hint_send: &'static str,

    pub greeting_located: &'static str,
    pub greeting_located_chips: [&'static str; 3],
    pub greeting_fallback: &'static str,
    pub greeting_fallback_chips: [&'static str; 3],

    pub voice_unavailable: &'static str,
    pub voice_insecure: &'static str,
    pub voice_denied: &'static str,
    pub voice_no_speech: &'static str,
    pub voice_failed: &'static str,

    pub quality_body: &'static str,
    pub comparison_body: &'static str,
    pub prediction_body: &'static str,
    pub level_body: &'static str,
    pub help_body: &'static str,

    pub area_yours: &'static str,
    pub area_this: &'static str,

    pub quality_chips: [&'static str; 3],
    pub comparison_chips: [&'static str; 3],
    pub prediction_chips: [&'static str; 3],
    pub level_chips: [&'static str; 3],
    /// Default suggestion set, also shown as sample queries and used as
    /// canned transcripts by the simulated voice capability.
    pub sample_queries: [&'static str; 3],

    pub pane_title: &'static str,
    pub sample_title: &'static str,
    pub chart_level_title: &'static str,
    pub chart_months: [&'static str; 6],
    pub chart_prediction_title: &'static str,
    pub comparison_title: &'static str,
    pub comparison_cities: [&'static str; 2],
    pub col_city: &'static str,
    pub col_depth: &'static str,
    pub col_change: &'static str,
}

static EN: Strings = Strings {
    app_title: "Bhujal Groundwater Assistant",
    transcript_title: "Conversation",
    input_title: "Your query",
    listening: "Listening",
    thinking: "Thinking",
    you_label: "You",
    assistant_label: "Assistant",

    hint_quit: "quit",
    hint_type: "type",
    hint_voice: "voice",
    hint_language: "language",
    hint_suggestions: "suggestions",
    hint_scroll: "scroll",
    hint_done: "done",
    hint_send: "send",

    greeting_located: "Namaste! I found your location. Ask me about groundwater levels, water quality, city comparisons, or predictions for your area.",
    greeting_located_chips: [
        "Groundwater level in my area",
        "Water quality near me",
        "Predict water levels for next 5 years",
    ],
    greeting_fallback: "Namaste! I could not access your location, but I can still help. Try asking about a specific city.",
    greeting_fallback_chips: [
        "Groundwater level in Delhi",
        "Water quality in Mumbai",
        "Compare water levels between Mumbai and Pune",
    ],

    voice_unavailable: "Voice input is not available here. Please type your query instead.",
    voice_insecure: "Voice input needs a secure connection. Please type your query instead.",
    voice_denied: "Microphone permission was denied. Allow it in your settings, or type your query.",
    voice_no_speech: "I did not hear anything. Please try again, or type your query.",
    voice_failed: "Voice input failed. Please type your query instead.",

    quality_body: "Water quality in {area} is within acceptable limits. TDS is around 450 mg/L, pH is 7.2, and nitrate levels are below the safety threshold. The chart shows the recent quality trend.",
    comparison_body: "Here is a comparison of groundwater between Mumbai and Pune. Mumbai's average depth to water is 8.2 m while Pune's is 6.5 m, and Pune shows a slower seasonal decline.",
    prediction_body: "Based on current trends, groundwater in {area} is projected to decline by about 1.5 m over the next 5 years. The chart shows the year-by-year projection.",
    level_body: "The current groundwater level in {area} is 12.4 m below ground, down 0.8 m since last year. The chart shows the recent trend.",
    help_body: "I can help with groundwater levels, water quality, city comparisons, and predictions. Try one of the sample queries below.",

    area_yours: "your area",
    area_this: "this area",

    quality_chips: [
        "What is the TDS level?",
        "Is the water safe to drink?",
        "How does quality compare to last year?",
    ],
    comparison_chips: [
        "Compare Delhi and Jaipur",
        "Which city has better quality?",
        "Show the level for Mumbai",
    ],
    prediction_chips: [
        "Predict for the next 10 years",
        "What is causing the decline?",
        "Can recharge wells help?",
    ],
    level_chips: [
        "Predict water levels for next 5 years",
        "Water quality in this area",
        "Compare with nearby cities",
    ],
    sample_queries: [
        "Show groundwater quality in Delhi",
        "Compare water levels between Mumbai and Pune",
        "Predict water levels for next 5 years in Bangalore",
    ],

    pane_title: "Data view",
    sample_title: "Sample queries",
    chart_level_title: "Groundwater level (m below ground)",
    chart_months: ["Mar", "Apr", "May", "Jun", "Jul", "Aug"],
    chart_prediction_title: "Projected level (m below ground)",
    comparison_title: "City comparison",
    comparison_cities: ["Mumbai", "Pune"],
    col_city: "City",
    col_depth: "Depth to water (m)",
    col_change: "Yearly change (m)",
};

static HI: Strings = Strings {
    app_title: "भूजल सहायक",
    transcript_title: "बातचीत",
    input_title: "अपना प्रश्न लिखें",
    listening: "सुन रहा हूँ",
    thinking: "सोच रहा हूँ",
    you_label: "आप",
    assistant_label: "सहायक",

    hint_quit: "बाहर",
    hint_type: "लिखें",
    hint_voice: "आवाज़",
    hint_language: "भाषा",
    hint_suggestions: "सुझाव",
    hint_scroll: "स्क्रॉल",
    hint_done: "समाप्त",
    hint_send: "भेजें",

    greeting_located: "नमस्ते! मुझे आपका स्थान मिल गया। अपने क्षेत्र के भूजल स्तर, पानी की गुणवत्ता, शहरों की तुलना या पूर्वानुमान के बारे में पूछें।",
    greeting_located_chips: [
        "मेरे क्षेत्र में भूजल स्तर",
        "मेरे पास पानी की गुणवत्ता",
        "अगले 5 वर्षों का पूर्वानुमान",
    ],
    greeting_fallback: "नमस्ते! मैं आपका स्थान प्राप्त नहीं कर सका, फिर भी मदद कर सकता हूँ। किसी शहर का नाम लेकर पूछें।",
    greeting_fallback_chips: [
        "दिल्ली में भूजल स्तर",
        "मुंबई में पानी की गुणवत्ता",
        "मुंबई और पुणे की तुलना करें",
    ],

    voice_unavailable: "यहाँ आवाज़ इनपुट उपलब्ध नहीं है। कृपया अपना प्रश्न लिखें।",
    voice_insecure: "आवाज़ इनपुट के लिए सुरक्षित कनेक्शन चाहिए। कृपया अपना प्रश्न लिखें।",
    voice_denied: "माइक्रोफ़ोन की अनुमति नहीं मिली। सेटिंग्स में अनुमति दें या प्रश्न लिखें।",
    voice_no_speech: "मुझे कुछ सुनाई नहीं दिया। फिर से कोशिश करें या प्रश्न लिखें।",
    voice_failed: "आवाज़ इनपुट विफल रहा। कृपया अपना प्रश्न लिखें।",

    quality_body: "{area} में पानी की गुणवत्ता स्वीकार्य सीमा में है। TDS लगभग 450 mg/L है, pH 7.2 है, और नाइट्रेट सुरक्षित स्तर से नीचे है। चार्ट हाल का गुणवत्ता रुझान दिखाता है।",
    comparison_body: "मुंबई और पुणे के भूजल की तुलना यह रही। मुंबई में पानी की औसत गहराई 8.2 मीटर है जबकि पुणे में 6.5 मीटर, और पुणे में मौसमी गिरावट धीमी है।",
    prediction_body: "मौजूदा रुझानों के आधार पर, {area} में भूजल अगले 5 वर्षों में लगभग 1.5 मीटर गिरने का अनुमान है। चार्ट वर्ष-दर-वर्ष प्रक्षेपण दिखाता है।",
    level_body: "{area} में वर्तमान भूजल स्तर ज़मीन से 12.4 मीटर नीचे है, पिछले साल से 0.8 मीटर कम। चार्ट हाल का रुझान दिखाता है।",
    help_body: "मैं भूजल स्तर, पानी की गुणवत्ता, शहरों की तुलना और पूर्वानुमान में मदद कर सकता हूँ। नीचे दिए नमूना प्रश्न आज़माएँ।",

    area_yours: "आपके क्षेत्र",
    area_this: "इस क्षेत्र",

    quality_chips: [
        "TDS स्तर क्या है?",
        "क्या पानी पीने योग्य है?",
        "पिछले साल से गुणवत्ता कैसी है?",
    ],
    comparison_chips: [
        "दिल्ली और जयपुर की तुलना करें",
        "किस शहर की गुणवत्ता बेहतर है?",
        "मुंबई का स्तर दिखाएँ",
    ],
    prediction_chips: [
        "अगले 10 वर्षों का पूर्वानुमान",
        "गिरावट का कारण क्या है?",
        "क्या रिचार्ज कुएँ मदद करेंगे?",
    ],
    level_chips: [
        "अगले 5 वर्षों का पूर्वानुमान करें",
        "इस क्षेत्र में पानी की गुणवत्ता",
        "पास के शहरों से तुलना करें",
    ],
    sample_queries: [
        "दिल्ली में भूजल गुणवत्ता दिखाएँ",
        "मुंबई और पुणे के जल स्तर की तुलना करें",
        "बैंगलोर के अगले 5 वर्षों का पूर्वानुमान करें",
    ],

    pane_title: "डेटा दृश्य",
    sample_title: "नमूना प्रश्न",
    chart_level_title: "भूजल स्तर (मीटर, ज़मीन से नीचे)",
    chart_months: ["मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त"],
    chart_prediction_title: "अनुमानित स्तर (मीटर, ज़मीन से नीचे)",
    comparison_title: "शहरों की तुलना",
    comparison_cities: ["मुंबई", "पुणे"],
    col_city: "शहर",
    col_depth: "जल गहराई (मीटर)",
    col_change: "वार्षिक बदलाव (मीटर)",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_distinct_per_language() {
        assert_ne!(strings(Language::En).greeting_located, strings(Language::Hi).greeting_located);
        assert_ne!(strings(Language::En).help_body, strings(Language::Hi).help_body);
    }

    #[test]
    fn test_area_bodies_carry_placeholder() {
        for lang in [Language::En, Language::Hi] {
            let s = strings(lang);
            assert!(s.quality_body.contains("{area}"));
            assert!(s.prediction_body.contains("{area}"));
            assert!(s.level_body.contains("{area}"));
            assert!(!s.comparison_body.contains("{area}"));
            assert!(!s.help_body.contains("{area}"));
        }
    }
}
