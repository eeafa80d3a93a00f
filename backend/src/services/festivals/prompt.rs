use common::model::festival::FestivalRecord;

/// Builds the instruction sent to the model for one festival.
///
/// The model is asked to act as a cultural historian, answer only in Hindi and
/// return exactly one JSON object whose keys are [`FestivalRecord::KEYS`]. The
/// subject is embedded verbatim.
pub fn build_prompt(festival: &str) -> String {
    let skeleton = FestivalRecord::KEYS
        .iter()
        .map(|key| format!("  \"{}\": \"...\"", key))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"
आप एक विशेषज्ञ सांस्कृतिक इतिहासकार हैं। कृपया भारतीय त्योहार "{festival}" के बारे में जानकारी केवल **हिंदी भाषा** में दें।

अपना उत्तर बिल्कुल JSON प्रारूप में दें, इस संरचना का पालन करते हुए:
{{
{skeleton}
}}

नियम:
- सभी फ़ील्ड हिंदी में स्पष्ट और संक्षिप्त लिखें।
- किसी भी विवरण को खाली न छोड़ें। यदि निश्चित नहीं है तो अनुमान लगाएँ।
- JSON ऑब्जेक्ट के बाहर कोई अतिरिक्त टेक्स्ट न लिखें।
"#
    )
}
