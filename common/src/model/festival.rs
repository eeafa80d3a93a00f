use serde::{Deserialize, Serialize};

/// Structured description of a festival, as produced by the language model
/// and returned by `POST /generate-festival`.
///
/// On the wire every field uses the Hindi key the prompt asks the model for
/// (see [`FestivalRecord::KEYS`]).
///
/// All eight keys are required. A model answer that omits any of them does
/// not deserialize, which the backend reports as an invalid response format
/// instead of rendering a half-filled record. Unknown keys are ignored.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FestivalRecord {
    /// Festival name as the model spelled it.
    #[serde(rename = "त्योहार")]
    pub name: String,
    #[serde(rename = "परिचय")]
    pub introduction: String,
    #[serde(rename = "मनाने_का_कारण")]
    pub reason_celebrated: String,
    #[serde(rename = "मनाने_की_विधि")]
    pub method_of_celebration: String,
    #[serde(rename = "अनुष्ठान")]
    pub rituals: String,
    /// Deities worshipped during the festival.
    #[serde(rename = "पूजे_जाने_वाले_देवता")]
    pub deities: String,
    #[serde(rename = "उपयोग_किए_जाने_वाले_मंत्र")]
    pub mantras: String,
    /// Story behind the festival.
    #[serde(rename = "कहानी_के_पीछे")]
    pub backstory: String,
}

impl FestivalRecord {
    /// JSON keys of the record, in the order the prompt lists them.
    /// Must stay in sync with the `rename` attributes above.
    pub const KEYS: [&'static str; 8] = [
        "त्योहार",
        "परिचय",
        "मनाने_का_कारण",
        "मनाने_की_विधि",
        "अनुष्ठान",
        "पूजे_जाने_वाले_देवता",
        "उपयोग_किए_जाने_वाले_मंत्र",
        "कहानी_के_पीछे",
    ];
}
