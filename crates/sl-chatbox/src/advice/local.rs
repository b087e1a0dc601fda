//! Igbo, Yoruba and Hausa advice. Coverage is partial.

use sl_protocol::{Language, TopicId};

use super::AdviceContent;

pub fn content(lang: Language, topic: TopicId) -> Option<&'static AdviceContent> {
    match (lang, topic) {
        (Language::Igbo, TopicId::Overheating) => Some(&IGBO_OVERHEATING),
        (Language::Yoruba, TopicId::Overheating) => Some(&YORUBA_OVERHEATING),
        (Language::Hausa, TopicId::Overheating) => Some(&HAUSA_OVERHEATING),
        (Language::Hausa, TopicId::WontStart) => Some(&HAUSA_WONT_START),
        _ => None,
    }
}

static IGBO_OVERHEATING: AdviceContent = AdviceContent {
    summary: "Ọ bụrụ na injin na-ekpo ọkụ karịa, mmiri nwere ike ọ gaghị ezu na radiator, \
              ma ọ bụ thermostat ma ọ bụ fan emebiela.",
    steps_intro: Some("Mee nke a mbụ:"),
    steps: &[
        "Kwụsị ụgbọala n'ebe dị nchebe ma gbanyụọ injin.",
        "Chere opekata mpe nkeji iri atọ tupu imeghe mkpuchi radiator.",
        "Lelee coolant ma tinye ya ma ọ bụrụ na ọ dị ala.",
    ],
    parts_intro: None,
    parts: &["Thermostat", "Radiator", "Water pump"],
    caution: Some("Emeghela mkpuchi radiator mgbe ọ ka na-ekpo ọkụ."),
    buy_prompt: None,
};

static YORUBA_OVERHEATING: AdviceContent = AdviceContent {
    summary: "Tí ẹ́ńjìnnì bá ń gbóná jù, omi lè ti tán nínú radiator, \
              tàbí thermostat tàbí fan ti bàjẹ́.",
    steps_intro: Some("Ẹ ṣe èyí ná:"),
    steps: &[
        "Dúró sí ibi tí ó ní ààbò kí ẹ sì pa ẹ́ńjìnnì.",
        "Ẹ dúró fún ìṣẹ́jú ọgbọ̀n kí ẹ tó ṣí ìbòrí radiator.",
        "Ẹ wo iye coolant kí ẹ sì fi kún un.",
    ],
    parts_intro: None,
    parts: &["Thermostat", "Radiator", "Water pump"],
    caution: Some("Ẹ má ṣe ṣí ìbòrí radiator nígbà tí ó ṣì gbóná."),
    buy_prompt: None,
};

static HAUSA_OVERHEATING: AdviceContent = AdviceContent {
    summary: "Idan injin yana zafi fiye da kima, ruwa ya ragu a radiator, \
              ko thermostat ko fanka sun lalace.",
    steps_intro: Some("Ka fara yin wannan:"),
    steps: &[
        "Ka tsaya a wuri mai aminci ka kashe injin.",
        "Ka jira akalla mintuna talatin kafin ka buɗe murfin radiator.",
        "Ka duba coolant ka ƙara idan ya ragu.",
    ],
    parts_intro: None,
    parts: &["Thermostat", "Radiator", "Water pump"],
    caution: Some("Kada ka buɗe murfin radiator yayin da yake da zafi."),
    buy_prompt: None,
};

static HAUSA_WONT_START: AdviceContent = AdviceContent {
    summary: "Idan mota ba ta tashi ba, yawanci batir ne, starter ko matsalar mai.",
    steps_intro: None,
    steps: &[],
    parts_intro: None,
    parts: &["Batir", "Starter", "Fuel pump"],
    caution: None,
    buy_prompt: None,
};
