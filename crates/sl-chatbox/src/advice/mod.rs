//! Mechanical-advice topics: keyword triggers and localized repair advice.
//!
//! Topics are scanned in declaration order and the first keyword hit wins.
//! Advice falls back to English when a language has no entry for a topic.

mod english;
mod local;
mod pidgin;

use sl_protocol::{Language, TopicId};

/// Advice for one topic in one language. Empty lists and `None` fields are
/// left out of the rendered message.
#[derive(Debug)]
pub struct AdviceContent {
    pub summary: &'static str,
    pub steps_intro: Option<&'static str>,
    pub steps: &'static [&'static str],
    pub parts_intro: Option<&'static str>,
    pub parts: &'static [&'static str],
    pub caution: Option<&'static str>,
    pub buy_prompt: Option<&'static str>,
}

/// Advice rendered into a single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAdvice {
    pub topic: TopicId,
    /// Language the content was actually taken from (English after a fallback).
    pub language: Language,
    pub html: String,
}

/// Lower-case phrases that trigger a topic, matched as substrings.
pub fn keywords(topic: TopicId) -> &'static [&'static str] {
    match topic {
        TopicId::Overheating => &[
            "overheat",
            "running hot",
            "temperature gauge",
            "temperature high",
            "steam from",
            "coolant leak",
            "boiling",
        ],
        TopicId::BrakeNoise => &[
            "squeal",
            "squeak",
            "grinding noise",
            "grinding sound",
            "noise when i stop",
            "noise when stopping",
        ],
        TopicId::WontStart => &[
            "won't start",
            "wont start",
            "not starting",
            "no gree start",
            "refuse to start",
            "cannot start",
            "can't start",
            "no crank",
            "clicking sound",
        ],
        TopicId::BatteryDrain => &[
            "battery keeps dying",
            "battery dead",
            "dead battery",
            "flat battery",
            "battery drain",
            "battery down",
            "battery low",
        ],
        TopicId::RoughIdle => &[
            "rough idle",
            "idling rough",
            "misfire",
            "shaking at idle",
            "shakes when idle",
            "jerking",
            "hesitat",
        ],
        TopicId::SteeringVibration => &[
            "steering wheel shake",
            "steering shake",
            "steering wheel vibrat",
            "steering vibrat",
            "wobble",
            "pulls to one side",
            "pulling to one side",
        ],
        TopicId::AcNotCooling => &[
            "ac not cold",
            "ac not cooling",
            "ac blowing hot",
            "a/c",
            "air condition",
            "no cold air",
        ],
        TopicId::OilLeak => &["oil leak", "leaking oil", "oil under", "oil drip", "oil spot"],
        TopicId::TransmissionSlipping => &[
            "gear slip",
            "slipping gear",
            "gears slip",
            "gear not engaging",
            "hard to change gear",
            "jerks when changing gear",
            "delayed shift",
        ],
        TopicId::ExhaustSmoke => &[
            "white smoke",
            "black smoke",
            "blue smoke",
            "smoke from",
            "smoking",
            "smoke",
        ],
    }
}

/// First topic, in declaration order, with a keyword contained in `text`.
/// `text` is expected to be lower-cased already.
pub fn match_topic(text: &str) -> Option<TopicId> {
    TopicId::ALL
        .into_iter()
        .find(|topic| keywords(*topic).iter().any(|k| text.contains(k)))
}

/// Advice content for `topic` in `lang`, falling back to English.
/// Returns the content together with the language it was found in.
pub fn content_for(topic: TopicId, lang: Language) -> (&'static AdviceContent, Language) {
    let localized = match lang {
        Language::English => None,
        Language::Pidgin => pidgin::content(topic),
        Language::Igbo | Language::Yoruba | Language::Hausa => local::content(lang, topic),
    };
    match localized {
        Some(content) => (content, lang),
        None => (english::content(topic), Language::English),
    }
}

/// Render the advice for `topic` as one composite message.
pub fn build_advice(topic: TopicId, lang: Language) -> RenderedAdvice {
    let (content, language) = content_for(topic, lang);
    RenderedAdvice {
        topic,
        language,
        html: render(content),
    }
}

/// Like [`build_advice`] but keyed by topic identifier; unknown ids yield `None`.
pub fn build_advice_for(topic_id: &str, lang: Language) -> Option<RenderedAdvice> {
    TopicId::from_id(topic_id).map(|topic| build_advice(topic, lang))
}

fn render(content: &AdviceContent) -> String {
    let mut html = format!("<p>{}</p>", content.summary);

    if !content.steps.is_empty() {
        if let Some(intro) = content.steps_intro {
            html.push_str(&format!("<p>{intro}</p>"));
        }
        html.push_str("<ol>");
        for step in content.steps {
            html.push_str(&format!("<li>{step}</li>"));
        }
        html.push_str("</ol>");
    }

    if !content.parts.is_empty() {
        if let Some(intro) = content.parts_intro {
            html.push_str(&format!("<p>{intro}</p>"));
        }
        html.push_str("<ul>");
        for part in content.parts {
            html.push_str(&format!("<li>{part}</li>"));
        }
        html.push_str("</ul>");
    }

    if let Some(caution) = content.caution {
        html.push_str(&format!("<p class=\"caution\">{caution}</p>"));
    }
    if let Some(prompt) = content.buy_prompt {
        html.push_str(&format!("<p>{prompt}</p>"));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_keywords() {
        for topic in TopicId::ALL {
            let kws = keywords(topic);
            assert!(!kws.is_empty(), "{topic:?} has no keywords");
            for k in kws {
                assert_eq!(*k, k.to_lowercase(), "keyword {k:?} must be lower-case");
            }
        }
    }

    #[test]
    fn every_topic_matches_its_own_keywords() {
        for topic in TopicId::ALL {
            for k in keywords(topic) {
                let found = match_topic(k).unwrap();
                // An earlier topic may legitimately claim the phrase; it must not be later.
                let pos = |t: TopicId| TopicId::ALL.iter().position(|x| *x == t).unwrap();
                assert!(pos(found) <= pos(topic), "{k:?} matched later topic {found:?}");
            }
        }
    }

    #[test]
    fn match_topic_finds_substring() {
        assert_eq!(
            match_topic("my car is overheating on the expressway"),
            Some(TopicId::Overheating)
        );
        assert_eq!(
            match_topic("loud squeal when i press the pedal"),
            Some(TopicId::BrakeNoise)
        );
        assert_eq!(match_topic("my car won't start"), Some(TopicId::WontStart));
        assert_eq!(match_topic("blue smoke everywhere"), Some(TopicId::ExhaustSmoke));
    }

    #[test]
    fn match_topic_none_for_unrelated_text() {
        assert_eq!(match_topic("good morning"), None);
        assert_eq!(match_topic(""), None);
    }

    #[test]
    fn first_declared_topic_wins() {
        // "overheat" and "smoke" both present: overheating is declared first.
        assert_eq!(
            match_topic("engine overheat and smoke"),
            Some(TopicId::Overheating)
        );
    }

    #[test]
    fn every_pair_has_non_empty_summary() {
        for topic in TopicId::ALL {
            for lang in Language::ALL {
                let (content, _) = content_for(topic, lang);
                assert!(!content.summary.is_empty(), "{topic:?}/{lang} has no summary");
                let rendered = build_advice(topic, lang);
                assert!(rendered.html.starts_with("<p>"));
            }
        }
    }

    #[test]
    fn missing_translation_equals_english() {
        // Igbo only covers overheating.
        let igbo = build_advice(TopicId::OilLeak, Language::Igbo);
        let english = build_advice(TopicId::OilLeak, Language::English);
        assert_eq!(igbo.language, Language::English);
        assert_eq!(igbo.html, english.html);
    }

    #[test]
    fn translated_topic_uses_language() {
        let advice = build_advice(TopicId::Overheating, Language::Yoruba);
        assert_eq!(advice.language, Language::Yoruba);
        assert_ne!(
            advice.html,
            build_advice(TopicId::Overheating, Language::English).html
        );
    }

    #[test]
    fn steps_are_ordered_and_parts_unordered() {
        let html = build_advice(TopicId::Overheating, Language::English).html;
        let ol = html.find("<ol>").unwrap();
        let ul = html.find("<ul>").unwrap();
        assert!(ol < ul, "steps come before parts");
        assert!(html.contains("<li>Thermostat</li>"));
        assert!(html.contains("<p class=\"caution\">"));
        assert_eq!(html.matches("<ol>").count(), 1);
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn absent_sections_are_omitted() {
        // Hausa "won't start" has parts only: no steps, no caution, no prompt.
        let advice = build_advice(TopicId::WontStart, Language::Hausa);
        assert_eq!(advice.language, Language::Hausa);
        assert!(!advice.html.contains("<ol>"));
        assert!(advice.html.contains("<ul>"));
        assert!(!advice.html.contains("caution"));
        assert!(!advice.html.contains("<p></p>"));
    }

    #[test]
    fn list_without_intro_has_no_intro_paragraph() {
        // Battery drain has steps with an intro but parts without one.
        let html = build_advice(TopicId::BatteryDrain, Language::English).html;
        assert!(html.contains("<p>Try this:</p><ol>"));
        assert!(html.contains("</ol><ul>"));
    }

    #[test]
    fn build_by_id() {
        let advice = build_advice_for("brakeNoise", Language::Pidgin).unwrap();
        assert_eq!(advice.topic, TopicId::BrakeNoise);
        assert_eq!(advice.language, Language::Pidgin);
        assert!(build_advice_for("flatTyre", Language::English).is_none());
    }
}
