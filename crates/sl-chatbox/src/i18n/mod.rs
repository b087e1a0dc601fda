//! Localized reply templates with `{token}` placeholders.
//!
//! English is total over [`MessageKey`]; the other languages are partial and
//! fall back to English key by key.

pub mod english;
mod hausa;
mod igbo;
mod pidgin;
mod yoruba;

use std::sync::LazyLock;

use regex::{Captures, Regex};
use sl_protocol::{Language, MessageKey};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Template for `key` in `lang` only, without falling back.
pub fn lookup(key: MessageKey, lang: Language) -> Option<&'static str> {
    match lang {
        Language::English => Some(english::template(key)),
        Language::Pidgin => pidgin::template(key),
        Language::Igbo => igbo::template(key),
        Language::Yoruba => yoruba::template(key),
        Language::Hausa => hausa::template(key),
    }
}

/// Template for `key` in `lang`, or the English template when `lang` lacks it.
pub fn template(key: MessageKey, lang: Language) -> &'static str {
    lookup(key, lang).unwrap_or_else(|| english::template(key))
}

/// Resolve and interpolate a template.
pub fn translate(key: MessageKey, lang: Language, params: &Params) -> String {
    interpolate(template(key, lang), params)
}

/// Replace every `{token}` with its value; tokens without a value become empty.
pub fn interpolate(template: &str, params: &Params) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            params.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Placeholder values for a template.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain-text value. It is HTML-escaped, since it may come from user input.
    pub fn text(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.values.push((name, escape_html(value.as_ref())));
        self
    }

    /// Add a value that is already markup built by the assistant itself.
    pub fn markup(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Escape the characters that matter inside HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_covers_every_key() {
        for key in MessageKey::ALL {
            assert!(
                !english::template(key).is_empty(),
                "english template for {key:?} is empty"
            );
        }
    }

    #[test]
    fn every_language_resolves_every_key() {
        for lang in Language::ALL {
            for key in MessageKey::ALL {
                let text = translate(key, lang, &Params::new());
                assert!(!text.is_empty(), "{lang}/{key:?} rendered empty");
            }
        }
    }

    #[test]
    fn missing_key_falls_back_to_english() {
        assert!(lookup(MessageKey::HowToSell, Language::Igbo).is_none());
        assert_eq!(
            template(MessageKey::HowToSell, Language::Igbo),
            english::template(MessageKey::HowToSell)
        );
    }

    #[test]
    fn present_key_uses_language() {
        assert_eq!(
            template(MessageKey::AnyPrice, Language::Hausa),
            "Kowane"
        );
        assert_ne!(
            template(MessageKey::Fallback, Language::Pidgin),
            english::template(MessageKey::Fallback)
        );
    }

    #[test]
    fn partial_languages_never_define_empty_templates() {
        for lang in Language::ALL {
            for key in MessageKey::ALL {
                if let Some(text) = lookup(key, lang) {
                    assert!(!text.trim().is_empty(), "{lang}/{key:?} is blank");
                }
            }
        }
    }

    #[test]
    fn interpolates_named_tokens() {
        let params = Params::new().text("language", "Igbo");
        assert_eq!(
            translate(MessageKey::LanguageSelected, Language::English, &params),
            "Language set to Igbo."
        );
    }

    #[test]
    fn unresolved_tokens_become_empty() {
        assert_eq!(
            interpolate("from {min} to {max}", &Params::new().text("min", "₦5")),
            "from ₦5 to "
        );
        assert_eq!(interpolate("{nothing}", &Params::new()), "");
    }

    #[test]
    fn text_params_are_escaped() {
        let params = Params::new().text("query", "<script>alert('x')</script>");
        let out = interpolate("q={query}", &params);
        assert_eq!(out, "q=&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
    }

    #[test]
    fn markup_params_are_kept() {
        let params = Params::new().markup("categories", "<ul><li>A</li></ul>");
        assert_eq!(interpolate("{categories}", &params), "<ul><li>A</li></ul>");
    }

    #[test]
    fn later_param_wins() {
        let params = Params::new().text("x", "first").text("x", "second");
        assert_eq!(params.get("x"), Some("second"));
    }
}
