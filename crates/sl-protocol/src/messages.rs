use serde::{Deserialize, Serialize};

/// Identifier of a localized bot message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    SelectLanguageFirst,
    LanguageSelected,
    WelcomeMessage,
    NavigateHome,
    NavigateSearch,
    NavigateSignIn,
    NavigateSignUp,
    NavigateDashboard,
    SignInRequired,
    Searching,
    SearchPrompt,
    CategoryFilter,
    PriceFilter,
    LocationFilter,
    VerifiedFilter,
    SortPriceLow,
    SortPriceHigh,
    SortNewest,
    SortOldest,
    FiltersCleared,
    HelpOverview,
    About,
    CategoryList,
    HowToBuy,
    HowToSell,
    Fallback,
    /// Label for an open price bound ("Any").
    AnyPrice,
}

impl MessageKey {
    pub const ALL: [MessageKey; 27] = [
        MessageKey::SelectLanguageFirst,
        MessageKey::LanguageSelected,
        MessageKey::WelcomeMessage,
        MessageKey::NavigateHome,
        MessageKey::NavigateSearch,
        MessageKey::NavigateSignIn,
        MessageKey::NavigateSignUp,
        MessageKey::NavigateDashboard,
        MessageKey::SignInRequired,
        MessageKey::Searching,
        MessageKey::SearchPrompt,
        MessageKey::CategoryFilter,
        MessageKey::PriceFilter,
        MessageKey::LocationFilter,
        MessageKey::VerifiedFilter,
        MessageKey::SortPriceLow,
        MessageKey::SortPriceHigh,
        MessageKey::SortNewest,
        MessageKey::SortOldest,
        MessageKey::FiltersCleared,
        MessageKey::HelpOverview,
        MessageKey::About,
        MessageKey::CategoryList,
        MessageKey::HowToBuy,
        MessageKey::HowToSell,
        MessageKey::Fallback,
        MessageKey::AnyPrice,
    ];
}

/// Who a transcript line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_key_uses_camel_case_ids() {
        let json = serde_json::to_string(&MessageKey::SelectLanguageFirst).unwrap();
        assert_eq!(json, r#""selectLanguageFirst""#);
        let key: MessageKey = serde_json::from_str(r#""welcomeMessage""#).unwrap();
        assert_eq!(key, MessageKey::WelcomeMessage);
    }

    #[test]
    fn all_keys_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for key in MessageKey::ALL {
            assert!(seen.insert(key), "{key:?} listed twice");
        }
    }
}
