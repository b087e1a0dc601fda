//! Dialogue controller: language gate, intent dispatch and reply rendering.
//!
//! A session starts out awaiting a language. Until one is chosen every
//! message gets the English "select a language first" reply and is not
//! resolved. Once a language is set, each message is resolved to one intent,
//! rendered in that language, and the matching host binding is invoked.

use std::sync::Arc;

use sl_protocol::{CatalogQuery, Category, Intent, Language, MessageKey, PageId, Sender, SortKey};

use crate::advice;
use crate::config::ChatConfig;
use crate::currency::format_naira;
use crate::host::HostBindings;
use crate::i18n::{self, Params};
use crate::rules::{self, ResolveContext, Utterance};

/// Per-session conversation memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogueState {
    pub selected_language: Option<Language>,
    pub has_welcomed: bool,
}

impl DialogueState {
    /// Whether the session is past the language gate.
    pub fn is_conversing(&self) -> bool {
        self.selected_language.is_some()
    }
}

/// One chat conversation bound to a host.
pub struct ChatSession {
    host: Arc<dyn HostBindings>,
    config: ChatConfig,
    state: DialogueState,
    filters: CatalogQuery,
}

impl ChatSession {
    pub fn new(host: Arc<dyn HostBindings>, config: ChatConfig) -> Self {
        Self {
            host,
            config,
            state: DialogueState::default(),
            filters: CatalogQuery::default(),
        }
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// Filters accumulated by this conversation so far.
    pub fn filters(&self) -> &CatalogQuery {
        &self.filters
    }

    pub fn language(&self) -> Option<Language> {
        self.state.selected_language
    }

    /// Back to awaiting a language, un-welcomed, with no filters.
    pub fn reset(&mut self) {
        self.state = DialogueState::default();
        self.filters = CatalogQuery::default();
        tracing::info!("chat session reset");
    }

    /// Choose the conversation language.
    ///
    /// Returns the rendered replies (`languageSelected` then `welcomeMessage`),
    /// or nothing when the code is unknown or the language is already active.
    pub fn select_language(&mut self, code: &str) -> Vec<String> {
        let lang = match code.parse::<Language>() {
            Ok(lang) => lang,
            Err(e) => {
                tracing::warn!(error = %e, "rejected language selection");
                return Vec::new();
            }
        };

        if self.state.has_welcomed && self.state.selected_language == Some(lang) {
            tracing::debug!(language = lang.code(), "language already selected");
            return Vec::new();
        }

        self.state.selected_language = Some(lang);
        tracing::info!(language = lang.code(), "language selected");

        let replies = vec![
            i18n::translate(
                MessageKey::LanguageSelected,
                lang,
                &Params::new().text("language", lang.label()),
            ),
            i18n::translate(MessageKey::WelcomeMessage, lang, &Params::new()),
        ];
        for reply in &replies {
            self.host.display_message(reply, Sender::Bot);
        }
        self.state.has_welcomed = true;
        replies
    }

    /// Handle one user message and return the bot reply.
    pub async fn handle_user_input(&mut self, text: &str) -> String {
        self.host.display_message(text, Sender::User);

        let delay = self.config.response_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let reply = match self.state.selected_language {
            None => i18n::translate(MessageKey::SelectLanguageFirst, Language::FALLBACK, &Params::new()),
            Some(lang) => {
                let ctx = ResolveContext {
                    authenticated: self.host.is_user_authenticated(),
                };
                let intent = rules::resolve(&Utterance::new(text), &ctx);
                let reply = render(&intent, lang);
                self.perform(&intent).await;
                reply
            }
        };

        self.host.display_message(&reply, Sender::Bot);
        reply
    }

    /// Apply the intent to the filter state and invoke its host binding.
    async fn perform(&mut self, intent: &Intent) {
        match intent {
            Intent::Navigate { page } => self.host.navigate(*page),
            Intent::Search { query } => {
                self.filters.query = Some(query.clone());
                self.run_search().await;
            }
            Intent::FilterCategory { category } => {
                self.filters.category = Some(*category);
                self.run_search().await;
            }
            Intent::FilterPrice { range } => {
                self.filters.min_price = range.min;
                self.filters.max_price = range.max;
                self.run_search().await;
            }
            Intent::FilterLocation { location } => {
                self.filters.location = Some(location.clone());
                self.run_search().await;
            }
            Intent::FilterVerified => {
                self.filters.verified_only = true;
                self.run_search().await;
            }
            Intent::Sort { key } => {
                self.filters.sort = *key;
                self.run_search().await;
            }
            Intent::ClearFilters => {
                self.filters = CatalogQuery::default();
                self.host.clear_filters().await;
            }
            Intent::SignInRequired
            | Intent::SearchPrompt
            | Intent::MechanicalAdvice { .. }
            | Intent::HelpOverview
            | Intent::About
            | Intent::ListCategories
            | Intent::HowToBuy
            | Intent::HowToSell
            | Intent::Fallback => {}
        }
    }

    async fn run_search(&self) {
        match self.host.search_catalog(&self.filters).await {
            Ok(products) => tracing::debug!(results = products.len(), "catalog search finished"),
            Err(e) => tracing::warn!(error = %e, "catalog search failed"),
        }
    }
}

/// Render the reply for an intent in `lang`.
fn render(intent: &Intent, lang: Language) -> String {
    let plain = |key| i18n::translate(key, lang, &Params::new());
    match intent {
        Intent::Navigate { page } => plain(match page {
            PageId::Home => MessageKey::NavigateHome,
            PageId::Search => MessageKey::NavigateSearch,
            PageId::SignIn => MessageKey::NavigateSignIn,
            PageId::SignUp => MessageKey::NavigateSignUp,
            PageId::Dashboard => MessageKey::NavigateDashboard,
        }),
        Intent::SignInRequired => plain(MessageKey::SignInRequired),
        Intent::Search { query } => i18n::translate(
            MessageKey::Searching,
            lang,
            &Params::new().text("query", query),
        ),
        Intent::SearchPrompt => plain(MessageKey::SearchPrompt),
        Intent::FilterCategory { category } => i18n::translate(
            MessageKey::CategoryFilter,
            lang,
            &Params::new().text("category", category.display_name()),
        ),
        Intent::FilterPrice { range } => {
            let bound = |amount: Option<f64>| match amount {
                Some(amount) => format_naira(amount),
                None => i18n::template(MessageKey::AnyPrice, lang).to_string(),
            };
            i18n::translate(
                MessageKey::PriceFilter,
                lang,
                &Params::new()
                    .text("min", bound(range.min))
                    .text("max", bound(range.max)),
            )
        }
        Intent::FilterLocation { location } => i18n::translate(
            MessageKey::LocationFilter,
            lang,
            &Params::new().text("location", location),
        ),
        Intent::FilterVerified => plain(MessageKey::VerifiedFilter),
        Intent::Sort { key } => plain(match key {
            SortKey::PriceLow => MessageKey::SortPriceLow,
            SortKey::PriceHigh => MessageKey::SortPriceHigh,
            SortKey::Newest => MessageKey::SortNewest,
            SortKey::Oldest => MessageKey::SortOldest,
        }),
        Intent::ClearFilters => plain(MessageKey::FiltersCleared),
        Intent::MechanicalAdvice { topic } => advice::build_advice(*topic, lang).html,
        Intent::HelpOverview => plain(MessageKey::HelpOverview),
        Intent::About => plain(MessageKey::About),
        Intent::ListCategories => i18n::translate(
            MessageKey::CategoryList,
            lang,
            &Params::new().markup("categories", category_list()),
        ),
        Intent::HowToBuy => plain(MessageKey::HowToBuy),
        Intent::HowToSell => plain(MessageKey::HowToSell),
        Intent::Fallback => plain(MessageKey::Fallback),
    }
}

fn category_list() -> String {
    let items: String = Category::ALL
        .iter()
        .map(|c| format!("<li>{}</li>", i18n::escape_html(c.display_name())))
        .collect();
    format!("<ul>{items}</ul>")
}
