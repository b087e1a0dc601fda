//! Intent resolver over ordered keyword rules.
//!
//! Rules are evaluated top to bottom and the first one that produces an
//! intent wins. Keyword rules match when any phrase is a substring of the
//! lower-cased message. Broad rules sit below narrow ones, so reordering
//! `RULES` changes behaviour for existing phrasing.

use sl_protocol::{Intent, PageId, SortKey};

use crate::advice;
use crate::extract;

/// A user message in the two forms the rules need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    raw: String,
    normalized: String,
}

impl Utterance {
    pub fn new(text: &str) -> Self {
        let raw = text.trim().to_string();
        let normalized = raw.to_lowercase();
        Self { raw, normalized }
    }

    /// Trimmed text with original casing.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lower-cased text.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Facts about the host the rules may branch on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveContext {
    /// Whether a user session exists.
    pub authenticated: bool,
}

/// One entry of the rule table.
pub struct Rule {
    pub name: &'static str,
    matcher: fn(&Utterance, &ResolveContext) -> Option<Intent>,
}

impl Rule {
    pub fn apply(&self, utterance: &Utterance, ctx: &ResolveContext) -> Option<Intent> {
        (self.matcher)(utterance, ctx)
    }
}

/// The rule table, in priority order.
pub static RULES: &[Rule] = &[
    Rule { name: "navigate_home", matcher: navigate_home },
    Rule { name: "navigate_search", matcher: navigate_search },
    Rule { name: "navigate_signin", matcher: navigate_signin },
    Rule { name: "navigate_signup", matcher: navigate_signup },
    Rule { name: "navigate_dashboard", matcher: navigate_dashboard },
    Rule { name: "search", matcher: search },
    Rule { name: "filter_category", matcher: filter_category },
    Rule { name: "filter_price", matcher: filter_price },
    Rule { name: "filter_location", matcher: filter_location },
    Rule { name: "filter_verified", matcher: filter_verified },
    Rule { name: "sort_price_low", matcher: sort_price_low },
    Rule { name: "sort_price_high", matcher: sort_price_high },
    Rule { name: "sort_newest", matcher: sort_newest },
    Rule { name: "clear_filters", matcher: clear_filters },
    Rule { name: "mechanical_advice", matcher: mechanical_advice },
    Rule { name: "help", matcher: help },
    Rule { name: "about", matcher: about },
    Rule { name: "list_categories", matcher: list_categories },
    Rule { name: "how_to_buy", matcher: how_to_buy },
    Rule { name: "how_to_sell", matcher: how_to_sell },
];

/// Resolve a message to exactly one intent. Never fails: no match is `Fallback`.
pub fn resolve(utterance: &Utterance, ctx: &ResolveContext) -> Intent {
    match first_match(utterance, ctx) {
        Some((rule, intent)) => {
            tracing::debug!(rule, intent = intent.name(), "intent matched");
            intent
        }
        None => {
            tracing::debug!("no rule matched, falling back");
            Intent::Fallback
        }
    }
}

/// Name of the winning rule and its intent, if any rule matched.
pub fn first_match(utterance: &Utterance, ctx: &ResolveContext) -> Option<(&'static str, Intent)> {
    RULES
        .iter()
        .find_map(|rule| rule.apply(utterance, ctx).map(|intent| (rule.name, intent)))
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

// ── Navigation ──────────────────────────────────────────────────

fn navigate_home(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["go home", "go to home", "home page", "homepage", "main page", "take me home"],
    )
    .then_some(Intent::Navigate { page: PageId::Home })
}

fn navigate_search(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &[
            "go to search",
            "search page",
            "open search",
            "browse",
            "all products",
            "products page",
            "parts page",
        ],
    )
    .then_some(Intent::Navigate { page: PageId::Search })
}

fn navigate_signin(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(u.normalized(), &["sign in", "signin", "log in", "login"])
        .then_some(Intent::Navigate { page: PageId::SignIn })
}

fn navigate_signup(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["sign up", "signup", "register", "create account", "create an account", "open account"],
    )
    .then_some(Intent::Navigate { page: PageId::SignUp })
}

fn navigate_dashboard(u: &Utterance, ctx: &ResolveContext) -> Option<Intent> {
    if !matches_any(
        u.normalized(),
        &["dashboard", "my profile", "my account", "my listings", "my products", "my ads"],
    ) {
        return None;
    }
    if ctx.authenticated {
        Some(Intent::Navigate { page: PageId::Dashboard })
    } else {
        Some(Intent::SignInRequired)
    }
}

// ── Search & filters ────────────────────────────────────────────

const SEARCH_KEYWORDS: &[&str] = &[
    "search for",
    "search ",
    "find ",
    "looking for",
    "i need",
    "i want",
    "show me",
    "do you have",
    "where can i get",
    "where can i buy",
];

fn search(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    let text = u.normalized();
    if !matches_any(text, SEARCH_KEYWORDS) {
        return None;
    }
    match extract::extract_search_query(text) {
        // A bare trigger phrase ("i need") is not something to search for.
        Some(query) if !SEARCH_KEYWORDS.iter().any(|k| k.trim() == query) => {
            Some(Intent::Search { query })
        }
        _ => Some(Intent::SearchPrompt),
    }
}

fn filter_category(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    extract::find_category_in_message(u.normalized())
        .map(|category| Intent::FilterCategory { category })
}

fn filter_price(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    extract::extract_price_range(u.normalized()).map(|range| Intent::FilterPrice { range })
}

fn filter_location(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    extract::extract_location(u.raw()).map(|location| Intent::FilterLocation { location })
}

fn filter_verified(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["verified", "trusted seller", "genuine seller", "legit seller"],
    )
    .then_some(Intent::FilterVerified)
}

fn sort_price_low(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(u.normalized(), &["cheapest", "lowest", "low to high", "cheap"])
        .then_some(Intent::Sort { key: SortKey::PriceLow })
}

fn sort_price_high(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["most expensive", "highest", "high to low", "expensive"],
    )
    .then_some(Intent::Sort { key: SortKey::PriceHigh })
}

fn sort_newest(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(u.normalized(), &["newest", "latest", "recent", "new arrivals"])
        .then_some(Intent::Sort { key: SortKey::Newest })
}

fn clear_filters(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["clear filter", "reset filter", "remove filter", "clear all", "reset", "start over", "show all"],
    )
    .then_some(Intent::ClearFilters)
}

// ── Advice & information ────────────────────────────────────────

fn mechanical_advice(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    advice::match_topic(u.normalized()).map(|topic| Intent::MechanicalAdvice { topic })
}

fn help(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(u.normalized(), &["help", "what can you do", "how does this work", "menu"])
        .then_some(Intent::HelpOverview)
}

fn about(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["about", "who are you", "what is spareline", "what is this"],
    )
    .then_some(Intent::About)
}

fn list_categories(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["categories", "category list", "what do you sell", "types of parts"],
    )
    .then_some(Intent::ListCategories)
}

fn how_to_buy(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &["how to buy", "how do i buy", "how can i buy", "buying process", "purchase"],
    )
    .then_some(Intent::HowToBuy)
}

fn how_to_sell(u: &Utterance, _: &ResolveContext) -> Option<Intent> {
    matches_any(
        u.normalized(),
        &[
            "how to sell",
            "how do i sell",
            "how can i sell",
            "sell my",
            "list my",
            "post an ad",
            "become a seller",
        ],
    )
    .then_some(Intent::HowToSell)
}
