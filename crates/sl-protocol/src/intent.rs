use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PriceRange, SortKey};
use crate::topic::TopicId;

/// Pages the assistant can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    Search,
    SignIn,
    SignUp,
    Dashboard,
}

impl PageId {
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Search => "search",
            PageId::SignIn => "signin",
            PageId::SignUp => "signup",
            PageId::Dashboard => "dashboard",
        }
    }
}

/// Structured meaning of one user message. Exactly one is produced per message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    Navigate { page: PageId },
    /// Dashboard was asked for without a signed-in session.
    SignInRequired,
    Search { query: String },
    /// Search keyword present but nothing to search for.
    SearchPrompt,
    FilterCategory { category: Category },
    FilterPrice { range: PriceRange },
    FilterLocation { location: String },
    FilterVerified,
    Sort { key: SortKey },
    ClearFilters,
    MechanicalAdvice { topic: TopicId },
    HelpOverview,
    About,
    ListCategories,
    HowToBuy,
    HowToSell,
    Fallback,
}

impl Intent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Navigate { .. } => "navigate",
            Intent::SignInRequired => "sign_in_required",
            Intent::Search { .. } => "search",
            Intent::SearchPrompt => "search_prompt",
            Intent::FilterCategory { .. } => "filter_category",
            Intent::FilterPrice { .. } => "filter_price",
            Intent::FilterLocation { .. } => "filter_location",
            Intent::FilterVerified => "filter_verified",
            Intent::Sort { .. } => "sort",
            Intent::ClearFilters => "clear_filters",
            Intent::MechanicalAdvice { .. } => "mechanical_advice",
            Intent::HelpOverview => "help_overview",
            Intent::About => "about",
            Intent::ListCategories => "list_categories",
            Intent::HowToBuy => "how_to_buy",
            Intent::HowToSell => "how_to_sell",
            Intent::Fallback => "fallback",
        }
    }
}
