//! Entity extractors: search terms, categories, price bounds, locations.
//!
//! All are pure functions. Except where noted they expect lower-cased,
//! trimmed text.

use std::sync::LazyLock;

use regex::Regex;
use sl_protocol::{Category, PriceRange};

// "show me X", "do you have X", ... The longer verbs come first so "i need" wins over "need".
static RE_VERB_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:where can i get|where can i buy|do you have|show me|find me|search for|looking for|i need|i want|need|want)\s+(.+)",
    )
    .unwrap()
});

static RE_SEARCH_QUERY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"search\s+(.+)").unwrap());

static RE_FIND_QUERY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"find\s+(.+)").unwrap());

// Amounts: digits with optional thousands separators and decimals, optional naira sign.
const AMOUNT: &str = r"₦?\s*(\d[\d,]*(?:\.\d+)?)";

static RE_PRICE_MAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:under|below|less than|maximum|max)\s*{AMOUNT}")).unwrap()
});

static RE_PRICE_MIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:over|above|more than|minimum|min)\s*{AMOUNT}")).unwrap()
});

static RE_PRICE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:between\s+)?{AMOUNT}\s*(?:to|-|and)\s*{AMOUNT}"
    ))
    .unwrap()
});

// Needs original casing: "parts in Ikeja", "sellers near Port Harcourt".
static RE_LOCATION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:in|from|at|near)\s+([A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*)").unwrap()
});

static RE_LOCATION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:location|area)\s*:?\s+(.+)").unwrap());

/// Words that mean the message is a command rather than a thing to search for.
const CONTROL_WORDS: &[&str] = &["filter", "sort", "show", "navigate", "go to"];

/// Synonyms checked after full category names, in order.
const CATEGORY_SYNONYMS: &[(&str, Category)] = &[
    ("engine", Category::EngineParts),
    ("piston", Category::EngineParts),
    ("spark plug", Category::EngineParts),
    ("brake", Category::BrakeSystem),
    ("tire", Category::TiresWheels),
    ("tires", Category::TiresWheels),
    ("tyre", Category::TiresWheels),
    ("wheels", Category::TiresWheels),
    ("suspension", Category::SuspensionSteering),
    ("shock absorber", Category::SuspensionSteering),
    ("headlight", Category::ElectricalLighting),
    ("alternator", Category::ElectricalLighting),
    ("starter", Category::ElectricalLighting),
    ("bumper", Category::BodyParts),
    ("bonnet", Category::BodyParts),
    ("side mirror", Category::BodyParts),
    ("gearbox", Category::Transmission),
    ("clutch", Category::Transmission),
    ("muffler", Category::ExhaustSystem),
    ("silencer", Category::ExhaustSystem),
    ("radiator", Category::CoolingSystem),
    ("water pump", Category::CoolingSystem),
    ("seat cover", Category::InteriorAccessories),
    ("floor mat", Category::InteriorAccessories),
];

/// Known local areas, lower-case, matched as substrings.
const KNOWN_AREAS: &[&str] = &[
    "lagos",
    "ikeja",
    "lekki",
    "surulere",
    "yaba",
    "ajah",
    "ikoyi",
    "victoria island",
    "apapa",
    "festac",
    "ladipo",
    "mushin",
    "oshodi",
    "ikorodu",
    "abuja",
    "ibadan",
    "port harcourt",
    "kano",
    "kaduna",
    "enugu",
    "onitsha",
    "owerri",
    "benin",
    "warri",
];

/// Pull the thing being searched for out of a message.
///
/// Tries the verb patterns, then `search <rest>`, then `find <rest>`. With no
/// pattern hit, a message longer than three characters and free of control
/// words is taken whole as an implicit query.
pub fn extract_search_query(text: &str) -> Option<String> {
    for re in [&*RE_VERB_QUERY, &*RE_SEARCH_QUERY, &*RE_FIND_QUERY] {
        if let Some(caps) = re.captures(text) {
            let query = caps[1].trim();
            if !query.is_empty() {
                return Some(query.to_string());
            }
        }
    }

    if text.chars().count() > 3 && !CONTROL_WORDS.iter().any(|w| text.contains(w)) {
        return Some(text.to_string());
    }
    None
}

/// Find a category by full name first, then by synonym. First match wins.
pub fn find_category_in_message(text: &str) -> Option<Category> {
    let lower = text.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|c| lower.contains(&c.display_name().to_lowercase()))
        .or_else(|| {
            CATEGORY_SYNONYMS
                .iter()
                .find(|(word, _)| lower.contains(word))
                .map(|(_, category)| *category)
        })
}

/// Extract price bounds.
///
/// The upper-bound, lower-bound and range patterns are all evaluated; a range
/// overrides whatever the one-sided patterns found.
pub fn extract_price_range(text: &str) -> Option<PriceRange> {
    let mut range = PriceRange::default();

    if let Some(caps) = RE_PRICE_MAX.captures(text) {
        range.max = parse_amount(&caps[1]);
    }
    if let Some(caps) = RE_PRICE_MIN.captures(text) {
        range.min = parse_amount(&caps[1]);
    }
    if let Some(caps) = RE_PRICE_RANGE.captures(text)
        && let (Some(min), Some(max)) = (parse_amount(&caps[1]), parse_amount(&caps[2]))
    {
        range.min = Some(min);
        range.max = Some(max);
    }

    if range.is_empty() { None } else { Some(range) }
}

/// Extract a location.
///
/// `text` should keep its original casing: the "in/from/at/near Place" pattern
/// only accepts capitalized words. Falls back to the known-area list, matched
/// case-insensitively and returned with its first letter capitalized.
pub fn extract_location(text: &str) -> Option<String> {
    if let Some(caps) = RE_LOCATION_PHRASE.captures(text) {
        return Some(caps[1].trim().to_string());
    }
    if let Some(caps) = RE_LOCATION_FIELD.captures(text) {
        let location = caps[1].trim();
        if !location.is_empty() {
            return Some(location.to_string());
        }
    }

    let lower = text.to_lowercase();
    KNOWN_AREAS
        .iter()
        .find(|area| lower.contains(*area))
        .map(|area| capitalize_first(area))
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
