//! English templates. Total over `MessageKey`: every other language falls back here.

use sl_protocol::MessageKey;

pub fn template(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SelectLanguageFirst => {
            "Please choose a language above so I can help you."
        }
        MessageKey::LanguageSelected => "Language set to {language}.",
        MessageKey::WelcomeMessage => {
            "Welcome to Spareline! I can help you find auto parts, filter by price, \
             category or location, and give quick advice on common car problems. \
             Type <strong>help</strong> to see what I can do."
        }
        MessageKey::NavigateHome => "Taking you to the home page.",
        MessageKey::NavigateSearch => "Opening the parts search page.",
        MessageKey::NavigateSignIn => "Taking you to sign in.",
        MessageKey::NavigateSignUp => "Let's create your account. Opening the sign-up page.",
        MessageKey::NavigateDashboard => "Opening your dashboard.",
        MessageKey::SignInRequired => {
            "You need to sign in to view your dashboard. Say <strong>sign in</strong> to continue."
        }
        MessageKey::Searching => "Searching for \"{query}\"...",
        MessageKey::SearchPrompt => {
            "What part are you looking for? For example: <em>find brake pads</em>."
        }
        MessageKey::CategoryFilter => "Showing parts in <strong>{category}</strong>.",
        MessageKey::PriceFilter => "Filtering prices from {min} to {max}.",
        MessageKey::LocationFilter => "Showing sellers in <strong>{location}</strong>.",
        MessageKey::VerifiedFilter => "Showing listings from verified sellers only.",
        MessageKey::SortPriceLow => "Sorted by price, lowest first.",
        MessageKey::SortPriceHigh => "Sorted by price, highest first.",
        MessageKey::SortNewest => "Showing the newest listings first.",
        MessageKey::SortOldest => "Showing the oldest listings first.",
        MessageKey::FiltersCleared => "All filters cleared.",
        MessageKey::HelpOverview => {
            "<p>Here is what I can do:</p><ul>\
             <li>Find parts: <em>find alternator</em></li>\
             <li>Filter by category: <em>brake parts</em></li>\
             <li>Filter by price: <em>under 20000</em>, <em>between 5000 and 15000</em></li>\
             <li>Filter by location: <em>sellers in Ikeja</em></li>\
             <li>Verified sellers: <em>verified sellers only</em></li>\
             <li>Sort: <em>cheapest</em>, <em>most expensive</em>, <em>newest</em></li>\
             <li>Car trouble advice: <em>my car is overheating</em></li>\
             </ul>"
        }
        MessageKey::About => {
            "Spareline connects buyers with trusted auto parts sellers across Nigeria. \
             Browse listings, compare prices and contact sellers directly."
        }
        MessageKey::CategoryList => "<p>We have these categories:</p>{categories}",
        MessageKey::HowToBuy => {
            "<p>To buy a part:</p><ol>\
             <li>Search for the part you need.</li>\
             <li>Compare prices and seller locations.</li>\
             <li>Call or message the seller from the listing.</li>\
             <li>Inspect the part before you pay.</li>\
             </ol>"
        }
        MessageKey::HowToSell => {
            "<p>To sell a part:</p><ol>\
             <li>Sign up or sign in.</li>\
             <li>Open your dashboard.</li>\
             <li>Add the product with a photo, price and category.</li>\
             <li>Verify your account so buyers trust your listings.</li>\
             </ol>"
        }
        MessageKey::Fallback => {
            "Sorry, I didn't understand that. Type <strong>help</strong> to see what I can do."
        }
        MessageKey::AnyPrice => "Any",
    }
}
