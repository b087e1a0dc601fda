use sl_protocol::MessageKey;

pub fn template(key: MessageKey) -> Option<&'static str> {
    let text = match key {
        MessageKey::SelectLanguageFirst => "Abeg choose language first make I fit help you.",
        MessageKey::LanguageSelected => "You don choose {language}.",
        MessageKey::WelcomeMessage => {
            "Welcome to Spareline! I fit help you find motor parts, filter by price, \
             category or location, and give you small advice for motor wahala. \
             Type <strong>help</strong> make you see wetin I fit do."
        }
        MessageKey::NavigateHome => "I dey carry you go home page.",
        MessageKey::NavigateSearch => "I dey open the page wey you go take find parts.",
        MessageKey::NavigateSignIn => "I dey carry you go sign in.",
        MessageKey::NavigateSignUp => "Make we open account for you. Sign-up page dey come.",
        MessageKey::NavigateDashboard => "I dey open your dashboard.",
        MessageKey::SignInRequired => {
            "You go first sign in before you fit see your dashboard. Talk <strong>sign in</strong>."
        }
        MessageKey::Searching => "I dey find \"{query}\"...",
        MessageKey::SearchPrompt => {
            "Which part you dey find? Like this: <em>find brake pads</em>."
        }
        MessageKey::CategoryFilter => "See parts for <strong>{category}</strong>.",
        MessageKey::PriceFilter => "I dey show price from {min} reach {max}.",
        MessageKey::LocationFilter => "See sellers wey dey <strong>{location}</strong>.",
        MessageKey::VerifiedFilter => "Na only verified sellers I dey show now.",
        MessageKey::SortPriceLow => "Cheap ones dey first now.",
        MessageKey::SortPriceHigh => "Costly ones dey first now.",
        MessageKey::SortNewest => "New listings dey first now.",
        MessageKey::SortOldest => "Old listings dey first now.",
        MessageKey::FiltersCleared => "I don clear all the filters.",
        MessageKey::HelpOverview => {
            "<p>See wetin I fit do:</p><ul>\
             <li>Find parts: <em>find alternator</em></li>\
             <li>Filter by category: <em>brake parts</em></li>\
             <li>Filter by price: <em>under 20000</em></li>\
             <li>Filter by location: <em>sellers in Ikeja</em></li>\
             <li>Verified sellers: <em>verified sellers only</em></li>\
             <li>Arrange am: <em>cheapest</em>, <em>most expensive</em>, <em>newest</em></li>\
             <li>Motor wahala advice: <em>my car dey overheat</em></li>\
             </ul>"
        }
        MessageKey::About => {
            "Spareline dey connect buyers with correct motor parts sellers for Naija."
        }
        MessageKey::CategoryList => "<p>See the categories wey we get:</p>{categories}",
        MessageKey::HowToBuy => {
            "<p>How to buy:</p><ol>\
             <li>Find the part wey you need.</li>\
             <li>Compare price and where seller dey.</li>\
             <li>Call or message the seller.</li>\
             <li>Check the part well before you pay.</li>\
             </ol>"
        }
        MessageKey::HowToSell => {
            "<p>How to sell:</p><ol>\
             <li>Sign up or sign in.</li>\
             <li>Open your dashboard.</li>\
             <li>Add the product with picture, price and category.</li>\
             <li>Verify your account make buyers trust you.</li>\
             </ol>"
        }
        MessageKey::Fallback => {
            "Sorry, I no understand. Type <strong>help</strong> make you see wetin I fit do."
        }
        MessageKey::AnyPrice => "Any",
    };
    Some(text)
}
