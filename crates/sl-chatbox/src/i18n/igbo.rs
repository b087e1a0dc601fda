use sl_protocol::MessageKey;

pub fn template(key: MessageKey) -> Option<&'static str> {
    match key {
        MessageKey::LanguageSelected => Some("Asụsụ ahọpụtara: {language}."),
        MessageKey::WelcomeMessage => Some(
            "Nnọọ na Spareline! Enwere m ike inyere gị aka ịchọta akụrụngwa ụgbọala, \
             hazie site na ọnụahịa, ụdị ma ọ bụ ebe, ma nye gị ndụmọdụ maka nsogbu ụgbọala. \
             Dee <strong>help</strong> ka ịhụ ihe m nwere ike ime.",
        ),
        MessageKey::NavigateHome => Some("Ana m eduga gị n'ibe mbụ."),
        MessageKey::SignInRequired => Some("Ị ga-ebu ụzọ banye tupu ịhụ dashboard gị."),
        MessageKey::Searching => Some("Ana m achọ \"{query}\"..."),
        MessageKey::FiltersCleared => Some("Ewepụla nzacha niile."),
        MessageKey::Fallback => Some(
            "Ndo, aghọtaghị m nke ahụ. Dee <strong>help</strong> ka ịhụ ihe m nwere ike ime.",
        ),
        MessageKey::AnyPrice => Some("Ọ bụla"),
        _ => None,
    }
}
