use sl_protocol::MessageKey;

pub fn template(key: MessageKey) -> Option<&'static str> {
    match key {
        MessageKey::LanguageSelected => Some("An zaɓi harshe: {language}."),
        MessageKey::WelcomeMessage => Some(
            "Barka da zuwa Spareline! Zan iya taimaka maka ka nemo kayan mota, \
             ka tace ta farashi, rukuni ko wuri, kuma in ba ka shawara kan matsalolin mota. \
             Rubuta <strong>help</strong> don ganin abin da zan iya yi.",
        ),
        MessageKey::NavigateHome => Some("Ina kai ka shafin farko."),
        MessageKey::Searching => Some("Ina neman \"{query}\"..."),
        MessageKey::FiltersCleared => Some("An share duk matatun."),
        MessageKey::Fallback => Some(
            "Yi haƙuri, ban gane ba. Rubuta <strong>help</strong> don ganin abin da zan iya yi.",
        ),
        MessageKey::AnyPrice => Some("Kowane"),
        _ => None,
    }
}
