use sl_protocol::MessageKey;

pub fn template(key: MessageKey) -> Option<&'static str> {
    match key {
        MessageKey::LanguageSelected => Some("A ti yan èdè: {language}."),
        MessageKey::WelcomeMessage => Some(
            "Ẹ kú àbọ̀ sí Spareline! Mo lè ràn yín lọ́wọ́ láti wá àwọn ẹ̀yà ọkọ̀, \
             ṣe àlẹ̀mọ́ nípa iye owó, ẹ̀ka tàbí ibi, kí n sì fún yín ní ìmọ̀ràn lórí ìṣòro ọkọ̀. \
             Tẹ <strong>help</strong> láti rí ohun tí mo lè ṣe.",
        ),
        MessageKey::NavigateHome => Some("Mò ń mú yín lọ sí ojú-ìwé àkọ́kọ́."),
        MessageKey::Searching => Some("Mò ń wá \"{query}\"..."),
        MessageKey::FiltersCleared => Some("A ti pa gbogbo àlẹ̀mọ́ rẹ́."),
        MessageKey::Fallback => Some(
            "Má bínú, kò yé mi. Tẹ <strong>help</strong> láti rí ohun tí mo lè ṣe.",
        ),
        MessageKey::AnyPrice => Some("Èyíkéyìí"),
        _ => None,
    }
}
