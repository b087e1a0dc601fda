//! E2E tests for the language gate, localized replies and dialogue state.

mod helpers;

use serde_json::json;

use helpers::{TestHarness, mock_session};
use sl_chatbox::advice::build_advice;
use sl_chatbox::i18n::{self, Params};
use sl_chatbox::{ResolveContext, Utterance, resolve};
use sl_protocol::{Language, MessageKey, PageId, TopicId};

/// Every message before a language is chosen gets the English gate reply.
#[tokio::test]
async fn e2e_gate_then_conversation() {
    let mut h = TestHarness::with_sample_data();
    let gate = i18n::english::template(MessageKey::SelectLanguageFirst);

    assert_eq!(h.say("find brake pads").await, gate);
    assert_eq!(h.say("go home").await, gate);
    assert!(h.host.results().is_empty());
    assert_eq!(h.host.current_page(), PageId::Home);

    let welcome = h.session.select_language("english");
    assert_eq!(welcome.len(), 2);

    let reply = h.say("help").await;
    assert_eq!(reply, i18n::english::template(MessageKey::HelpOverview));
}

/// Re-selecting the same language produces one welcome pair in total.
#[tokio::test]
async fn e2e_double_selection_welcomes_once() {
    let mut h = TestHarness::with_sample_data();
    h.session.select_language("igbo");
    h.session.select_language("igbo");

    let expected = vec![
        i18n::translate(
            MessageKey::LanguageSelected,
            Language::Igbo,
            &Params::new().text("language", "Igbo"),
        ),
        i18n::translate(MessageKey::WelcomeMessage, Language::Igbo, &Params::new()),
    ];
    assert_eq!(h.bot_lines(), expected);

    // Conversation continues in Igbo.
    let reply = h.say("go home").await;
    assert_eq!(
        reply,
        i18n::translate(MessageKey::NavigateHome, Language::Igbo, &Params::new())
    );
}

/// An unknown code leaves the session gated and shows nothing.
#[tokio::test]
async fn e2e_unknown_language_code() {
    let (host, mut session) = mock_session();
    assert!(session.select_language("french").is_empty());
    assert!(host.messages().is_empty());

    let reply = session.handle_user_input("help").await;
    assert_eq!(reply, i18n::english::template(MessageKey::SelectLanguageFirst));
}

/// Short codes select the same language as the full code.
#[tokio::test]
async fn e2e_short_language_code() {
    let (_host, mut session) = mock_session();
    session.select_language("YO");
    assert_eq!(session.language(), Some(Language::Yoruba));
}

/// Switching language mid-conversation welcomes again in the new language.
#[tokio::test]
async fn e2e_language_switch() {
    let mut h = TestHarness::speaking("english");
    h.session.select_language("yoruba");

    let lines = h.bot_lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[3],
        i18n::translate(MessageKey::WelcomeMessage, Language::Yoruba, &Params::new())
    );
}

/// Localized advice is used where it exists.
#[tokio::test]
async fn e2e_pidgin_advice() {
    let mut h = TestHarness::speaking("pidgin");
    let reply = h.say("my car dey overheat").await;

    assert_eq!(reply, build_advice(TopicId::Overheating, Language::Pidgin).html);
    assert_ne!(reply, build_advice(TopicId::Overheating, Language::English).html);
    assert!(reply.starts_with("<p>"));
    assert!(reply.contains("<ol>"));
}

/// Topics without a translation fall back to English advice.
#[tokio::test]
async fn e2e_advice_falls_back_to_english() {
    let mut h = TestHarness::speaking("yoruba");
    let reply = h.say("my battery keeps dying").await;
    assert_eq!(reply, build_advice(TopicId::BatteryDrain, Language::English).html);
}

/// The dashboard is only reachable with a session.
#[tokio::test]
async fn e2e_dashboard_gate() {
    let mut h = TestHarness::speaking("english");

    let reply = h.say("show my dashboard").await;
    assert_eq!(reply, i18n::english::template(MessageKey::SignInRequired));
    assert_eq!(h.host.current_page(), PageId::Home);

    h.host.set_authenticated(true);
    let reply = h.say("show my dashboard").await;
    assert_eq!(reply, i18n::english::template(MessageKey::NavigateDashboard));
    assert_eq!(h.host.current_page(), PageId::Dashboard);
}

/// Navigation through sign-up and sign-in pages.
#[tokio::test]
async fn e2e_navigation_sequence() {
    let (host, mut session) = mock_session();
    session.select_language("english");

    session.handle_user_input("I want to create an account").await;
    session.handle_user_input("please log in").await;
    session.handle_user_input("take me home").await;

    assert_eq!(host.navigations(), vec![PageId::SignUp, PageId::SignIn, PageId::Home]);
}

/// Reset returns to the language gate and a new welcome is sent on reselection.
#[tokio::test]
async fn e2e_reset_conversation() {
    let mut h = TestHarness::speaking("hausa");
    h.session.reset();

    let reply = h.say("help").await;
    assert_eq!(reply, i18n::english::template(MessageKey::SelectLanguageFirst));

    assert_eq!(h.session.select_language("hausa").len(), 2);
}

/// Resolved intents serialize with a `kind` tag.
#[test]
fn e2e_intent_wire_shape() {
    let ctx = ResolveContext::default();

    let intent = resolve(&Utterance::new("anything under 5000"), &ctx);
    assert_eq!(
        serde_json::to_value(&intent).unwrap(),
        json!({"kind": "filter_price", "range": {"max": 5000.0}})
    );

    let intent = resolve(&Utterance::new("open my dashboard"), &ctx);
    assert_eq!(
        serde_json::to_value(&intent).unwrap(),
        json!({"kind": "sign_in_required"})
    );
}
