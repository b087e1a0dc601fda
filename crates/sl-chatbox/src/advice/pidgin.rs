use sl_protocol::TopicId;

use super::AdviceContent;

pub fn content(topic: TopicId) -> Option<&'static AdviceContent> {
    match topic {
        TopicId::Overheating => Some(&OVERHEATING),
        TopicId::BrakeNoise => Some(&BRAKE_NOISE),
        TopicId::WontStart => Some(&WONT_START),
        TopicId::BatteryDrain => Some(&BATTERY_DRAIN),
        TopicId::OilLeak => Some(&OIL_LEAK),
        _ => None,
    }
}

static OVERHEATING: AdviceContent = AdviceContent {
    summary: "If engine dey overheat, e fit be say water no reach for radiator, \
              or thermostat or fan don spoil.",
    steps_intro: Some("Do this one first:"),
    steps: &[
        "Park for safe place and off the engine.",
        "Wait like 30 minutes before you open radiator cap.",
        "Check coolant level and add coolant or clean water.",
        "Look under the motor if water dey leak.",
        "Start the engine make sure say radiator fan dey work.",
    ],
    parts_intro: Some("Parts wey fit cause am:"),
    parts: &["Thermostat", "Radiator or radiator cap", "Water pump", "Radiator fan"],
    caution: Some("No open radiator cap when engine still hot o. Hot water fit burn you well well."),
    buy_prompt: Some("Type <em>find thermostat</em> make you see sellers."),
};

static BRAKE_NOISE: AdviceContent = AdviceContent {
    summary: "If brake dey shout or grind when you stop, na say pad don finish or disc don spoil.",
    steps_intro: Some("Check these ones:"),
    steps: &[
        "Look the brake pad. If e thin pass 3mm, change am.",
        "Check the disc if e get deep line.",
        "Check brake fluid level.",
    ],
    parts_intro: Some("You fit need:"),
    parts: &["Brake pads", "Brake discs", "Brake fluid"],
    caution: Some("If na iron dey grind iron, no drive am again until you fix am."),
    buy_prompt: Some("Type <em>find brake pads</em> make you compare price."),
};

static WONT_START: AdviceContent = AdviceContent {
    summary: "If motor no gree start, na mostly battery, starter or fuel wahala.",
    steps_intro: Some("Check am like this:"),
    steps: &[
        "If dashboard light no bright, na battery.",
        "If e just click once, check starter.",
        "If engine dey crank but no catch, check fuel and plug.",
    ],
    parts_intro: None,
    parts: &["Battery", "Starter", "Fuel pump", "Spark plugs"],
    caution: None,
    buy_prompt: Some("Type <em>find starter motor</em> make you see wetin dey."),
};

static BATTERY_DRAIN: AdviceContent = AdviceContent {
    summary: "If battery dey always go down, e fit don old, or alternator no dey charge am.",
    steps_intro: None,
    steps: &[
        "Make sure say no light dey on when you park.",
        "When engine dey run, battery suppose read 13.8 reach 14.5 volts.",
        "If e low pass that one, check alternator and belt.",
    ],
    parts_intro: None,
    parts: &["Battery", "Alternator", "Belt"],
    caution: None,
    buy_prompt: Some("Type <em>find alternator</em> make you see sellers."),
};

static OIL_LEAK: AdviceContent = AdviceContent {
    summary: "Oil wey dey drop for ground na from gasket, seal or drain plug wey no tight.",
    steps_intro: Some("Find where e dey come from:"),
    steps: &[
        "Check oil with dipstick and add if e low.",
        "Check drain plug and oil filter.",
        "Look around valve cover and sump.",
    ],
    parts_intro: None,
    parts: &["Valve cover gasket", "Sump gasket", "Oil filter"],
    caution: Some("No drive when oil light dey show. E fit kill engine."),
    buy_prompt: None,
};
