//! English advice. Every topic has an entry; other languages fall back here.

use sl_protocol::TopicId;

use super::AdviceContent;

pub fn content(topic: TopicId) -> &'static AdviceContent {
    match topic {
        TopicId::Overheating => &OVERHEATING,
        TopicId::BrakeNoise => &BRAKE_NOISE,
        TopicId::WontStart => &WONT_START,
        TopicId::BatteryDrain => &BATTERY_DRAIN,
        TopicId::RoughIdle => &ROUGH_IDLE,
        TopicId::SteeringVibration => &STEERING_VIBRATION,
        TopicId::AcNotCooling => &AC_NOT_COOLING,
        TopicId::OilLeak => &OIL_LEAK,
        TopicId::TransmissionSlipping => &TRANSMISSION_SLIPPING,
        TopicId::ExhaustSmoke => &EXHAUST_SMOKE,
    }
}

static OVERHEATING: AdviceContent = AdviceContent {
    summary: "An overheating engine usually means the cooling system is low on coolant, \
              blocked, or a part like the thermostat or fan has failed.",
    steps_intro: Some("Do this first:"),
    steps: &[
        "Pull over safely and switch off the engine.",
        "Wait at least 30 minutes before opening the radiator cap.",
        "Check the coolant level and top up with coolant or clean water.",
        "Look for leaks under the car and around the hoses.",
        "Start the engine and confirm the radiator fan comes on.",
    ],
    parts_intro: Some("Parts that commonly cause it:"),
    parts: &[
        "Thermostat",
        "Radiator or radiator cap",
        "Water pump",
        "Radiator fan or fan relay",
        "Coolant hoses",
    ],
    caution: Some("Never open a hot radiator cap. Pressurised coolant can cause serious burns."),
    buy_prompt: Some("Type <em>find thermostat</em> or <em>find water pump</em> to see sellers."),
};

static BRAKE_NOISE: AdviceContent = AdviceContent {
    summary: "Squealing or grinding when you stop usually means worn pads or damaged discs.",
    steps_intro: Some("Check these:"),
    steps: &[
        "Look through the wheel at the pad thickness. Under 3mm needs replacing.",
        "Check the discs for deep grooves or a raised lip at the edge.",
        "Listen for whether the noise comes from the front or the rear.",
        "Have the brake fluid level checked.",
    ],
    parts_intro: Some("You may need:"),
    parts: &["Brake pads", "Brake discs (rotors)", "Brake fluid", "Caliper slide pins"],
    caution: Some("Grinding metal on metal means the pads are gone. Do not keep driving on them."),
    buy_prompt: Some("Type <em>find brake pads</em> to compare prices."),
};

static WONT_START: AdviceContent = AdviceContent {
    summary: "A car that won't start is most often a battery, starter or fuel supply problem.",
    steps_intro: Some("Narrow it down:"),
    steps: &[
        "Turn the key. If the dashboard lights are dim or dead, suspect the battery.",
        "A single click with bright lights points to the starter motor or its relay.",
        "If the engine cranks but does not fire, check for fuel and spark.",
        "Check the battery terminals for corrosion and tighten them.",
    ],
    parts_intro: Some("Common replacements:"),
    parts: &["Battery", "Starter motor", "Fuel pump", "Spark plugs", "Ignition switch"],
    caution: None,
    buy_prompt: Some("Type <em>find starter motor</em> to see what's available."),
};

static BATTERY_DRAIN: AdviceContent = AdviceContent {
    summary: "A battery that keeps going flat is either old, not being charged, or being \
              drained by something left on.",
    steps_intro: Some("Try this:"),
    steps: &[
        "Make sure no interior light, boot light or accessory stays on.",
        "With the engine running, battery voltage should read 13.8 to 14.5 volts.",
        "Below that, the alternator or its belt is likely faulty.",
        "Batteries older than three years often fail to hold charge.",
    ],
    parts_intro: None,
    parts: &["Battery", "Alternator", "Drive belt"],
    caution: None,
    buy_prompt: Some("Type <em>find alternator</em> to see sellers."),
};

static ROUGH_IDLE: AdviceContent = AdviceContent {
    summary: "Shaking at idle or misfiring usually comes from ignition, air or fuel delivery faults.",
    steps_intro: Some("Check in this order:"),
    steps: &[
        "Inspect the spark plugs for wear or oil fouling.",
        "Check the ignition coils and plug leads.",
        "Listen for a hissing vacuum leak around the intake.",
        "Clean the throttle body and idle air valve.",
        "Replace a clogged air filter.",
    ],
    parts_intro: Some("Parts to consider:"),
    parts: &["Spark plugs", "Ignition coil", "Air filter", "Fuel filter", "Engine mounts"],
    caution: Some("A flashing check-engine light during a misfire can damage the catalytic converter."),
    buy_prompt: Some("Type <em>find spark plugs</em> to see offers."),
};

static STEERING_VIBRATION: AdviceContent = AdviceContent {
    summary: "A shaking steering wheel is usually wheel balance, a bent rim, or worn \
              steering and suspension joints.",
    steps_intro: None,
    steps: &[
        "Have the wheels balanced and the alignment checked.",
        "Inspect the tyres for bulges or uneven wear.",
        "Check tie-rod ends and ball joints for play.",
    ],
    parts_intro: Some("Possible parts:"),
    parts: &["Tie-rod ends", "Ball joints", "Wheel bearings", "Tyres"],
    caution: Some("A tyre bulge can burst at speed. Replace it before long trips."),
    buy_prompt: None,
};

static AC_NOT_COOLING: AdviceContent = AdviceContent {
    summary: "Warm air from the AC usually means low refrigerant, a failed compressor clutch \
              or a blocked condenser.",
    steps_intro: Some("Check these:"),
    steps: &[
        "With AC on, confirm the compressor clutch engages.",
        "Clean leaves and dirt off the condenser in front of the radiator.",
        "Have the refrigerant pressure checked for leaks.",
        "Replace a dirty cabin filter.",
    ],
    parts_intro: None,
    parts: &["AC compressor", "Condenser", "Cabin filter", "Refrigerant gas"],
    caution: None,
    buy_prompt: Some("Type <em>find ac compressor</em> to see sellers."),
};

static OIL_LEAK: AdviceContent = AdviceContent {
    summary: "Oil spots under the car usually come from a worn gasket, seal or a loose drain plug.",
    steps_intro: Some("Find the source:"),
    steps: &[
        "Check the oil level with the dipstick and top up if low.",
        "Look at the drain plug and oil filter for wetness.",
        "Check around the valve cover and sump for fresh oil.",
    ],
    parts_intro: Some("Parts that commonly leak:"),
    parts: &["Valve cover gasket", "Sump gasket", "Oil filter", "Crankshaft seal"],
    caution: Some("Do not drive with the oil warning light on. It can destroy the engine."),
    buy_prompt: Some("Type <em>find gasket</em> to compare prices."),
};

static TRANSMISSION_SLIPPING: AdviceContent = AdviceContent {
    summary: "Gears slipping or engaging late point to low fluid, a worn clutch, or \
              internal gearbox wear.",
    steps_intro: Some("Check these:"),
    steps: &[
        "Check the transmission fluid level and colour. Dark or burnt fluid needs changing.",
        "On manual cars, a high clutch bite point means the clutch is wearing out.",
        "Note whether slipping happens cold, hot, or in one gear only.",
    ],
    parts_intro: Some("You may need:"),
    parts: &["Transmission fluid", "Clutch kit", "Gearbox mount"],
    caution: None,
    buy_prompt: Some("Type <em>find clutch kit</em> to see sellers."),
};

static EXHAUST_SMOKE: AdviceContent = AdviceContent {
    summary: "Smoke colour tells you the cause: white is coolant, blue is oil, black is too much fuel.",
    steps_intro: Some("What to check:"),
    steps: &[
        "White smoke with falling coolant level can mean a head gasket failure.",
        "Blue smoke means oil is burning. Check the oil level often.",
        "Black smoke: check the air filter and injectors.",
    ],
    parts_intro: None,
    parts: &["Head gasket", "Air filter", "Fuel injectors", "Valve stem seals"],
    caution: Some("Thick white smoke with overheating needs a mechanic before you drive further."),
    buy_prompt: None,
};
