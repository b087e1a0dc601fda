use serde::{Deserialize, Serialize};

/// Mechanical problem the assistant has canned advice for.
///
/// Declaration order is the match order used by the topic scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopicId {
    Overheating,
    BrakeNoise,
    WontStart,
    BatteryDrain,
    RoughIdle,
    SteeringVibration,
    AcNotCooling,
    OilLeak,
    TransmissionSlipping,
    ExhaustSmoke,
}

impl TopicId {
    pub const ALL: [TopicId; 10] = [
        TopicId::Overheating,
        TopicId::BrakeNoise,
        TopicId::WontStart,
        TopicId::BatteryDrain,
        TopicId::RoughIdle,
        TopicId::SteeringVibration,
        TopicId::AcNotCooling,
        TopicId::OilLeak,
        TopicId::TransmissionSlipping,
        TopicId::ExhaustSmoke,
    ];

    /// Stable identifier, same as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            TopicId::Overheating => "overheating",
            TopicId::BrakeNoise => "brakeNoise",
            TopicId::WontStart => "wontStart",
            TopicId::BatteryDrain => "batteryDrain",
            TopicId::RoughIdle => "roughIdle",
            TopicId::SteeringVibration => "steeringVibration",
            TopicId::AcNotCooling => "acNotCooling",
            TopicId::OilLeak => "oilLeak",
            TopicId::TransmissionSlipping => "transmissionSlipping",
            TopicId::ExhaustSmoke => "exhaustSmoke",
        }
    }

    /// Look a topic up by its identifier.
    pub fn from_id(id: &str) -> Option<TopicId> {
        TopicId::ALL.into_iter().find(|t| t.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_ids_serialize_camel_case() {
        let json = serde_json::to_string(&TopicId::BrakeNoise).unwrap();
        assert_eq!(json, r#""brakeNoise""#);
    }

    #[test]
    fn as_str_matches_serialized_form() {
        for topic in TopicId::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.as_str()));
            assert_eq!(TopicId::from_id(topic.as_str()), Some(topic));
        }
        assert_eq!(TopicId::from_id("flatTyre"), None);
    }
}
