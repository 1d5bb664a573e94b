/// One player's entry in a raw hand unit, as lifted out of the source
/// document by the extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct RawPlayer {
    pub nickname: String,
    /// The multi-line action log, unparsed.
    pub action_log: String,
    /// Declared net result such as `-30,000`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub net: String,
    /// Declared stack after the hand such as `141,263`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub final_stack: String,
}

/// One complete hand record before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct HandUnit {
    /// Round id such as `27891125-1`.
    pub round_id: String,
    /// Local time such as `2025-02-08 오후 11:04:31`.
    pub timestamp: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub game_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub winner: String,
    /// Comma grouped amount the winner took.
    #[cfg_attr(feature = "serde", serde(default))]
    pub winning_amount: String,
    pub players: Vec<RawPlayer>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{
            "round_id": "1-2",
            "timestamp": "2025-02-08 오후 11:04:31",
            "players": [{"nickname": "a", "action_log": "* NICKNAME:[a]"}]
        }"#;
        let unit: HandUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.round_id, "1-2");
        assert_eq!(unit.winning_amount, "");
        assert_eq!(unit.players.len(), 1);
        assert_eq!(unit.players[0].final_stack, "");
    }
}
