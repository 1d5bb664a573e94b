use thiserror::Error;

/// Everything that can stop one hand from being converted.
///
/// None of these cross the single-hand boundary; [`crate::convert_hand`]
/// logs them and skips the hand.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ConversionError {
    #[error("Hand {round_id} has no players")]
    NoPlayers { round_id: String },

    #[error("Hand {round_id} has no start entry in any player's log")]
    MissingStartOfHand { round_id: String },

    #[error(
        "Hand {round_id}: {nickname} reports blinds {small_blind}/{big_blind}, expected {expected_small}/{expected_big}"
    )]
    InconsistentBlinds {
        round_id: String,
        nickname: String,
        small_blind: i64,
        big_blind: i64,
        expected_small: i64,
        expected_big: i64,
    },

    #[error("Hand {round_id} has more chips in play than can be counted")]
    ChipOverflow { round_id: String },

    #[error("Invalid card token: {0}")]
    InvalidCard(String),
}
