//! The normalized, read-only model of one hand.
mod player;
mod unit;

pub use player::PlayerRecord;
pub use unit::{HandUnit, RawPlayer};

use tracing::debug;

use crate::core::{parse_or_zero, Card, Chips, ConversionError};
use crate::parse::BlindKind;

/// One hand, built once from a [`HandUnit`] and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    pub round_id: String,
    pub timestamp: String,
    pub game_type: String,
    pub winner: String,
    pub winning_amount: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub players: Vec<PlayerRecord>,
}

impl Hand {
    /// Parse every player's log and check that the hand is usable.
    ///
    /// Blind sizes come from the first player with a start entry and every
    /// other start entry must agree with them.
    pub fn from_unit(unit: &HandUnit) -> Result<Self, ConversionError> {
        if unit.players.is_empty() {
            return Err(ConversionError::NoPlayers {
                round_id: unit.round_id.clone(),
            });
        }

        let players: Vec<PlayerRecord> = unit.players.iter().map(PlayerRecord::from_raw).collect();

        let (small_blind, big_blind) = players
            .iter()
            .find_map(|p| p.start())
            .map(|s| (s.small_blind, s.big_blind))
            .ok_or_else(|| ConversionError::MissingStartOfHand {
                round_id: unit.round_id.clone(),
            })?;

        for player in &players {
            if let Some(start) = player.start() {
                if (start.small_blind, start.big_blind) != (small_blind, big_blind) {
                    return Err(ConversionError::InconsistentBlinds {
                        round_id: unit.round_id.clone(),
                        nickname: player.nickname.clone(),
                        small_blind: start.small_blind,
                        big_blind: start.big_blind,
                        expected_small: small_blind,
                        expected_big: big_blind,
                    });
                }
            }
        }

        let winning_amount = parse_or_zero(&unit.winning_amount);
        players
            .iter()
            .map(PlayerRecord::chip_volume)
            .try_fold(winning_amount.abs(), |total, volume| {
                total.checked_add(volume?)
            })
            .ok_or_else(|| ConversionError::ChipOverflow {
                round_id: unit.round_id.clone(),
            })?;

        debug!(
            round_id = %unit.round_id,
            players = players.len(),
            small_blind,
            big_blind,
            "Built hand"
        );

        Ok(Self {
            round_id: unit.round_id.clone(),
            timestamp: unit.timestamp.clone(),
            game_type: unit.game_type.clone(),
            winner: unit.winner.clone(),
            winning_amount,
            small_blind,
            big_blind,
            players,
        })
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn is_heads_up(&self) -> bool {
        self.players.len() == 2
    }

    pub fn player(&self, nickname: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.nickname == nickname)
    }

    /// The player who posted the given blind.
    pub fn blind_poster(&self, kind: BlindKind) -> Option<&PlayerRecord> {
        self.players
            .iter()
            .find(|p| p.blind().is_some_and(|b| b.kind == kind))
    }

    /// The board, one card group per street, from whichever player saw the
    /// most of it.
    pub fn community_cards(&self) -> Vec<Vec<Card>> {
        self.players
            .iter()
            .filter_map(|p| p.community_cards())
            .max_by_key(|c| c.streets.iter().filter(|s| !s.is_empty()).count())
            .map(|c| {
                let mut streets = c.streets.clone();
                while streets.last().is_some_and(Vec::is_empty) {
                    streets.pop();
                }
                streets
            })
            .unwrap_or_default()
    }

    pub fn total_starting_stacks(&self) -> Chips {
        self.players.iter().map(PlayerRecord::starting_stack).sum()
    }

    pub fn total_final_stacks(&self) -> Chips {
        self.players.iter().map(PlayerRecord::final_stack).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(nickname: &str, log: &str) -> RawPlayer {
        RawPlayer {
            nickname: nickname.to_string(),
            action_log: log.to_string(),
            net: String::new(),
            final_stack: String::new(),
        }
    }

    fn start(sb: &str, bb: &str) -> String {
        format!("* 시작 : [StageNo:1] [Credit:10,000원] [SB:{sb}원] [BB:{bb}원] [MBI:0원] [CBIR:100]")
    }

    fn unit(players: Vec<RawPlayer>) -> HandUnit {
        HandUnit {
            round_id: "123-4".to_string(),
            timestamp: "2025-02-08 오후 11:04:31".to_string(),
            winning_amount: "1,500".to_string(),
            players,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_players() {
        assert_eq!(
            Hand::from_unit(&unit(vec![])),
            Err(ConversionError::NoPlayers {
                round_id: "123-4".to_string()
            })
        );
    }

    #[test]
    fn test_missing_start() {
        let result = Hand::from_unit(&unit(vec![raw("a", "* NICKNAME:[a]")]));
        assert!(matches!(
            result,
            Err(ConversionError::MissingStartOfHand { .. })
        ));
    }

    #[test]
    fn test_inconsistent_blinds() {
        let result = Hand::from_unit(&unit(vec![
            raw("a", &start("500", "1,000")),
            raw("b", &start("1,000", "2,000")),
        ]));
        assert_eq!(
            result,
            Err(ConversionError::InconsistentBlinds {
                round_id: "123-4".to_string(),
                nickname: "b".to_string(),
                small_blind: 1_000,
                big_blind: 2_000,
                expected_small: 500,
                expected_big: 1_000,
            })
        );
    }

    #[test]
    fn test_chip_overflow() {
        let shove = "* 베팅: [올인] (999,999,999,999,999원) Credit(0원) - 베팅순서: [0][0]";
        let mut log = vec![start("500", "1,000")];
        log.extend(std::iter::repeat(shove.to_string()).take(5_000));
        let log = log.join("\n");
        let result = Hand::from_unit(&unit(vec![raw("a", &log), raw("b", &log)]));
        assert_eq!(
            result,
            Err(ConversionError::ChipOverflow {
                round_id: "123-4".to_string()
            })
        );
    }

    #[test]
    fn test_blinds_from_first_start() {
        let hand = Hand::from_unit(&unit(vec![
            raw("a", "* NICKNAME:[a]"),
            raw("b", &start("500", "1,000")),
        ]))
        .unwrap();
        assert_eq!(hand.small_blind, 500);
        assert_eq!(hand.big_blind, 1_000);
        assert_eq!(hand.winning_amount, 1_500);
        assert!(hand.is_heads_up());
        assert_eq!(hand.total_starting_stacks(), 10_000);
        assert!(hand.player("b").is_some());
        assert!(hand.player("c").is_none());
    }

    #[test]
    fn test_longest_board_wins() {
        let hand = Hand::from_unit(&unit(vec![
            raw(
                "a",
                &format!("{}\n* 커뮤니티 카드 딜: H(♠A♠K) C (♥6◆3♥4)", start("1", "2")),
            ),
            raw(
                "b",
                &format!(
                    "{}\n* 커뮤니티 카드 딜: H(♣2♣3) C (♥6◆3♥4) (◆9) ()",
                    start("1", "2")
                ),
            ),
        ]))
        .unwrap();
        let board = hand.community_cards();
        assert_eq!(board.len(), 2);
        assert_eq!(board[1][0].to_string(), "9d");
    }
}
