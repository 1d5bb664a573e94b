//! The single hand boundary. Nothing past here returns an error; a hand
//! that can't be converted is logged and skipped.
use tracing::{instrument, warn};

use crate::assemble::assemble;
use crate::core::ConversionError;
use crate::hand::{Hand, HandUnit};
use crate::pokerstars::{ConverterConfig, PokerStarsHand};

/// The PokerStars text of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertedHand {
    pub round_id: String,
    pub text: String,
    /// The pot split is a guess, a human should look at it.
    pub needs_review: bool,
}

/// Convert one hand, reporting why it couldn't be converted.
pub fn try_convert_hand(
    unit: &HandUnit,
    config: &ConverterConfig,
) -> Result<ConvertedHand, ConversionError> {
    let hand = Hand::from_unit(unit)?;
    let assembled = assemble(&hand);
    Ok(ConvertedHand {
        round_id: hand.round_id.clone(),
        text: PokerStarsHand::new(&assembled, config).to_string(),
        needs_review: assembled.needs_review(),
    })
}

/// Convert one hand. Failures are logged and come back as `None`.
#[instrument(level = "debug", skip(unit, config), fields(round_id = %unit.round_id))]
pub fn convert_hand(unit: &HandUnit, config: &ConverterConfig) -> Option<ConvertedHand> {
    match try_convert_hand(unit, config) {
        Ok(converted) => {
            if converted.needs_review {
                warn!("Converted hand needs review");
            }
            Some(converted)
        }
        Err(error) => {
            warn!(%error, "Skipping hand");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::RawPlayer;

    /// Two players, 1,000 antes, small blind raises to 5,000 and the big
    /// blind folds.
    fn heads_up_raise_fold() -> HandUnit {
        let start =
            "* 시작 : [StageNo:27891125] [Credit:100,000원] [SB:1,000원] [BB:1,000원] [MBI:200,000원] [CBIR:100]";
        HandUnit {
            round_id: "27891125-3".to_string(),
            timestamp: "2025-02-08 오후 11:04:31".to_string(),
            game_type: "홀덤".to_string(),
            winner: "raiser".to_string(),
            winning_amount: "4,000".to_string(),
            players: vec![
                RawPlayer {
                    nickname: "folder".to_string(),
                    action_log: [
                        start,
                        "* NICKNAME:[folder]",
                        "* 앤티: -1,000원(99,000원)",
                        "* 베팅: [블라인드:BIG] [금액:1,000원] [Creadit:98,000원]",
                        "* 홀 카드딜: ♣2(1) ♥7(2) [7 탑]",
                        "* 베팅: 다이 [0](98,000원) - 베팅순서: [0][1] [3085ms]",
                        "* 종료: WinMoney[0원] Credit[98,000원]",
                        "* 결과: 패배 [족보:7 탑] [카드:♣2 ♥7] - 기권",
                    ]
                    .join("\n"),
                    net: "-2,000".to_string(),
                    final_stack: "98,000".to_string(),
                },
                RawPlayer {
                    nickname: "raiser".to_string(),
                    action_log: [
                        start,
                        "* NICKNAME:[raiser]",
                        "* 앤티: -1,000원(99,000원)",
                        "* 베팅: [블라인드:SMALL] [금액:1,000원] [Creadit:98,000원]",
                        "* 홀 카드딜: ♠A(1) ◆10(2) [A 탑]",
                        "* 베팅: [레이즈] (4,000원) Credit(94,000원) - 베팅순서: [0][0] [812ms]",
                        "* 반환: 4,000원",
                        "* 종료: WinMoney[4,000원] Credit[102,000원]",
                        "* 결과: 승리 [족보:A 탑] [카드:♠A ◆10] - 기권",
                    ]
                    .join("\n"),
                    net: "2,000".to_string(),
                    final_stack: "102,000".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_heads_up_raise_fold() {
        let converted = convert_hand(&heads_up_raise_fold(), &ConverterConfig::default()).unwrap();
        assert_eq!(converted.round_id, "27891125-3");
        assert!(!converted.needs_review);
        let expected = "\
PokerStars Hand #278911253: Hold'em No Limit (1000/1000) - 2025/02/08 23:04:31 KST
Table 'Table 1' 9-max Seat #1 is the button
Seat 1: raiser (100000 in chips)
Seat 2: folder (100000 in chips)
raiser: posts the ante 1000
folder: posts the ante 1000
raiser: posts small blind 1000
folder: posts big blind 1000
*** HOLE CARDS ***
raiser: raises 4000 to 5000
folder: folds
Uncalled bet (4000) returned to raiser
raiser collected 4000 from pot
*** SUMMARY ***
Total pot 4000 | Rake 0
Seat 1: raiser showed [As Td] and won (4000)
Seat 2: folder mucked [2c 7h]
";
        assert_eq!(converted.text, expected);
    }

    #[test_log::test]
    fn test_unconvertible_hand_is_skipped() {
        let unit = HandUnit {
            round_id: "0".to_string(),
            ..Default::default()
        };
        assert_eq!(convert_hand(&unit, &ConverterConfig::default()), None);
        assert_eq!(
            try_convert_hand(&unit, &ConverterConfig::default()),
            Err(ConversionError::NoPlayers {
                round_id: "0".to_string()
            })
        );
    }
}
