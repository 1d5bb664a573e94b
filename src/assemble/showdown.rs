use crate::core::{Card, Chips};
use crate::hand::PlayerRecord;

use super::PotSummary;

/// How a seat finished, for the summary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatOutcome {
    ShowedAndWon { amount: Chips },
    ShowedAndLost,
    Mucked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSummary<'a> {
    /// 1-indexed.
    pub seat: usize,
    pub player: &'a str,
    pub hole_cards: Option<[Card; 2]>,
    pub outcome: SeatOutcome,
}

/// One summary entry per seat. Winners show, showdown losers show, and
/// everyone else mucks.
pub fn summarize<'a>(seats: &[&'a PlayerRecord], pots: &PotSummary<'_>) -> Vec<SeatSummary<'a>> {
    seats
        .iter()
        .copied()
        .enumerate()
        .map(|(idx, player)| {
            let collected = pots.collected_by(&player.nickname);
            let outcome = if collected > 0 {
                SeatOutcome::ShowedAndWon { amount: collected }
            } else if player.went_to_showdown() {
                SeatOutcome::ShowedAndLost
            } else {
                SeatOutcome::Mucked
            };
            SeatSummary {
                seat: idx + 1,
                player: player.nickname.as_str(),
                hole_cards: player.hole_cards(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{Collection, PotKind};
    use crate::hand::RawPlayer;

    fn record(nickname: &str, log: &str) -> PlayerRecord {
        PlayerRecord::from_raw(&RawPlayer {
            nickname: nickname.to_string(),
            action_log: log.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_outcomes() {
        let winner = record(
            "w",
            "* 홀 카드딜: ♠A(1) ♠K(2) [A 탑]\n* 결과: 승리 [족보:원페어] [카드:♠A ♠K ♥A ◆3 ♣9]",
        );
        let loser = record(
            "l",
            "* 홀 카드딜: ◆10(1) ◆9(2) [T 탑]\n* 결과: 패배 [족보:T 탑] [카드:◆10 ◆9 ♥A ◆3 ♣8]",
        );
        let folder = record(
            "f",
            "* 홀 카드딜: ♣2(1) ♥7(2) [7 탑]\n* 결과: 패배 [족보:7 탑] [카드:♣2 ♥7] - 기권",
        );
        let pots = PotSummary {
            collections: vec![Collection {
                player: "w",
                amount: 900,
                pot: PotKind::Pot,
            }],
            rake: 100,
            main_pot: 900,
            side_pot: 0,
            needs_review: false,
        };
        let summary = summarize(&[&winner, &loser, &folder], &pots);
        assert_eq!(summary[0].seat, 1);
        assert_eq!(summary[0].outcome, SeatOutcome::ShowedAndWon { amount: 900 });
        assert_eq!(summary[1].outcome, SeatOutcome::ShowedAndLost);
        assert_eq!(
            summary[1].hole_cards.map(|c| c.map(|c| c.to_string())),
            Some(["Td".to_string(), "9d".to_string()])
        );
        assert_eq!(summary[2].seat, 3);
        assert_eq!(summary[2].outcome, SeatOutcome::Mucked);
    }

    #[test]
    fn test_unknown_cards_still_muck() {
        let silent = record("s", "");
        let pots = PotSummary {
            collections: vec![],
            rake: 0,
            main_pot: 0,
            side_pot: 0,
            needs_review: false,
        };
        let summary = summarize(&[&silent], &pots);
        assert_eq!(summary[0].hole_cards, None);
        assert_eq!(summary[0].outcome, SeatOutcome::Mucked);
    }
}
