//! Cross-player reconstruction of one hand.
//!
//! No single player's log has the whole story. Seating, acting order, bet
//! sizes, pots and the showdown are all derived here as pure functions over
//! the hand's immutable player records.
mod betting;
mod pots;
mod seating;
mod showdown;

pub use betting::{replay_street, ReplayAction, ReplayLine, StreetReplay};
pub use pots::{settle, Collection, PotKind, PotSummary};
pub use seating::{dealer_index, preflop_order, street_order};
pub use showdown::{summarize, SeatOutcome, SeatSummary};

use tracing::{debug, instrument};

use crate::core::{Card, Chips};
use crate::hand::{Hand, PlayerRecord};
use crate::parse::{BlindKind, Street};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForcedKind {
    Ante,
    SmallBlind,
    BigBlind,
    /// Posted like a big blind.
    EntryFee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedPost<'a> {
    pub player: &'a str,
    pub kind: ForcedKind,
    pub amount: Chips,
}

/// A hand in replay order, ready to be written out.
#[derive(Debug, Clone)]
pub struct AssembledHand<'a> {
    pub hand: &'a Hand,
    /// Seating order. Seat numbers are positions in this list plus one.
    pub seats: Vec<&'a PlayerRecord>,
    /// 1-indexed.
    pub button_seat: usize,
    pub forced: Vec<ForcedPost<'a>>,
    /// Flop, turn and river card groups that were dealt.
    pub board: Vec<Vec<Card>>,
    /// Preflop first, then one entry per dealt board street.
    pub streets: Vec<StreetReplay<'a>>,
    pub pots: PotSummary<'a>,
    pub summary: Vec<SeatSummary<'a>>,
}

impl AssembledHand<'_> {
    pub fn needs_review(&self) -> bool {
        self.pots.needs_review
    }

    pub fn seat_of(&self, nickname: &str) -> Option<usize> {
        self.seats
            .iter()
            .position(|p| p.nickname == nickname)
            .map(|idx| idx + 1)
    }

    pub fn button(&self) -> Option<&str> {
        self.seats
            .get(self.button_seat.wrapping_sub(1))
            .map(|p| p.nickname.as_str())
    }
}

fn forced_posts<'a>(seats: &[&'a PlayerRecord]) -> Vec<ForcedPost<'a>> {
    let antes = seats
        .iter()
        .copied()
        .filter(|p| p.ante() > 0)
        .map(|p| ForcedPost {
            player: p.nickname.as_str(),
            kind: ForcedKind::Ante,
            amount: p.ante(),
        });
    let blinds = [
        (BlindKind::Small, ForcedKind::SmallBlind),
        (BlindKind::Big, ForcedKind::BigBlind),
    ]
    .into_iter()
    .flat_map(move |(blind, kind)| {
        seats.iter().copied().filter_map(move |p| {
            p.blind().filter(|b| b.kind == blind).map(|b| ForcedPost {
                player: p.nickname.as_str(),
                kind,
                amount: b.amount,
            })
        })
    });
    let fees = seats.iter().copied().filter_map(|p| {
        p.entry_fee().map(|f| ForcedPost {
            player: p.nickname.as_str(),
            kind: ForcedKind::EntryFee,
            amount: f.amount,
        })
    });
    antes.chain(blinds).chain(fees).collect()
}

/// Rebuild the hand in PokerStars order.
#[instrument(level = "trace", skip(hand), fields(round_id = %hand.round_id))]
pub fn assemble(hand: &Hand) -> AssembledHand<'_> {
    let seats = preflop_order(hand);
    let button_seat = dealer_index(&seats) + 1;

    let mut board = hand.community_cards();
    board.truncate(3);

    let mut streets = vec![replay_street(Street::Preflop, &seats, hand.big_blind)];
    for street in [Street::Flop, Street::Turn, Street::River] {
        if board.len() < street.index() {
            break;
        }
        let order = street_order(&seats, street);
        streets.push(replay_street(street, &order, hand.big_blind));
    }

    let pots = settle(hand, &seats);
    let summary = summarize(&seats, &pots);
    let forced = forced_posts(&seats);

    debug!(
        seats = seats.len(),
        button_seat,
        streets = streets.len(),
        rake = pots.rake,
        "Assembled hand"
    );

    AssembledHand {
        hand,
        seats,
        button_seat,
        forced,
        board,
        streets,
        pots,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{HandUnit, RawPlayer};

    fn unit() -> HandUnit {
        let start =
            "* 시작 : [StageNo:1] [Credit:100,000원] [SB:1,000원] [BB:1,000원] [MBI:0원] [CBIR:100]";
        HandUnit {
            round_id: "77-1".to_string(),
            timestamp: "2025-02-08 오후 11:04:31".to_string(),
            winner: "alice".to_string(),
            winning_amount: "5,000".to_string(),
            players: vec![
                RawPlayer {
                    nickname: "bob".to_string(),
                    action_log: [
                        start,
                        "* 앤티: -1,000원(99,000원)",
                        "* 베팅: [블라인드:BIG] [금액:1,000원] [Creadit:98,000원]",
                        "* 베팅: 다이 [0](98,000원) - 베팅순서: [0][1] [500ms]",
                        "* 종료: WinMoney[0원] Credit[98,000원]",
                    ]
                    .join("\n"),
                    net: "-2,000".to_string(),
                    final_stack: "98,000".to_string(),
                },
                RawPlayer {
                    nickname: "alice".to_string(),
                    action_log: [
                        start,
                        "* 앤티: -1,000원(99,000원)",
                        "* 베팅: [블라인드:SMALL] [금액:1,000원] [Creadit:98,000원]",
                        "* 베팅: [레이즈] (4,000원) Credit(94,000원) - 베팅순서: [0][0] [800ms]",
                        "* 반환: 4,000원",
                        "* 종료: WinMoney[5,000원] Credit[102,000원]",
                        "* 결과: 승리 [족보:A 탑] [카드:♠A ♠K] - 기권",
                    ]
                    .join("\n"),
                    net: "2,000".to_string(),
                    final_stack: "102,000".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_heads_up_preflop_fold() {
        let hand = Hand::from_unit(&unit()).unwrap();
        let assembled = assemble(&hand);

        assert_eq!(assembled.seat_of("alice"), Some(1));
        assert_eq!(assembled.seat_of("bob"), Some(2));
        assert_eq!(assembled.button(), Some("alice"));
        assert!(assembled.board.is_empty());
        assert_eq!(assembled.streets.len(), 1);

        let forced: Vec<(&str, ForcedKind, Chips)> = assembled
            .forced
            .iter()
            .map(|f| (f.player, f.kind, f.amount))
            .collect();
        assert_eq!(
            forced,
            vec![
                ("alice", ForcedKind::Ante, 1_000),
                ("bob", ForcedKind::Ante, 1_000),
                ("alice", ForcedKind::SmallBlind, 1_000),
                ("bob", ForcedKind::BigBlind, 1_000),
            ]
        );

        let preflop = &assembled.streets[0].lines;
        assert_eq!(preflop.len(), 3);
        assert_eq!(preflop[1].action, ReplayAction::Folds);
        assert_eq!(
            preflop[2],
            ReplayLine {
                player: "alice",
                action: ReplayAction::UncalledBetReturned { amount: 4_000 }
            }
        );

        assert_eq!(assembled.pots.rake, 0);
        assert_eq!(assembled.pots.total_pot(), 5_000);
        assert!(!assembled.needs_review());
        assert_eq!(
            assembled.summary[0].outcome,
            SeatOutcome::ShowedAndWon { amount: 5_000 }
        );
        assert_eq!(assembled.summary[1].outcome, SeatOutcome::Mucked);
    }

    #[test]
    fn test_rake_identity() {
        let hand = Hand::from_unit(&unit()).unwrap();
        let assembled = assemble(&hand);
        assert_eq!(
            hand.total_starting_stacks() - hand.total_final_stacks(),
            assembled.pots.rake
        );
        let distributed: Chips = assembled.pots.collections.iter().map(|c| c.amount).sum();
        assert_eq!(assembled.pots.total_pot(), distributed + assembled.pots.rake);
    }
}
