use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::core::Chips;
use crate::hand::{Hand, PlayerRecord};

/// Which pot a collection came out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotKind {
    /// The only pot.
    Pot,
    Main,
    Side,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<'a> {
    pub player: &'a str,
    pub amount: Chips,
    pub pot: PotKind,
}

/// Pot totals and who collected what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotSummary<'a> {
    /// Side pot collections first, then the main pot.
    pub collections: Vec<Collection<'a>>,
    pub rake: Chips,
    pub main_pot: Chips,
    pub side_pot: Chips,
    /// Set when the winnings can't be split into one main and one side pot.
    pub needs_review: bool,
}

impl PotSummary<'_> {
    pub fn total_pot(&self) -> Chips {
        self.main_pot + self.side_pot + self.rake
    }

    pub fn has_side_pot(&self) -> bool {
        self.collections.iter().any(|c| c.pot == PotKind::Side)
    }

    pub fn collected_by(&self, nickname: &str) -> Chips {
        self.collections
            .iter()
            .filter(|c| c.player == nickname)
            .map(|c| c.amount)
            .sum()
    }
}

/// Work out rake, pots and collections.
///
/// Rake is whatever went missing between the starting and final stacks.
/// With several winners the one whose amount matches the declared winning
/// amount takes the main pot and everyone else a side pot. That split is an
/// approximation; more than two distinct winning amounts flags the hand.
pub fn settle<'a>(hand: &Hand, seats: &[&'a PlayerRecord]) -> PotSummary<'a> {
    let rake = hand.total_starting_stacks() - hand.total_final_stacks();
    if rake < 0 {
        warn!(round_id = %hand.round_id, rake, "Stacks grew over the hand");
    }

    let mut winners: Vec<(&'a str, Chips)> = seats
        .iter()
        .copied()
        .filter(|p| p.is_winner())
        .map(|p| (p.nickname.as_str(), p.winnings()))
        .collect();

    if winners.is_empty() && hand.winning_amount > 0 {
        // No end line made it through; trust the declared winner.
        if let Some(p) = seats.iter().copied().find(|p| p.nickname == hand.winner) {
            debug!(winner = %hand.winner, "Using the declared winner");
            winners.push((p.nickname.as_str(), hand.winning_amount));
        }
    }

    let distinct: BTreeSet<Chips> = winners.iter().map(|(_, amount)| *amount).collect();
    let needs_review = distinct.len() > 2;
    if needs_review {
        warn!(
            round_id = %hand.round_id,
            winners = winners.len(),
            "More than one side pot, pot split is approximate"
        );
    }

    let collections = match winners.as_slice() {
        [] => Vec::new(),
        [(player, amount)] => vec![Collection {
            player: *player,
            amount: *amount,
            pot: PotKind::Pot,
        }],
        _ => {
            let main_idx = winners
                .iter()
                .position(|(_, amount)| *amount == hand.winning_amount)
                .or_else(|| {
                    winners
                        .iter()
                        .enumerate()
                        .max_by_key(|(idx, (_, amount))| (*amount, std::cmp::Reverse(*idx)))
                        .map(|(idx, _)| idx)
                })
                .unwrap_or(0);
            let side = winners
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != main_idx)
                .map(|(_, (player, amount))| Collection {
                    player: *player,
                    amount: *amount,
                    pot: PotKind::Side,
                });
            let (player, amount) = winners[main_idx];
            side.chain(std::iter::once(Collection {
                player,
                amount,
                pot: PotKind::Main,
            }))
            .collect()
        }
    };

    let main_pot = collections
        .iter()
        .filter(|c| c.pot != PotKind::Side)
        .map(|c| c.amount)
        .sum();
    let side_pot = collections
        .iter()
        .filter(|c| c.pot == PotKind::Side)
        .map(|c| c.amount)
        .sum();

    PotSummary {
        collections,
        rake,
        main_pot,
        side_pot,
        needs_review,
    }
}
