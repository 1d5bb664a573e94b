use tracing::trace;

use crate::core::Chips;
use crate::hand::PlayerRecord;
use crate::parse::{ActionKind, BettingAction, Street};

/// A betting action as PokerStars states it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayAction {
    Checks,
    Folds,
    Calls { amount: Chips, all_in: bool },
    Bets { amount: Chips, all_in: bool },
    Raises { by: Chips, to: Chips, all_in: bool },
    UncalledBetReturned { amount: Chips },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLine<'a> {
    pub player: &'a str,
    pub action: ReplayAction,
}

/// All rendered lines of one street, in acting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetReplay<'a> {
    pub street: Street,
    pub lines: Vec<ReplayLine<'a>>,
}

/// Money in front of each player on the current street.
#[derive(Debug, Clone)]
struct RoundBetState {
    // Whether anyone has put in a bet yet. Preflop the blinds count.
    opened: bool,
    // The amount to call.
    last_bet: Chips,
    // How much each player has put in so far.
    invested: Vec<Chips>,
}

impl RoundBetState {
    fn preflop(baseline: Vec<Chips>, big_blind: Chips) -> Self {
        let last_bet = baseline.iter().copied().max().unwrap_or(0).max(big_blind);
        Self {
            opened: true,
            last_bet,
            invested: baseline,
        }
    }

    fn postflop(num_players: usize) -> Self {
        Self {
            opened: false,
            last_bet: 0,
            invested: vec![0; num_players],
        }
    }

    fn apply(&mut self, idx: usize, action: &BettingAction) -> ReplayAction {
        let all_in = action.is_all_in();
        match action.kind {
            ActionKind::Check => ReplayAction::Checks,
            ActionKind::Fold => ReplayAction::Folds,
            ActionKind::Call => {
                self.invested[idx] += action.amount;
                ReplayAction::Calls {
                    amount: action.amount,
                    all_in,
                }
            }
            ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn => {
                self.invested[idx] += action.amount;
                let total = self.invested[idx];
                if !self.opened {
                    self.opened = true;
                    self.last_bet = total;
                    return ReplayAction::Bets {
                        amount: total,
                        all_in,
                    };
                }

                let diff = total - self.last_bet;
                if diff <= 0 {
                    // A short stack going in for less than the bet.
                    trace!(total, last_bet = self.last_bet, "Bet below the current bet");
                    return ReplayAction::Calls {
                        amount: action.amount,
                        all_in,
                    };
                }
                self.last_bet = total;
                ReplayAction::Raises {
                    by: diff,
                    to: total,
                    all_in,
                }
            }
        }
    }
}

/// Replay one street for the players in `order`.
///
/// Preflop each player starts with their blind and entry fee already
/// invested and the street counts as opened at the big blind. A recorded
/// uncalled bet produces one return line after the street's actions.
pub fn replay_street<'a>(
    street: Street,
    order: &[&'a PlayerRecord],
    big_blind: Chips,
) -> StreetReplay<'a> {
    let mut state = match street {
        Street::Preflop => RoundBetState::preflop(
            order.iter().map(|p| p.forced_investment()).collect(),
            big_blind,
        ),
        _ => RoundBetState::postflop(order.len()),
    };

    let mut actions: Vec<(usize, &BettingAction)> = order
        .iter()
        .enumerate()
        .flat_map(|(idx, p)| p.actions_on(street).into_iter().map(move |a| (idx, a)))
        .collect();
    // Stable, so equal positions keep seat order.
    actions.sort_by_key(|(_, a)| a.position());

    let mut lines = Vec::with_capacity(actions.len() + 1);
    let mut uncalled = None;
    for (idx, action) in actions {
        let player = order[idx].nickname.as_str();
        lines.push(ReplayLine {
            player,
            action: state.apply(idx, action),
        });
        if let Some(amount) = action.uncalled_bet.filter(|a| *a > 0) {
            uncalled = Some(ReplayLine {
                player,
                action: ReplayAction::UncalledBetReturned { amount },
            });
        }
    }
    lines.extend(uncalled);

    StreetReplay { street, lines }
}
