use std::fmt;

use crate::assemble::{
    AssembledHand, ForcedKind, PotKind, ReplayAction, ReplayLine, SeatOutcome, StreetReplay,
};
use crate::core::{fmt_chips, join_cards, Card, Chips};
use crate::parse::Street;
use crate::timestamp::render_timestamp;

use super::ConverterConfig;

/// An assembled hand paired with the config to render it with.
///
/// The `Display` impl writes the whole PokerStars hand history, one line per
/// entry, ending with a newline.
pub struct PokerStarsHand<'h, 'c> {
    hand: &'h AssembledHand<'h>,
    config: &'c ConverterConfig,
}

impl<'h, 'c> PokerStarsHand<'h, 'c> {
    pub fn new(hand: &'h AssembledHand<'h>, config: &'c ConverterConfig) -> Self {
        Self { hand, config }
    }

    fn chips(&self, amount: Chips) -> String {
        fmt_chips(amount, &self.config.currency_symbol)
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.hand.hand;
        writeln!(
            f,
            "PokerStars Hand #{}: Hold'em No Limit ({}/{}) - {}",
            hand.round_id.replace('-', ""),
            self.chips(hand.small_blind),
            self.chips(hand.big_blind),
            render_timestamp(
                &hand.timestamp,
                self.config.timestamp_override.as_ref(),
                &self.config.timezone_label
            )
        )?;
        writeln!(
            f,
            "Table '{}' {}-max Seat #{} is the button",
            self.config.table_name, self.config.max_seats, self.hand.button_seat
        )?;
        for (idx, player) in self.hand.seats.iter().enumerate() {
            writeln!(
                f,
                "Seat {}: {} ({} in chips)",
                idx + 1,
                player.nickname,
                self.chips(player.starting_stack())
            )?;
        }
        Ok(())
    }

    fn write_forced(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for post in &self.hand.forced {
            let what = match post.kind {
                ForcedKind::Ante => "the ante",
                ForcedKind::SmallBlind => "small blind",
                ForcedKind::BigBlind | ForcedKind::EntryFee => "big blind",
            };
            writeln!(f, "{}: posts {} {}", post.player, what, self.chips(post.amount))?;
        }
        Ok(())
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, line: &ReplayLine<'_>) -> fmt::Result {
        let all_in_suffix = |all_in: bool| if all_in { " and is all-in" } else { "" };
        match line.action {
            ReplayAction::Checks => writeln!(f, "{}: checks", line.player),
            ReplayAction::Folds => writeln!(f, "{}: folds", line.player),
            ReplayAction::Calls { amount, all_in } => writeln!(
                f,
                "{}: calls {}{}",
                line.player,
                self.chips(amount),
                all_in_suffix(all_in)
            ),
            ReplayAction::Bets { amount, all_in } => writeln!(
                f,
                "{}: bets {}{}",
                line.player,
                self.chips(amount),
                all_in_suffix(all_in)
            ),
            ReplayAction::Raises { by, to, all_in } => writeln!(
                f,
                "{}: raises {} to {}{}",
                line.player,
                self.chips(by),
                self.chips(to),
                all_in_suffix(all_in)
            ),
            ReplayAction::UncalledBetReturned { amount } => writeln!(
                f,
                "Uncalled bet ({}) returned to {}",
                self.chips(amount),
                line.player
            ),
        }
    }

    fn write_street_banner(&self, f: &mut fmt::Formatter<'_>, street: Street) -> fmt::Result {
        let board = &self.hand.board;
        match street {
            Street::Preflop => writeln!(f, "*** HOLE CARDS ***"),
            Street::Flop => writeln!(f, "*** FLOP *** [{}]", join_cards(&board[0])),
            _ => {
                let shown = street.index() - 1;
                let before: Vec<Card> = board[..shown].iter().flatten().copied().collect();
                writeln!(
                    f,
                    "*** {} *** [{}] [{}]",
                    street,
                    join_cards(&before),
                    join_cards(&board[shown])
                )
            }
        }
    }

    fn write_street(&self, f: &mut fmt::Formatter<'_>, replay: &StreetReplay<'_>) -> fmt::Result {
        self.write_street_banner(f, replay.street)?;
        for line in &replay.lines {
            self.write_line(f, line)?;
        }
        Ok(())
    }

    fn write_collections(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for collection in &self.hand.pots.collections {
            let pot = match collection.pot {
                PotKind::Pot => "pot",
                PotKind::Main => "main pot",
                PotKind::Side => "side pot",
            };
            writeln!(
                f,
                "{} collected {} from {}",
                collection.player,
                self.chips(collection.amount),
                pot
            )?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pots = &self.hand.pots;
        writeln!(f, "*** SUMMARY ***")?;
        if pots.has_side_pot() {
            writeln!(
                f,
                "Total pot {} Main pot {}. Side pot {}. | Rake {}",
                self.chips(pots.total_pot()),
                self.chips(pots.main_pot),
                self.chips(pots.side_pot),
                self.chips(pots.rake)
            )?;
        } else {
            writeln!(
                f,
                "Total pot {} | Rake {}",
                self.chips(pots.total_pot()),
                self.chips(pots.rake)
            )?;
        }

        if !self.hand.board.is_empty() {
            let board: Vec<Card> = self.hand.board.iter().flatten().copied().collect();
            writeln!(f, "Board [{}]", join_cards(&board))?;
        }

        for seat in &self.hand.summary {
            let cards = seat
                .hole_cards
                .map(|c| format!(" [{}]", join_cards(&c)))
                .unwrap_or_default();
            match seat.outcome {
                SeatOutcome::ShowedAndWon { amount } => writeln!(
                    f,
                    "Seat {}: {} showed{} and won ({})",
                    seat.seat,
                    seat.player,
                    cards,
                    self.chips(amount)
                )?,
                SeatOutcome::ShowedAndLost => writeln!(
                    f,
                    "Seat {}: {} showed{} and lost",
                    seat.seat, seat.player, cards
                )?,
                SeatOutcome::Mucked => {
                    writeln!(f, "Seat {}: {} mucked{}", seat.seat, seat.player, cards)?
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for PokerStarsHand<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_forced(f)?;
        for replay in &self.hand.streets {
            self.write_street(f, replay)?;
        }
        self.write_collections(f)?;
        self.write_summary(f)
    }
}
