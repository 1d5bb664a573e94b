use crate::core::{parse_signed, Card, Chips};
use crate::parse::{
    parse_action_log, BettingAction, CommunityCards, EntryFee, Event, HandResult, PostedBlind,
    StartOfHand, Street, WinMoney,
};

use super::RawPlayer;

/// One player's view of a hand: the parsed event list plus the declared
/// totals from the extraction step.
///
/// The event list is never modified after parsing. Everything else is
/// derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub nickname: String,
    pub raw_text: String,
    pub events: Vec<Event>,
    pub declared_net: Chips,
    pub declared_final_stack: Chips,
    pub win_money: Option<WinMoney>,
}

impl PlayerRecord {
    pub fn from_raw(raw: &RawPlayer) -> Self {
        let events = parse_action_log(&raw.action_log);
        let win_money = events.iter().rev().find_map(|e| match e {
            Event::WinMoney(w) => Some(*w),
            _ => None,
        });
        // The declared column wins; the end line is the fallback.
        let declared_final_stack = parse_signed(&raw.final_stack)
            .or_else(|| win_money.and_then(|w| w.final_stack))
            .unwrap_or(0);

        Self {
            nickname: raw.nickname.clone(),
            raw_text: raw.action_log.clone(),
            declared_net: parse_signed(&raw.net).unwrap_or(0),
            declared_final_stack,
            win_money,
            events,
        }
    }

    pub fn start(&self) -> Option<&StartOfHand> {
        self.events.iter().find_map(|e| match e {
            Event::StartOfHand(s) => Some(s),
            _ => None,
        })
    }

    pub fn starting_stack(&self) -> Chips {
        self.start().map(|s| s.starting_stack).unwrap_or(0)
    }

    pub fn final_stack(&self) -> Chips {
        self.declared_final_stack
    }

    pub fn ante(&self) -> Chips {
        self.events
            .iter()
            .find_map(|e| match e {
                Event::Ante(a) => Some(a.amount),
                _ => None,
            })
            .unwrap_or(0)
    }

    pub fn blind(&self) -> Option<&PostedBlind> {
        self.events.iter().find_map(|e| match e {
            Event::PostedBlind(b) => Some(b),
            _ => None,
        })
    }

    pub fn entry_fee(&self) -> Option<&EntryFee> {
        self.events.iter().find_map(|e| match e {
            Event::EntryFee(f) => Some(f),
            _ => None,
        })
    }

    /// Blind plus entry fee, the amount already in front of the player when
    /// preflop action starts.
    pub fn forced_investment(&self) -> Chips {
        self.blind().map(|b| b.amount).unwrap_or(0)
            + self.entry_fee().map(|f| f.amount).unwrap_or(0)
    }

    /// Every betting action paired with the street it belongs to.
    ///
    /// An action without a `[street][position]` bracket stays on the street
    /// of the action before it.
    pub fn actions(&self) -> impl Iterator<Item = (Street, &BettingAction)> + '_ {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::BettingAction(a) => Some(a),
                _ => None,
            })
            .scan(Street::Preflop, |street, action| {
                if let Some(order) = action.order {
                    *street = order.street;
                }
                Some((*street, action))
            })
    }

    pub fn actions_on(&self, street: Street) -> Vec<&BettingAction> {
        self.actions()
            .filter(|(s, _)| *s == street)
            .map(|(_, a)| a)
            .collect()
    }

    pub fn acted_on(&self, street: Street) -> bool {
        self.actions().any(|(s, _)| s == street)
    }

    /// Acting position of the player's first action on the street.
    pub fn first_position(&self, street: Street) -> Option<u32> {
        self.actions()
            .filter(|(s, _)| *s == street)
            .map(|(_, a)| a.position())
            .min()
    }

    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        let dealt = self.events.iter().find_map(|e| match e {
            Event::HoleCards(cards) => Some(*cards),
            _ => None,
        });
        // Players who folded preflop can still have them in a board snapshot.
        dealt.or_else(|| {
            self.community_cards()
                .and_then(|c| match c.hole_cards.as_slice() {
                    [a, b] => Some([*a, *b]),
                    _ => None,
                })
        })
    }

    /// The latest board snapshot this player saw.
    pub fn community_cards(&self) -> Option<&CommunityCards> {
        self.events.iter().rev().find_map(|e| match e {
            Event::CommunityCards(c) => Some(c),
            _ => None,
        })
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Result(r) => Some(r),
            _ => None,
        })
    }

    pub fn went_to_showdown(&self) -> bool {
        self.result().is_some_and(HandResult::went_to_showdown)
    }

    /// Chips collected from the pot, never negative.
    pub fn winnings(&self) -> Chips {
        self.win_money.map(|w| w.amount.max(0)).unwrap_or(0)
    }

    pub fn is_winner(&self) -> bool {
        self.winnings() > 0
    }

    /// Every amount that later gets added up for this player: stacks,
    /// forced bets, betting amounts and winnings. `None` if the total
    /// doesn't fit in [`Chips`].
    pub fn chip_volume(&self) -> Option<Chips> {
        let stacks = [
            self.starting_stack(),
            self.declared_final_stack,
            self.winnings(),
            self.ante(),
            self.forced_investment(),
        ];
        let actions = self
            .actions()
            .flat_map(|(_, a)| [a.amount, a.uncalled_bet.unwrap_or(0)]);
        stacks
            .into_iter()
            .chain(actions)
            .try_fold(0, |total: Chips, amount| {
                total.checked_add(amount.checked_abs()?)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ActionKind;

    fn record(log: &str, final_stack: &str) -> PlayerRecord {
        PlayerRecord::from_raw(&RawPlayer {
            nickname: "hero".to_string(),
            action_log: log.to_string(),
            net: "-3,000".to_string(),
            final_stack: final_stack.to_string(),
        })
    }

    const LOG: &str = "
        * 시작 : [StageNo:1] [Credit:100,000원] [SB:1,000원] [BB:2,000원] [MBI:0원] [CBIR:100]
        * 앤티: -1,000원(99,000원)
        * 베팅: [블라인드:SMALL] [금액:1,000원] [Creadit:98,000원]
        * 홀 카드딜: ♠A(1) ◆10(2) [A 탑]
        * 베팅: 콜 -1,000원(97,000원) - 베팅순서: [0][2] [100ms]
        * 커뮤니티 카드 딜: H(♠A◆10) C (♥6◆3♥4)
        * 베팅: 체크 -0원(97,000원) - 베팅순서: [1][0] [100ms]
        * 베팅: 다이 [0](97,000원)
        * 종료: WinMoney[0원] Credit[97,000원]
        * 결과: 패배 [족보:A 탑] [카드:♠A ◆10 ♥6 ♥4 ◆3] - 기권
    ";

    #[test]
    fn test_accessors() {
        let hero = record(LOG, "97,000");
        assert_eq!(hero.starting_stack(), 100_000);
        assert_eq!(hero.final_stack(), 97_000);
        assert_eq!(hero.declared_net, -3_000);
        assert_eq!(hero.ante(), 1_000);
        assert_eq!(hero.blind().map(|b| b.amount), Some(1_000));
        assert_eq!(hero.entry_fee(), None);
        assert_eq!(hero.forced_investment(), 1_000);
        assert_eq!(
            hero.hole_cards().map(|c| c.map(|c| c.to_string())),
            Some(["As".to_string(), "Td".to_string()])
        );
        assert!(!hero.went_to_showdown());
        assert!(!hero.is_winner());
        assert_eq!(hero.winnings(), 0);
    }

    #[test]
    fn test_unordered_action_stays_on_previous_street() {
        let hero = record(LOG, "97,000");
        let flop: Vec<ActionKind> = hero
            .actions_on(Street::Flop)
            .iter()
            .map(|a| a.kind)
            .collect();
        assert_eq!(flop, vec![ActionKind::Check, ActionKind::Fold]);
        assert_eq!(hero.first_position(Street::Preflop), Some(2));
        assert_eq!(hero.first_position(Street::Flop), Some(0));
        assert!(!hero.acted_on(Street::Turn));
    }

    #[test]
    fn test_chip_volume() {
        let hero = record(LOG, "97,000");
        // Stacks 100,000 + 97,000, ante 1,000, blind 1,000 and a 1,000 call.
        assert_eq!(hero.chip_volume(), Some(200_000));

        let shove = "* 베팅: [올인] (999,999,999,999,999원) Credit(0원) - 베팅순서: [0][0]";
        let log = vec![shove; 10_000].join("\n");
        assert_eq!(record(&log, "0").chip_volume(), None);
    }

    #[test]
    fn test_final_stack_falls_back_to_end_line() {
        let hero = record(LOG, "");
        assert_eq!(hero.final_stack(), 97_000);
        let empty = record("", "oops");
        assert_eq!(empty.final_stack(), 0);
        assert_eq!(empty.starting_stack(), 0);
        assert_eq!(empty.hole_cards(), None);
    }
}
