use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::core::{parse_or_zero, parse_signed, parse_unsigned, Chips, MONEY_UNIT};

use super::event::{
    ActionKind, BettingAction, BettingOrder, BlindKind, EntryFee, Event, PostedBlind, Street,
};
use super::markers;

/// Keywords that decide the action on their own. The first match wins.
const EXCLUSIVE_ACTIONS: [(&str, ActionKind); 5] = [
    (markers::CHECK, ActionKind::Check),
    (markers::CALL, ActionKind::Call),
    (markers::FOLD, ActionKind::Fold),
    (markers::LEFT_ROOM, ActionKind::Fold),
    (markers::TIMEOUT, ActionKind::Fold),
];

/// Bet-class markers from weakest to strongest. Every marker present is
/// applied in this order and the last one sticks, so `[레이즈]` overrides a
/// generic `[베팅]` and `[올인]` overrides both.
const AGGRESSIVE_ACTIONS: [(&str, ActionKind); 6] = [
    (markers::GENERIC_BET, ActionKind::Bet),
    (markers::QUARTER_POT, ActionKind::Bet),
    (markers::HALF_POT, ActionKind::Bet),
    (markers::FULL_POT, ActionKind::Bet),
    (markers::RAISE, ActionKind::Raise),
    (markers::ALL_IN, ActionKind::AllIn),
];

static BET_AMOUNTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([\d,]+)원\s*\)\s*Credit\(\s*(-?[\d,]+)원\s*\)").expect("static regex")
});
static BET_AMOUNT_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([\d,]+)원\s*\)").expect("static regex"));
static FORCED_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"금액:\s*(-?[\d,]+)원").expect("static regex"));
static FORCED_STACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Creadit:\s*(-?[\d,]+)원").expect("static regex"));
static PASSIVE_STACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(-?[\d,]+)원\s*\)").expect("static regex"));
static PASSIVE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*([\d,]+)원").expect("static regex"));
static BETTING_ORDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"베팅순서:\s*\[(\d+)\]\s*\[(\d+)\]").expect("static regex"));
static DECISION_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*(\d+)\s*ms\]").expect("static regex"));
static UNCALLED_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[반환:\s*([\d,]+)원\]").expect("static regex"));

/// Pick the action kind of a betting line body.
///
/// Check, call and fold are exclusive. Otherwise the bet-class markers are
/// layered, see [`AGGRESSIVE_ACTIONS`]. Returns `None` when no keyword is
/// present.
pub fn classify_action(body: &str) -> Option<ActionKind> {
    if let Some((_, kind)) = EXCLUSIVE_ACTIONS
        .iter()
        .find(|(marker, _)| body.contains(marker))
    {
        return Some(*kind);
    }

    AGGRESSIVE_ACTIONS
        .iter()
        .rev()
        .find(|(marker, _)| body.contains(marker))
        .map(|(_, kind)| *kind)
}

fn capture_chips(re: &Regex, text: &str) -> Option<Chips> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_signed(m.as_str()))
}

/// Bet amount and remaining stack for the action's family.
fn extract_amounts(kind: ActionKind, body: &str) -> (Chips, Option<Chips>) {
    if kind.is_aggressive() {
        if let Some(caps) = BET_AMOUNTS.captures(body) {
            let amount = caps.get(1).map(|m| parse_or_zero(m.as_str())).unwrap_or(0);
            let remaining = caps.get(2).and_then(|m| parse_signed(m.as_str()));
            return (amount, remaining);
        }
        let amount = capture_chips(&BET_AMOUNT_ONLY, body).unwrap_or(0);
        return (amount, None);
    }

    // Check, call and fold carry `(stack원)` and optionally `-amount원`.
    let remaining = capture_chips(&PASSIVE_STACK, body);
    let amount = match kind {
        ActionKind::Fold => 0,
        _ => PASSIVE_AMOUNT
            .captures(body)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_unsigned(m.as_str()))
            .unwrap_or(0),
    };
    (amount, remaining)
}

fn extract_order(line: &str) -> Option<BettingOrder> {
    let caps = BETTING_ORDER.captures(line)?;
    let street = caps
        .get(1)?
        .as_str()
        .parse::<usize>()
        .ok()
        .and_then(Street::from_index)?;
    let position = caps.get(2)?.as_str().parse::<u32>().ok()?;
    Some(BettingOrder { street, position })
}

fn extract_decision_time(line: &str) -> Option<u64> {
    DECISION_TIME
        .captures_iter(line)
        .last()
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse the amount of an uncalled bet, either the `[반환:..]` field of a
/// betting line or the body of a separate `반환:` line.
pub(crate) fn extract_uncalled(line: &str) -> Option<Chips> {
    if let Some(amount) = capture_chips(&UNCALLED_FIELD, line) {
        return Some(amount);
    }
    line.split_once(markers::UNCALLED_RETURN)
        .and_then(|(_, rest)| rest.split(MONEY_UNIT).next())
        .and_then(parse_unsigned)
}

fn parse_forced(body: &str) -> (Chips, Option<Chips>) {
    (
        capture_chips(&FORCED_AMOUNT, body).map(Chips::abs).unwrap_or(0),
        capture_chips(&FORCED_STACK, body),
    )
}

/// Parse one `베팅:` line into a blind, an entry fee or a betting action.
pub fn parse_betting_action(line: &str) -> Option<Event> {
    let body = line
        .split_once(markers::BETTING)
        .map(|(_, rest)| rest)
        .unwrap_or(line)
        .trim();

    let blind_kind = if body.contains(markers::SMALL_BLIND) {
        Some(BlindKind::Small)
    } else if body.contains(markers::BIG_BLIND) {
        Some(BlindKind::Big)
    } else {
        None
    };
    if let Some(kind) = blind_kind {
        let (amount, remaining_stack) = parse_forced(body);
        return Some(Event::PostedBlind(PostedBlind {
            kind,
            amount,
            remaining_stack,
        }));
    }

    if body.contains(markers::ENTRY_FEE) {
        let (amount, remaining_stack) = parse_forced(body);
        return Some(Event::EntryFee(EntryFee {
            amount,
            remaining_stack,
        }));
    }

    let Some(kind) = classify_action(body) else {
        trace!(line, "Betting line without a known action keyword");
        return None;
    };
    let (amount, remaining_stack) = extract_amounts(kind, body);

    Some(Event::BettingAction(BettingAction {
        kind,
        amount,
        remaining_stack,
        order: extract_order(body),
        decision_time_ms: extract_decision_time(body),
        uncalled_bet: capture_chips(&UNCALLED_FIELD, body),
    }))
}
