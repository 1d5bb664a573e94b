use std::sync::LazyLock;

use regex::Regex;
use tracing::{trace, warn};

use crate::core::{parse_or_zero, parse_signed, parse_unsigned, split_card_run, Card, MONEY_UNIT};

use super::betting::{extract_uncalled, parse_betting_action};
use super::event::{Ante, CommunityCards, Event, HandResult, Outcome, StartOfHand, WinMoney};
use super::markers;

/// What a log line is, decided by its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Start,
    Identity,
    Ante,
    HoleCards,
    CommunityCards,
    Betting,
    UncalledReturn,
    Result,
    End,
}

/// Markers in the order they are tried. Betting comes before the separate
/// uncalled-bet line because a betting line may carry a `[반환:..]` field.
const LINE_MARKERS: [(&str, LineKind); 9] = [
    (markers::START, LineKind::Start),
    (markers::IDENTITY, LineKind::Identity),
    (markers::ANTE, LineKind::Ante),
    (markers::HOLE_CARDS, LineKind::HoleCards),
    (markers::COMMUNITY_CARDS, LineKind::CommunityCards),
    (markers::BETTING, LineKind::Betting),
    (markers::UNCALLED_RETURN, LineKind::UncalledReturn),
    (markers::RESULT, LineKind::Result),
    (markers::END, LineKind::End),
];

static HOLE_CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([♠♥♣◆♦])(10|[2-9TJQKA])").expect("static regex"));
static CARD_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("static regex"));
static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"결과:\s*(승리|패배)\s*\[족보:([^\]]*)\]\s*\[카드:([^\]]*)\](?:\s*-\s*(\S.*?))?\s*$")
        .expect("static regex")
});
static WIN_MONEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WinMoney\[\s*(-?[\d,]+)원\s*\]").expect("static regex"));
static FINAL_CREDIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Credit\[\s*(-?[\d,]+)원\s*\]").expect("static regex"));

pub fn classify_line(line: &str) -> Option<LineKind> {
    LINE_MARKERS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|(_, kind)| *kind)
}

fn parse_start(line: &str) -> StartOfHand {
    let mut start = StartOfHand::default();
    let cleaned = line.replace(['[', ']'], " ");
    for part in cleaned.split_whitespace() {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        match key {
            "StageNo" => start.stage_id = value.to_string(),
            "Credit" => start.starting_stack = parse_or_zero(value),
            "SB" => start.small_blind = parse_or_zero(value),
            "BB" => start.big_blind = parse_or_zero(value),
            "MBI" => start.minimum_buy_in = parse_or_zero(value),
            "CBIR" => start.club_buy_in_rate = parse_or_zero(value),
            _ => {}
        }
    }
    start
}

fn parse_identity(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(markers::IDENTITY)?;
    let end = rest.find(']')?;
    Some(rest[..end].to_string())
}

fn parse_ante(line: &str) -> Ante {
    let body = line
        .split_once(markers::ANTE)
        .map(|(_, rest)| rest)
        .unwrap_or(line);
    let mut fields = body.split(MONEY_UNIT);
    let amount = fields.next().and_then(parse_unsigned).unwrap_or(0);
    let remaining_stack = fields
        .next()
        .map(|f| f.trim().trim_start_matches('(').trim_end_matches(')'))
        .and_then(parse_signed)
        .unwrap_or(0);
    Ante {
        amount,
        remaining_stack,
    }
}

fn parse_hole_cards(line: &str) -> Option<[Card; 2]> {
    let body = line.split_once(markers::HOLE_CARDS)?.1;
    // Drop the trailing `[A 탑]` strength label.
    let body = body.split('[').next().unwrap_or(body);
    let cards: Vec<Card> = HOLE_CARD
        .captures_iter(body)
        .filter_map(|caps| Card::from_source(caps.get(0)?.as_str()).ok())
        .take(2)
        .collect();
    match cards.as_slice() {
        [first, second] => Some([*first, *second]),
        _ => None,
    }
}

fn parse_community_cards(line: &str) -> Option<CommunityCards> {
    let h_start = line.find("H(")? + 2;
    let h_end = h_start + line[h_start..].find(')')?;
    let hole_cards = split_card_run(&line[h_start..h_end]);

    let c_start = h_end + line[h_end..].find("C (")? + 2;
    let mut streets: Vec<Vec<Card>> = CARD_GROUP
        .captures_iter(&line[c_start..])
        .filter_map(|caps| caps.get(1))
        .map(|m| split_card_run(m.as_str()))
        .collect();
    while streets.last().is_some_and(Vec::is_empty) {
        streets.pop();
    }

    Some(CommunityCards {
        hole_cards,
        streets,
    })
}

fn parse_result(line: &str) -> Option<HandResult> {
    let caps = RESULT_LINE.captures(line)?;
    let outcome = match caps.get(1)?.as_str() {
        markers::WIN => Outcome::Win,
        _ => Outcome::Loss,
    };
    Some(HandResult {
        outcome,
        hand_label: caps.get(2)?.as_str().trim().to_string(),
        final_cards: caps.get(3)?.as_str().trim().to_string(),
        forfeit: caps
            .get(4)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}

fn parse_win_money(line: &str) -> Option<WinMoney> {
    let amount = WIN_MONEY
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_signed(m.as_str()))?;
    let final_stack = FINAL_CREDIT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_signed(m.as_str()));
    Some(WinMoney {
        amount,
        final_stack,
    })
}

/// Parse a single classified line. `None` means the line carried its marker
/// but not enough structure to produce an event.
fn parse_line(kind: LineKind, line: &str) -> Option<Event> {
    match kind {
        LineKind::Start => Some(Event::StartOfHand(parse_start(line))),
        LineKind::Identity => parse_identity(line).map(|nickname| Event::Identity { nickname }),
        LineKind::Ante => Some(Event::Ante(parse_ante(line))),
        LineKind::HoleCards => parse_hole_cards(line).map(Event::HoleCards),
        LineKind::CommunityCards => parse_community_cards(line).map(Event::CommunityCards),
        LineKind::Betting => parse_betting_action(line),
        LineKind::Result => parse_result(line).map(Event::Result),
        LineKind::End => parse_win_money(line).map(Event::WinMoney),
        // Handled against the previous events, see `attach_uncalled_bet`.
        LineKind::UncalledReturn => None,
    }
}

/// A separate uncalled-bet line belongs to the latest betting action of the
/// same player, whatever street it was on.
fn attach_uncalled_bet(events: &mut [Event], line: &str) {
    let Some(amount) = extract_uncalled(line) else {
        trace!(line, "Uncalled bet line without an amount");
        return;
    };
    let latest = events.iter_mut().rev().find_map(|event| match event {
        Event::BettingAction(action) => Some(action),
        _ => None,
    });
    match latest {
        Some(action) => action.uncalled_bet = Some(amount),
        None => warn!(amount, "Uncalled bet returned before any betting action"),
    }
}

/// Turn one player's raw action log into its ordered event list.
///
/// Lines are matched against the marker vocabulary; anything unrecognised is
/// skipped. Malformed numbers become zero or `None` instead of failing.
pub fn parse_action_log(text: &str) -> Vec<Event> {
    let mut events = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify_line(line) {
            Some(LineKind::UncalledReturn) => attach_uncalled_bet(&mut events, line),
            Some(kind) => match parse_line(kind, line) {
                Some(event) => events.push(event),
                None => trace!(?kind, line, "Dropping line without usable fields"),
            },
            None => trace!(line, "Skipping unrecognised line"),
        }
    }
    events
}
