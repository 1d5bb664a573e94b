//! Fixtures and a structural validator for rendered hand histories.
use std::collections::{HashMap, HashSet};

use crate::core::Chips;
use crate::hand::{HandUnit, RawPlayer};
use crate::parse::{markers, ActionKind, Street};

/// A `시작` line for the given stack and blinds.
pub fn start_line(stack: Chips, small_blind: Chips, big_blind: Chips) -> String {
    format!(
        "* 시작 : [StageNo:1000] [Credit:{}원] [SB:{}원] [BB:{}원] [MBI:0원] [CBIR:100]",
        grouped(stack),
        grouped(small_blind),
        grouped(big_blind)
    )
}

/// Write an amount with thousands separators the way the client does.
pub fn grouped(amount: Chips) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Build a `베팅:` line in the client's layout for the given action.
pub fn betting_line(
    kind: ActionKind,
    amount: Chips,
    remaining: Chips,
    street: Street,
    position: u32,
    decision_ms: u64,
) -> String {
    let order = format!("베팅순서: [{}][{}] [{}ms]", street.index(), position, decision_ms);
    match kind {
        ActionKind::Check => format!(
            "* 베팅: {} -0원({}원) - {}",
            markers::CHECK,
            grouped(remaining),
            order
        ),
        ActionKind::Call => format!(
            "* 베팅: {} -{}원({}원) - {}",
            markers::CALL,
            grouped(amount),
            grouped(remaining),
            order
        ),
        ActionKind::Fold => format!(
            "* 베팅: {} [0]({}원) - {}",
            markers::FOLD,
            grouped(remaining),
            order
        ),
        ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn => {
            let marker = match kind {
                ActionKind::Bet => markers::HALF_POT,
                ActionKind::Raise => markers::RAISE,
                _ => markers::ALL_IN,
            };
            format!(
                "* 베팅: {} ({}원) Credit({}원) - {}",
                marker,
                grouped(amount),
                grouped(remaining),
                order
            )
        }
    }
}

fn raw(nickname: &str, final_stack: Chips, lines: &[String]) -> RawPlayer {
    RawPlayer {
        nickname: nickname.to_string(),
        action_log: lines.join("\n"),
        net: String::new(),
        final_stack: grouped(final_stack),
    }
}

/// Heads up: 1,000 antes, the small blind raises to 5,000 and the big blind
/// folds. The raise comes back as an uncalled bet on its own line.
pub fn heads_up_unit(round_id: &str) -> HandUnit {
    let start = start_line(100_000, 1_000, 1_000);
    HandUnit {
        round_id: round_id.to_string(),
        timestamp: "2025-02-08 오후 11:04:31".to_string(),
        game_type: "홀덤".to_string(),
        winner: "raiser".to_string(),
        winning_amount: "4,000".to_string(),
        players: vec![
            raw(
                "folder",
                98_000,
                &[
                    start.clone(),
                    "* NICKNAME:[folder]".to_string(),
                    "* 앤티: -1,000원(99,000원)".to_string(),
                    "* 베팅: [블라인드:BIG] [금액:1,000원] [Creadit:98,000원]".to_string(),
                    "* 홀 카드딜: ♣2(1) ♥7(2) [7 탑]".to_string(),
                    betting_line(ActionKind::Fold, 0, 98_000, Street::Preflop, 1, 3085),
                    "* 종료: WinMoney[0원] Credit[98,000원]".to_string(),
                    "* 결과: 패배 [족보:7 탑] [카드:♣2 ♥7] - 기권".to_string(),
                ],
            ),
            raw(
                "raiser",
                102_000,
                &[
                    start,
                    "* NICKNAME:[raiser]".to_string(),
                    "* 앤티: -1,000원(99,000원)".to_string(),
                    "* 베팅: [블라인드:SMALL] [금액:1,000원] [Creadit:98,000원]".to_string(),
                    "* 홀 카드딜: ♠A(1) ◆10(2) [A 탑]".to_string(),
                    betting_line(ActionKind::Raise, 4_000, 94_000, Street::Preflop, 0, 812),
                    "* 반환: 4,000원".to_string(),
                    "* 종료: WinMoney[4,000원] Credit[102,000원]".to_string(),
                    "* 결과: 승리 [족보:A 탑] [카드:♠A ◆10] - 기권".to_string(),
                ],
            ),
        ],
    }
}

/// Three handed to the river with a flop bet and call and a showdown.
pub fn multiway_unit(round_id: &str) -> HandUnit {
    let start = start_line(50_000, 500, 1_000);
    let board = "* 커뮤니티 카드 딜: H(♠2♠3) C (♥6◆3♥4) (◆9) (♥10)".to_string();
    HandUnit {
        round_id: round_id.to_string(),
        timestamp: "2025-02-08 오후 01:02:03".to_string(),
        game_type: "홀덤".to_string(),
        winner: "carol".to_string(),
        winning_amount: "6,800".to_string(),
        players: vec![
            raw(
                "alice",
                49_000,
                &[
                    start.clone(),
                    "* 베팅: [블라인드:SMALL] [금액:500원] [Creadit:49,500원]".to_string(),
                    betting_line(ActionKind::Call, 500, 49_000, Street::Preflop, 1, 400),
                    betting_line(ActionKind::Fold, 0, 49_000, Street::Flop, 0, 300),
                    "* 결과: 패배 [족보:하이] [카드:♣8 ♣7] - 기권".to_string(),
                ],
            ),
            raw(
                "bob",
                47_000,
                &[
                    start.clone(),
                    "* 베팅: [블라인드:BIG] [금액:1,000원] [Creadit:49,000원]".to_string(),
                    "* 홀 카드딜: ♥K(1) ♣K(2) [원페어]".to_string(),
                    betting_line(ActionKind::Check, 0, 49_000, Street::Preflop, 2, 900),
                    board.clone(),
                    betting_line(ActionKind::Bet, 2_000, 47_000, Street::Flop, 1, 1500),
                    betting_line(ActionKind::Check, 0, 47_000, Street::Turn, 0, 700),
                    betting_line(ActionKind::Check, 0, 47_000, Street::River, 0, 700),
                    "* 종료: WinMoney[0원] Credit[47,000원]".to_string(),
                    "* 결과: 패배 [족보:원페어] [카드:♥K ♣K ♥10 ◆9 ♥6]".to_string(),
                ],
            ),
            raw(
                "carol",
                53_800,
                &[
                    start,
                    "* 홀 카드딜: ♠10(1) ◆10(2) [원페어]".to_string(),
                    betting_line(ActionKind::Call, 1_000, 49_000, Street::Preflop, 0, 600),
                    betting_line(ActionKind::Call, 2_000, 47_000, Street::Flop, 2, 800),
                    board,
                    betting_line(ActionKind::Check, 0, 47_000, Street::Turn, 1, 500),
                    betting_line(ActionKind::Check, 0, 47_000, Street::River, 1, 500),
                    "* 종료: WinMoney[6,800원] Credit[53,800원]".to_string(),
                    "* 결과: 승리 [족보:트리플] [카드:♠10 ◆10 ♥10 ◆9 ♥6]".to_string(),
                ],
            ),
        ],
    }
}

/// Three handed all-in preflop with a main and a side pot.
pub fn side_pot_unit(round_id: &str) -> HandUnit {
    let start = start_line(50_000, 500, 1_000);
    HandUnit {
        round_id: round_id.to_string(),
        timestamp: "2025-02-08 오전 02:03:04".to_string(),
        game_type: "홀덤".to_string(),
        winner: "short".to_string(),
        winning_amount: "3,000".to_string(),
        players: vec![
            raw(
                "short",
                51_000,
                &[
                    start.clone(),
                    "* 베팅: [참가비] [금액:1,000원] [Creadit:49,000원]".to_string(),
                    betting_line(ActionKind::AllIn, 49_000, 0, Street::Preflop, 0, 1000),
                    "* 종료: WinMoney[3,000원] Credit[51,000원]".to_string(),
                    "* 결과: 승리 [족보:원페어] [카드:♠A ♥A]".to_string(),
                ],
            ),
            raw(
                "caller",
                49_000,
                &[
                    start.clone(),
                    betting_line(ActionKind::Call, 49_000, 0, Street::Preflop, 1, 1000),
                    "* 종료: WinMoney[2,000원] Credit[49,000원]".to_string(),
                    "* 결과: 승리 [족보:원페어] [카드:♠K ♥K]".to_string(),
                ],
            ),
            raw(
                "quitter",
                48_000,
                &[
                    start,
                    betting_line(ActionKind::Fold, 0, 48_000, Street::Preflop, 2, 1000),
                ],
            ),
        ],
    }
}

/// Assert that a rendered PokerStars hand history is internally consistent.
///
/// Checks the header, that seats are numbered from one without gaps, that
/// every acting player is seated, that street sections come in order, that
/// cards are well formed and never repeat, and that the pot line adds up.
pub fn assert_valid_pokerstars_history(text: &str) {
    let mut validator = HistoryValidator::new(text);
    validator.validate();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Header,
    Street(Street),
    Summary,
}

struct HistoryValidator<'a> {
    lines: Vec<&'a str>,
    hand_id: String,
    seats: HashMap<usize, &'a str>,
    button_seat: usize,
    section: Section,
    seen_cards: HashSet<String>,
    board: Vec<String>,
    collected: Chips,
    seen_collection: bool,
}

impl<'a> HistoryValidator<'a> {
    fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() >= 2, "History must have a header and table line");
        let hand_id = lines[0]
            .strip_prefix("PokerStars Hand #")
            .and_then(|rest| rest.split(':').next())
            .unwrap_or_else(|| panic!("Bad header line: {}", lines[0]))
            .to_string();
        assert!(
            hand_id.chars().all(|c| c.is_ascii_alphanumeric()),
            "Hand id {hand_id} must not contain separators"
        );

        let button_seat = lines[1]
            .split("Seat #")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .unwrap_or_else(|| panic!("Hand {hand_id} has a bad table line: {}", lines[1]));

        Self {
            lines,
            hand_id,
            seats: HashMap::new(),
            button_seat,
            section: Section::Header,
            seen_cards: HashSet::new(),
            board: Vec::new(),
            collected: 0,
            seen_collection: false,
        }
    }

    fn validate(&mut self) {
        for line in self.lines.clone().into_iter().skip(2) {
            self.process_line(line);
        }
        assert_eq!(
            self.section,
            Section::Summary,
            "Hand {} never reached the summary",
            self.hand_id
        );
        assert!(
            self.seats.contains_key(&self.button_seat),
            "Hand {} button seat {} is empty",
            self.hand_id,
            self.button_seat
        );
    }

    fn enter(&mut self, section: Section) {
        assert!(
            section > self.section,
            "Hand {} has {:?} after {:?}",
            self.hand_id,
            section,
            self.section
        );
        self.section = section;
    }

    fn process_line(&mut self, line: &'a str) {
        if let Some(rest) = line.strip_prefix("*** ") {
            let name = rest.split(" ***").next().unwrap_or_default();
            match name {
                "HOLE CARDS" => self.enter(Section::Street(Street::Preflop)),
                "FLOP" => self.enter(Section::Street(Street::Flop)),
                "TURN" => self.enter(Section::Street(Street::Turn)),
                "RIVER" => self.enter(Section::Street(Street::River)),
                "SUMMARY" => self.enter(Section::Summary),
                other => panic!("Hand {} has unknown section {other}", self.hand_id),
            }
            if let Section::Street(street) = self.section {
                self.record_board(street, line);
            }
            return;
        }

        match self.section {
            Section::Header => self.process_header_line(line),
            Section::Street(_) => self.process_action_line(line),
            Section::Summary => self.process_summary_line(line),
        }
    }

    fn process_header_line(&mut self, line: &'a str) {
        if let Some(rest) = line.strip_prefix("Seat ") {
            let (seat, rest) = rest
                .split_once(": ")
                .unwrap_or_else(|| panic!("Hand {} bad seat line {line}", self.hand_id));
            let seat: usize = seat.parse().expect("Seat number");
            assert_eq!(
                seat,
                self.seats.len() + 1,
                "Hand {} seats must be numbered without gaps",
                self.hand_id
            );
            let name = rest
                .rsplit_once(" (")
                .map(|(name, _)| name)
                .expect("Seat line must have a stack");
            self.seats.insert(seat, name);
            return;
        }
        let player = self.expect_seated(line);
        assert!(
            line[player.len()..].starts_with(": posts "),
            "Hand {} unexpected header line {line}",
            self.hand_id
        );
    }

    fn process_action_line(&mut self, line: &'a str) {
        if line.starts_with("Uncalled bet (") {
            assert!(
                !self.seen_collection,
                "Hand {} returns an uncalled bet after the pot was collected",
                self.hand_id
            );
            return;
        }
        if let Some((player, rest)) = line.split_once(" collected ") {
            self.assert_seated(player);
            self.seen_collection = true;
            self.collected += rest
                .split_whitespace()
                .next()
                .map(parse_amount)
                .expect("Collected amount");
            return;
        }
        assert!(
            !self.seen_collection,
            "Hand {} has action after the pot was collected: {line}",
            self.hand_id
        );
        self.expect_seated(line);
    }

    fn process_summary_line(&mut self, line: &'a str) {
        if let Some(rest) = line.strip_prefix("Total pot ") {
            let total = rest.split_whitespace().next().map(parse_amount).expect("Total");
            let rake = rest
                .rsplit_once("Rake ")
                .map(|(_, rake)| parse_amount(rake))
                .expect("Rake");
            assert_eq!(
                total,
                self.collected + rake,
                "Hand {} total pot must equal collected plus rake",
                self.hand_id
            );
        } else if let Some(rest) = line.strip_prefix("Board [") {
            let cards: Vec<String> = rest
                .trim_end_matches(']')
                .split_whitespace()
                .map(str::to_string)
                .collect();
            assert_eq!(
                cards, self.board,
                "Hand {} board line must match the streets",
                self.hand_id
            );
        } else if let Some(rest) = line.strip_prefix("Seat ") {
            let (_, rest) = rest.split_once(": ").expect("Summary seat line");
            let seated = self.seats.values().any(|name| rest.starts_with(name));
            assert!(seated, "Hand {} summary for unknown seat {line}", self.hand_id);
            if let Some(cards) = rest.split('[').nth(1) {
                for card in cards.trim_end_matches(|c| c != ']').trim_end_matches(']').split(' ') {
                    self.assert_card(card);
                }
            }
        }
    }

    fn record_board(&mut self, street: Street, line: &str) {
        let new_cards: Vec<String> = line
            .rsplit('[')
            .next()
            .filter(|_| street != Street::Preflop)
            .map(|group| {
                group
                    .trim_end_matches(']')
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let expected = match street {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        };
        assert_eq!(
            new_cards.len(),
            expected,
            "Hand {} {street} must deal {expected} cards",
            self.hand_id
        );
        for card in new_cards {
            self.assert_card(&card);
            assert!(
                self.seen_cards.insert(card.clone()),
                "Hand {} deals {card} twice",
                self.hand_id
            );
            self.board.push(card);
        }
    }

    fn assert_card(&self, card: &str) {
        let mut chars = card.chars();
        let rank = chars.next();
        let suit = chars.next();
        assert!(
            matches!(rank, Some('2'..='9' | 'T' | 'J' | 'Q' | 'K' | 'A'))
                && matches!(suit, Some('s' | 'h' | 'c' | 'd'))
                && chars.next().is_none(),
            "Hand {} has malformed card {card}",
            self.hand_id
        );
    }

    fn assert_seated(&self, player: &str) {
        assert!(
            self.seats.values().any(|name| *name == player),
            "Hand {} references unseated player {player}",
            self.hand_id
        );
    }

    /// The seated player a `name: ...` line starts with.
    fn expect_seated(&self, line: &str) -> &'a str {
        self.seats
            .values()
            .copied()
            .filter(|name| line.starts_with(name) && line[name.len()..].starts_with(": "))
            .max_by_key(|name| name.len())
            .unwrap_or_else(|| panic!("Hand {} line from unseated player: {line}", self.hand_id))
    }
}

fn parse_amount(text: &str) -> Chips {
    text.trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-')
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .replace(|c: char| !c.is_ascii_digit() && c != '-', "")
        .parse()
        .unwrap_or_else(|_| panic!("Bad amount {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_hand;
    use crate::parse::{parse_betting_action, Event};
    use crate::pokerstars::ConverterConfig;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1_000), "1,000");
        assert_eq!(grouped(264_846), "264,846");
        assert_eq!(grouped(-1_234_567), "-1,234,567");
    }

    #[test]
    fn test_betting_line_numbers_survive_parsing() {
        let cases = [
            (ActionKind::Check, 0, 364_080, Street::Flop, 2),
            (ActionKind::Call, 1_000, 254_674, Street::Preflop, 3),
            (ActionKind::Fold, 0, 169_039, Street::Preflop, 4),
            (ActionKind::Bet, 8_500, 405_687, Street::Turn, 0),
            (ActionKind::Raise, 7_000, 92_000, Street::River, 6),
            (ActionKind::AllIn, 38_500, 0, Street::Flop, 9),
        ];
        for (kind, amount, remaining, street, position) in cases {
            let line = betting_line(kind, amount, remaining, street, position, 1234);
            let Some(Event::BettingAction(action)) = parse_betting_action(&line) else {
                panic!("{line} did not parse");
            };
            assert_eq!(action.kind, kind, "{line}");
            assert_eq!(action.amount, amount, "{line}");
            assert_eq!(action.remaining_stack, Some(remaining), "{line}");
            assert_eq!(action.order.map(|o| o.street), Some(street), "{line}");
            assert_eq!(action.position(), position, "{line}");
            assert_eq!(action.decision_time_ms, Some(1234), "{line}");
        }
    }

    #[test]
    fn test_fixtures_render_valid_histories() {
        let config = ConverterConfig::default();
        for unit in [
            heads_up_unit("1-1"),
            multiway_unit("1-2"),
            side_pot_unit("1-3"),
        ] {
            let converted = convert_hand(&unit, &config).unwrap();
            assert_valid_pokerstars_history(&converted.text);
        }
    }

    #[test]
    #[should_panic(expected = "total pot must equal collected plus rake")]
    fn test_validator_catches_bad_pot() {
        assert_valid_pokerstars_history(
            "PokerStars Hand #1: Hold'em No Limit (1/2) - x\n\
             Table 'Table 1' 9-max Seat #1 is the button\n\
             Seat 1: a (10 in chips)\n\
             Seat 2: b (10 in chips)\n\
             *** HOLE CARDS ***\n\
             b: folds\n\
             a collected 3 from pot\n\
             *** SUMMARY ***\n\
             Total pot 5 | Rake 0\n",
        );
    }

    #[test]
    #[should_panic(expected = "after")]
    fn test_validator_catches_street_order() {
        assert_valid_pokerstars_history(
            "PokerStars Hand #1: Hold'em No Limit (1/2) - x\n\
             Table 'Table 1' 9-max Seat #1 is the button\n\
             Seat 1: a (10 in chips)\n\
             *** HOLE CARDS ***\n\
             *** TURN *** [2c 3c 4c] [5c]\n\
             *** FLOP *** [2c 3c 4c]\n",
        );
    }
}
