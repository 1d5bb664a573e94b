#![no_main]

extern crate arbitrary;
extern crate kr_hand_history;
extern crate libfuzzer_sys;

use kr_hand_history::parse::{ActionKind, Street};
use kr_hand_history::test_util::{betting_line, start_line};
use kr_hand_history::{convert_hand, ConverterConfig, HandUnit, RawPlayer};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzAction {
    kind: ActionKind,
    amount: u32,
    remaining: u32,
    street: Street,
    position: u8,
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
enum Input {
    /// Anything at all, straight into the converter.
    Raw(HandUnit),
    /// Well formed lines with arbitrary numbers.
    Lines {
        stack: u32,
        small_blind: u16,
        big_blind: u16,
        players: Vec<Vec<FuzzAction>>,
    },
}

fn from_lines(
    stack: u32,
    small_blind: u16,
    big_blind: u16,
    players: Vec<Vec<FuzzAction>>,
) -> HandUnit {
    let start = start_line(stack.into(), small_blind.into(), big_blind.into());
    let players = players
        .into_iter()
        .enumerate()
        .map(|(idx, actions)| {
            let mut lines = vec![start.clone(), format!("* NICKNAME:[p{idx}]")];
            lines.extend(actions.iter().map(|a| {
                betting_line(
                    a.kind,
                    a.amount.into(),
                    a.remaining.into(),
                    a.street,
                    a.position.into(),
                    0,
                )
            }));
            RawPlayer {
                nickname: format!("p{idx}"),
                action_log: lines.join("\n"),
                ..Default::default()
            }
        })
        .collect();
    HandUnit {
        round_id: "1-1".to_string(),
        players,
        ..Default::default()
    }
}

fuzz_target!(|input: Input| {
    let unit = match input {
        Input::Raw(unit) => unit,
        Input::Lines {
            stack,
            small_blind,
            big_blind,
            players,
        } => from_lines(stack, small_blind, big_blind, players),
    };

    if let Some(converted) = convert_hand(&unit, &ConverterConfig::default()) {
        assert!(converted.text.starts_with("PokerStars Hand #"));
        assert!(converted.text.contains("*** SUMMARY ***"));
    }
});
