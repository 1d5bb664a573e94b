#![no_main]

extern crate kr_hand_history;
extern crate libfuzzer_sys;

use kr_hand_history::core::MAX_AMOUNT;
use kr_hand_history::parse::{parse_action_log, Event};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let events = parse_action_log(text);
    assert!(events.len() <= text.lines().count());

    for event in &events {
        match event {
            Event::BettingAction(action) => {
                assert!((0..=MAX_AMOUNT).contains(&action.amount));
                if let Some(uncalled) = action.uncalled_bet {
                    assert!((0..=MAX_AMOUNT).contains(&uncalled));
                }
            }
            Event::Ante(ante) => assert!(ante.amount >= 0),
            _ => {}
        }
    }
});
