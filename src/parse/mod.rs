//! Turning one player's free-text action log into typed events.
//!
//! Every line is classified by the marker it contains and parsed on its own,
//! except the separate uncalled-bet line which is folded into the betting
//! action before it. Lines that match nothing are dropped.
mod betting;
mod event;
mod line;
pub mod markers;

pub use betting::{classify_action, parse_betting_action};
pub use event::{
    ActionKind, Ante, BettingAction, BettingOrder, BlindKind, CommunityCards, EntryFee, Event,
    HandResult, Outcome, PostedBlind, StartOfHand, Street, WinMoney,
};
pub use line::{classify_line, parse_action_log, LineKind};
