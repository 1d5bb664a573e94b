#![deny(clippy::all)]
//! # kr_hand_history
//!
//! Converts hand histories from a Korean online poker client into the
//! PokerStars hand history text format, so that trackers, HUDs and review
//! tools that only read PokerStars can use them.
//!
//! The client logs every player's view of a hand separately as free Korean
//! text. Conversion runs in four steps:
//!
//! 1. [`parse`] turns one player's log into typed events.
//! 2. [`hand`] collects the players' events into an immutable [`hand::Hand`].
//! 3. [`assemble`] works out seating, the button, bet sizes, uncalled bets,
//!    pots, rake and the showdown across all players.
//! 4. [`pokerstars`] renders the assembled hand as text.
//!
//! ```
//! use kr_hand_history::{convert_hand, ConverterConfig, HandUnit, RawPlayer};
//!
//! let unit = HandUnit {
//!     round_id: "1-1".to_string(),
//!     timestamp: "2025-02-08 오후 11:04:31".to_string(),
//!     players: vec![RawPlayer {
//!         nickname: "hero".to_string(),
//!         action_log: "* 시작 : [StageNo:1] [Credit:1,000원] [SB:5원] [BB:10원] [MBI:0원] [CBIR:100]"
//!             .to_string(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! let converted = convert_hand(&unit, &ConverterConfig::default()).unwrap();
//! assert!(converted.text.starts_with("PokerStars Hand #11: Hold'em No Limit (5/10)"));
//! ```

/// Cards, chip amounts and errors.
pub mod core;

/// Line classification and event parsing of a player's action log.
pub mod parse;

/// The hand model.
pub mod hand;

/// Cross-player reconstruction of a hand.
pub mod assemble;

/// PokerStars text rendering.
pub mod pokerstars;

/// Source timestamp normalisation.
pub mod timestamp;

mod convert;

/// Parallel conversion of many hands.
#[cfg(feature = "batch")]
pub mod batch;

/// Fixtures and validation helpers for tests and benchmarks.
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use crate::convert::{convert_hand, try_convert_hand, ConvertedHand};
pub use crate::core::ConversionError;
pub use crate::hand::{HandUnit, RawPlayer};
pub use crate::pokerstars::ConverterConfig;
