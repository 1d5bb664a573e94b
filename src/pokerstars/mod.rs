//! # PokerStars hand history text
//!
//! Renders an [`crate::assemble::AssembledHand`] in the PokerStars text
//! dialect that trackers and HUDs read: header, seats, forced bets, one
//! section per street, pot collection and the summary.
//!
//! Cards are rendered in the `Ah`/`Td` notation, amounts as whole numbers
//! with an optional currency prefix.
mod config;
mod writer;

pub use config::ConverterConfig;
pub use writer::PokerStarsHand;
