//! Shared building blocks: cards as the client writes them, chip amounts and
//! the conversion error type.

mod card;
pub use self::card::{join_cards, split_card_run, Card, Suit, Value};

mod chips;
pub use self::chips::{
    fmt_chips, parse_or_zero, parse_signed, parse_unsigned, Chips, MAX_AMOUNT, MONEY_UNIT,
};

mod error;
pub use self::error::ConversionError;
