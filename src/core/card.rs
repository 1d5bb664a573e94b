use std::fmt;

use super::ConversionError;

/// Card rank. `10` in the source logs is always stored as `Ten` and
/// rendered as `T`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// Take a character from the normalized rank vocabulary
    /// (`2`-`9`, `T`, `J`, `Q`, `K`, `A`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// Card suit. The source client writes suits as glyphs; the glyph is kept
/// as the canonical form and the single letter code is only produced when
/// rendering.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '♠' => Some(Self::Spade),
            '♥' => Some(Self::Heart),
            '♣' => Some(Self::Club),
            // The client uses the lozenge for diamonds, older exports the real suit.
            '◆' | '♦' => Some(Self::Diamond),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Heart => '♥',
            Self::Club => '♣',
            Self::Diamond => '◆',
        }
    }

    /// The PokerStars letter for this suit.
    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Club => 'c',
            Self::Diamond => 'd',
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a single source token such as `♥A`, `◆10` or `◆T`.
    pub fn from_source(token: &str) -> Result<Self, ConversionError> {
        let mut chars = token.trim().chars();
        let suit = chars
            .next()
            .and_then(Suit::from_glyph)
            .ok_or_else(|| ConversionError::InvalidCard(token.to_string()))?;
        let rank: String = chars.collect();
        let value = match rank.as_str() {
            "10" => Some(Value::Ten),
            r if r.chars().count() == 1 => r.chars().next().and_then(Value::from_char),
            _ => None,
        }
        .ok_or_else(|| ConversionError::InvalidCard(token.to_string()))?;
        Ok(Self { value, suit })
    }

    /// The source notation, glyph first.
    pub fn to_source(self) -> String {
        format!("{}{}", self.suit.glyph(), self.value.to_char())
    }
}

/// Renders in PokerStars notation, e.g. `Th`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Split a run of concatenated source cards (`♥6◆3♥4`, `◆10♣J`) into cards.
///
/// `10` is rewritten to `T` before the run is chunked, so every card is
/// exactly two characters wide. Chunks that don't form a card are dropped.
pub fn split_card_run(run: &str) -> Vec<Card> {
    let normalized: Vec<char> = run
        .replace("10", "T")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    normalized
        .chunks(2)
        .filter_map(|chunk| {
            let token: String = chunk.iter().collect();
            match Card::from_source(&token) {
                Ok(card) => Some(card),
                Err(_) => {
                    tracing::trace!(%token, "Dropping malformed card token");
                    None
                }
            }
        })
        .collect()
}

/// Join cards with single spaces, the way PokerStars lists them inside
/// brackets.
pub fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_glyph_first() {
        let card = Card::from_source("♥A").unwrap();
        assert_eq!(card, Card::new(Value::Ace, Suit::Heart));
        assert_eq!(card.to_string(), "Ah");
    }

    #[test]
    fn test_ten_is_rendered_as_t() {
        let card = Card::from_source("◆10").unwrap();
        assert_eq!(card.value, Value::Ten);
        assert_eq!(card.to_string(), "Td");
        assert_eq!(card.to_source(), "◆T");
    }

    #[test]
    fn test_both_diamond_glyphs() {
        assert_eq!(Card::from_source("♦9").unwrap().suit, Suit::Diamond);
        assert_eq!(Card::from_source("◆9").unwrap().suit, Suit::Diamond);
    }

    #[test]
    fn test_bad_tokens() {
        assert!(Card::from_source("A♥").is_err());
        assert!(Card::from_source("♥1").is_err());
        assert!(Card::from_source("").is_err());
    }

    #[test]
    fn test_split_card_run() {
        let cards = split_card_run("♥K◆4◆10");
        assert_eq!(join_cards(&cards), "Kh 4d Td");
    }

    #[test]
    fn test_split_card_run_empty() {
        assert!(split_card_run("").is_empty());
    }
}
