use std::fmt::{self, Display};

use crate::core::{Card, Chips};

/// A betting street, indexed the way the client's `[street][position]`
/// bracket counts them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "PREFLOP"),
            Street::Flop => write!(f, "FLOP"),
            Street::Turn => write!(f, "TURN"),
            Street::River => write!(f, "RIVER"),
        }
    }
}

/// Hand metadata from the `시작` line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartOfHand {
    pub stage_id: String,
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub minimum_buy_in: Chips,
    pub club_buy_in_rate: Chips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ante {
    pub amount: Chips,
    pub remaining_stack: Chips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlindKind {
    Small,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostedBlind {
    pub kind: BlindKind,
    pub amount: Chips,
    pub remaining_stack: Option<Chips>,
}

/// A forced per-hand contribution that is posted like a blind but is
/// neither the small nor the big blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryFee {
    pub amount: Chips,
    pub remaining_stack: Option<Chips>,
}

/// A community card deal. Every deal repeats the player's hole cards and the
/// whole board so far, one group per street.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommunityCards {
    pub hole_cards: Vec<Card>,
    pub streets: Vec<Vec<Card>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ActionKind {
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
    Fold,
}

impl ActionKind {
    /// Bet, raise and all-in put new money in that others have to match.
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn)
    }
}

/// The `[street][position]` pair of a betting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BettingOrder {
    pub street: Street,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BettingAction {
    pub kind: ActionKind,
    /// Chips this action added to the pot.
    pub amount: Chips,
    pub remaining_stack: Option<Chips>,
    pub order: Option<BettingOrder>,
    pub decision_time_ms: Option<u64>,
    pub uncalled_bet: Option<Chips>,
}

impl BettingAction {
    pub fn is_all_in(&self) -> bool {
        self.remaining_stack == Some(0)
    }

    /// Sort key inside a street. Unordered actions go last.
    pub fn position(&self) -> u32 {
        self.order.map(|o| o.position).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    pub outcome: Outcome,
    pub hand_label: String,
    pub final_cards: String,
    /// Present when the hand ended without a showdown (`기권`).
    pub forfeit: Option<String>,
}

impl HandResult {
    pub fn went_to_showdown(&self) -> bool {
        self.forfeit.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinMoney {
    pub amount: Chips,
    pub final_stack: Option<Chips>,
}

/// One recognised line of a player's action log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    StartOfHand(StartOfHand),
    Identity { nickname: String },
    Ante(Ante),
    PostedBlind(PostedBlind),
    EntryFee(EntryFee),
    HoleCards([Card; 2]),
    CommunityCards(CommunityCards),
    BettingAction(BettingAction),
    Result(HandResult),
    WinMoney(WinMoney),
}
