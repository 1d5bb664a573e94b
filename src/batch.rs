//! Converting many hands at once on the rayon thread pool.
use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{error, info, instrument};

use crate::convert::{convert_hand, ConvertedHand};
use crate::hand::HandUnit;
use crate::pokerstars::ConverterConfig;

/// Outcome of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// One entry per input hand, `None` where the hand was skipped.
    pub hands: Vec<Option<ConvertedHand>>,
    pub converted: usize,
    pub skipped: usize,
    pub flagged: usize,
}

impl BatchReport {
    pub fn converted_hands(&self) -> impl Iterator<Item = &ConvertedHand> {
        self.hands.iter().flatten()
    }

    /// All converted hands as one document, separated by blank lines.
    pub fn to_text(&self) -> String {
        self.converted_hands()
            .map(|h| h.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Convert one hand, turning a panic into a skipped hand.
fn convert_isolated(unit: &HandUnit, config: &ConverterConfig) -> Option<ConvertedHand> {
    catch_unwind(AssertUnwindSafe(|| convert_hand(unit, config))).unwrap_or_else(|_| {
        error!(round_id = %unit.round_id, "Conversion panicked, skipping hand");
        None
    })
}

/// Convert every unit independently. A hand that fails, or panics, is
/// counted as skipped and doesn't affect the rest.
#[instrument(level = "debug", skip_all, fields(hands = units.len()))]
pub fn convert_batch(units: &[HandUnit], config: &ConverterConfig) -> BatchReport {
    let hands: Vec<Option<ConvertedHand>> = units
        .par_iter()
        .map(|unit| convert_isolated(unit, config))
        .collect();

    let converted = hands.iter().flatten().count();
    let flagged = hands.iter().flatten().filter(|h| h.needs_review).count();
    let skipped = hands.len() - converted;
    info!(converted, skipped, flagged, "Batch finished");

    BatchReport {
        hands,
        converted,
        skipped,
        flagged,
    }
}
