use chrono::NaiveDateTime;

/// Knobs for the rendered PokerStars text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Prefix for every amount, e.g. `$`. Empty by default.
    pub currency_symbol: String,
    /// Replaces the hand's own timestamp, which the client sometimes gets
    /// wrong.
    pub timestamp_override: Option<NaiveDateTime>,
    pub timezone_label: String,
    pub table_name: String,
    pub max_seats: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            currency_symbol: String::new(),
            timestamp_override: None,
            timezone_label: "KST".to_string(),
            table_name: "Table 1".to_string(),
            max_seats: 9,
        }
    }
}

impl ConverterConfig {
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_timestamp_override(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp_override = Some(timestamp);
        self
    }
}
