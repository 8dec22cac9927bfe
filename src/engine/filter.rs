use std::collections::HashSet;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::model::NormalizedTransfer;
use crate::model::TransactionDirection;

/// Narrows the transaction list before aggregation. Every bound is optional;
/// the default filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Inclusive lower block-time bound, unix seconds.
    pub from_time: Option<i64>,
    /// Inclusive upper block-time bound, unix seconds.
    pub to_time: Option<i64>,
    pub min_value_usd: Option<f64>,
    /// Only keep transfers that move this mint.
    pub mint: Option<String>,
    /// Records that carry no direction are dropped once this is set.
    pub directions: Option<HashSet<TransactionDirection>>,
}

impl TransactionFilter {
    pub fn between(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Self {
        Self {
            from_time: Some(from.timestamp()),
            to_time: Some(to.timestamp()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(
        &self,
        transfer: &NormalizedTransfer,
    ) -> bool {
        if self.from_time.is_some() || self.to_time.is_some() {
            let Some(block_time) = transfer.block_time else {
                return false;
            };
            if self.from_time.is_some_and(|from| block_time < from) {
                return false;
            }
            if self.to_time.is_some_and(|to| block_time > to) {
                return false;
            }
        }

        if self.min_value_usd.is_some_and(|min| transfer.value_usd < min) {
            return false;
        }

        if let Some(mint) = &self.mint {
            if transfer.token.as_ref().map(|t| &t.mint) != Some(mint) {
                return false;
            }
        }

        if let Some(directions) = &self.directions {
            match transfer.direction {
                Some(direction) if directions.contains(&direction) => {},
                _ => return false,
            }
        }

        true
    }

    pub fn apply<'a>(
        &self,
        transfers: impl IntoIterator<Item = &'a NormalizedTransfer>,
    ) -> Vec<&'a NormalizedTransfer> {
        transfers.into_iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::transaction::TokenLeg;

    fn transfer(
        block_time: Option<i64>,
        value_usd: f64,
    ) -> NormalizedTransfer {
        NormalizedTransfer {
            signature: "sig".to_string(),
            block_time,
            direction: Some(TransactionDirection::Received),
            from: Some("A".to_string()),
            to: Some("B".to_string()),
            value_usd,
            token: None,
        }
    }

    #[test]
    fn default_filter_keeps_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&transfer(None, 0.0)));
    }

    #[test]
    fn time_window_is_inclusive_and_drops_undated() {
        let from = Utc.timestamp_opt(100, 0).unwrap();
        let to = Utc.timestamp_opt(200, 0).unwrap();
        let filter = TransactionFilter::between(from, to);
        assert!(filter.matches(&transfer(Some(100), 1.0)));
        assert!(filter.matches(&transfer(Some(200), 1.0)));
        assert!(!filter.matches(&transfer(Some(201), 1.0)));
        assert!(!filter.matches(&transfer(None, 1.0)));
    }

    #[test]
    fn mint_and_direction_focus() {
        let mut with_token = transfer(None, 1.0);
        with_token.token = Some(TokenLeg { mint: "MintA".to_string(), symbol: None, amount: 1.0 });

        let filter = TransactionFilter { mint: Some("MintA".to_string()), ..Default::default() };
        assert!(filter.matches(&with_token));
        assert!(!filter.matches(&transfer(None, 1.0)));

        let filter = TransactionFilter {
            directions: Some([TransactionDirection::Sent].into_iter().collect()),
            ..Default::default()
        };
        assert!(!filter.matches(&with_token));
    }

    #[test]
    fn min_value_drops_small_transfers() {
        let filter = TransactionFilter { min_value_usd: Some(10.0), ..Default::default() };
        assert_eq!(filter.apply(&[transfer(None, 5.0), transfer(None, 15.0)]).len(), 1);
    }
}
