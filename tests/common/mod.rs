#![allow(dead_code)]

use solviz::model::FlattenedTransaction;
use solviz::model::Transaction;
use solviz::model::TransactionDirection;
use solviz::model::TransactionRecord;

/// Test fixtures for building transaction lists
pub struct TestFixtures;

impl TestFixtures {
    /// Flattened transfer with only the fields the aggregator reads
    pub fn transfer(
        from: &str,
        to: &str,
        value_usd: f64,
    ) -> TransactionRecord {
        TransactionRecord::Flattened(FlattenedTransaction {
            signature: format!("{}->{}:{}", from, to, value_usd),
            block_time: None,
            direction: TransactionDirection::Sent,
            amount: 0.0,
            symbol: None,
            mint: None,
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            by: None,
            interacted_with: vec![to.to_string()],
            value_usd,
            token_amount: None,
            token_symbol: None,
            token_mint: None,
        })
    }

    pub fn timed_transfer(
        from: &str,
        to: &str,
        value_usd: f64,
        block_time: i64,
    ) -> TransactionRecord {
        let mut record = Self::transfer(from, to, value_usd);
        if let TransactionRecord::Flattened(tx) = &mut record {
            tx.block_time = Some(block_time);
        }
        record
    }

    /// Raw program call with no transfer shape
    pub fn program_call(
        fee_payer: &str,
        program_id: Option<&str>,
    ) -> TransactionRecord {
        let json = match program_id {
            Some(program_id) => serde_json::json!({
                "signature": format!("call-{}", fee_payer),
                "feePayer": fee_payer,
                "type": "UNKNOWN",
                "instructions": [{ "programId": program_id }],
            }),
            None => serde_json::json!({
                "signature": format!("call-{}", fee_payer),
                "feePayer": fee_payer,
                "type": "UNKNOWN",
            }),
        };
        TransactionRecord::Raw(serde_json::from_value::<Transaction>(json).unwrap())
    }

    pub fn transfers(edges: &[(&str, &str, f64)]) -> Vec<TransactionRecord> {
        edges.iter().map(|(from, to, value)| Self::transfer(from, to, *value)).collect()
    }
}
