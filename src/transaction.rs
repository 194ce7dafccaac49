//! Transaction records and the plumbing between raw id → epoch mappings and
//! time-ordered record sequences.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transaction {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("invalid unix timestamp {timestamp} for transaction {id}")]
    InvalidTimestamp { id: i64, timestamp: i64 },
}

impl Transaction {
    pub fn new(id: i64, timestamp: DateTime<Utc>) -> Self {
        Self { id, timestamp }
    }

    pub fn from_unix(id: i64, epoch_seconds: i64) -> Result<Self, TransactionError> {
        let timestamp = Utc.timestamp_opt(epoch_seconds, 0).single().ok_or(
            TransactionError::InvalidTimestamp {
                id,
                timestamp: epoch_seconds,
            },
        )?;
        Ok(Self::new(id, timestamp))
    }

    pub fn unix_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

pub fn fill_transactions(
    mut existing: Vec<Transaction>,
    graph: &HashMap<i64, i64>,
) -> Result<Vec<Transaction>, TransactionError> {
    existing.reserve(graph.len());
    for (&id, &epoch_seconds) in graph {
        existing.push(Transaction::from_unix(id, epoch_seconds)?);
    }

    debug!(
        component = "transactions",
        event = "transactions.filled",
        graph_entries = graph.len(),
        total_records = existing.len()
    );

    Ok(existing)
}

pub fn sort_descending(mut records: Vec<Transaction>) -> Vec<Transaction> {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records
}

pub fn to_unix_mappings(records: &[Transaction]) -> Vec<HashMap<i64, i64>> {
    records
        .iter()
        .map(|record| HashMap::from([(record.id, record.unix_seconds())]))
        .collect()
}
