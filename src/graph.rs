//! End-to-end formatting of an id → epoch graph.

use std::collections::HashMap;

use tracing::info;

use crate::interval::{match_interval, Interval};
use crate::transaction::{fill_transactions, sort_descending, to_unix_mappings, TransactionError};

pub fn format_graph(
    graph: &HashMap<i64, i64>,
    interval: Interval,
) -> Result<Vec<HashMap<i64, i64>>, TransactionError> {
    let records = fill_transactions(Vec::with_capacity(graph.len()), graph)?;
    let mut records = sort_descending(records);
    let matched = match_interval(interval, &mut records);
    let mappings = to_unix_mappings(&matched);

    info!(
        component = "graph",
        event = "graph.format.finish",
        interval = %interval,
        graph_entries = graph.len(),
        matched_entries = mappings.len()
    );

    Ok(mappings)
}

pub fn demo_graph() -> HashMap<i64, i64> {
    HashMap::from([
        (1, 1_616_026_248),
        (2, 1_616_019_048),
        (3, 1_616_022_648),
        (4, 1_615_889_448),
        (5, 1_615_871_448),
        (6, 1_234_545_757),
        (7, 1_613_672_577),
        (8, 1_615_493_354),
        (9, 1_614_849_048),
    ])
}
