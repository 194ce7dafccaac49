//! Loading raw graphs from JSON or CSV and rendering formatted output.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid json graph: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid csv graph: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct GraphRow {
    id: i64,
    timestamp: i64,
}

pub fn parse_input_format(raw: &str) -> Option<InputFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Some(InputFormat::Json),
        "csv" => Some(InputFormat::Csv),
        _ => None,
    }
}

pub fn parse_json_graph(raw: &str) -> Result<HashMap<i64, i64>, InputError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn read_csv_graph<R: Read>(reader: R) -> Result<HashMap<i64, i64>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut graph = HashMap::new();

    for row in csv_reader.deserialize() {
        let row: GraphRow = row?;
        if let Some(previous) = graph.insert(row.id, row.timestamp) {
            warn!(
                component = "input",
                event = "input.duplicate_id",
                id = row.id,
                replaced_timestamp = previous,
                timestamp = row.timestamp
            );
        }
    }

    Ok(graph)
}

pub fn read_graph<R: Read>(
    mut reader: R,
    format: InputFormat,
) -> Result<HashMap<i64, i64>, InputError> {
    let graph = match format {
        InputFormat::Json => {
            let mut raw = String::new();
            reader.read_to_string(&mut raw)?;
            parse_json_graph(&raw)?
        }
        InputFormat::Csv => read_csv_graph(reader)?,
    };

    info!(
        component = "input",
        event = "input.loaded",
        format = ?format,
        entries = graph.len()
    );

    Ok(graph)
}

pub fn load_graph_file(path: &Path, format: InputFormat) -> Result<HashMap<i64, i64>, InputError> {
    read_graph(File::open(path)?, format)
}

pub fn render_mappings(mappings: &[HashMap<i64, i64>]) -> Result<String, InputError> {
    Ok(serde_json::to_string(mappings)?)
}
