//! Interval chaining for timestamped transaction graphs.
//!
//! A graph maps transaction ids to epoch seconds. Formatting sorts the
//! transactions newest first, keeps the runs whose neighbours sit one month,
//! ISO week, day or hour apart, and snaps the kept timestamps to midnight
//! (or the following hour for hourly runs).

mod config;
mod graph;
mod input;
mod interval;
mod observability;
mod rounding;
mod transaction;

pub use config::{formatter_config_from_env, ConfigError, FormatterConfig, InputSource};
pub use graph::{demo_graph, format_graph};
pub use input::{
    load_graph_file, parse_input_format, parse_json_graph, read_csv_graph, read_graph,
    render_mappings, InputError, InputFormat,
};
pub use interval::{
    match_daily, match_hourly, match_interval, match_monthly, match_weekly, parse_interval,
    Interval, IntervalError, ALL_INTERVALS,
};
pub use observability::{
    init_logging, log_app_start, log_interval_selected, log_output_written,
    logging_config_from_env, LogFormat, LoggingConfig, LoggingInitError,
};
pub use rounding::{round_to_midnight, round_to_next_hour};
pub use transaction::{
    fill_transactions, sort_descending, to_unix_mappings, Transaction, TransactionError,
};
