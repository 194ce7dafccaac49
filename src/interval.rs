//! Interval matching over time-descending transactions.
//!
//! Each matcher walks the sequence with an anchor and a candidate cursor.
//! The first candidate that sits one interval before the anchor is rounded
//! and emitted, then becomes the next anchor, so consecutive matches form a
//! chain. Input must already be sorted most-recent-first.

use std::fmt;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::rounding::{round_to_midnight, round_to_next_hour};
use crate::transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Month,
    Week,
    Day,
    Hour,
}

pub const ALL_INTERVALS: [Interval; 4] = [
    Interval::Month,
    Interval::Week,
    Interval::Day,
    Interval::Hour,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("unsupported interval: {0}")]
    Unsupported(String),
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Week => "week",
            Interval::Day => "day",
            Interval::Hour => "hour",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parse_interval(input: &str) -> Result<Interval, IntervalError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "month" => Ok(Interval::Month),
        "week" => Ok(Interval::Week),
        "day" => Ok(Interval::Day),
        "hour" => Ok(Interval::Hour),
        _ => Err(IntervalError::Unsupported(input.to_string())),
    }
}

// When the leading record (index 0) is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeadPolicy {
    FirstMatch,
    FirstComparison,
}

struct ChainRule {
    interval: Interval,
    lead: LeadPolicy,
    round: fn(DateTime<Utc>) -> Option<DateTime<Utc>>,
    is_match: fn(&Transaction, &Transaction) -> bool,
}

pub fn match_interval(interval: Interval, records: &mut [Transaction]) -> Vec<Transaction> {
    match interval {
        Interval::Month => match_monthly(records),
        Interval::Week => match_weekly(records),
        Interval::Day => match_daily(records),
        Interval::Hour => match_hourly(records),
    }
}

pub fn match_monthly(records: &mut [Transaction]) -> Vec<Transaction> {
    scan_chains(
        records,
        &ChainRule {
            interval: Interval::Month,
            lead: LeadPolicy::FirstMatch,
            round: midnight,
            is_match: one_month_apart,
        },
    )
}

pub fn match_weekly(records: &mut [Transaction]) -> Vec<Transaction> {
    scan_chains(
        records,
        &ChainRule {
            interval: Interval::Week,
            lead: LeadPolicy::FirstMatch,
            round: midnight,
            is_match: one_iso_week_apart,
        },
    )
}

/// Compares day-of-month only, so pairs straddling a month boundary
/// (Feb 1 after Jan 31) do not match.
pub fn match_daily(records: &mut [Transaction]) -> Vec<Transaction> {
    scan_chains(
        records,
        &ChainRule {
            interval: Interval::Day,
            lead: LeadPolicy::FirstMatch,
            round: midnight,
            is_match: one_day_of_month_apart,
        },
    )
}

/// The leading record is always kept, rounded, once a second record exists.
/// Rounding rewrites the anchor in place before later comparisons. A record
/// whose next hour is not representable is left out but still anchors.
pub fn match_hourly(records: &mut [Transaction]) -> Vec<Transaction> {
    scan_chains(
        records,
        &ChainRule {
            interval: Interval::Hour,
            lead: LeadPolicy::FirstComparison,
            round: round_to_next_hour,
            is_match: one_hour_apart,
        },
    )
}

fn scan_chains(records: &mut [Transaction], rule: &ChainRule) -> Vec<Transaction> {
    info!(
        component = "matcher",
        event = "matcher.scan.start",
        interval = %rule.interval,
        input_records = records.len()
    );

    let mut out = Vec::new();
    let mut links = 0usize;
    let mut anchor = 0usize;

    while anchor < records.len() {
        let mut next_anchor = anchor + 1;

        for candidate in anchor + 1..records.len() {
            let matched = (rule.is_match)(&records[anchor], &records[candidate]);
            let leading = anchor == 0
                && match rule.lead {
                    LeadPolicy::FirstMatch => matched,
                    LeadPolicy::FirstComparison => candidate == 1,
                };

            if leading {
                emit(records, anchor, rule.round, &mut out);
            }

            if matched {
                emit(records, candidate, rule.round, &mut out);
                links += 1;
                debug!(
                    component = "matcher",
                    event = "matcher.chain.link",
                    interval = %rule.interval,
                    anchor_id = records[anchor].id,
                    matched_id = records[candidate].id
                );
                next_anchor = candidate;
                break;
            }
        }

        anchor = next_anchor;
    }

    info!(
        component = "matcher",
        event = "matcher.scan.finish",
        interval = %rule.interval,
        input_records = records.len(),
        output_records = out.len(),
        links
    );

    out
}

fn emit(
    records: &mut [Transaction],
    index: usize,
    round: fn(DateTime<Utc>) -> Option<DateTime<Utc>>,
    out: &mut Vec<Transaction>,
) {
    let record = &mut records[index];
    match round(record.timestamp) {
        Some(rounded) => {
            record.timestamp = rounded;
            out.push(*record);
        }
        None => warn!(
            component = "matcher",
            event = "matcher.round.out_of_range",
            id = record.id,
            timestamp = %record.timestamp
        ),
    }
}

fn midnight(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    Some(round_to_midnight(t))
}

fn one_month_apart(newer: &Transaction, older: &Transaction) -> bool {
    month_before(newer.timestamp.date_naive()) == Some(older.timestamp.date_naive())
}

fn one_iso_week_apart(newer: &Transaction, older: &Transaction) -> bool {
    let newer_week = i64::from(newer.timestamp.iso_week().week());
    let older_week = i64::from(older.timestamp.iso_week().week());
    newer_week - older_week == 1
}

fn one_day_of_month_apart(newer: &Transaction, older: &Transaction) -> bool {
    i64::from(newer.timestamp.day()) - i64::from(older.timestamp.day()) == 1
}

fn one_hour_apart(newer: &Transaction, older: &Transaction) -> bool {
    newer.timestamp - older.timestamp == TimeDelta::hours(1)
}

// Days past the end of the shorter month spill forward: Mar 31 -> Mar 3.
fn month_before(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(date.day() - 1)))
}
