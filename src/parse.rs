//! CSV readers for the three layouts the suite's performance tests write.
//!
//! Every file starts with a header row. Latency files keep it as bucket labels;
//! the network and CPU files discard it without looking at it. Rows carry a
//! trailing delimiter, so empty fields are dropped before conversion. Any field
//! that is not an integer fails the whole file.

use crate::error::{PerfError, Result};
use crate::model::{BandwidthSeries, LatencyTable, StressSeries};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Parse a latency histogram file into bucket labels and one row per run.
pub fn parse_latency_table(path: &Path) -> Result<LatencyTable> {
    let file = open(path)?;
    parse_latency_table_from_reader(file, &path.display().to_string())
}

/// Parse a network file into incoming/outgoing bandwidth series.
pub fn parse_bandwidth_pair(path: &Path) -> Result<BandwidthSeries> {
    let file = open(path)?;
    parse_bandwidth_pair_from_reader(file, &path.display().to_string())
}

/// Parse a CPU file into a stress series.
pub fn parse_stress_series(path: &Path) -> Result<StressSeries> {
    let file = open(path)?;
    parse_stress_series_from_reader(file, &path.display().to_string())
}

pub fn parse_latency_table_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<LatencyTable> {
    let mut records = records(reader);
    let headers: Vec<String> = next_header(&mut records, source_name)?
        .iter()
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();

    let mut runs = Vec::new();
    for record in records {
        let record = record?;
        let line = line_of(&record);
        let row = record
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.is_empty())
            .map(|(idx, field)| parse_int(field, source_name, line, idx + 1))
            .collect::<Result<Vec<u64>>>()?;

        if row.len() != headers.len() {
            return Err(PerfError::RowLengthMismatch {
                source_name: source_name.to_string(),
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }
        runs.push(row);
    }

    debug!(
        source = source_name,
        buckets = headers.len(),
        runs = runs.len(),
        "parsed latency table"
    );
    Ok(LatencyTable { headers, runs })
}

pub fn parse_bandwidth_pair_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<BandwidthSeries> {
    let mut records = records(reader);
    next_header(&mut records, source_name)?;

    let mut series = BandwidthSeries::default();
    for record in records {
        let record = record?;
        let line = line_of(&record);
        let incoming = int_column(&record, 1, source_name, line)?;
        let outgoing = int_column(&record, 2, source_name, line)?;
        series.incoming.push(incoming);
        series.outgoing.push(outgoing);
    }

    debug!(source = source_name, runs = series.run_count(), "parsed bandwidth");
    Ok(series)
}

pub fn parse_stress_series_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<StressSeries> {
    let mut records = records(reader);
    next_header(&mut records, source_name)?;

    let mut series = StressSeries::default();
    for record in records {
        let record = record?;
        let line = line_of(&record);
        series.values.push(int_column(&record, 1, source_name, line)?);
    }

    debug!(source = source_name, runs = series.run_count(), "parsed stress");
    Ok(series)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PerfError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PerfError::Io(e),
    })
}

// Rows may have differing field counts; length checks are done per layout.
fn records<R: Read>(reader: R) -> StringRecordsIntoIter<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records()
}

fn next_header<R: Read>(
    records: &mut StringRecordsIntoIter<R>,
    source_name: &str,
) -> Result<StringRecord> {
    match records.next() {
        Some(record) => Ok(record?),
        None => Err(PerfError::MissingHeader {
            source_name: source_name.to_string(),
        }),
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Fetch the 1-based `column` of `record` as a signed integer.
fn int_column(record: &StringRecord, column: usize, source_name: &str, line: u64) -> Result<i64> {
    let field = record
        .get(column - 1)
        .ok_or_else(|| PerfError::MissingField {
            source_name: source_name.to_string(),
            line,
            column,
        })?;
    parse_int(field, source_name, line, column)
}

fn parse_int<T: FromStr>(field: &str, source_name: &str, line: u64, column: usize) -> Result<T> {
    field
        .trim()
        .parse::<T>()
        .map_err(|_| PerfError::MalformedField {
            source_name: source_name.to_string(),
            line,
            column,
            value: field.to_string(),
        })
}
