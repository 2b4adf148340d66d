// File: crates/trace-demo/src/loader.rs
// Summary: Delimited-text loader turning `date,value` rows into an ordered Dataset.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;
use trace_core::{Dataset, Millis, Sample};

/// Load a CSV with a time column and a value column.
/// Unparseable values become absent samples; unparseable times skip the row.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_samples(rdr)
}

pub fn read_samples<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Dataset> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["date", "time", "timestamp", "datetime"]).unwrap_or(0);
    let i_value = idx(&["value", "v", "y", "close"]).unwrap_or(1);

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let Some(time) = rec.get(i_time).and_then(parse_time) else {
            skipped += 1;
            continue;
        };
        let value = rec
            .get(i_value)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        samples.push(Sample::new(time, value));
    }
    if skipped > 0 {
        tracing::warn!(skipped, "rows without a parseable time were dropped");
    }
    Dataset::try_new(samples).context("csv rows must be ordered by time")
}

/// ISO date (`%Y-%m-%d`, midnight UTC), RFC 3339 timestamp, or epoch seconds/milliseconds.
pub fn parse_time(s: &str) -> Option<Millis> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // Values above 1e12 are already milliseconds.
        return Some(if n > 10_i64.pow(12) { n as f64 } else { n as f64 * 1000.0 });
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis() as f64);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).timestamp_millis() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(text.as_bytes())
    }

    #[test]
    fn parses_dates_and_blank_values() {
        let data = read_samples(reader("date,value\n2013-04-28,135.98\n2013-04-29,\n2013-04-30,x\n")).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.samples()[0].time, 1_367_107_200_000.0);
        assert_eq!(data.samples()[0].value, 135.98);
        assert!(data.samples()[1].value.is_nan());
        assert!(data.samples()[2].value.is_nan());
    }

    #[test]
    fn accepts_epoch_and_rfc3339() {
        assert_eq!(parse_time("1700000000"), Some(1_700_000_000_000.0));
        assert_eq!(parse_time("1700000000123"), Some(1_700_000_000_123.0));
        assert_eq!(parse_time("1970-01-01T00:00:01Z"), Some(1000.0));
        assert_eq!(parse_time("yesterday"), None);
    }

    #[test]
    fn unordered_rows_are_an_error() {
        let err = read_samples(reader("date,value\n2013-04-29,1\n2013-04-28,2\n")).unwrap_err();
        assert!(err.to_string().contains("ordered by time"));
    }

    #[test]
    fn rows_without_time_are_skipped() {
        let data = read_samples(reader("time,value\n,1\n1000,2\n")).unwrap();
        assert_eq!(data.len(), 1);
    }
}
