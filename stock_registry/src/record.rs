//! Stock record value type and record-file parsing.
//!
//! A `Record` is the unit stored by both `RecordList` and `RecordIndex`. Each
//! structure keeps its own copy, so the type is a plain owned value that is cheap
//! enough to clone.
//!
//! Record files hold one record per line as `SYMBOL PRICE VOLUME`; fields may be
//! separated by whitespace, commas, or both. Blank lines and `#` comments are
//! skipped.
use std::io::BufRead;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// One instrument entry.
///
/// Price and volume are stored as given; negative values are accepted here and
/// left for the input layer to reject if it cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Ticker symbol, the logical key (e.g., `AAPL`). Compared case-sensitively.
    pub symbol: String,
    /// Last known price.
    pub price: f64,
    /// Traded volume.
    pub volume: i64,
}

impl Record {
    /// Creates a new record.
    pub fn new(symbol: &str, price: f64, volume: i64) -> Self {
        Record {
            symbol: String::from(symbol),
            price,
            volume,
        }
    }

    /// Symbol as a string slice.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Encode the record to JSON text.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

fn parse_fields(line: &str) -> Result<Record, String> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    let [symbol, price, volume] = fields.as_slice() else {
        return Err(format!(
            "expected `SYMBOL PRICE VOLUME`, got {} field(s)",
            fields.len()
        ));
    };
    let price: f64 = price
        .parse()
        .map_err(|e| format!("invalid price `{}`: {}", price, e))?;
    let volume: i64 = volume
        .parse()
        .map_err(|e| format!("invalid volume `{}`: {}", volume, e))?;

    Ok(Record::new(symbol, price, volume))
}

impl FromStr for Record {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fields(s).map_err(RegistryError::Format)
    }
}

/// Trait providing file parsing for records.
pub trait RecordParser {
    /// Parses records from a buffered reader.
    ///
    /// Each non-empty, non-comment line is parsed as a single record. Returns an
    /// error naming the first line that cannot be parsed.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Record>, RegistryError>;
}

impl RecordParser for Record {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, RegistryError> {
        let mut records = Vec::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(RegistryError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            match parse_fields(trimmed_line) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    return Err(RegistryError::ParseRecordsFile {
                        line: idx + 1,
                        reason,
                    });
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_whitespace_and_comma_separated_lines() {
        let rec: Record = "AAPL 150.0 1000".parse().unwrap();
        assert_eq!(rec, Record::new("AAPL", 150.0, 1000));

        let rec: Record = "MSFT, 310.5, 20".parse().unwrap();
        assert_eq!(rec, Record::new("MSFT", 310.5, 20));
    }

    #[test]
    fn accepts_negative_values() {
        let rec: Record = "ODD -1.5 -7".parse().unwrap();
        assert_eq!(rec.price, -1.5);
        assert_eq!(rec.volume, -7);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = "AAPL 150.0".parse::<Record>().unwrap_err();
        assert!(matches!(err, RegistryError::Format(_)));
    }

    #[test]
    fn reader_skips_blank_and_comment_lines() {
        let input = "# seed data\n\nAAPL 150 1000\n  \nTSLA,250.25,40\n";
        let records = Record::parse_from_reader(Cursor::new(input)).unwrap();
        assert_eq!(
            records,
            vec![Record::new("AAPL", 150.0, 1000), Record::new("TSLA", 250.25, 40)]
        );
    }

    #[test]
    fn reader_reports_offending_line() {
        let input = "AAPL 150 1000\nTSLA abc 40\n";
        let err = Record::parse_from_reader(Cursor::new(input)).unwrap_err();
        match err {
            RegistryError::ParseRecordsFile { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("invalid price"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_encoding_keeps_field_names() {
        let json = Record::new("AAPL", 150.0, 1000).to_json().unwrap();
        assert_eq!(json, r#"{"symbol":"AAPL","price":150.0,"volume":1000}"#);
    }
}
