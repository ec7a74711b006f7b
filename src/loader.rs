//! CSV ingestion into a [`BinarySearchTree`].
//!
//! ## Layout
//!
//! The loader reads the municipal auction export format. The first row is a
//! header and is skipped. Columns used:
//!
//! | Column | Field   |
//! |--------|---------|
//! | 0      | `title` |
//! | 1      | `id`    |
//! | 4      | `amount` (e.g. `"$1,234.56"`) |
//! | 8      | `fund`  |
//!
//! Fields may be quoted; a doubled quote inside a quoted field is a literal
//! quote, and quoted fields may span lines.
//!
//! ## Bad Rows
//!
//! A row that is too short or has an unparseable amount is logged and
//! skipped. Only I/O failures abort the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::tree::BinarySearchTree;
use crate::types::amount::parse_amount;
use crate::types::Bid;

/// Column holding the item title
pub const TITLE_COLUMN: usize = 0;

/// Column holding the bid id
pub const ID_COLUMN: usize = 1;

/// Column holding the winning bid amount
pub const AMOUNT_COLUMN: usize = 4;

/// Column holding the fund name
pub const FUND_COLUMN: usize = 8;

/// Minimum number of columns a bid row must have
pub const MIN_COLUMNS: usize = FUND_COLUMN + 1;

/// Outcome of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Rows inserted into the tree
    pub loaded: usize,

    /// Data rows rejected (too short or bad amount)
    pub skipped: usize,
}

// ============================================================================
// CSV Reader
// ============================================================================

/// Streaming CSV record reader.
///
/// Yields one `Vec<String>` per record. Line endings may be `\n` or `\r\n`.
/// Input is read as bytes; invalid UTF-8 is replaced with U+FFFD rather
/// than failing the read.
pub struct CsvReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Read the next record, or None at end of input
    fn read_record(&mut self) -> io::Result<Option<Vec<String>>> {
        let mut record = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut started = false;

        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                // EOF: flush a record that was not newline-terminated
                if !started {
                    return Ok(None);
                }
                record.push(field);
                return Ok(Some(record));
            }
            started = true;

            let line = String::from_utf8_lossy(&self.line);
            let mut chars = line.chars().peekable();
            while let Some(c) = chars.next() {
                match c {
                    '"' if in_quotes => {
                        if chars.peek() == Some(&'"') {
                            field.push('"');
                            chars.next();
                        } else {
                            in_quotes = false;
                        }
                    }
                    '"' => in_quotes = true,
                    ',' if !in_quotes => record.push(mem::take(&mut field)),
                    '\n' if !in_quotes => {
                        record.push(field);
                        return Ok(Some(record));
                    }
                    '\r' if !in_quotes => {}
                    _ => field.push(c),
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Convert one CSV record into a bid
///
/// # Arguments
///
/// * `row` - 1-based data row number, used in errors
/// * `record` - The record's fields
pub fn parse_bid(row: usize, record: &[String]) -> Result<Bid, LoadError> {
    if record.len() < MIN_COLUMNS {
        return Err(LoadError::MissingColumns {
            row,
            expected: MIN_COLUMNS,
            found: record.len(),
        });
    }

    let amount = parse_amount(&record[AMOUNT_COLUMN])
        .map_err(|source| LoadError::Amount { row, source })?;

    Ok(Bid::new(
        record[ID_COLUMN].as_str(),
        record[TITLE_COLUMN].as_str(),
        record[FUND_COLUMN].as_str(),
        amount,
    ))
}

/// A record from an empty line
fn is_blank(record: &[String]) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Load bids from a CSV stream into the tree
///
/// # Returns
///
/// Counts of loaded and skipped rows, or the I/O error that stopped the load
///
/// # Example
///
/// ```
/// use bid_tree::loader::load_bids;
/// use bid_tree::tree::BinarySearchTree;
///
/// let csv = "Title,Id,a,b,Amount,c,d,e,Fund\n\
///            Chair,98109,,,$12.00,,,,General Fund\n";
///
/// let mut tree = BinarySearchTree::new();
/// let summary = load_bids(csv.as_bytes(), &mut tree).unwrap();
///
/// assert_eq!(summary.loaded, 1);
/// assert_eq!(tree.search("98109").unwrap().amount, 12.0);
/// ```
pub fn load_bids<R: BufRead>(reader: R, tree: &mut BinarySearchTree) -> Result<LoadSummary, LoadError> {
    let mut summary = LoadSummary::default();
    let mut records = CsvReader::new(reader);

    match records.next().transpose()? {
        Some(header) => debug!(columns = header.len(), "skipped header row"),
        None => return Ok(summary),
    }

    for (index, record) in records.enumerate() {
        let record = record?;
        let row = index + 1;

        if is_blank(&record) {
            continue;
        }

        match parse_bid(row, &record) {
            Ok(bid) => {
                tree.insert(bid);
                summary.loaded += 1;
            }
            Err(e) => {
                warn!(error = %e, "skipping bid row");
                summary.skipped += 1;
            }
        }
    }

    info!(loaded = summary.loaded, skipped = summary.skipped, "bids loaded");
    Ok(summary)
}

/// Load bids from a CSV file into the tree
pub fn load_bids_from_path<P: AsRef<Path>>(path: P, tree: &mut BinarySearchTree) -> Result<LoadSummary, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading CSV file");

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_bids(BufReader::new(file), tree)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,InventoryID,VehicleID,ReceiptNumber,Fund\n";

    fn records(input: &str) -> Vec<Vec<String>> {
        CsvReader::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_csv_reader_plain() {
        let rows = records("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_csv_reader_no_trailing_newline() {
        let rows = records("a,b\r\n1,2");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_csv_reader_quoted() {
        let rows = records("\"Chair, Office\",\"say \"\"hi\"\"\",\"$1,000.00\"\n");
        assert_eq!(rows, vec![vec!["Chair, Office", "say \"hi\"", "$1,000.00"]]);
    }

    #[test]
    fn test_csv_reader_quoted_newline() {
        let rows = records("\"two\nlines\",x\n");
        assert_eq!(rows, vec![vec!["two\nlines", "x"]]);
    }

    #[test]
    fn test_csv_reader_empty_fields() {
        let rows = records(",,\n");
        assert_eq!(rows, vec![vec!["", "", ""]]);
    }

    #[test]
    fn test_parse_bid_columns() {
        let record: Vec<String> = "Hoover Vacuum,97990,Enterprise,01/02/2017,$27.00,1,2,3,General Fund"
            .split(',')
            .map(String::from)
            .collect();

        let bid = parse_bid(1, &record).unwrap();
        assert_eq!(bid, Bid::new("97990", "Hoover Vacuum", "General Fund", 27.0));
    }

    #[test]
    fn test_parse_bid_short_row() {
        let record = vec!["only".to_string(), "two".to_string()];

        match parse_bid(7, &record) {
            Err(LoadError::MissingColumns { row, expected, found }) => {
                assert_eq!(row, 7);
                assert_eq!(expected, MIN_COLUMNS);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_bids() {
        let input = format!(
            "{}{}{}",
            HEADER,
            "Chair,98109,Ops,,\"$1,200.50\",,,,General Fund\n",
            "Vacuum,97990,Ops,,$27.00,,,,Enterprise\n",
        );

        let mut tree = BinarySearchTree::new();
        let summary = load_bids(input.as_bytes(), &mut tree).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 0 });
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.search("98109").unwrap().amount, 1200.5);
        assert_eq!(tree.search("97990").unwrap().fund, "Enterprise");
    }

    #[test]
    fn test_load_bids_skips_bad_rows() {
        let input = format!(
            "{}{}{}{}",
            HEADER,
            "Chair,1,,,$5.00,,,,Fund\n",
            "Broken,2\n",
            "Desk,3,,,free,,,,Fund\n",
        );

        let mut tree = BinarySearchTree::new();
        let summary = load_bids(input.as_bytes(), &mut tree).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 2 });
        assert!(tree.contains("1"));
        assert!(!tree.contains("2"));
        assert!(!tree.contains("3"));
    }

    #[test]
    fn test_load_bids_invalid_utf8_row() {
        let mut input = HEADER.as_bytes().to_vec();
        input.extend_from_slice(b"Chair,1,,,$5.00,,,,Fund\n");
        input.extend_from_slice(b"Caf\xe9 Table,2,,,$7.00,,,,Fund\n");
        input.extend_from_slice(b"Desk,3,,,$9.00,,,,Fund\n");

        let mut tree = BinarySearchTree::new();
        let summary = load_bids(input.as_slice(), &mut tree).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 3, skipped: 0 });
        assert_eq!(tree.search("2").unwrap().title, "Caf\u{FFFD} Table");
        assert!(tree.contains("3"));
    }

    #[test]
    fn test_load_bids_ignores_blank_lines() {
        let input = format!(
            "{}{}{}{}",
            HEADER,
            "Chair,1,,,$5.00,,,,Fund\n",
            "\r\n",
            "Desk,3,,,$9.00,,,,Fund\n\n",
        );

        let mut tree = BinarySearchTree::new();
        let summary = load_bids(input.as_bytes(), &mut tree).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 0 });
    }

    #[test]
    fn test_load_bids_empty_input() {
        let mut tree = BinarySearchTree::new();

        let summary = load_bids("".as_bytes(), &mut tree).unwrap();
        assert_eq!(summary, LoadSummary::default());

        let summary = load_bids(HEADER.as_bytes(), &mut tree).unwrap();
        assert_eq!(summary, LoadSummary::default());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_load_bids_from_missing_path() {
        let mut tree = BinarySearchTree::new();

        let err = load_bids_from_path("/nonexistent/bids.csv", &mut tree).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
