use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Field delimiter of the record file. Fields are never quoted.
pub const FIELD_DELIMITER: char = ',';

/// A line of the record file split into untrimmed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn parse(line: usize, text: &str) -> Self {
        Self {
            line,
            fields: text.split(FIELD_DELIMITER).map(str::to_string).collect(),
        }
    }
}

pub fn read_rows<R: BufRead>(reader: R) -> io::Result<Vec<RawRow>> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|text| RawRow::parse(index + 1, &text)))
        .collect()
}

/// Reads every row of the file at `path`. The handle is closed before returning.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<RawRow>> {
    let file = File::open(path)?;
    read_rows(BufReader::new(file))
}
