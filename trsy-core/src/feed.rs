use std::collections::VecDeque;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::DataFormatError;
use crate::TrsyError;

/// A headerless, comma-delimited input feed read eagerly into memory and
/// then pulled one record at a time.
///
/// Every `Input/*.txt` file in this system is small enough (tens of
/// records) that eager loading is simpler than re-seeking a file handle on
/// every pull, while still preserving the "pull one record, remember your
/// position" contract the original feed connectors had.
#[derive(Debug)]
pub struct RecordFeed {
    records: VecDeque<StringRecord>,
}

impl RecordFeed {
    /// Read every non-blank record from `path`. Blank lines are ignored, not
    /// counted as records; a structurally malformed CSV line is logged and
    /// skipped rather than aborting the load.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrsyError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let records = reader
            .records()
            .filter_map(|result| match result {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping malformed feed record");
                    None
                }
            })
            .filter(|record| !is_blank(record))
            .collect();

        Ok(Self { records })
    }

    /// Pull the next record, or `None` once the feed is exhausted.
    pub fn pull(&mut self) -> Option<StringRecord> {
        self.records.pop_front()
    }

    /// Records remaining to be pulled.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Fetch field `index` from `record`, mapping a miss to
/// [`DataFormatError::MissingField`].
pub fn field<'a>(record: &'a StringRecord, index: usize) -> Result<&'a str, DataFormatError> {
    record.get(index).ok_or_else(|| DataFormatError::MissingField {
        record: record.iter().collect::<Vec<_>>().join(","),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn blank_lines_are_not_counted_as_records() {
        let file = write_temp("a,b,c\n\nd,e,f\n");
        let mut feed = RecordFeed::open(file.path()).unwrap();
        assert_eq!(feed.remaining(), 2);
        assert_eq!(feed.pull().unwrap().get(0), Some("a"));
        assert_eq!(feed.pull().unwrap().get(0), Some("d"));
        assert_eq!(feed.pull(), None);
    }

    #[test]
    fn field_reports_the_missing_index() {
        let record = StringRecord::from(vec!["a", "b"]);
        let err = field(&record, 5).unwrap_err();
        assert_eq!(err, DataFormatError::MissingField {
            record: "a,b".to_string(),
            index: 5,
        });
    }
}
