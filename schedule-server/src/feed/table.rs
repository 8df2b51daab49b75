//! Positional reader for delimited feed tables.
//!
//! GTFS tables are comma-delimited text with a header row. The consumers
//! in this crate depend on a handful of columns sitting at fixed
//! positions, so a reader validates exactly those header positions up
//! front and then hands out rows for positional access. Columns outside
//! the checked set are passed through untouched.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use super::error::FeedError;

/// Expected shape of a feed table.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Table name used in error messages, e.g. `"stop_times.txt"`.
    pub file: &'static str,
    /// Required (position, column name) pairs.
    pub columns: &'static [(usize, &'static str)],
}

impl TableSchema {
    /// Column names required by the consumer, in checked order.
    fn expected_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|&(_, name)| name).collect()
    }
}

/// Reader over one table's data rows.
///
/// Construction validates the header, so every `TableReader` in
/// existence is reading a table whose checked columns are where the
/// schema says they are. Iteration yields rows in file order.
#[derive(Debug)]
pub struct TableReader {
    schema: TableSchema,
    reader: csv::Reader<File>,
}

impl TableReader {
    /// Open a table and validate its header against the schema.
    ///
    /// Fails with [`FeedError::Io`] if the file cannot be opened and
    /// with [`FeedError::SchemaMismatch`] if any checked position does
    /// not hold exactly the expected column name. The mismatch error
    /// carries the full observed header for diagnosis.
    pub fn open(path: &Path, schema: TableSchema) -> Result<Self, FeedError> {
        let file = File::open(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Rows narrower than the header are reported per-row via
        // checked field access, not rejected wholesale by the csv layer.
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader
            .headers()
            .map_err(|source| FeedError::Malformed {
                file: schema.file,
                source,
            })?
            .clone();

        for &(position, name) in schema.columns {
            if headers.get(position) != Some(name) {
                return Err(FeedError::SchemaMismatch {
                    file: schema.file,
                    expected: schema.expected_names(),
                    found: headers.iter().map(str::to_string).collect(),
                });
            }
        }

        Ok(Self { schema, reader })
    }
}

impl Iterator for TableReader {
    type Item = Result<Row, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                Some(Ok(Row {
                    record,
                    line,
                    file: self.schema.file,
                }))
            }
            Ok(false) => None,
            Err(source) => Some(Err(FeedError::Malformed {
                file: self.schema.file,
                source,
            })),
        }
    }
}

/// One data row, accessed by column position.
#[derive(Debug)]
pub struct Row {
    record: StringRecord,
    line: u64,
    file: &'static str,
}

impl Row {
    /// Return the field at `position`.
    ///
    /// A row too short to hold the position fails with
    /// [`FeedError::RowShape`], which is fatal for the whole load.
    pub fn field(&self, position: usize) -> Result<&str, FeedError> {
        self.record.get(position).ok_or(FeedError::RowShape {
            file: self.file,
            line: self.line,
            required: position + 1,
            found: self.record.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SCHEMA: TableSchema = TableSchema {
        file: "trips.txt",
        columns: &[(0, "route_id"), (1, "service_id"), (2, "trip_id")],
    };

    fn write_table(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trips.txt");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_rows_in_file_order() {
        let (_dir, path) = write_table("route_id,service_id,trip_id\nRed,Wk,T1\nBlue,Wk,T2\n");
        let reader = TableReader::open(&path, SCHEMA).unwrap();

        let rows: Vec<Row> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field(0).unwrap(), "Red");
        assert_eq!(rows[0].field(2).unwrap(), "T1");
        assert_eq!(rows[1].field(0).unwrap(), "Blue");
    }

    #[test]
    fn extra_unchecked_columns_pass_through() {
        let (_dir, path) = write_table(
            "route_id,service_id,trip_id,trip_headsign\nRed,Wk,T1,Alewife\n",
        );
        let mut reader = TableReader::open(&path, SCHEMA).unwrap();

        let row = reader.next().unwrap().unwrap();
        assert_eq!(row.field(3).unwrap(), "Alewife");
    }

    #[test]
    fn quoted_fields_are_unescaped() {
        let (_dir, path) = write_table(
            "route_id,service_id,trip_id\n\"Red, Ashmont branch\",Wk,\"T\"\"1\"\n",
        );
        let mut reader = TableReader::open(&path, SCHEMA).unwrap();

        let row = reader.next().unwrap().unwrap();
        assert_eq!(row.field(0).unwrap(), "Red, Ashmont branch");
        assert_eq!(row.field(2).unwrap(), "T\"1");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match TableReader::open(&path, SCHEMA) {
            Err(FeedError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn swapped_columns_fail_before_any_row() {
        let (_dir, path) = write_table("service_id,route_id,trip_id\nWk,Red,T1\n");

        match TableReader::open(&path, SCHEMA) {
            Err(FeedError::SchemaMismatch { file, expected, found }) => {
                assert_eq!(file, "trips.txt");
                assert_eq!(expected, vec!["route_id", "service_id", "trip_id"]);
                assert_eq!(found, vec!["service_id", "route_id", "trip_id"]);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_schema_mismatch() {
        let (_dir, path) = write_table("");

        match TableReader::open(&path, SCHEMA) {
            Err(FeedError::SchemaMismatch { found, .. }) => assert!(found.is_empty()),
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_row_shape_error() {
        let (_dir, path) = write_table("route_id,service_id,trip_id\nRed,Wk,T1\nBlue\n");
        let reader = TableReader::open(&path, SCHEMA).unwrap();

        let rows: Vec<Result<Row, FeedError>> = reader.collect();
        assert_eq!(rows.len(), 2);

        let short = rows[1].as_ref().unwrap();
        assert_eq!(short.field(0).unwrap(), "Blue");
        match short.field(2) {
            Err(FeedError::RowShape { line, required, found, .. }) => {
                // Header is line 1, the short row is line 3
                assert_eq!(line, 3);
                assert_eq!(required, 3);
                assert_eq!(found, 1);
            }
            other => panic!("expected RowShape, got {other:?}"),
        }
    }
}
