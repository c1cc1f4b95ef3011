//! Raw CSV reading.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::raw::RawReport;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Columns every raw file must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "summary",
    "country",
    "city",
    "state",
    "date_time",
    "shape",
    "duration",
    "city_latitude",
    "city_longitude",
];

/// Columns carried through when present.
pub const OPTIONAL_COLUMNS: [&str; 2] = ["text", "polarity"];

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 files by their byte-order mark.
///
/// A UTF-8 BOM is fine; it is stripped from the first header name.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Read the raw file into a DataFrame with every column as `String`.
///
/// Schema inference is disabled so values like `"07"` or `"1e5"` reach the
/// normalizers untouched. Invalid UTF-8 is replaced rather than rejected.
/// The size limit is not checked here; run [`check_file_size`] first.
pub fn read_raw_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_encoding(CsvEncoding::LossyUtf8))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read raw table"
    );
    Ok(df)
}

/// Convert a raw DataFrame into [`RawReport`] rows.
///
/// Header names are matched after trimming whitespace and a UTF-8 BOM.
pub fn raw_reports_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<RawReport>> {
    let names: BTreeMap<String, String> = df
        .get_column_names()
        .into_iter()
        .map(|name| {
            let actual = name.to_string();
            let key = actual.trim_start_matches('\u{feff}').trim().to_string();
            (key, actual)
        })
        .collect();

    let mut columns: BTreeMap<&str, Vec<Option<String>>> = BTreeMap::new();
    for column in REQUIRED_COLUMNS {
        let actual = names.get(column).ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })?;
        columns.insert(column, string_values(df, actual)?);
    }
    for column in OPTIONAL_COLUMNS {
        if let Some(actual) = names.get(column) {
            columns.insert(column, string_values(df, actual)?);
        }
    }

    let mut cell = |column: &str, idx: usize| {
        columns
            .get_mut(column)
            .and_then(|values| values.get_mut(idx))
            .and_then(Option::take)
    };

    Ok((0..df.height())
        .map(|idx| RawReport {
            summary: cell("summary", idx),
            country: cell("country", idx),
            city: cell("city", idx),
            state: cell("state", idx),
            date_time: cell("date_time", idx),
            shape: cell("shape", idx),
            duration: cell("duration", idx),
            city_latitude: cell("city_latitude", idx),
            city_longitude: cell("city_longitude", idx),
            text: cell("text", idx),
            polarity: cell("polarity", idx),
        })
        .collect())
}

/// Size-check, read, and convert the raw file in one step.
pub fn read_raw_reports(path: &Path) -> Result<Vec<RawReport>> {
    check_file_size(path)?;
    let df = read_raw_table(path)?;
    raw_reports_from_frame(&df, path)
}

fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}
