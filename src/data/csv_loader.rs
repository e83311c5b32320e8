// src/data/csv_loader.rs
use crate::types::CandleData;
use csv::ReaderBuilder;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    #[error("Row {row}: cannot parse {column} value '{value}'")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub fn load_candles_from_path(path: &Path) -> Result<Vec<CandleData>, CsvLoadError> {
    let file = File::open(path)?;
    load_candles(file)
}

/// Reads OHLC rows from a CSV with a header row. Extra columns are ignored.
pub fn load_candles<R: Read>(reader: R) -> Result<Vec<CandleData>, CsvLoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    // Find column indices
    let find = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or(CsvLoadError::MissingColumn(name))
    };
    let open_idx = find("open")?;
    let high_idx = find("high")?;
    let low_idx = find("low")?;
    let close_idx = find("close")?;

    let mut candles = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // header is line 1
        let row = i + 2;
        let field = |idx: usize, column: &'static str| -> Result<f64, CsvLoadError> {
            let raw = record.get(idx).unwrap_or("");
            raw.parse::<f64>().map_err(|_| CsvLoadError::Parse {
                row,
                column,
                value: raw.to_string(),
            })
        };

        candles.push(CandleData {
            open: field(open_idx, "open")?,
            high: field(high_idx, "high")?,
            low: field(low_idx, "low")?,
            close: field(close_idx, "close")?,
        });
    }

    debug!("[CsvLoader] Loaded {} candles", candles.len());
    Ok(candles)
}
