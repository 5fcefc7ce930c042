use crate::error::Result;
use crate::models::RowRecord;
use serde_json::Value;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Key collecting cells that fall beyond the header row.
pub const EXTRA_FIELDS_KEY: &str = "__parsed_extra";

pub fn get_csv_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == "csv"
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn deck_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path)?;
    let rows = parse_rows(file)?;
    log::info!("parsed {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Delimiters tried when sniffing the header line, in tie-break order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Pick the delimiter that occurs most often outside quotes in the header
/// line. Falls back to `,` when none of the candidates appear.
pub fn detect_delimiter(data: &[u8]) -> u8 {
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;

    for &byte in data {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b'\n' | b'\r' if !in_quotes => break,
            _ if !in_quotes => {
                if let Some(i) = CANDIDATE_DELIMITERS.iter().position(|&d| d == byte) {
                    counts[i] += 1;
                }
            }
            _ => {}
        }
    }

    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    CANDIDATE_DELIMITERS[best]
}

/// Parse CSV with a header row into one object per data row.
///
/// The delimiter is sniffed from the header line (see [`detect_delimiter`]).
/// Keys are the header names in column order, duplicate names get a `_N`
/// suffix, short rows only carry the cells they have, and surplus cells are
/// gathered under [`EXTRA_FIELDS_KEY`]. A header that is itself named
/// [`EXTRA_FIELDS_KEY`] is suffixed like a duplicate. Blank lines are skipped.
pub fn parse_rows<R: Read>(mut reader: R) -> Result<Vec<Value>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let delimiter = detect_delimiter(&data);
    if delimiter != b',' {
        log::debug!("using delimiter {:?}", delimiter as char);
    }

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(data.as_slice());

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();
    let headers = unique_headers(headers);

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        let mut row = RowRecord::new();
        let mut extra = Vec::new();

        for (i, field) in record.iter().enumerate() {
            let cell = String::from_utf8_lossy(field).into_owned();
            match headers.get(i) {
                Some(name) => {
                    row.insert(name.clone(), Value::String(cell));
                }
                None => extra.push(Value::String(cell)),
            }
        }

        if !extra.is_empty() {
            row.insert(EXTRA_FIELDS_KEY.to_string(), Value::Array(extra));
        }
        rows.push(Value::Object(row));
    }

    Ok(rows)
}

fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::from([EXTRA_FIELDS_KEY.to_string()]);
    let mut unique = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}_{}", header, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        unique.push(name);
    }

    unique
}
