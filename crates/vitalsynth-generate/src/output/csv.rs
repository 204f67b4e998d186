use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::errors::GenerationError;
use crate::model::{COLUMNS, Column, Record};

/// Write records as CSV with the fixed column order, replacing any existing file.
///
/// Returns the number of bytes written.
pub fn write_records_csv(path: &Path, records: &[Record]) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(counting);

    writer.write_record(COLUMNS.iter().map(|col| col.name))?;

    for record in records {
        let values = record_values(record);
        let row = COLUMNS
            .iter()
            .zip(values)
            .map(|(column, value)| format_cell(value, column));
        writer.write_record(row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    let bytes = counting.bytes_written();

    info!(
        path = %path.display(),
        rows = records.len(),
        bytes_written = bytes,
        "dataset written"
    );
    Ok(bytes)
}

/// Parse a file produced by [`write_records_csv`] back into records.
pub fn read_records_csv(path: &Path) -> Result<Vec<Record>, GenerationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(File::open(path)?));

    let headers = reader.headers()?;
    let expected = COLUMNS.iter().map(|col| col.name);
    if !headers.iter().eq(expected) {
        return Err(GenerationError::InvalidDataset(format!(
            "unexpected header '{}' in {}",
            headers.iter().collect::<Vec<_>>().join(","),
            path.display()
        )));
    }

    reader
        .deserialize::<Record>()
        .map(|row| row.map_err(GenerationError::from))
        .collect()
}

fn record_values(record: &Record) -> [f64; 6] {
    [
        f64::from(record.age),
        record.bmi,
        record.sodium_intake_g,
        f64::from(record.exercise_minutes_per_week),
        record.stress_score,
        record.systolic_blood_pressure,
    ]
}

fn format_cell(value: f64, column: &Column) -> String {
    match column.scale {
        Some(scale) => format!("{value:.scale$}"),
        None => format!("{value:.0}"),
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
