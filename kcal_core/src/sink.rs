//! Output sinks for projection series.
//!
//! A chart or exporter receives `(minute, cumulative_kcal)` points through the
//! [`SeriesSink`] trait and never sees the calculation behind them.

use crate::{ProjectionSeries, Result};
use std::io::Write;

/// Something that consumes a projection series
pub trait SeriesSink {
    fn write_series(&mut self, series: &ProjectionSeries) -> Result<()>;
}

/// CSV sink: `minute,cumulative_kcal` header then one row per point
pub struct CsvSeriesSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSeriesSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()).into())
    }
}

impl<W: Write> SeriesSink for CsvSeriesSink<W> {
    fn write_series(&mut self, series: &ProjectionSeries) -> Result<()> {
        for point in &series.points {
            self.writer.serialize(point)?;
        }
        self.writer.flush()?;
        tracing::debug!("Wrote {} points as CSV", series.points.len());
        Ok(())
    }
}

/// JSON sink: the whole series, pretty-printed
pub struct JsonSeriesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSeriesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SeriesSink for JsonSeriesSink<W> {
    fn write_series(&mut self, series: &ProjectionSeries) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, series)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        tracing::debug!("Wrote {} points as JSON", series.points.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let mut sink = CsvSeriesSink::new(Vec::new());
        sink.write_series(&project(10.0, 3)).unwrap();
        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["minute,cumulative_kcal", "1,10.0", "2,20.0", "3,30.0"]);
    }

    #[test]
    fn test_csv_sink_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("series.csv");

        let file = std::fs::File::create(&path).unwrap();
        let mut sink = CsvSeriesSink::new(file);
        sink.write_series(&project(12.56, 5)).unwrap();
        drop(sink);

        let reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.into_records().count(), 5);
    }

    #[test]
    fn test_json_sink_roundtrips_series() {
        let series = project(10.0, 4);
        let mut sink = JsonSeriesSink::new(Vec::new());
        sink.write_series(&series).unwrap();

        let parsed: ProjectionSeries = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(parsed, series);
    }
}
