use std::io::Write;
use std::path::Path;

use eyre::Result;

use crate::product_details::ProductRecord;

/// Header row of the exported table.
pub const CSV_HEADER: [&str; 4] = ["Product Name", "Price", "Rating", "Seller Name"];

#[cfg_attr(feature = "serde_io", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default)]
/// Accumulates extracted records and writes them out as CSV.
///
/// Rows without a product name are dropped at write time; the other
/// missing fields render as their display sentinels. Quoting of values
/// containing the delimiter is left to the csv writer.
pub struct ResultTable {
    records: Vec<ProductRecord>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record in arrival order.
    pub fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    /// Number of accumulated records, dropped rows included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that survive the drop-missing-name rule.
    pub fn retained(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter().filter(|record| record.name.is_some())
    }

    /// Writes the retained rows as CSV and returns how many were written.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;

        let mut rows = 0;
        for record in self.retained() {
            csv_writer.write_record([
                record.display_name(),
                record.display_price(),
                record.display_rating(),
                record.display_seller(),
            ])?;
            rows += 1;
        }
        csv_writer.flush()?;
        Ok(rows)
    }

    /// Writes the retained rows to a file at `path`.
    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}
