//! Rendering of truth tables and simplification outcomes as pretty tables
//! or CSV.

pub mod simplification;
pub mod truth_table;

use std::io::Write;
use std::time::Duration;

use tabled::{Table, Tabled, settings::Style};

pub use simplification::SimplificationRow;

/// Rows that can be rendered both as a pretty table and as CSV.
pub trait Formattable: Tabled {
    fn csv_headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn format<T: Tabled>(items: &[T]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new(items);
        table.with(Style::rounded());
        table.to_string()
    }
}

pub struct CsvFormatter;

impl CsvFormatter {
    pub fn write<T: Formattable, W: Write>(items: &[T], writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(T::csv_headers())?;
        for item in items {
            writer.write_record(item.to_csv_row())?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn format<T: Formattable>(items: &[T]) -> csv::Result<String> {
        let mut buffer = Vec::new();
        Self::write(items, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

pub(crate) fn format_duration(duration: &Duration) -> String {
    format!("{duration:?}")
}

pub(crate) fn format_duration_csv(duration: &Duration) -> String {
    duration.as_nanos().to_string()
}
