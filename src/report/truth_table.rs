use std::io::Write;

use tabled::{builder::Builder, settings::Style};

use crate::language::evaluation::TruthTable;

fn bit(value: bool) -> String {
    u8::from(value).to_string()
}

fn header(table: &TruthTable) -> Vec<String> {
    table
        .variables
        .iter()
        .map(|name| name.to_string())
        .chain(std::iter::once("out".to_string()))
        .collect()
}

fn records(table: &TruthTable) -> impl Iterator<Item = Vec<String>> + '_ {
    table.rows.iter().map(|row| {
        row.inputs
            .iter()
            .copied()
            .chain(std::iter::once(row.output))
            .map(bit)
            .collect()
    })
}

/// Renders the table with one column per variable and a final `out` column.
pub fn pretty(table: &TruthTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(header(table));
    for record in records(table) {
        builder.push_record(record);
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

pub fn write_csv<W: Write>(table: &TruthTable, writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(header(table))?;
    for record in records(table) {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}
