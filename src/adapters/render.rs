use crate::core::{AlumniRecord, FilterOptions, OutputFormat, Result};
use serde::Serialize;
use std::io::Write;

pub const EMPTY_STATE_MESSAGE: &str = "No alumni match the current filters.";
pub const RESET_HINT: &str = "Run again without --search, --batch or --profession to see everyone.";

const TABLE_HEADERS: [&str; 5] = ["ID", "Name", "Batch", "Profession", "Location"];
const RECORD_CSV_HEADERS: [&str; 6] = ["id", "name", "batch", "location", "profession", "avatar"];
const OPTION_CSV_HEADERS: [&str; 2] = ["kind", "value"];

pub fn render_records<W: Write>(
    out: &mut W,
    records: &[&AlumniRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(out, records),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            // serialize() only emits the header alongside the first row.
            let mut writer = csv::Writer::from_writer(out);
            if records.is_empty() {
                writer.write_record(RECORD_CSV_HEADERS)?;
            }
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

/// Empty-state message and reset hint for machine formats, meant for stderr so
/// stdout stays parseable. The table format prints them inline instead.
pub fn render_empty_notice<W: Write>(err: &mut W, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Table {
        return Ok(());
    }
    writeln!(err, "{}", EMPTY_STATE_MESSAGE)?;
    writeln!(err, "{}", RESET_HINT)?;
    Ok(())
}

fn render_table<W: Write>(out: &mut W, records: &[&AlumniRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{}", EMPTY_STATE_MESSAGE)?;
        writeln!(out, "{}", RESET_HINT)?;
        return Ok(());
    }

    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.id.clone(),
                r.name.clone(),
                r.batch.to_string(),
                r.profession.clone(),
                r.location.clone(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &TABLE_HEADERS.map(str::to_string), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("  "))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    writeln!(out, "\n{} alumni", rows.len())?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())?;
    Ok(())
}

#[derive(Serialize)]
struct OptionRow<'a> {
    kind: &'a str,
    value: String,
}

pub fn render_options<W: Write>(
    out: &mut W,
    options: &FilterOptions,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let batches: Vec<String> = options.batches.iter().map(i32::to_string).collect();
            writeln!(out, "Batches:     {}", batches.join(", "))?;
            writeln!(out, "Professions: {}", options.professions.join(", "))?;
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, options)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            if options.batches.is_empty() && options.professions.is_empty() {
                writer.write_record(OPTION_CSV_HEADERS)?;
            }
            let batches = options.batches.iter().map(|batch| OptionRow {
                kind: "batch",
                value: batch.to_string(),
            });
            let professions = options.professions.iter().map(|profession| OptionRow {
                kind: "profession",
                value: profession.clone(),
            });
            for row in batches.chain(professions) {
                writer.serialize(row)?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}
