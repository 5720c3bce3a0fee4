//! Spreadsheet input and output
//!
//! Candidates come from one named column of the first worksheet. The report goes to a fresh
//! workbook with a fixed header row.
use std::fs;
use std::io::Write;
use std::path::Path;
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use crate::count::WordStat;
use crate::errors::*;
use crate::farm::new_farm_set;
use crate::staging;

/// Header row of the report, in column order
pub const REPORT_HEADERS: [&str; 4] =
    ["Word", "Total Occurrences", "Occurrences after Noun", "Adjectivalness"];

/// Read the distinct values of one column, in the order they first appear
///
/// The first row of the first worksheet is the header row; `column` must match a header cell
/// exactly. Blank cells are skipped, everything else is used as written (numbers included).
pub fn read_candidates<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    if let Err(err) = fs::metadata(path) {
        return Err(Error::MissingFile("input spreadsheet", path.to_path_buf(), Some(err)));
    }
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0)
        .ok_or_else(|| Error::Other(format!("{} has no worksheets", path.display())))??;

    let mut rows = range.rows();
    let headers: Vec<String> = rows.next()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();
    let col = headers.iter()
        .position(|header| header == column)
        .ok_or_else(|| Error::MissingColumn(column.to_string(), headers.clone()))?;

    let mut seen = new_farm_set();
    let mut words = vec![];
    for row in rows {
        match row.get(col) {
            None | Some(Data::Empty) => continue,
            Some(cell) => {
                let word = cell.to_string();
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
        }
    }
    info!("Read {} distinct values from column {:?} of {}", words.len(), column, path.display());
    Ok(words)
}

/// Write one row per stat under the fixed header, replacing whatever was at `path`
///
/// The workbook is assembled in memory and moved into place in one rename, so a failure leaves
/// any earlier report untouched.
pub fn write_report<P: AsRef<Path>>(path: P, stats: &[WordStat]) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    {
        let header = Format::new()
            .set_bold()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);
        let sheet = workbook.add_worksheet();
        for (col, title) in REPORT_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        for (idx, stat) in stats.iter().enumerate() {
            let row = idx as u32 + 1;
            sheet.write_string(row, 0, &stat.word)?;
            sheet.write_number(row, 1, stat.total_count as f64)?;
            sheet.write_number(row, 2, stat.noun_follow_count as f64)?;
            sheet.write_number(row, 3, stat.adjectivalness)?;
        }
    }
    let buffer = workbook.save_to_buffer()?;

    let mut staged = staging::stage_for(path)?;
    staged.write_all(&buffer)?;
    staging::publish(staged, path)?;
    info!("Wrote {} rows to {}", stats.len(), path.display());
    Ok(())
}
