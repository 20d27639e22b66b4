//! Plain-text preview of a maintenance-plan workbook, used to eyeball the sheet
//! layout before tuning the extraction rules.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use super::{read_workbook, Cell, ExtractError, Sheet};

/// Data rows written after the header row.
pub const PREVIEW_ROWS: usize = 20;

/// Writes the first non-blank row as header plus up to `PREVIEW_ROWS` rows as tab-separated text.
/// Returns the number of data rows written.
pub fn write_preview<W: Write>(sheet: &Sheet, out: W) -> Result<usize, ExtractError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(out);

    // Padding back to A1 can leave blank rows above the header and between sections.
    let mut rows = sheet.rows.iter().filter(|row| !row.iter().all(Cell::is_empty));
    let Some(header) = rows.next() else {
        writer.flush()?;
        return Ok(0);
    };
    // Blank leading field lines the header up with the row index column.
    writer.write_record(std::iter::once(String::new()).chain(header.iter().map(cell_text)))?;

    let mut written = 0;
    for (index, row) in rows.take(PREVIEW_ROWS).enumerate() {
        writer.write_record(std::iter::once(index.to_string()).chain(row.iter().map(cell_text)))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

pub fn preview_workbook(workbook_path: &Path, output_path: &Path) -> Result<usize, ExtractError> {
    let sheets = read_workbook(workbook_path)?;
    let sheet = sheets.first().ok_or(ExtractError::NoSheets)?;

    let written = write_preview(sheet, File::create(output_path)?)?;
    info!(
        "Preview of '{}' ({} rows) saved to {}",
        sheet.name,
        written,
        output_path.display()
    );
    Ok(written)
}

fn cell_text(cell: &Cell) -> String {
    cell.to_text().unwrap_or_else(|| "NaN".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: usize) -> Sheet {
        let mut grid = vec![vec![
            Cell::Text("Item".to_string()),
            Cell::Text("Descrição".to_string()),
        ]];
        for n in 0..rows {
            grid.push(vec![Cell::Text(format!("A.{n:02}")), Cell::Empty]);
        }
        Sheet { name: "930E-5".to_string(), rows: grid }
    }

    #[test]
    fn writes_header_and_at_most_twenty_rows() {
        let mut out = Vec::new();
        let written = write_preview(&sheet(25), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(written, PREVIEW_ROWS);
        assert_eq!(lines.len(), PREVIEW_ROWS + 1);
        assert_eq!(lines[0], "\tItem\tDescrição");
        assert_eq!(lines[1], "0\tA.00\tNaN");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let blank = vec![Cell::Empty, Cell::Empty];
        let mut grid = vec![blank.clone(), blank.clone()];
        grid.extend(sheet(2).rows);
        grid.insert(3, blank);
        let padded = Sheet { name: "930E-5".to_string(), rows: grid };

        let mut out = Vec::new();
        let written = write_preview(&padded, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(written, 2);
        assert_eq!(lines, vec!["\tItem\tDescrição", "0\tA.00\tNaN", "1\tA.01\tNaN"]);
    }

    #[test]
    fn empty_sheet_writes_nothing() {
        let mut out = Vec::new();
        let empty = Sheet { name: "Vazia".to_string(), rows: Vec::new() };
        assert_eq!(write_preview(&empty, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
